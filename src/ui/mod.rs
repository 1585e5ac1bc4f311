//! Terminal UI: rendering contracts, formatting, and liveness indicators.

pub mod markdown;
pub mod progress;
pub mod render;
pub mod settings;
pub mod text;

pub use progress::ProgressHandle;
pub use render::{RenderSink, Renderer, TranscriptCursor};
