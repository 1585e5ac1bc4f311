//! ContentFlow: a terminal content-ideation chat client.
//!
//! Prompts are forwarded to a generative-language completion endpoint and the
//! returned text is shown alongside placeholder analytics and hashtag
//! suggestions. The analytics are constants; nothing here analyzes text.
//!
//! # Quick start
//!
//! ```no_run
//! use contentflow::api::GeminiClient;
//! use contentflow::config::load_config;
//! use contentflow::session::{ContentType, SessionController};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap().config;
//! let client = GeminiClient::new(&config.api, Duration::from_secs(60));
//! let mut session = SessionController::new();
//! session.submit(&client, "Ideas for a cooking channel", ContentType::Video).await;
//! for turn in session.transcript() {
//!     println!("{}", turn.content());
//! }
//! # }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod session;
pub mod types;
pub mod ui;
