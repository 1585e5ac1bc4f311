//! Terminal presentation constants: glyphs, widths, and colors.

use crossterm::style::Color;

pub const PROMPT_SYMBOL: &str = "›";
pub const PROGRESS_LABEL: &str = "Generating content...";
pub const PROGRESS_CLEAR_LINE: &str = "\r\x1b[2K";
/// Dots in the in-flight indicator.
pub const PROGRESS_DOTS: usize = 3;
pub const PROGRESS_TICK_MS: u64 = 250;

/// Characters of a question shown in the history sidebar.
pub const SIDEBAR_PREVIEW_CHARS: usize = 30;
/// Cells used by analytics percentage bars.
pub const BAR_WIDTH: usize = 20;

pub const COLOR_BRAND: Color = Color::Magenta;
pub const COLOR_QUESTION: Color = Color::Magenta;
pub const COLOR_ANSWER_LABEL: Color = Color::Blue;
pub const COLOR_SECTION: Color = Color::Magenta;
pub const COLOR_BAR_SENTIMENT: Color = Color::Magenta;
pub const COLOR_BAR_ENGAGEMENT: Color = Color::Blue;
pub const COLOR_CHIP: Color = Color::DarkMagenta;
pub const COLOR_MUTED: Color = Color::DarkGrey;
pub const COLOR_SELECTED: Color = Color::Magenta;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_PROGRESS_DOTS: Color = Color::Magenta;
