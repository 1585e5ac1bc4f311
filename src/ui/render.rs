//! Terminal projection of the session.
//!
//! Formatting is done by pure `format_*` functions so layout can be tested
//! without a terminal. [`Renderer`] writes their output, and [`RenderSink`]
//! is the seam the app layer talks to.

use super::markdown::render_markdown_for_terminal;
use super::progress::{start_progress, ProgressHandle};
use super::settings;
use super::text::{capitalize, percent_bar, sidebar_preview};
use crate::session::{
    Analytics, ContentType, Hashtags, SessionController, SessionPhase, Transcript, Turn,
    TurnKind,
};
use crossterm::style::{Color, Stylize};

/// Injectable rendering interface used by the interactive loop.
///
/// `Renderer` is the terminal implementation; tests substitute a recording
/// sink.
pub trait RenderSink: Send + Sync {
    /// Render the empty-session welcome panel.
    fn welcome(&self);
    /// Render one transcript turn.
    fn turn(&self, turn: &Turn);
    /// Render the question-history sidebar.
    fn sidebar(&self, transcript: &Transcript, selected: Option<usize>);
    /// Render the content-type selector.
    fn content_types(&self, selected: ContentType);
    /// Render the input prompt chrome.
    fn prompt(&self, content_type: ContentType);
    /// Start the in-flight indicator for a session in `phase`.
    fn progress(&self, phase: SessionPhase) -> ProgressHandle;
    /// Render an informational line.
    fn notice(&self, msg: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl RenderSink for Renderer {
    fn welcome(&self) {
        println!("{}", format_welcome(self.color));
    }

    fn turn(&self, turn: &Turn) {
        println!("{}\n", format_turn(turn, self.color));
    }

    fn sidebar(&self, transcript: &Transcript, selected: Option<usize>) {
        eprintln!("{}", format_sidebar(transcript, selected, self.color));
    }

    fn content_types(&self, selected: ContentType) {
        eprintln!("{}", format_content_types(selected, self.color));
    }

    fn prompt(&self, content_type: ContentType) {
        if self.color {
            eprint!(
                "{} {} ",
                format!("[{content_type}]").with(settings::COLOR_MUTED),
                settings::PROMPT_SYMBOL.with(settings::COLOR_BRAND).bold()
            );
        } else {
            eprint!("[{content_type}] {} ", settings::PROMPT_SYMBOL);
        }
    }

    fn progress(&self, phase: SessionPhase) -> ProgressHandle {
        start_progress(phase, self.color)
    }

    fn notice(&self, msg: &str) {
        eprintln!("{}", paint(msg, settings::COLOR_MUTED, self.color));
    }

    fn warn(&self, msg: &str) {
        eprintln!("{}", paint(&format!("warning: {msg}"), settings::COLOR_WARNING, self.color));
    }

    fn error(&self, msg: &str) {
        eprintln!("{}", paint(&format!("error: {msg}"), settings::COLOR_ERROR, self.color));
    }
}

// ---------------------------------------------------------------------------
// Auto-scroll
// ---------------------------------------------------------------------------

/// Tracks which turns have been drawn so each redraw prints only new ones.
///
/// Follows the transcript tail; a session reset rewinds it.
#[derive(Debug, Default)]
pub struct TranscriptCursor {
    shown: usize,
    generation: u64,
}

impl TranscriptCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns appended since the last call.
    pub fn unseen<'a>(&mut self, session: &'a SessionController) -> Vec<&'a Turn> {
        let transcript = session.transcript();
        if session.generation() != self.generation || self.shown > transcript.len() {
            self.generation = session.generation();
            self.shown = 0;
        }
        let fresh: Vec<&Turn> = transcript.iter().skip(self.shown).collect();
        self.shown = transcript.len();
        fresh
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

fn paint_bold(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).bold().to_string()
    } else {
        text.to_string()
    }
}

/// Welcome panel shown while the transcript is empty.
pub fn format_welcome(color: bool) -> String {
    let bullet = paint("•", settings::COLOR_BRAND, color);
    let mut lines = vec![
        paint_bold("Welcome to ContentFlow AI", settings::COLOR_BRAND, color),
        "Transform your ideas into engaging content with AI-powered insights".to_string(),
    ];
    lines.extend(
        [
            "Content Ideas",
            "Audience Insights",
            "Performance Analytics",
            "Trending Topics",
        ]
        .iter()
        .map(|tile| format!("  {bullet} {tile}")),
    );
    lines.push(paint(
        "Describe your content idea, or type /help for commands.",
        settings::COLOR_MUTED,
        color,
    ));
    lines.join("\n")
}

/// One transcript turn, with the analytics dashboard for answers that carry it.
pub fn format_turn(turn: &Turn, color: bool) -> String {
    match turn.kind() {
        TurnKind::Question => {
            let tag = turn
                .content_type()
                .map(|ct| format!(" · {}", ct.label()))
                .unwrap_or_default();
            format!(
                "{}\n{}",
                paint_bold(&format!("you{tag}"), settings::COLOR_QUESTION, color),
                indent(turn.content(), "  ")
            )
        }
        TurnKind::Answer => {
            let body = render_markdown_for_terminal(turn.content());
            let mut out = format!(
                "{}\n{}",
                paint_bold("contentflow", settings::COLOR_ANSWER_LABEL, color),
                indent(&body, "  ")
            );
            if let (Some(analytics), Some(hashtags)) = (turn.analytics(), turn.hashtags()) {
                out.push_str("\n\n");
                out.push_str(&format_dashboard(analytics, hashtags, color));
            }
            out
        }
    }
}

/// Analytics and hashtag panels shown under an answer.
pub fn format_dashboard(analytics: &Analytics, hashtags: &Hashtags, color: bool) -> String {
    let section = |title: &str| format!("  {}", paint_bold(title, settings::COLOR_SECTION, color));
    let bar_row = |name: &str, value: u8, bar_color: Color| {
        let bar = percent_bar(value, settings::BAR_WIDTH);
        format!(
            "      {:<12} {} {value:>3}%",
            capitalize(name),
            paint(&bar, bar_color, color)
        )
    };

    let sentiment = &analytics.sentiment;
    let engagement = &analytics.engagement;
    let audience = &analytics.audience;

    let mut lines = vec![section("Content Analytics")];
    lines.push(format!(
        "    Sentiment  {} ({:.2})",
        sentiment.label, sentiment.score
    ));
    lines.extend(
        sentiment
            .breakdown
            .entries()
            .into_iter()
            .map(|(name, value)| bar_row(name, value, settings::COLOR_BAR_SENTIMENT)),
    );
    lines.push(format!(
        "    Engagement Metrics  {} ({:.1})",
        engagement.potential, engagement.score
    ));
    lines.extend(
        engagement
            .metrics
            .entries()
            .into_iter()
            .map(|(name, value)| bar_row(name, value, settings::COLOR_BAR_ENGAGEMENT)),
    );
    lines.push(format!("    Audience  {} ({})", audience.primary, audience.age));
    lines.push(format!("      {}", chips(&audience.interests, color)));

    lines.push(section("Recommended Hashtags"));
    lines.extend(
        hashtags
            .categories()
            .iter()
            .map(|(name, tags)| format!("    {:<12} {}", capitalize(name), chips(tags, color))),
    );
    lines.join("\n")
}

fn chips(items: &[&str], color: bool) -> String {
    items
        .iter()
        .map(|item| paint(&format!("[{item}]"), settings::COLOR_CHIP, color))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sidebar listing question turns only, 1-based, with the selection marked.
pub fn format_sidebar(transcript: &Transcript, selected: Option<usize>, color: bool) -> String {
    let mut lines = vec![paint_bold("History", settings::COLOR_BRAND, color)];
    for (index, turn) in transcript.questions() {
        let icon = turn.content_type().map(ContentType::icon).unwrap_or(" ");
        let preview = sidebar_preview(turn.content(), settings::SIDEBAR_PREVIEW_CHARS);
        let row = format!("{:>3}. {icon} {preview}", index + 1);
        if selected == Some(index) {
            lines.push(format!("> {}", paint_bold(&row, settings::COLOR_SELECTED, color)));
        } else {
            lines.push(format!("  {row}"));
        }
    }
    if lines.len() == 1 {
        lines.push(format!(
            "  {}",
            paint("(no history yet)", settings::COLOR_MUTED, color)
        ));
    }
    lines.join("\n")
}

/// Content-type selector with the active type highlighted.
pub fn format_content_types(selected: ContentType, color: bool) -> String {
    let options = ContentType::ALL
        .iter()
        .map(|&ct| {
            let label = format!("{} {}", ct.icon(), ct.label());
            if ct == selected {
                paint_bold(&format!("[{label}]"), settings::COLOR_SELECTED, color)
            } else {
                paint(&format!(" {label} "), settings::COLOR_MUTED, color)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("Content type: {options}")
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
