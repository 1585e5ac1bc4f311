//! Turns, the transcript that orders them, and the content-type tag.

use super::analytics::{Analytics, Hashtags};
use crate::error::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed answer text used whenever a completion fails, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Sorry - Something went wrong. Please try again!";

// ---------------------------------------------------------------------------
// ContentType
// ---------------------------------------------------------------------------

/// Kind of content the user is drafting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Video,
    Blog,
    Social,
}

impl ContentType {
    /// All content types in selector order.
    pub const ALL: [ContentType; 3] = [Self::Video, Self::Blog, Self::Social];

    /// Stable lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Blog => "blog",
            Self::Social => "social",
        }
    }

    /// Human-facing selector label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Blog => "Blog",
            Self::Social => "Social",
        }
    }

    /// Single-glyph icon used in the history sidebar.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Video => "▶",
            Self::Blog => "✎",
            Self::Social => "@",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SessionError::UnknownContentType(tag.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Turn
// ---------------------------------------------------------------------------

/// Which side of the exchange a turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    Question,
    Answer,
}

/// One entry in the transcript. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    #[serde(rename = "type")]
    kind: TurnKind,
    content: String,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analytics: Option<Analytics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hashtags: Option<Hashtags>,
}

impl Turn {
    /// A user prompt tagged with the content type selected at submit time.
    pub fn question(content: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            kind: TurnKind::Question,
            content: content.into(),
            timestamp: Utc::now(),
            content_type: Some(content_type),
            analytics: None,
            hashtags: None,
        }
    }

    /// A generated answer carrying fresh placeholder analytics and hashtags.
    pub fn answer(content: impl Into<String>) -> Self {
        Self {
            kind: TurnKind::Answer,
            content: content.into(),
            timestamp: Utc::now(),
            content_type: None,
            analytics: Some(Analytics::placeholder()),
            hashtags: Some(Hashtags::placeholder()),
        }
    }

    /// The answer recorded when a completion fails. Carries no analytics.
    pub fn failure() -> Self {
        Self {
            kind: TurnKind::Answer,
            content: FAILURE_MESSAGE.to_string(),
            timestamp: Utc::now(),
            content_type: None,
            analytics: None,
            hashtags: None,
        }
    }

    pub fn kind(&self) -> TurnKind {
        self.kind
    }

    pub fn is_question(&self) -> bool {
        self.kind == TurnKind::Question
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }

    pub fn analytics(&self) -> Option<&Analytics> {
        self.analytics.as_ref()
    }

    pub fn hashtags(&self) -> Option<&Hashtags> {
        self.hashtags.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Transcript
// ---------------------------------------------------------------------------

/// Ordered, append-only list of turns for the current session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub(crate) fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Turn> {
        self.turns.get(index)
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    /// Question turns only, paired with their sidebar index.
    pub fn questions(&self) -> impl Iterator<Item = (usize, &Turn)> {
        self.turns.iter().filter(|t| t.is_question()).enumerate()
    }

    /// Number of question turns (sidebar length).
    pub fn question_count(&self) -> usize {
        self.questions().count()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}
