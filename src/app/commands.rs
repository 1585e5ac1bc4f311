//! Slash-command parsing for the interactive loop.

use crate::error::SessionError;
use crate::session::ContentType;
use std::fmt;

pub const HELP_TEXT: &str = "\
Commands:
  /new               start a new session (clears the transcript)
  /type [kind]       show or set the content type: video, blog, social
  /history           list submitted ideas
  /select <n>        highlight history entry n
  /help              show this help
  /quit              exit
Anything else is sent as a content idea. Ctrl-C while generating abandons
the request and starts a new session; Ctrl-C at the prompt exits.";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text to submit as a prompt (possibly blank).
    Prompt(String),
    Command(Command),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    /// `None` shows the selector without changing it.
    Type(Option<ContentType>),
    History,
    /// 1-based sidebar position.
    Select(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidIndex(String),
    /// 1-based position past the end of the history.
    NoSuchHistoryEntry { position: usize, len: usize },
    Session(SessionError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown command `{name}` (try /help)"),
            Self::MissingArgument(usage) => write!(f, "usage: {usage}"),
            Self::InvalidIndex(raw) => {
                write!(f, "invalid history entry `{raw}`: expected a number from 1")
            }
            Self::NoSuchHistoryEntry { position, len } => {
                write!(f, "no history entry {position} (history has {len})")
            }
            Self::Session(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SessionError> for CommandError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

/// Classify one input line.
pub fn parse_input(line: &str) -> Result<Input, CommandError> {
    let trimmed = line.trim_start();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Ok(Input::Prompt(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    let command = match name {
        "new" | "reset" => Command::New,
        "type" => Command::Type(arg.map(str::parse::<ContentType>).transpose()?),
        "history" => Command::History,
        "select" => {
            let raw = arg.ok_or(CommandError::MissingArgument("/select <n>"))?;
            match raw.parse::<usize>() {
                Ok(n) if n >= 1 => Command::Select(n),
                _ => return Err(CommandError::InvalidIndex(raw.to_string())),
            }
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(format!("/{other}"))),
    };
    Ok(Input::Command(command))
}
