//! Interactive loop: read a line, update the session, redraw what changed.

use super::commands::{parse_input, Command, CommandError, Input, HELP_TEXT};
use super::input::LineReceiver;
use crate::api::CompletionClient;
use crate::error::SessionError;
use crate::session::{FinishOutcome, SessionController, SkipReason};
use crate::ui::{RenderSink, TranscriptCursor};
use std::future::Future;

/// What ended a wait on the completion client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Finished(FinishOutcome),
    /// The user interrupted; the session was reset and the request abandoned.
    Interrupted,
}

/// Drives one interactive session over line-oriented input.
pub struct Repl<'a, I> {
    client: &'a dyn CompletionClient,
    sink: &'a dyn RenderSink,
    /// Produces a future that resolves when the user interrupts (Ctrl-C).
    interrupt: I,
    cursor: TranscriptCursor,
}

impl<'a, I, F> Repl<'a, I>
where
    I: FnMut() -> F,
    F: Future<Output = ()>,
{
    pub fn new(client: &'a dyn CompletionClient, sink: &'a dyn RenderSink, interrupt: I) -> Self {
        Self {
            client,
            sink,
            interrupt,
            cursor: TranscriptCursor::new(),
        }
    }

    /// Run until EOF, `/quit`, or an interrupt while idle.
    pub async fn run(
        &mut self,
        mut lines: LineReceiver,
        session: &mut SessionController,
    ) -> std::io::Result<()> {
        self.sink.welcome();
        self.sink.content_types(session.content_type());

        loop {
            self.sink.prompt(session.content_type());
            let line = tokio::select! {
                biased;
                line = lines.recv() => line.transpose()?,
                () = (self.interrupt)() => None,
            };
            let Some(line) = line else {
                break;
            };

            match parse_input(&line) {
                Ok(Input::Prompt(text)) => {
                    session.set_draft(text);
                    self.submit_draft(session).await;
                }
                Ok(Input::Command(Command::Quit)) => break,
                Ok(Input::Command(command)) => {
                    if let Err(err) = self.dispatch(command, session) {
                        self.sink.error(&err.to_string());
                    }
                }
                Err(err) => self.sink.error(&err.to_string()),
            }
        }
        Ok(())
    }

    /// Submit the draft and wait for the answer or an interrupt.
    pub async fn submit_draft(&mut self, session: &mut SessionController) -> Option<WaitOutcome> {
        let draft = session.draft().to_string();
        let pending = match session.begin_submit(&draft, session.content_type()) {
            Ok(pending) => pending,
            Err(SkipReason::Blank) => return None,
            Err(SkipReason::Busy) => {
                self.sink.warn("still generating; wait for the current answer");
                return None;
            }
        };
        self.redraw(session);

        let mut progress = self.sink.progress(session.phase());
        let result = tokio::select! {
            biased;
            result = self.client.complete(pending.prompt()) => Some(result),
            () = (self.interrupt)() => None,
        };
        progress.finish();

        let outcome = match result {
            Some(result) => WaitOutcome::Finished(session.finish(pending, result)),
            None => {
                tracing::debug!(generation = pending.generation(), "completion abandoned");
                session.reset();
                self.sink.notice("Request abandoned; started a new session.");
                self.sink.welcome();
                WaitOutcome::Interrupted
            }
        };
        self.redraw(session);
        Some(outcome)
    }

    fn dispatch(
        &mut self,
        command: Command,
        session: &mut SessionController,
    ) -> Result<(), CommandError> {
        match command {
            Command::New => {
                session.reset();
                self.redraw(session);
                self.sink.welcome();
            }
            Command::Type(Some(content_type)) => {
                session.select_content_type(content_type);
                self.sink.content_types(content_type);
            }
            Command::Type(None) => self.sink.content_types(session.content_type()),
            Command::History => {
                self.sink
                    .sidebar(session.transcript(), session.state().selected_history);
            }
            Command::Select(position) => {
                session
                    .select_history(position - 1)
                    .map_err(|err| match err {
                        SessionError::NoSuchHistoryEntry { len, .. } => {
                            CommandError::NoSuchHistoryEntry { position, len }
                        }
                        other => other.into(),
                    })?;
                self.sink
                    .sidebar(session.transcript(), session.state().selected_history);
            }
            Command::Help => self.sink.notice(HELP_TEXT),
            Command::Quit => {}
        }
        Ok(())
    }

    fn redraw(&mut self, session: &SessionController) {
        for turn in self.cursor.unseen(session) {
            self.sink.turn(turn);
        }
    }
}
