//! Application flows built on the session controller: the interactive loop
//! and one-shot submission.

pub mod commands;
pub mod input;
pub mod repl;

pub use input::{spawn_line_reader, stdin_lines, LineReceiver};
pub use repl::{Repl, WaitOutcome};

use crate::api::CompletionClient;
use crate::session::{ContentType, SessionController, SubmitOutcome};
use crate::ui::{RenderSink, TranscriptCursor};

/// Submit a single prompt, render the exchange, and report how it resolved.
pub async fn run_once(
    client: &dyn CompletionClient,
    session: &mut SessionController,
    sink: &dyn RenderSink,
    prompt: &str,
    content_type: ContentType,
) -> SubmitOutcome {
    let pending = match session.begin_submit(prompt, content_type) {
        Ok(pending) => pending,
        Err(reason) => return SubmitOutcome::Skipped(reason),
    };
    let result = {
        let _progress = sink.progress(session.phase());
        client.complete(pending.prompt()).await
    };
    let outcome = SubmitOutcome::Finished(session.finish(pending, result));
    let mut cursor = TranscriptCursor::new();
    for turn in cursor.unseen(session) {
        sink.turn(turn);
    }
    outcome
}
