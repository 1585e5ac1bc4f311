//! "Generating content..." indicator drawn while the session awaits an answer.

use super::settings;
use crate::session::SessionPhase;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Live indicator. Stops and erases its line on `finish` or drop.
pub struct ProgressHandle {
    stopped: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl ProgressHandle {
    /// Handle that draws nothing.
    pub fn disabled() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(true)),
            task: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    pub fn finish(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        // Flip the flag under the stderr lock so the ticker cannot redraw
        // after the line is cleared.
        let mut err = io::stderr().lock();
        self.stopped.store(true, Ordering::Relaxed);
        task.abort();
        let _ = write!(err, "{}", settings::PROGRESS_CLEAR_LINE);
        let _ = err.flush();
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Start the indicator if the session is awaiting a completion.
///
/// Draws nothing when idle, when stderr is not a terminal, or outside a tokio
/// runtime.
pub fn start_progress(phase: SessionPhase, color: bool) -> ProgressHandle {
    if phase != SessionPhase::Awaiting || !io::stderr().is_terminal() {
        return ProgressHandle::disabled();
    }
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        return ProgressHandle::disabled();
    };

    let stopped = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stopped);
    let task = runtime.spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_millis(settings::PROGRESS_TICK_MS));
        let mut tick = 0usize;
        loop {
            ticker.tick().await;
            if !draw(&flag, tick, color) {
                break;
            }
            tick += 1;
        }
    });

    ProgressHandle {
        stopped,
        task: Some(task),
    }
}

fn draw(stopped: &AtomicBool, tick: usize, color: bool) -> bool {
    let mut err = io::stderr().lock();
    if stopped.load(Ordering::Relaxed) {
        return false;
    }
    let _ = write!(
        err,
        "{}{}",
        settings::PROGRESS_CLEAR_LINE,
        progress_line(tick, color)
    );
    let _ = err.flush();
    true
}

/// A row of dots with one lifted per tick, then the label.
fn progress_line(tick: usize, color: bool) -> String {
    let lifted = tick % settings::PROGRESS_DOTS;
    let dots: String = (0..settings::PROGRESS_DOTS)
        .map(|i| if i == lifted { '•' } else { '·' })
        .collect();
    if color {
        format!(
            "{} {}",
            dots.with(settings::COLOR_PROGRESS_DOTS),
            settings::PROGRESS_LABEL.with(settings::COLOR_MUTED)
        )
    } else {
        format!("{dots} {}", settings::PROGRESS_LABEL)
    }
}
