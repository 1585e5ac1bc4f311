//! Line input fed to the interactive loop.
//!
//! Reads happen on a detached OS thread, not the runtime's blocking pool, so
//! the process can exit while a read is still parked.

use std::io::{self, BufRead};
use std::thread;
use tokio::sync::mpsc;

/// Lines read so far; closes at EOF or after the first read error.
pub type LineReceiver = mpsc::UnboundedReceiver<io::Result<String>>;

/// Spawn a detached reader thread forwarding `reader`'s lines.
pub fn spawn_line_reader<R>(reader: R) -> LineReceiver
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// Line reader over the process's stdin.
pub fn stdin_lines() -> LineReceiver {
    spawn_line_reader(io::BufReader::new(io::stdin()))
}
