//! Run an engine off the caller's thread.
//!
//! The search owns a private copy of the game state; the result comes back
//! through a single-slot channel so a UI loop can poll without blocking.

use std::io;
use std::panic;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, bounded};
use tracing::debug;

use crate::board::GameState;
use crate::{Engine, SearchResult};

pub struct SearchHandle {
    rx: Receiver<SearchResult>,
    thread: JoinHandle<Box<dyn Engine>>,
    result: Option<SearchResult>,
}

/// Start `engine` on a copy of `state`. The engine is handed back by [`SearchHandle::wait`].
///
/// Fails only if the OS refuses to create the thread.
pub fn spawn_search(
    mut engine: Box<dyn Engine>,
    state: GameState,
    depth: u8,
) -> io::Result<SearchHandle> {
    let (tx, rx) = bounded(1);
    let thread = thread::Builder::new()
        .name("search".to_string())
        .spawn(move || {
            let result = engine.search(&state, depth);
            debug!(
                engine = engine.name(),
                nodes = result.nodes,
                score = result.score,
                "background search done"
            );
            // The handle may already be gone; nobody is waiting then.
            let _ = tx.send(result);
            engine
        })?;

    Ok(SearchHandle {
        rx,
        thread,
        result: None,
    })
}

impl SearchHandle {
    /// Non-blocking poll.
    pub fn try_result(&mut self) -> Option<SearchResult> {
        if self.result.is_none() {
            self.result = self.rx.try_recv().ok();
        }
        self.result.clone()
    }

    pub fn is_finished(&mut self) -> bool {
        self.try_result().is_some()
    }

    /// Wait up to `timeout` for the result. `None` while the search runs, or
    /// if the thread died without answering (see [`SearchHandle::is_running`]).
    pub fn poll(&mut self, timeout: Duration) -> Option<SearchResult> {
        if self.result.is_none() {
            self.result = self.rx.recv_timeout(timeout).ok();
        }
        self.result.clone()
    }

    /// False once the search thread has exited, with or without a result.
    pub fn is_running(&self) -> bool {
        !self.thread.is_finished()
    }

    /// Block until the search finishes. Panics raised by the engine are re-raised here.
    pub fn wait(self) -> (SearchResult, Box<dyn Engine>) {
        let received = match self.result {
            Some(result) => Some(result),
            None => self.rx.recv().ok(),
        };
        let engine = match self.thread.join() {
            Ok(engine) => engine,
            Err(payload) => panic::resume_unwind(payload),
        };
        let result = received.expect("search thread exited without a result");
        (result, engine)
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
