//! Deferred scroll requests
//!
//! Selecting a letter does not move the list in the same call stack. The
//! request is queued and applied on the next tick of the event loop, the way
//! the list's own scroll scheduling would. Requests carry absolute targets,
//! so only the newest pending one matters.

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Absolute scroll target in flat rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: usize,
}

impl ScrollRequest {
    pub fn to(target: usize) -> Self {
        Self { target }
    }
}

/// Something that can scroll its first visible row to an absolute index
#[cfg_attr(test, mockall::automock)]
pub trait Scrollable {
    fn scroll_to_item(&mut self, index: usize);
}

/// Fire-and-forget queue of scroll requests
#[derive(Debug)]
pub struct ScrollScheduler {
    tx: UnboundedSender<ScrollRequest>,
    rx: UnboundedReceiver<ScrollRequest>,
}

impl ScrollScheduler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Handle for queueing requests from elsewhere
    pub fn sender(&self) -> UnboundedSender<ScrollRequest> {
        self.tx.clone()
    }

    /// Queue a request without waiting for it to be applied
    pub fn schedule(&self, request: ScrollRequest) {
        // The receiver lives as long as `self`, so this only fails while dropping.
        if self.tx.send(request).is_err() {
            tracing::warn!("Scroll request to row {} dropped", request.target);
        }
    }

    /// Take the newest pending request, discarding any it supersedes
    pub fn take_latest(&mut self) -> Option<ScrollRequest> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(request) => latest = Some(request),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }

    /// Apply the newest pending request to `target`.
    /// Returns true if a scroll was performed.
    pub fn apply_pending(&mut self, target: &mut dyn Scrollable) -> bool {
        match self.take_latest() {
            Some(request) => {
                tracing::debug!("Scrolling to row {}", request.target);
                target.scroll_to_item(request.target);
                true
            }
            None => false,
        }
    }
}

impl Default for ScrollScheduler {
    fn default() -> Self {
        Self::new()
    }
}
