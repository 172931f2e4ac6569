//! Opt-in guard against out-of-order responses.
//!
//! A host that fires several list requests in quick succession (fast paging,
//! type-ahead search) takes a ticket per request and drops any response whose
//! ticket is no longer the latest. The fetch client itself never consults the
//! sequencer.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// `Some(value)` if `ticket` is still current, `None` if superseded.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        self.is_latest(ticket).then_some(value)
    }
}
