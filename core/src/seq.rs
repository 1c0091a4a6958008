//! Fencing for overlapping refreshes.
//!
//! The refresh timer fires on a fixed schedule and never waits for the
//! previous cycle, so two fetches can be in flight at once. Each read
//! takes a ticket; a response is applied only while its ticket is still
//! the latest issued, which keeps an old response that resolves late
//! from overwriting newer state.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: Cell<u64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket.
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    /// Whether a response carrying this ticket may still be applied.
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}
