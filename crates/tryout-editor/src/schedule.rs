//! Latest-wins coalescing of recomputes.
//!
//! Each edit takes a [`Ticket`]. The host defers the recompute to a later
//! turn of the event loop and drops it if a newer ticket was issued in the
//! meantime, so a burst of keystrokes compiles once.

use std::cell::Cell;

/// Edit generation number. Later edits get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct EditScheduler {
    latest: Cell<u64>,
}

impl EditScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    /// `true` if no ticket was issued after `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let s = EditScheduler::new();
        let a = s.issue();
        assert!(s.is_current(a));
        let b = s.issue();
        let c = s.issue();
        assert!(!s.is_current(a));
        assert!(!s.is_current(b));
        assert!(s.is_current(c));
        assert!(a < b && b < c);
    }
}
