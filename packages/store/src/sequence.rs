//! Latest-wins request sequencing for list views.
//!
//! A view takes a [`Ticket`] before it issues a fetch (or a mutation followed
//! by a re-fetch). When the response lands it is applied only if no newer
//! ticket has been applied yet. A slow response that lands after a newer one
//! was shown is dropped, while a newer request that fails or never finishes
//! does not block an older successful result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct Counters {
    issued: AtomicU64,
    applied: AtomicU64,
}

/// Per-view request counter. Clones share the same counters.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    inner: Arc<Counters>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued so far.
    pub fn begin(&self) -> Ticket {
        Ticket(self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Claim the view for `ticket`'s result. Returns false when a newer
    /// ticket's result has already been applied.
    pub fn accept(&self, ticket: Ticket) -> bool {
        self.inner.applied.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }

    /// Whether nothing newer than `ticket` has been applied. Used for
    /// failures, which are shown but do not advance the view.
    pub fn is_fresh(&self, ticket: Ticket) -> bool {
        self.inner.applied.load(Ordering::SeqCst) < ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(second > first);
    }

    #[test]
    fn test_stale_response_arriving_last_is_dropped() {
        let seq = RequestSequence::new();
        let slow = seq.begin();
        let fast = seq.begin();

        let mut applied = Vec::new();
        if seq.accept(fast) {
            applied.push("fast");
        }
        if seq.accept(slow) {
            applied.push("slow");
        }
        assert_eq!(applied, vec!["fast"]);
        assert!(!seq.is_fresh(slow));
    }

    #[test]
    fn test_failed_newer_request_does_not_block_older_success() {
        let seq = RequestSequence::new();
        let mut view = "before";

        let first = seq.begin();
        let second = seq.begin();
        // The second request is rejected and never applies anything.
        assert!(seq.is_fresh(second));

        if seq.accept(first) {
            view = "after first";
        }
        assert_eq!(view, "after first");
        // A later result still replaces it.
        assert!(seq.is_fresh(second));
        assert!(seq.accept(second));
    }

    #[test]
    fn test_in_order_responses_all_apply() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        assert!(seq.accept(first));
        let second = seq.begin();
        assert!(seq.accept(second));
        assert!(!seq.accept(first));
    }

    #[test]
    fn test_clones_share_counters() {
        let seq = RequestSequence::new();
        let handle = seq.clone();
        let older = seq.begin();
        let newer = handle.begin();
        assert!(handle.accept(newer));
        assert!(!seq.accept(older));
    }
}
