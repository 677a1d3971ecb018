//! Last-request-wins guard for list refetches.
//!
//! Each fetch takes a ticket; when the response arrives it is committed only
//! if no newer fetch has started in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// Invalidate outstanding tickets without starting a request.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let gen = RequestGeneration::new();
        let first = gen.begin();
        let second = gen.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_invalidate_drops_outstanding() {
        let gen = RequestGeneration::new();
        let ticket = gen.begin();
        gen.invalidate();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_clone_shares_counter() {
        let gen = RequestGeneration::new();
        let on_dispose = gen.clone();
        let ticket = gen.begin();
        on_dispose.invalidate();
        assert!(!ticket.is_current());
    }
}
