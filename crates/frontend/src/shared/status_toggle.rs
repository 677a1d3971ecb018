//! Tracking of single-record actions that are waiting for the server.

use std::collections::HashSet;
use std::hash::Hash;

/// Label shown on an action while its request is outstanding
pub const PENDING_LABEL: &str = "...";

/// Set of `(record id, action)` pairs currently in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlightActions<A: Eq + Hash> {
    pending: HashSet<(String, A)>,
}

impl<A: Eq + Hash + Clone> Default for InFlightActions<A> {
    fn default() -> Self {
        Self {
            pending: HashSet::new(),
        }
    }
}

impl<A: Eq + Hash + Clone> InFlightActions<A> {
    /// Mark the action as started. Returns false when it is already running.
    pub fn begin(&mut self, id: &str, action: A) -> bool {
        self.pending.insert((id.to_string(), action))
    }

    pub fn finish(&mut self, id: &str, action: A) {
        self.pending.remove(&(id.to_string(), action));
    }

    pub fn is_pending(&self, id: &str, action: A) -> bool {
        self.pending.contains(&(id.to_string(), action))
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn label<'a>(&self, id: &str, action: A, idle: &'a str) -> &'a str {
        if self.is_pending(id, action) {
            PENDING_LABEL
        } else {
            idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserFlag;

    #[test]
    fn test_pending_label_per_record_and_action() {
        let mut in_flight = InFlightActions::default();
        assert!(in_flight.begin("u1", UserFlag::Banned));
        assert!(!in_flight.begin("u1", UserFlag::Banned));

        assert_eq!(in_flight.label("u1", UserFlag::Banned, "Bannir"), PENDING_LABEL);
        assert_eq!(in_flight.label("u1", UserFlag::Active, "Activer"), "Activer");
        assert_eq!(in_flight.label("u2", UserFlag::Banned, "Bannir"), "Bannir");

        in_flight.finish("u1", UserFlag::Banned);
        assert!(in_flight.is_empty());
        assert_eq!(in_flight.label("u1", UserFlag::Banned, "Bannir"), "Bannir");
    }
}
