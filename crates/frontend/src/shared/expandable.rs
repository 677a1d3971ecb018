//! Expandable rows whose detail is fetched once, on first expansion.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub enum Detail<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedRows<T> {
    expanded: HashSet<String>,
    details: HashMap<String, Detail<T>>,
    /// Bumped by `forget_details`; responses carrying an older epoch are dropped
    epoch: u64,
}

impl<T> Default for ExpandedRows<T> {
    fn default() -> Self {
        Self {
            expanded: HashSet::new(),
            details: HashMap::new(),
            epoch: 0,
        }
    }
}

impl<T: Clone> ExpandedRows<T> {
    /// Expand or collapse `id`. Returns the epoch to commit the detail with when
    /// the caller must fetch it: the row was just expanded and has no loaded or
    /// in-flight detail.
    pub fn toggle(&mut self, id: &str) -> Option<u64> {
        if self.expanded.remove(id) {
            return None;
        }
        self.expanded.insert(id.to_string());
        let needs_fetch = matches!(self.details.get(id), None | Some(Detail::Failed(_)));
        if !needs_fetch {
            return None;
        }
        self.details.insert(id.to_string(), Detail::Loading);
        Some(self.epoch)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn detail(&self, id: &str) -> Option<Detail<T>> {
        self.details.get(id).cloned()
    }

    /// Commit a fetched detail. Returns false (and drops `rows`) when the cache
    /// was reset after the fetch started.
    pub fn set_loaded(&mut self, id: &str, epoch: u64, rows: Vec<T>) -> bool {
        self.commit(id, epoch, Detail::Loaded(rows))
    }

    pub fn set_failed(&mut self, id: &str, epoch: u64, message: String) -> bool {
        self.commit(id, epoch, Detail::Failed(message))
    }

    fn commit(&mut self, id: &str, epoch: u64, detail: Detail<T>) -> bool {
        if epoch != self.epoch || !matches!(self.details.get(id), Some(Detail::Loading)) {
            log::debug!("dropping stale detail for {} (epoch {})", id, epoch);
            return false;
        }
        self.details.insert(id.to_string(), detail);
        true
    }

    /// Collapse every row and drop cached details, after the parent list was refetched.
    pub fn forget_details(&mut self) {
        self.details.clear();
        self.expanded.clear();
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_only_on_first_expansion() {
        let mut rows = ExpandedRows::<u32>::default();
        let epoch = rows.toggle("a").unwrap();
        assert_eq!(rows.detail("a"), Some(Detail::Loading));
        assert_eq!(rows.toggle("a"), None);
        assert!(!rows.is_expanded("a"));
        // Still loading: re-expanding must not send a second request.
        assert_eq!(rows.toggle("a"), None);
        assert!(rows.set_loaded("a", epoch, vec![1, 2]));
        rows.toggle("a");
        assert_eq!(rows.toggle("a"), None);
        assert_eq!(rows.detail("a"), Some(Detail::Loaded(vec![1, 2])));
    }

    #[test]
    fn test_failed_detail_is_retried() {
        let mut rows = ExpandedRows::<u32>::default();
        let epoch = rows.toggle("a").unwrap();
        assert!(rows.set_failed("a", epoch, "boom".into()));
        rows.toggle("a");
        assert_eq!(rows.toggle("a"), Some(epoch));
    }

    #[test]
    fn test_forget_details() {
        let mut rows = ExpandedRows::<u32>::default();
        let epoch = rows.toggle("a").unwrap();
        rows.set_loaded("a", epoch, vec![]);
        rows.forget_details();
        assert!(!rows.is_expanded("a"));
        assert!(rows.toggle("a").is_some());
    }

    #[test]
    fn test_response_started_before_reset_is_dropped() {
        let mut rows = ExpandedRows::<u32>::default();
        let old = rows.toggle("a").unwrap();
        rows.forget_details();
        assert!(!rows.set_loaded("a", old, vec![1]));
        assert_eq!(rows.detail("a"), None);

        // A fresh expansion refetches; the old response still cannot land.
        let fresh = rows.toggle("a").unwrap();
        assert_ne!(fresh, old);
        assert!(!rows.set_loaded("a", old, vec![1]));
        assert_eq!(rows.detail("a"), Some(Detail::Loading));
        assert!(rows.set_loaded("a", fresh, vec![2]));
        assert_eq!(rows.detail("a"), Some(Detail::Loaded(vec![2])));
    }

    #[test]
    fn test_commit_requires_loading_entry() {
        let mut rows = ExpandedRows::<u32>::default();
        assert!(!rows.set_failed("never-expanded", 0, "x".into()));
        assert_eq!(rows.detail("never-expanded"), None);
    }
}
