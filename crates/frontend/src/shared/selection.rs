//! Row selection for list pages.
//!
//! Select-all works against the ids currently visible after filtering;
//! unchecking it clears the whole set, hidden rows included.

use std::collections::HashSet;

/// Coarse state of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    SomeSelected(usize),
}

/// Tri-state of the header checkbox, relative to the visible rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn state(&self) -> SelectionState {
        match self.ids.len() {
            0 => SelectionState::Idle,
            n => SelectionState::SomeSelected(n),
        }
    }

    /// Add or remove one id.
    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Header checkbox handler: `checked` adds every visible id, otherwise the set is emptied.
    pub fn toggle_all<I, S>(&mut self, checked: bool, visible_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if checked {
            self.ids.extend(visible_ids.into_iter().map(Into::into));
        } else {
            self.ids.clear();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Keep only ids in `keep` (used to leave failed bulk items selected).
    pub fn retain_only(&mut self, keep: &[String]) {
        self.ids.retain(|id| keep.contains(id));
    }

    /// Selected ids in a stable (sorted) order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn header_state(&self, visible_ids: &[String]) -> HeaderCheckState {
        if visible_ids.is_empty() {
            return HeaderCheckState::Unchecked;
        }
        let selected = visible_ids.iter().filter(|id| self.ids.contains(*id)).count();
        if selected == 0 {
            HeaderCheckState::Unchecked
        } else if selected == visible_ids.len() {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_moves_between_states() {
        let mut sel = Selection::new();
        assert_eq!(sel.state(), SelectionState::Idle);
        sel.toggle("u1", true);
        sel.toggle("u2", true);
        assert_eq!(sel.state(), SelectionState::SomeSelected(2));
        sel.toggle("u1", false);
        sel.toggle("u2", false);
        assert_eq!(sel.state(), SelectionState::Idle);
    }

    #[test]
    fn test_select_all_uses_visible_rows_only() {
        let mut sel = Selection::new();
        sel.toggle_all(true, ids(&["a", "b"]));
        assert_eq!(sel.ids(), ids(&["a", "b"]));
        assert!(!sel.contains("c"));
    }

    #[test]
    fn test_unchecking_select_all_clears_hidden_ids() {
        let mut sel = Selection::new();
        sel.toggle("hidden", true);
        sel.toggle_all(true, ids(&["a"]));
        sel.toggle_all(false, ids(&["a"]));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_header_state() {
        let visible = ids(&["a", "b"]);
        let mut sel = Selection::new();
        assert_eq!(sel.header_state(&visible), HeaderCheckState::Unchecked);
        sel.toggle("a", true);
        assert_eq!(sel.header_state(&visible), HeaderCheckState::Indeterminate);
        sel.toggle("b", true);
        assert_eq!(sel.header_state(&visible), HeaderCheckState::Checked);
        assert_eq!(sel.header_state(&[]), HeaderCheckState::Unchecked);
    }

    #[test]
    fn test_retain_only_failed() {
        let mut sel = Selection::new();
        sel.toggle_all(true, ids(&["a", "b", "c"]));
        sel.retain_only(&ids(&["b"]));
        assert_eq!(sel.ids(), ids(&["b"]));
    }
}
