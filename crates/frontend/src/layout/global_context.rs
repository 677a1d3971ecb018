use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Opened tabs in opening order and the active key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    pub opened: Vec<Tab>,
    pub active: Option<String>,
}

impl TabSet {
    /// Open (or re-activate) a tab. Returns true when a new tab was added.
    pub fn open(&mut self, key: &str, title: &str) -> bool {
        let added = !self.contains(key);
        if added {
            self.opened.push(Tab {
                key: key.to_string(),
                title: title.to_string(),
            });
        }
        self.active = Some(key.to_string());
        added
    }

    pub fn contains(&self, key: &str) -> bool {
        self.opened.iter().any(|t| t.key == key)
    }

    /// Close a tab; closing the active one activates the last remaining tab.
    pub fn close(&mut self, key: &str) {
        self.opened.retain(|t| t.key != key);
        if self.active.as_deref() == Some(key) {
            self.active = self.opened.last().map(|t| t.key.clone());
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub tabs: RwSignal<TabSet>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            tabs: RwSignal::new(TabSet::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn active_key(&self) -> Option<String> {
        self.tabs.with(|t| t.active.clone())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.tabs.with(|t| t.active.as_deref() == Some(key))
    }

    pub fn opened(&self) -> Vec<Tab> {
        self.tabs.with(|t| t.opened.clone())
    }

    /// Restore the active tab from `?active=` and keep the URL in sync afterwards.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            self.open_tab(active_key, tab_label_for_key(active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active_key() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let mut added = false;
        self.tabs.update(|t| added = t.open(key, title));
        log::debug!("open_tab '{}' (new: {})", key, added);
    }

    pub fn activate_tab(&self, key: &str) {
        self.tabs.update(|t| t.active = Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab '{}'", key);
        self.tabs.update(|t| t.close(key));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_is_idempotent() {
        let mut tabs = TabSet::default();
        assert!(tabs.open("auctions", "Enchères"));
        assert!(tabs.open("ads", "Publicités"));
        assert!(!tabs.open("auctions", "Enchères"));
        assert_eq!(tabs.opened.len(), 2);
        assert_eq!(tabs.active.as_deref(), Some("auctions"));
    }

    #[test]
    fn test_close_active_moves_to_last() {
        let mut tabs = TabSet::default();
        tabs.open("a", "A");
        tabs.open("b", "B");
        tabs.open("c", "C");
        tabs.active = Some("b".into());
        tabs.close("b");
        assert_eq!(tabs.active.as_deref(), Some("c"));
        tabs.close("a");
        assert_eq!(tabs.active.as_deref(), Some("c"));
        tabs.close("c");
        assert_eq!(tabs.active, None);
    }
}
