//! State and controller shared by every list page.
//!
//! `ListState` holds the view parameters (search, sort, page). `ListController`
//! binds them to the loaded records, the row selection and the refetch guard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use super::api_error::ApiError;
use super::bulk::{bulk_summary, failed_ids, run_bulk};
use super::config::config;
use super::list_utils::{
    apply_sort_filter, clamp_page, get_comparator, next_sort, paginate, searchable_fields,
    total_pages, ColumnDescriptor, SortOrder, TableRecord,
};
use super::request_generation::RequestGeneration;
use super::selection::Selection;
use super::toast::ToastStore;
use crate::layout::notifications::NotificationsStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub search_query: String,
    /// Restrict search to one column; `None` searches every searchable column
    pub search_field: Option<String>,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: usize,
    pub is_loaded: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ListState {
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            search_field: None,
            sort_field: sort_field.to_string(),
            sort_order: SortOrder::Asc,
            page: 0,
            page_size: page_size.max(1),
            is_loaded: false,
            is_loading: false,
            error: None,
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.search_query = query;
        self.page = 0;
    }

    pub fn set_search_field(&mut self, field: Option<String>) {
        self.search_field = field.filter(|f| !f.is_empty());
        self.page = 0;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        let (field, order) = next_sort(&self.sort_field, self.sort_order, field);
        self.sort_field = field;
        self.sort_order = order;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    pub fn search_fields(&self, columns: &[ColumnDescriptor]) -> Vec<String> {
        match &self.search_field {
            Some(field) => vec![field.clone()],
            None => searchable_fields(columns).into_iter().map(String::from).collect(),
        }
    }
}

/// Filtered and sorted records of the whole view (all pages).
pub fn filtered_view<T: TableRecord + Clone>(
    items: &[T],
    state: &ListState,
    columns: &[ColumnDescriptor],
) -> Vec<T> {
    let fields = state.search_fields(columns);
    let field_refs: Vec<&str> = fields.iter().map(String::as_str).collect();
    apply_sort_filter(
        items,
        get_comparator(&state.sort_field, state.sort_order),
        &state.search_query,
        Some(&field_refs),
    )
}

pub struct ListController<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub state: RwSignal<ListState>,
    pub selection: RwSignal<Selection>,
    generation: StoredValue<RequestGeneration>,
    columns: &'static [ColumnDescriptor],
    toasts: Option<ToastStore>,
    notifications: Option<NotificationsStore>,
    /// True while a bulk action is running
    pub bulk_busy: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    /// Must be created inside the page component; responses still in flight
    /// when the page is disposed are dropped.
    pub fn new(default_sort: &str, columns: &'static [ColumnDescriptor]) -> Self {
        let generation = RequestGeneration::new();
        let on_dispose = generation.clone();
        on_cleanup(move || on_dispose.invalidate());
        Self {
            items: RwSignal::new(Vec::new()),
            state: RwSignal::new(ListState::new(default_sort, config().tables.default_page_size)),
            selection: RwSignal::new(Selection::new()),
            generation: StoredValue::new(generation),
            columns,
            toasts: use_context::<ToastStore>(),
            notifications: use_context::<NotificationsStore>(),
            bulk_busy: RwSignal::new(false),
        }
    }

    pub fn columns(&self) -> &'static [ColumnDescriptor] {
        self.columns
    }

    /// Fetch records; the result is committed only if no newer load started meanwhile.
    pub fn load<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let ticket = self.generation.with_value(|g| g.begin());
        let this = *self;
        this.state.update(|s| s.is_loading = true);
        spawn_local(async move {
            let result = fetch.await;
            if !ticket.is_current() {
                log::debug!("dropping stale response (generation {})", ticket.generation());
                return;
            }
            match result {
                Ok(records) => {
                    let ids: Vec<String> = records.iter().map(TableRecord::record_id).collect();
                    this.items.set(records);
                    this.selection.update(|sel| sel.retain_only(&ids));
                    this.state.update(|s| {
                        s.is_loaded = true;
                        s.is_loading = false;
                        s.error = None;
                    });
                    this.clamp_current_page();
                }
                Err(e) => {
                    log::error!("failed to load list: {}", e);
                    this.state.update(|s| {
                        s.is_loading = false;
                        s.error = Some(e.user_message());
                    });
                    if let Some(toasts) = this.toasts {
                        toasts.error(e.user_message());
                    }
                }
            }
        });
    }

    /// Records of the current filtered view (all pages).
    pub fn filtered(&self) -> Vec<T> {
        let columns = self.columns;
        self.state
            .with(|state| self.items.with(|items| filtered_view(items, state, columns)))
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<T> {
        let filtered = self.filtered();
        let (page, size) = self.state.with(|s| (s.page, s.page_size));
        paginate(&filtered, page, size).to_vec()
    }

    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count(), self.state.with(|s| s.page_size))
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.filtered().iter().map(TableRecord::record_id).collect()
    }

    fn clamp_current_page(&self) {
        let pages = self.total_pages();
        self.state.update(|s| s.page = clamp_page(s.page, pages));
    }

    pub fn set_query(&self, query: String) {
        self.state.update(|s| s.set_query(query));
    }

    pub fn set_search_field(&self, field: Option<String>) {
        self.state.update(|s| s.set_search_field(field));
    }

    pub fn toggle_sort(&self, field: String) {
        self.state.update(|s| s.toggle_sort(&field));
    }

    pub fn go_to_page(&self, page: usize) {
        let pages = self.total_pages();
        self.state.update(|s| s.page = clamp_page(page, pages));
    }

    pub fn set_page_size(&self, size: usize) {
        self.state.update(|s| s.set_page_size(size));
    }

    pub fn toggle_selection(&self, id: String, checked: bool) {
        self.selection.update(|s| s.toggle(&id, checked));
    }

    pub fn toggle_all(&self, checked: bool) {
        let visible = if checked { self.visible_ids() } else { Vec::new() };
        self.selection.update(|s| s.toggle_all(checked, visible));
    }

    pub fn clear_selection(&self) {
        self.selection.update(Selection::clear);
    }

    /// Delete every selected id concurrently, then `reload`.
    ///
    /// A full success clears the selection; otherwise only the failed ids stay selected.
    pub fn bulk_delete<F, Fut, R>(&self, subject: &'static str, delete_one: F, reload: R)
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
        R: Fn() + 'static,
    {
        let ids = self.selection.with_untracked(Selection::ids);
        if ids.is_empty() || self.bulk_busy.get_untracked() {
            return;
        }
        let this = *self;
        this.bulk_busy.set(true);
        spawn_local(async move {
            let report = run_bulk(ids, delete_one).await;
            this.bulk_busy.set(false);
            let (kind, text) = bulk_summary(&report, "supprimé(s)");
            if let Some(toasts) = this.toasts {
                toasts.push(kind, text.clone());
            }
            if let Some(store) = this.notifications {
                store.push(format!("{}: {}", subject, text));
            }
            if report.is_complete_success() {
                this.clear_selection();
            } else {
                let keep = failed_ids(&report);
                this.selection.update(|s| s.retain_only(&keep));
            }
            reload();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const COLUMNS: &[ColumnDescriptor] = &[
        ColumnDescriptor::new("name", "Nom"),
        ColumnDescriptor::new("city", "Ville"),
        ColumnDescriptor::new("price", "Prix").not_searchable(),
    ];

    fn rows() -> Vec<Value> {
        vec![
            json!({"_id": "1", "name": "Bureau", "city": "Oran", "price": 300}),
            json!({"_id": "2", "name": "Armoire", "city": "Alger", "price": 100}),
            json!({"_id": "3", "name": "Chaise", "city": "Bureau-ville", "price": 200}),
        ]
    }

    fn ids(v: &[Value]) -> Vec<String> {
        v.iter().map(TableRecord::record_id).collect()
    }

    #[test]
    fn test_filtered_view_all_columns() {
        let mut state = ListState::new("name", 10);
        state.set_query("bureau".into());
        assert_eq!(ids(&filtered_view(&rows(), &state, COLUMNS)), vec!["1", "3"]);
    }

    #[test]
    fn test_filtered_view_single_field() {
        let mut state = ListState::new("name", 10);
        state.set_query("bureau".into());
        state.set_search_field(Some("name".into()));
        assert_eq!(ids(&filtered_view(&rows(), &state, COLUMNS)), vec!["1"]);
        state.set_search_field(Some(String::new()));
        assert_eq!(state.search_field, None);
    }

    #[test]
    fn test_non_searchable_column_is_ignored() {
        let mut state = ListState::new("name", 10);
        state.set_query("300".into());
        assert!(filtered_view(&rows(), &state, COLUMNS).is_empty());
    }

    #[test]
    fn test_sort_toggle_and_reset_page() {
        let mut state = ListState::new("name", 2);
        state.page = 1;
        state.toggle_sort("price");
        assert_eq!((state.sort_field.as_str(), state.sort_order), ("price", SortOrder::Asc));
        state.toggle_sort("price");
        assert_eq!(state.sort_order, SortOrder::Desc);
        assert_eq!(ids(&filtered_view(&rows(), &state, COLUMNS)), vec!["1", "3", "2"]);

        state.set_query("a".into());
        assert_eq!(state.page, 0);
        state.page = 3;
        state.set_page_size(0);
        assert_eq!((state.page, state.page_size), (0, 1));
    }
}
