use leptos::prelude::*;
use thaw::*;

use super::PaginationControls;
use crate::shared::list_state::ListController;
use crate::shared::list_utils::{SearchInput, TableRecord};

/// Search bar of a list page: optional field selector, debounced search and paging.
#[component]
pub fn FilterPanel<T>(
    ctrl: ListController<T>,
    #[prop(into)] placeholder: String,
    /// Show the "search in column" selector
    #[prop(optional, default = true)]
    field_selector: bool,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let search_query = Signal::derive(move || ctrl.state.with(|s| s.search_query.clone()));
    let selector = field_selector.then(|| {
        view! {
            <select
                class="search-field-select"
                title="Champ de recherche"
                on:change=move |ev| ctrl.set_search_field(Some(event_target_value(&ev)))
            >
                <option value="">"Tous les champs"</option>
                {ctrl
                    .columns()
                    .iter()
                    .filter(|c| c.searchable)
                    .map(|c| view! { <option value=c.id>{c.label}</option> })
                    .collect_view()}
            </select>
        }
    });

    view! {
        <div class="filter-panel">
            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    {selector}
                    <SearchInput
                        value=search_query
                        on_change=Callback::new(move |q: String| ctrl.set_query(q))
                        placeholder=placeholder
                    />
                    <PaginationControls
                        current_page=Signal::derive(move || ctrl.state.with(|s| s.page))
                        total_pages=Signal::derive(move || ctrl.total_pages())
                        total_count=Signal::derive(move || ctrl.total_count())
                        page_size=Signal::derive(move || ctrl.state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |p| ctrl.go_to_page(p))
                        on_page_size_change=Callback::new(move |s| ctrl.set_page_size(s))
                    />
                </Flex>
            </div>
        </div>
    }
}
