mod state;

use contracts::system::roles::Role;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::SortableHeaders;
use crate::shared::components::{FilterPanel, PageHeader};
use crate::shared::list_state::ListController;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::roles::api;
use state::{permission_lines, COLUMNS, DEFAULT_SORT};

/// Read-only list of roles with their permissions grouped by resource.
#[component]
pub fn RolesList() -> impl IntoView {
    let ctrl = ListController::<Role>::new(DEFAULT_SORT, COLUMNS);
    let load_data = move || ctrl.load(api::fetch_roles());

    Effect::new(move |_| {
        if !ctrl.state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_query = Signal::derive(move || ctrl.state.with(|s| s.search_query.clone()));

    view! {
        <PageFrame page_id="roles--system" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Rôles et permissions"
                count=Signal::derive(move || ctrl.total_count())
                loading=Signal::derive(move || ctrl.state.with(|s| s.is_loading))
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                {move || ctrl.state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel ctrl=ctrl placeholder="Rôle ou description..." field_selector=false />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaders ctrl=ctrl min_width=140.0 />
                                <TableHeaderCell resizable=false min_width=300.0>"Détail"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctrl.page_rows()
                                key=|r| r.id.clone()
                                children=move |role: Role| {
                                    let name = role.name.clone();
                                    let description = role.description.clone().unwrap_or_default();
                                    let count = role.permissions.len();
                                    let lines = permission_lines(&role);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <strong>{move || highlight_matches(&name, &search_query.get())}</strong>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&description, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="text-right">{count}</TableCell>
                                            <TableCell>
                                                <ul class="permission-list">
                                                    {lines.into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}
                                                </ul>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || ctrl.state.with(|s| s.is_loaded) && ctrl.total_count() == 0>
                        <div class="table__empty">"Aucun rôle"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
