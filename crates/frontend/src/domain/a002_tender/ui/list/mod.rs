mod state;

use contracts::domain::a002_tender::aggregate::Tender;
use contracts::domain::common::Offer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_tender::api;
use crate::shared::components::table::{SortableHeaders, TableCellCheckbox, TableCellMoney, TableHeaderCheckbox};
use crate::shared::components::{BulkActionsBar, ConfirmDialog, FilterPanel, OffersRow, PageHeader};
use crate::shared::date_utils::format_optional_date;
use crate::shared::expandable::ExpandedRows;
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{COLUMNS, DEFAULT_SORT};

/// Columns of the main row: expander, checkbox and the data columns.
const ROW_SPAN: u32 = COLUMNS.len() as u32 + 2;

#[component]
pub fn TendersList() -> impl IntoView {
    let ctrl = ListController::<Tender>::new(DEFAULT_SORT, COLUMNS);
    let expanded = RwSignal::new(ExpandedRows::<Offer>::default());
    let confirm_open = RwSignal::new(false);

    let load_data = move || {
        expanded.update(ExpandedRows::forget_details);
        ctrl.load(api::fetch_tenders());
    };

    Effect::new(move |_| {
        if !ctrl.state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let toggle_row = move |id: String| {
        let Some(epoch) = expanded.try_update(|e| e.toggle(&id)).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_bids(&id).await {
                Ok(offers) => expanded.update(|e| {
                    e.set_loaded(&id, epoch, offers);
                }),
                Err(e) => {
                    log::error!("GET /tenders/{}/bids failed: {}", id, e);
                    expanded.update(|x| {
                        x.set_failed(&id, epoch, e.user_message());
                    });
                }
            }
        });
    };

    let delete_selected = move || {
        ctrl.bulk_delete(
            "Appels d'offres",
            |id| async move { api::delete_tender(&id).await },
            load_data,
        )
    };

    let search_query = Signal::derive(move || ctrl.state.with(|s| s.search_query.clone()));
    let selection = Signal::derive(move || ctrl.selection.get());

    view! {
        <PageFrame page_id="a002_tender--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Appels d'offres"
                count=Signal::derive(move || ctrl.total_count())
                loading=Signal::derive(move || ctrl.state.with(|s| s.is_loading))
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                {move || ctrl.state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel ctrl=ctrl placeholder="Objet, acheteur, statut..." />

                <BulkActionsBar
                    selection=selection
                    busy=ctrl.bulk_busy
                    on_delete=Callback::new(move |_| confirm_open.set(true))
                    on_clear=Callback::new(move |_| ctrl.clear_selection())
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=36.0>""</TableHeaderCell>
                                <TableHeaderCheckbox
                                    visible_ids=Signal::derive(move || ctrl.visible_ids())
                                    selection=selection
                                    on_change=Callback::new(move |checked| ctrl.toggle_all(checked))
                                />
                                <SortableHeaders ctrl=ctrl />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctrl.page_rows()
                                key=|t| (t.id.clone(), t.budget.map(f64::to_bits), t.status)
                                children=move |tender: Tender| {
                                    let id = tender.id.clone();
                                    let id_for_toggle = id.clone();
                                    let id_for_chevron = id.clone();
                                    let id_for_detail = id.clone();
                                    let id_for_show = id.clone();
                                    let title = tender.title.clone();
                                    let owner = tender.owner.as_ref().map(|o| o.full_name()).unwrap_or_else(|| "—".into());
                                    let status_class = format!("badge badge--{}", tender.status.code());
                                    let status_label = tender.status.display_name();
                                    let budget = tender.budget;
                                    let deadline = format_optional_date(tender.deadline.as_deref());
                                    let created = format_optional_date(tender.created_at.as_deref());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <button
                                                    class="button button--icon table__expander"
                                                    title="Soumissions"
                                                    on:click=move |_| toggle_row(id_for_toggle.clone())
                                                >
                                                    {move || {
                                                        if expanded.with(|e| e.is_expanded(&id_for_chevron)) {
                                                            icon("chevron-down")
                                                        } else {
                                                            icon("chevron-right")
                                                        }
                                                    }}
                                                </button>
                                            </TableCell>
                                            <TableCellCheckbox
                                                item_id=id.clone()
                                                selection=selection
                                                on_change=Callback::new(move |(id, checked)| ctrl.toggle_selection(id, checked))
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&title, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&owner, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=Signal::derive(move || budget) />
                                            <TableCell>
                                                <span class=status_class>{status_label}</span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{deadline}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                        <Show when=move || expanded.with(|e| e.is_expanded(&id_for_show))>
                                            <OffersRow
                                                detail=Signal::derive({
                                                    let id = id_for_detail.clone();
                                                    move || expanded.with(|e| e.detail(&id))
                                                })
                                                colspan=ROW_SPAN
                                                noun="soumission"
                                            />
                                        </Show>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || ctrl.state.with(|s| s.is_loaded) && ctrl.total_count() == 0>
                        <div class="table__empty">"Aucun appel d'offres"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Supprimer les appels d'offres"
                message=Signal::derive(move || {
                    format!("Supprimer {} appel(s) d'offres sélectionné(s) ?", ctrl.selection.with(|s| s.len()))
                })
                confirm_label="Supprimer"
                on_confirm=Callback::new(move |_| delete_selected())
                on_cancel=Callback::new(move |_| ctrl.clear_selection())
            />
        </PageFrame>
    }
}
