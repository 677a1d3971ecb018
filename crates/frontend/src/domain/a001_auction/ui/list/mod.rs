mod state;

use contracts::domain::a001_auction::aggregate::Auction;
use contracts::domain::common::Offer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_auction::api;
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
pub fn AuctionsList() -> impl IntoView {
    let ctrl = ListController::<Auction>::new(DEFAULT_SORT, COLUMNS);
    let expanded = RwSignal::new(ExpandedRows::<Offer>::default());
    let confirm_open = RwSignal::new(false);

    let load_data = move || {
        expanded.update(ExpandedRows::forget_details);
        ctrl.load(api::fetch_auctions());
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
            match api::fetch_offers(&id).await {
                Ok(offers) => expanded.update(|e| {
                    e.set_loaded(&id, epoch, offers);
                }),
                Err(e) => {
                    log::error!("GET /auctions/{}/offers failed: {}", id, e);
                    expanded.update(|x| {
                        x.set_failed(&id, epoch, e.user_message());
                    });
                }
            }
        });
    };

    let delete_selected = move || {
        ctrl.bulk_delete(
            "Enchères",
            |id| async move { api::delete_auction(&id).await },
            load_data,
        )
    };

    let search_query = Signal::derive(move || ctrl.state.with(|s| s.search_query.clone()));
    let selection = Signal::derive(move || ctrl.selection.get());

    view! {
        <PageFrame page_id="a001_auction--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Enchères"
                count=Signal::derive(move || ctrl.total_count())
                loading=Signal::derive(move || ctrl.state.with(|s| s.is_loading))
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                {move || ctrl.state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel ctrl=ctrl placeholder="Titre, vendeur, statut..." />

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
                                key=|a| (a.id.clone(), a.current_price.map(f64::to_bits), a.status)
                                children=move |auction: Auction| {
                                    let id = auction.id.clone();
                                    let id_for_toggle = id.clone();
                                    let id_for_chevron = id.clone();
                                    let id_for_detail = id.clone();
                                    let id_for_show = id.clone();
                                    let title = auction.title.clone();
                                    let seller = auction.seller.as_ref().map(|s| s.full_name()).unwrap_or_else(|| "—".into());
                                    let status_class = format!("badge badge--{}", auction.status.code());
                                    let status_label = auction.status.display_name();
                                    let starting_price = auction.starting_price;
                                    let current_price = auction.effective_price();
                                    let end_at = format_optional_date(auction.end_at.as_deref());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <button
                                                    class="button button--icon table__expander"
                                                    title="Offres"
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
                                                    {move || highlight_matches(&seller, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=Signal::derive(move || Some(starting_price)) />
                                            <TableCellMoney value=Signal::derive(move || Some(current_price)) bold=true />
                                            <TableCell>
                                                <span class=status_class>{status_label}</span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{end_at}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                        <Show when=move || expanded.with(|e| e.is_expanded(&id_for_show))>
                                            <OffersRow
                                                detail=Signal::derive({
                                                    let id = id_for_detail.clone();
                                                    move || expanded.with(|e| e.detail(&id))
                                                })
                                                colspan=ROW_SPAN
                                                noun="offre"
                                            />
                                        </Show>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || ctrl.state.with(|s| s.is_loaded) && ctrl.total_count() == 0>
                        <div class="table__empty">"Aucune enchère"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Supprimer les enchères"
                message=Signal::derive(move || {
                    format!("Supprimer {} enchère(s) sélectionnée(s) ?", ctrl.selection.with(|s| s.len()))
                })
                confirm_label="Supprimer"
                on_confirm=Callback::new(move |_| delete_selected())
                on_cancel=Callback::new(move |_| ctrl.clear_selection())
            />
        </PageFrame>
    }
}
