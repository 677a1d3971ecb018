mod state;

use contracts::domain::a005_direct_sale::aggregate::DirectSale;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_direct_sale::api;
use crate::shared::components::table::{
    format_number_int, SortableHeaders, TableCellCheckbox, TableCellMoney, TableHeaderCheckbox,
};
use crate::shared::components::{BulkActionsBar, ConfirmDialog, FilterPanel, PageHeader, TableTotalsRow};
use crate::shared::date_utils::format_optional_date;
use crate::shared::list_state::ListController;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{total_stock_value, COLUMNS, DEFAULT_SORT};

#[component]
pub fn DirectSalesList() -> impl IntoView {
    let ctrl = ListController::<DirectSale>::new(DEFAULT_SORT, COLUMNS);
    let confirm_open = RwSignal::new(false);

    let load_data = move || ctrl.load(api::fetch_direct_sales());

    Effect::new(move |_| {
        if !ctrl.state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let delete_selected = move || {
        ctrl.bulk_delete(
            "Ventes directes",
            |id| async move { api::delete_direct_sale(&id).await },
            load_data,
        )
    };

    let search_query = Signal::derive(move || ctrl.state.with(|s| s.search_query.clone()));
    let selection = Signal::derive(move || ctrl.selection.get());

    view! {
        <PageFrame page_id="a005_direct_sale--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Ventes directes"
                count=Signal::derive(move || ctrl.total_count())
                loading=Signal::derive(move || ctrl.state.with(|s| s.is_loading))
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                {move || ctrl.state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel ctrl=ctrl placeholder="Produit, vendeur, statut..." />

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
                                <TableHeaderCheckbox
                                    visible_ids=Signal::derive(move || ctrl.visible_ids())
                                    selection=selection
                                    on_change=Callback::new(move |checked| ctrl.toggle_all(checked))
                                />
                                <SortableHeaders ctrl=ctrl />
                            </TableRow>
                            <TableTotalsRow
                                count=Signal::derive(move || ctrl.total_count())
                                total=Signal::derive(move || total_stock_value(&ctrl.filtered()))
                                leading=1
                                gap=3
                                trailing=2
                            />
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctrl.page_rows()
                                key=|s| (s.id.clone(), s.quantity, s.price.to_bits(), s.status)
                                children=move |sale: DirectSale| {
                                    let title = sale.title.clone();
                                    let seller = sale.seller.as_ref().map(|s| s.full_name()).unwrap_or_else(|| "—".into());
                                    let price = sale.price;
                                    let stock = sale.stock_value();
                                    let quantity = format_number_int(f64::from(sale.quantity));
                                    let status_class = format!("badge badge--{}", sale.status.code());
                                    let status_label = sale.status.display_name();
                                    let created = format_optional_date(sale.created_at.as_deref());
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=sale.id
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
                                            <TableCellMoney value=Signal::derive(move || Some(price)) />
                                            <TableCell class="text-right">{quantity}</TableCell>
                                            <TableCellMoney value=Signal::derive(move || Some(stock)) bold=true />
                                            <TableCell>
                                                <span class=status_class>{status_label}</span>
                                            </TableCell>
                                            <TableCell>{created}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || ctrl.state.with(|s| s.is_loaded) && ctrl.total_count() == 0>
                        <div class="table__empty">"Aucune vente directe"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Supprimer les ventes"
                message=Signal::derive(move || {
                    format!("Supprimer {} vente(s) sélectionnée(s) ?", ctrl.selection.with(|s| s.len()))
                })
                confirm_label="Supprimer"
                on_confirm=Callback::new(move |_| delete_selected())
                on_cancel=Callback::new(move |_| ctrl.clear_selection())
            />
        </PageFrame>
    }
}
