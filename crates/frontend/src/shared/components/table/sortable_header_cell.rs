//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Prix"
//!     sort_field="price"
//!     align="right"
//!     current_sort_field=Signal::derive(move || ctrl.state.with(|s| s.sort_field.clone()))
//!     sort_order=Signal::derive(move || ctrl.state.with(|s| s.sort_order))
//!     on_sort=Callback::new(move |field| ctrl.toggle_sort(field))
//! />
//! ```

use crate::shared::list_state::ListController;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortOrder, TableRecord};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,

    /// Field path passed to `on_sort`
    #[prop(into)]
    sort_field: String,

    #[prop(into)] current_sort_field: Signal<String>,

    #[prop(into)] sort_order: Signal<SortOrder>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)] min_width: f64,

    /// "left" or "right"
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &sort_field)>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &field_for_indicator,
                            sort_order.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}

/// One `SortableHeaderCell` per column of the controller.
#[component]
pub fn SortableHeaders<T>(
    ctrl: ListController<T>,
    #[prop(optional, default = 110.0)] min_width: f64,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let current = Signal::derive(move || ctrl.state.with(|s| s.sort_field.clone()));
    let order = Signal::derive(move || ctrl.state.with(|s| s.sort_order));
    ctrl.columns()
        .iter()
        .map(|col| {
            view! {
                <SortableHeaderCell
                    label=col.label
                    sort_field=col.id
                    current_sort_field=current
                    sort_order=order
                    on_sort=Callback::new(move |f| ctrl.toggle_sort(f))
                    min_width=min_width
                    align=if col.align_right { "right" } else { "left" }
                />
            }
        })
        .collect_view()
}
