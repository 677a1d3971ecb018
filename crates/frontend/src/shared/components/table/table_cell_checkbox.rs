//! Row checkbox cell

use leptos::prelude::*;
use thaw::*;

use crate::shared::selection::Selection;

/// Clicks do not propagate to the row.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)] item_id: String,
    #[prop(into)] selection: Signal<Selection>,
    /// (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let id_for_checked = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selection.with(|s| s.contains(&id_for_checked))
                on:change=move |ev| {
                    on_change.run((item_id.clone(), event_target_checked(&ev)));
                }
            />
        </TableCell>
    }
}
