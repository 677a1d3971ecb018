//! Header checkbox selecting every visible row
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     visible_ids=Signal::derive(move || ctrl.visible_ids())
//!     selection=ctrl.selection
//!     on_change=Callback::new(move |checked| ctrl.toggle_all(checked))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::shared::selection::{HeaderCheckState, Selection};

/// Three states (unchecked, checked, indeterminate) computed against `visible_ids`.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows of the current filtered view
    #[prop(into)]
    visible_ids: Signal<Vec<String>>,

    #[prop(into)] selection: Signal<Selection>,

    /// true = select visible rows, false = clear the selection
    on_change: Callback<bool>,
) -> impl IntoView {
    let check_state =
        Signal::derive(move || selection.with(|sel| visible_ids.with(|ids| sel.header_state(ids))));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let state = check_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state == HeaderCheckState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Tout sélectionner"
                prop:checked=move || check_state.get() == HeaderCheckState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
