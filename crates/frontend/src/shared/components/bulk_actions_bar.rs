use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::selection::{Selection, SelectionState};

/// Toolbar shown while rows are selected: count, clear and delete.
#[component]
pub fn BulkActionsBar(
    #[prop(into)] selection: Signal<Selection>,
    /// True while a bulk request is running
    #[prop(into)]
    busy: Signal<bool>,
    on_delete: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let state = Signal::derive(move || selection.with(Selection::state));

    view! {
        {move || match state.get() {
            SelectionState::Idle => ().into_any(),
            SelectionState::SomeSelected(count) => view! {
                <div class="bulk-actions">
                    <span class="bulk-actions__count">{format!("{} sélectionné(s)", count)}</span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_clear.run(())
                        disabled=Signal::derive(move || busy.get())
                    >
                        "Désélectionner"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_delete.run(())
                        disabled=Signal::derive(move || busy.get())
                    >
                        {icon("trash")}
                        {move || if busy.get() { "Suppression...".to_string() } else { format!("Supprimer ({})", count) }}
                    </Button>
                </div>
            }
            .into_any(),
        }}
    }
}
