use leptos::prelude::*;
use thaw::*;

use crate::shared::status_toggle::PENDING_LABEL;

/// Button of a single-record action. Shows `...` and is disabled while `pending`.
#[component]
pub fn StatusToggleButton(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] pending: Signal<bool>,
    on_click: Callback<()>,
    #[prop(optional)] danger: bool,
) -> impl IntoView {
    let class = if danger {
        "status-toggle status-toggle--danger"
    } else {
        "status-toggle"
    };

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Secondary
            class=class
            disabled=Signal::derive(move || pending.get())
            on_click=move |_| {
                if !pending.get_untracked() {
                    on_click.run(());
                }
            }
        >
            {move || if pending.get() { PENDING_LABEL.to_string() } else { label.get() }}
        </Button>
    }
}
