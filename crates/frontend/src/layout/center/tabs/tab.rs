use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// Header of one opened tab
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| key.with_value(|k| ctx.is_active(k)));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| ctx.close_tab(k));
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| key.with_value(|k| ctx.activate_tab(k))
        >
            <span>{tab.title}</span>
            <button class="tab-close" title="Fermer" on:click=on_close>"×"</button>
        </div>
    }
}
