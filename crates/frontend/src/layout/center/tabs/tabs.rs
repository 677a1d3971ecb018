use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::prelude::*;

/// Tab bar and the content of every opened tab (inactive ones are hidden, not unmounted).
#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || ctx.opened()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabComponent tab=tab /> }
                />
            </div>
            <div class="tab-content">
                <Show
                    when=move || ctx.tabs.with(|t| !t.opened.is_empty())
                    fallback=|| view! {
                        <div class="tab-content__empty">"Choisissez une rubrique dans le menu"</div>
                    }
                >
                    <For
                        each=move || ctx.opened()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=ctx /> }
                    />
                </Show>
            </div>
        </div>
    }
}
