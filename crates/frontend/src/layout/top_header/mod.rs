//! TopHeader: application top bar with the sidebar toggle and notifications.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationsBell;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || {
                        if is_sidebar_visible() { "Masquer la navigation" } else { "Afficher la navigation" }
                    }
                >
                    {icon("item")}
                </button>
                <span class="top-header__title">"Back-office Marketplace"</span>
            </div>
            <div class="top-header__actions">
                <NotificationsBell />
            </div>
        </div>
    }
}
