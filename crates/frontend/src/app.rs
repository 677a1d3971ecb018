use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::notifications::NotificationsStore;
use crate::layout::Shell;
use crate::shared::toast::{ToastHost, ToastStore};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(ToastStore::new());
    provide_context(NotificationsStore::new());

    // Restores the tab from `?active=` before the first render.
    ctx.init_url_sync();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
        <ToastHost />
    }
}
