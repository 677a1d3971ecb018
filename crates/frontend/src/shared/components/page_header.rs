use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Header of a list page: title, record count and a refresh button.
/// `children` go to the right, before the refresh button.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] loading: Signal<bool>,
    on_refresh: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge>{move || count.get().to_string()}</Badge>
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Chargement..." } else { " Actualiser" }}
                </Button>
            </div>
        </div>
    }
}
