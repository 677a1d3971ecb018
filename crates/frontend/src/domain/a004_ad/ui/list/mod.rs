mod state;

use chrono::Utc;
use contracts::domain::a004_ad::aggregate::{Ad, AdDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_ad::api;
use crate::domain::a004_ad::ui::details::AdForm;
use crate::shared::api_utils::asset_url;
use crate::shared::components::table::{SortableHeaders, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::{BulkActionsBar, ConfirmDialog, FilterPanel, PageHeader, StatusToggleButton};
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::status_toggle::InFlightActions;
use crate::shared::toast::use_toasts;
use state::{duration_label, expiry_state, ExpiryState, COLUMNS, DEFAULT_SORT};

const TOGGLE_ACTIVE: &str = "active";

#[derive(Debug, Clone, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(Ad),
}

#[component]
pub fn AdsList() -> impl IntoView {
    let ctrl = ListController::<Ad>::new(DEFAULT_SORT, COLUMNS);
    let toasts = use_toasts();
    let in_flight = RwSignal::new(InFlightActions::<&'static str>::default());
    let editor = RwSignal::new(Editor::Closed);
    let confirm_open = RwSignal::new(false);

    let load_data = move || ctrl.load(api::fetch_ads());

    Effect::new(move |_| {
        if !ctrl.state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let toggle_active = move |ad: Ad| {
        let started = in_flight
            .try_update(|f| f.begin(&ad.id, TOGGLE_ACTIVE))
            .unwrap_or(false);
        if !started {
            return;
        }
        let draft = AdDraft {
            is_active: !ad.is_active,
            ..AdDraft::from_ad(&ad)
        };
        spawn_local(async move {
            let result = api::save_ad(Some(&ad.id), &draft, None).await;
            in_flight.update(|f| f.finish(&ad.id, TOGGLE_ACTIVE));
            match result {
                Ok(message) => {
                    let fallback = if draft.is_active { "Publicité activée" } else { "Publicité désactivée" };
                    toasts.success(message.unwrap_or_else(|| fallback.to_string()));
                    load_data();
                }
                Err(e) => {
                    log::error!("PUT /ads/{} failed: {}", ad.id, e);
                    toasts.error(e.user_message());
                }
            }
        });
    };

    let delete_selected = move || {
        ctrl.bulk_delete(
            "Publicités",
            |id| async move { api::delete_ad(&id).await },
            load_data,
        )
    };

    let on_saved = Callback::new(move |_| {
        editor.set(Editor::Closed);
        load_data();
    });
    let on_close = Callback::new(move |_| editor.set(Editor::Closed));

    let search_query = Signal::derive(move || ctrl.state.with(|s| s.search_query.clone()));
    let selection = Signal::derive(move || ctrl.selection.get());

    view! {
        <PageFrame page_id="a004_ad--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Publicités"
                count=Signal::derive(move || ctrl.total_count())
                loading=Signal::derive(move || ctrl.state.with(|s| s.is_loading))
                on_refresh=Callback::new(move |_| load_data())
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Editor::New)>
                    {icon("plus")}
                    " Nouvelle publicité"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || ctrl.state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel ctrl=ctrl placeholder="Titre, lien, « actif »..." />

                <BulkActionsBar
                    selection=selection
                    busy=ctrl.bulk_busy
                    on_delete=Callback::new(move |_| confirm_open.set(true))
                    on_clear=Callback::new(move |_| ctrl.clear_selection())
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    visible_ids=Signal::derive(move || ctrl.visible_ids())
                                    selection=selection
                                    on_change=Callback::new(move |checked| ctrl.toggle_all(checked))
                                />
                                <TableHeaderCell resizable=false min_width=80.0>"Image"</TableHeaderCell>
                                <SortableHeaders ctrl=ctrl />
                                <TableHeaderCell resizable=false min_width=200.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctrl.page_rows()
                                key=|a| (a.id.clone(), a.is_active, a.duration, a.title.clone())
                                children=move |ad: Ad| {
                                    let id = ad.id.clone();
                                    let id_for_pending = ad.id.clone();
                                    let title = ad.title.clone();
                                    let link = ad.link.clone().unwrap_or_default();
                                    let thumb = ad.image.as_deref().map(|src| {
                                        view! { <img class="table__thumb" src=asset_url(src) alt="" /> }
                                    });
                                    let status = if ad.is_active {
                                        view! { <span class="badge badge--on">"Active"</span> }.into_any()
                                    } else {
                                        view! { <span class="badge badge--off">"Inactive"</span> }.into_any()
                                    };
                                    let expiry = match expiry_state(&ad, Utc::now()) {
                                        ExpiryState::Unknown => view! { <span>"—"</span> }.into_any(),
                                        ExpiryState::Running(at) => view! { <span>{at}</span> }.into_any(),
                                        ExpiryState::Expired(at) => view! {
                                            <span class="badge badge--expired" title="Expirée">{at}</span>
                                        }
                                        .into_any(),
                                    };
                                    let duration = duration_label(&ad);
                                    let created = format_optional_date(ad.created_at.as_deref());
                                    let toggle_label = if ad.is_active { "Désactiver" } else { "Activer" };
                                    let ad_for_toggle = ad.clone();
                                    let ad_for_edit = ad.clone();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=id
                                                selection=selection
                                                on_change=Callback::new(move |(id, checked)| ctrl.toggle_selection(id, checked))
                                            />
                                            <TableCell>{thumb}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&title, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&link, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{duration}</TableCell>
                                            <TableCell>{status}</TableCell>
                                            <TableCell>{created}</TableCell>
                                            <TableCell>{expiry}</TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <StatusToggleButton
                                                        label=Signal::derive(move || toggle_label.to_string())
                                                        pending=Signal::derive(move || {
                                                            in_flight.with(|f| f.is_pending(&id_for_pending, TOGGLE_ACTIVE))
                                                        })
                                                        on_click=Callback::new(move |_| toggle_active(ad_for_toggle.clone()))
                                                    />
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| editor.set(Editor::Edit(ad_for_edit.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || ctrl.state.with(|s| s.is_loaded) && ctrl.total_count() == 0>
                        <div class="table__empty">"Aucune publicité"</div>
                    </Show>
                </div>
            </div>

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::New => view! { <AdForm ad=None on_saved=on_saved on_close=on_close /> }.into_any(),
                Editor::Edit(ad) => view! { <AdForm ad=Some(ad) on_saved=on_saved on_close=on_close /> }.into_any(),
            }}

            <ConfirmDialog
                open=confirm_open
                title="Supprimer les publicités"
                message=Signal::derive(move || {
                    format!("Supprimer {} publicité(s) sélectionnée(s) ?", ctrl.selection.with(|s| s.len()))
                })
                confirm_label="Supprimer"
                on_confirm=Callback::new(move |_| delete_selected())
                on_cancel=Callback::new(move |_| ctrl.clear_selection())
            />
        </PageFrame>
    }
}
