mod state;

use contracts::enums::user_kind::UserKind;
use contracts::system::users::{AdminUser, UserFlag};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::table::{SortableHeaders, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::{BulkActionsBar, ConfirmDialog, FilterPanel, PageHeader, StatusToggleButton};
use crate::shared::date_utils::format_optional_date;
use crate::shared::labels::{flag_action_label, flag_badge, flag_success_message};
use crate::shared::list_state::ListController;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::status_toggle::InFlightActions;
use crate::shared::toast::use_toasts;
use crate::system::users::api;
use state::{COLUMNS, DEFAULT_SORT, TOGGLE_FLAGS};

fn page_id(kind: UserKind) -> &'static str {
    match kind {
        UserKind::Client => "users_clients--system",
        UserKind::Professional => "users_professionals--system",
        UserKind::Reseller => "users_resellers--system",
    }
}

/// One list for every user kind; `kind` selects the endpoint.
#[component]
pub fn UsersList(kind: UserKind) -> impl IntoView {
    let ctrl = ListController::<AdminUser>::new(DEFAULT_SORT, COLUMNS);
    let toasts = use_toasts();
    let in_flight = RwSignal::new(InFlightActions::<UserFlag>::default());
    let confirm_open = RwSignal::new(false);

    let load_data = move || ctrl.load(api::fetch_users(kind));

    Effect::new(move |_| {
        if !ctrl.state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let toggle_flag = move |user_id: String, flag: UserFlag, current: bool| {
        let started = in_flight
            .try_update(|f| f.begin(&user_id, flag))
            .unwrap_or(false);
        if !started {
            return;
        }
        spawn_local(async move {
            let result = api::set_flag(&user_id, flag, !current).await;
            in_flight.update(|f| f.finish(&user_id, flag));
            match result {
                Ok(message) => {
                    toasts.success(message.unwrap_or_else(|| flag_success_message(flag, !current)));
                    load_data();
                }
                Err(e) => {
                    log::error!("PATCH /users/{}/{} failed: {}", user_id, flag.path_segment(), e);
                    toasts.error(e.user_message());
                }
            }
        });
    };

    let delete_selected = move || {
        ctrl.bulk_delete(
            kind.display_name(),
            |id| async move { api::delete_user(&id).await },
            load_data,
        )
    };

    let search_query = Signal::derive(move || ctrl.state.with(|s| s.search_query.clone()));
    let selection = Signal::derive(move || ctrl.selection.get());

    view! {
        <PageFrame page_id=page_id(kind) category=PAGE_CAT_SYSTEM>
            <PageHeader
                title=kind.display_name()
                count=Signal::derive(move || ctrl.total_count())
                loading=Signal::derive(move || ctrl.state.with(|s| s.is_loading))
                on_refresh=Callback::new(move |_| load_data())
            />

            <div class="page__content">
                {move || ctrl.state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel ctrl=ctrl placeholder="Nom, email, téléphone, « vérifié »..." />

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
                                <SortableHeaders ctrl=ctrl />
                                <TableHeaderCell resizable=false min_width=260.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctrl.page_rows()
                                key=|u| (u.row_id(), u.is_active, u.is_banned, u.is_verified, u.is_certified, u.is_recommended)
                                children=move |user: AdminUser| {
                                    let id = user.row_id();
                                    let name = user.full_name();
                                    let email = user.email.clone().unwrap_or_default();
                                    let phone = user.phone.clone().unwrap_or_default();
                                    let created = format_optional_date(user.created_at.as_deref());
                                    let badge = |flag: UserFlag| {
                                        let value = user.flag(flag);
                                        let class = if value { "badge badge--on" } else { "badge badge--off" };
                                        view! { <span class=class>{flag_badge(flag, value)}</span> }
                                    };
                                    let active_badge = badge(UserFlag::Active);
                                    let verified_badge = badge(UserFlag::Verified);
                                    let banned_badge = badge(UserFlag::Banned);
                                    let actions = TOGGLE_FLAGS
                                        .iter()
                                        .map(|&flag| {
                                            let current = user.flag(flag);
                                            let id_for_pending = id.clone();
                                            let id_for_click = id.clone();
                                            view! {
                                                <StatusToggleButton
                                                    label=Signal::derive(move || flag_action_label(flag, current).to_string())
                                                    pending=Signal::derive(move || in_flight.with(|f| f.is_pending(&id_for_pending, flag)))
                                                    on_click=Callback::new(move |_| toggle_flag(id_for_click.clone(), flag, current))
                                                    danger={flag == UserFlag::Banned && !current}
                                                />
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=id.clone()
                                                selection=selection
                                                on_change=Callback::new(move |(id, checked)| ctrl.toggle_selection(id, checked))
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&name, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&email, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{active_badge}</TableCell>
                                            <TableCell>{verified_badge}</TableCell>
                                            <TableCell>{banned_badge}</TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">{actions}</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || ctrl.state.with(|s| s.is_loaded) && ctrl.total_count() == 0>
                        <div class="table__empty">"Aucun utilisateur"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Supprimer les utilisateurs"
                message=Signal::derive(move || {
                    format!("Supprimer {} utilisateur(s) sélectionné(s) ?", ctrl.selection.with(|s| s.len()))
                })
                confirm_label="Supprimer"
                on_confirm=Callback::new(move |_| delete_selected())
                on_cancel=Callback::new(move |_| ctrl.clear_selection())
            />
        </PageFrame>
    }
}
