mod state;

use contracts::domain::a006_terms::aggregate::{TermsDocument, TermsDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_terms::api;
use crate::domain::a006_terms::ui::details::TermsForm;
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
use state::{excerpt, COLUMNS, DEFAULT_SORT};

const TOGGLE_ACTIVE: &str = "active";

#[derive(Debug, Clone, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(TermsDocument),
}

#[component]
pub fn TermsList() -> impl IntoView {
    let ctrl = ListController::<TermsDocument>::new(DEFAULT_SORT, COLUMNS);
    let toasts = use_toasts();
    let in_flight = RwSignal::new(InFlightActions::<&'static str>::default());
    let editor = RwSignal::new(Editor::Closed);
    let confirm_open = RwSignal::new(false);

    let load_data = move || ctrl.load(api::fetch_terms());

    Effect::new(move |_| {
        if !ctrl.state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let toggle_active = move |doc: TermsDocument| {
        let started = in_flight
            .try_update(|f| f.begin(&doc.id, TOGGLE_ACTIVE))
            .unwrap_or(false);
        if !started {
            return;
        }
        let draft = TermsDraft {
            is_active: !doc.is_active,
            ..TermsDraft::from_document(&doc)
        };
        spawn_local(async move {
            let result = api::save_terms(Some(&doc.id), &draft, None).await;
            in_flight.update(|f| f.finish(&doc.id, TOGGLE_ACTIVE));
            match result {
                Ok(message) => {
                    let fallback = if draft.is_active { "Conditions mises en vigueur" } else { "Conditions retirées" };
                    toasts.success(message.unwrap_or_else(|| fallback.to_string()));
                    load_data();
                }
                Err(e) => {
                    log::error!("PATCH /terms/{} failed: {}", doc.id, e);
                    toasts.error(e.user_message());
                }
            }
        });
    };

    let delete_selected = move || {
        ctrl.bulk_delete(
            "Conditions d'utilisation",
            |id| async move { api::delete_terms(&id).await },
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
        <PageFrame page_id="a006_terms--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Conditions d'utilisation"
                count=Signal::derive(move || ctrl.total_count())
                loading=Signal::derive(move || ctrl.state.with(|s| s.is_loading))
                on_refresh=Callback::new(move |_| load_data())
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Editor::New)>
                    {icon("plus")}
                    " Nouvelle version"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || ctrl.state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel ctrl=ctrl placeholder="Titre, version, « oui »..." />

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
                                <TableHeaderCell resizable=false min_width=260.0>"Contenu"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctrl.page_rows()
                                key=|d| (d.id.clone(), d.is_active, d.version.clone(), d.title.clone())
                                children=move |doc: TermsDocument| {
                                    let id_for_pending = doc.id.clone();
                                    let title = doc.title.clone();
                                    let version = doc.version.clone().unwrap_or_else(|| "—".into());
                                    let status = if doc.is_active {
                                        view! { <span class="badge badge--on">"Oui"</span> }.into_any()
                                    } else {
                                        view! { <span class="badge badge--off">"Non"</span> }.into_any()
                                    };
                                    let created = format_optional_date(doc.created_at.as_deref());
                                    let summary = excerpt(&doc, 80);
                                    let file_link = doc.file_url.as_deref().map(|url| {
                                        view! {
                                            <a class="table__link" href=asset_url(url) target="_blank">
                                                {icon("file-text")}
                                            </a>
                                        }
                                    });
                                    let toggle_label = if doc.is_active { "Retirer" } else { "Mettre en vigueur" };
                                    let doc_for_toggle = doc.clone();
                                    let doc_for_edit = doc.clone();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=doc.id
                                                selection=selection
                                                on_change=Callback::new(move |(id, checked)| ctrl.toggle_selection(id, checked))
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&title, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || highlight_matches(&version, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{status}</TableCell>
                                            <TableCell>{created}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{summary}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    {file_link}
                                                    <StatusToggleButton
                                                        label=Signal::derive(move || toggle_label.to_string())
                                                        pending=Signal::derive(move || {
                                                            in_flight.with(|f| f.is_pending(&id_for_pending, TOGGLE_ACTIVE))
                                                        })
                                                        on_click=Callback::new(move |_| toggle_active(doc_for_toggle.clone()))
                                                    />
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| editor.set(Editor::Edit(doc_for_edit.clone()))
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
                        <div class="table__empty">"Aucun document"</div>
                    </Show>
                </div>
            </div>

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::New => view! { <TermsForm doc=None on_saved=on_saved on_close=on_close /> }.into_any(),
                Editor::Edit(doc) => view! { <TermsForm doc=Some(doc) on_saved=on_saved on_close=on_close /> }.into_any(),
            }}

            <ConfirmDialog
                open=confirm_open
                title="Supprimer les documents"
                message=Signal::derive(move || {
                    format!("Supprimer {} document(s) sélectionné(s) ?", ctrl.selection.with(|s| s.len()))
                })
                confirm_label="Supprimer"
                on_confirm=Callback::new(move |_| delete_selected())
                on_cancel=Callback::new(move |_| ctrl.clear_selection())
            />
        </PageFrame>
    }
}
