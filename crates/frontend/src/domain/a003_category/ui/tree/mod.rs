use contracts::domain::a003_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_category::api;
use crate::domain::a003_category::tree::{
    count_nodes, filter_by_query, filter_by_view_mode, flatten_rows, parent_ids, TreeExpansion, TreeRow,
    ViewMode,
};
use crate::shared::components::{ConfirmDialog, PageHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_TREE;
use crate::shared::request_generation::RequestGeneration;
use crate::shared::toast::use_toasts;

#[derive(Debug, Clone, PartialEq)]
struct PendingDelete {
    id: String,
    name: String,
    with_descendants: bool,
    descendants: usize,
}

impl PendingDelete {
    fn message(&self) -> String {
        if self.with_descendants {
            format!(
                "Supprimer « {} » et ses {} sous-catégorie(s) ?",
                self.name, self.descendants
            )
        } else {
            format!("Supprimer la catégorie « {} » ?", self.name)
        }
    }
}

#[component]
pub fn CategoryTree() -> impl IntoView {
    let toasts = use_toasts();
    let nodes = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let generation = {
        let generation = RequestGeneration::new();
        let on_dispose = generation.clone();
        on_cleanup(move || on_dispose.invalidate());
        StoredValue::new(generation)
    };
    let view_mode = RwSignal::new(ViewMode::All);
    let query = RwSignal::new(String::new());
    let expansion = RwSignal::new(TreeExpansion::default());
    let pending = RwSignal::new(None::<PendingDelete>);
    let confirm_open = RwSignal::new(false);

    let load_data = move || {
        let ticket = generation.with_value(|g| g.begin());
        loading.set(true);
        spawn_local(async move {
            let result = api::fetch_tree().await;
            if !ticket.is_current() {
                log::debug!("dropping stale category tree (generation {})", ticket.generation());
                return;
            }
            loading.set(false);
            match result {
                Ok(tree) => {
                    error.set(None);
                    nodes.set(tree);
                }
                Err(e) => {
                    log::error!("GET /categories/tree failed: {}", e);
                    error.set(Some(e.user_message()));
                    toasts.error(e.user_message());
                }
            }
        });
    };

    Effect::new(move |_| load_data());

    let visible_tree = Memo::new(move |_| {
        let mode = view_mode.get();
        let q = query.get();
        nodes.with(|n| filter_by_query(&filter_by_view_mode(n, mode), &q))
    });

    // A filter reveals every survivor; without one the admin's own expansion applies.
    Effect::new(move |_| {
        let filtering = view_mode.get() != ViewMode::All || !query.with(|q| q.trim().is_empty());
        let revealed = filtering.then(|| visible_tree.with(|t| parent_ids(t)));
        expansion.update(|e| e.set_filter(revealed));
    });

    let rows = Memo::new(move |_| visible_tree.with(|t| expansion.with(|e| flatten_rows(t, e.active()))));

    let toggle = move |id: String| expansion.update(|e| e.toggle(&id));

    let ask_delete = move |row: &TreeRow, with_descendants: bool| {
        pending.set(Some(PendingDelete {
            id: row.id.clone(),
            name: row.name.clone(),
            with_descendants,
            descendants: row.descendants,
        }));
        confirm_open.set(true);
    };

    let confirm_delete = move || {
        let Some(target) = pending.get_untracked() else {
            return;
        };
        pending.set(None);
        spawn_local(async move {
            match api::delete_category(&target.id, target.with_descendants).await {
                Ok(message) => {
                    toasts.success(message.unwrap_or_else(|| format!("Catégorie « {} » supprimée", target.name)));
                    load_data();
                }
                Err(e) => {
                    log::error!("DELETE /categories/{} failed: {}", target.id, e);
                    toasts.error(e.user_message());
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a003_category--tree" category=PAGE_CAT_TREE>
            <PageHeader
                title="Catégories"
                count=Signal::derive(move || nodes.with(|n| count_nodes(n)))
                loading=loading
                on_refresh=Callback::new(move |_| load_data())
            >
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        let ids = visible_tree.with(|t| parent_ids(t));
                        expansion.update(|e| e.expand_all(ids));
                    }
                >
                    "Tout déplier"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| expansion.update(TreeExpansion::collapse_all)>
                    "Tout replier"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <select
                                class="search-field-select"
                                title="Type"
                                on:change=move |ev| view_mode.set(ViewMode::from_code(&event_target_value(&ev)))
                            >
                                {ViewMode::all()
                                    .into_iter()
                                    .map(|m| view! { <option value=m.code()>{m.label()}</option> })
                                    .collect_view()}
                            </select>
                            <SearchInput
                                value=Signal::derive(move || query.get())
                                on_change=Callback::new(move |q: String| query.set(q))
                                placeholder="Nom de catégorie..."
                            />
                            <span class="filter-panel__count">
                                {move || format!("{} affichée(s)", visible_tree.with(|t| count_nodes(t)))}
                            </span>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=320.0>"Nom"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Type"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Sous-catégories"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|r| (r.id.clone(), r.depth, r.descendants)
                                children=move |row: TreeRow| {
                                    let id = row.id.clone();
                                    let id_for_chevron = row.id.clone();
                                    let name = row.name.clone();
                                    let indent = format!("padding-left: {}px;", row.depth * 20);
                                    let row_for_delete = row.clone();
                                    let row_for_subtree = row.clone();
                                    let has_children = row.has_children;
                                    let descendants = row.descendants;
                                    let type_class = format!("badge badge--{}", row.category_type.code());
                                    let type_label = row.category_type.display_name();
                                    let expander = if has_children {
                                        view! {
                                            <button
                                                class="button button--icon tree__expander"
                                                on:click=move |_| toggle(id.clone())
                                            >
                                                {move || {
                                                    if expansion.with(|e| e.is_expanded(&id_for_chevron)) {
                                                        icon("folder-open")
                                                    } else {
                                                        icon("folder-closed")
                                                    }
                                                }}
                                            </button>
                                        }
                                        .into_any()
                                    } else {
                                        view! { <span class="tree__leaf">{icon("item")}</span> }.into_any()
                                    };
                                    let thumb = row.thumb.map(|src| view! { <img class="tree__thumb" src=src alt="" /> });
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <div class="tree__cell" style=indent>
                                                    {expander}
                                                    {thumb}
                                                    <span>{move || highlight_matches(&name, &query.get())}</span>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                <span class=type_class>{type_label}</span>
                                            </TableCell>
                                            <TableCell class="text-right">{descendants}</TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| ask_delete(&row_for_delete, false)
                                                    >
                                                        {icon("trash")}
                                                        " Supprimer"
                                                    </Button>
                                                    <Show when=move || has_children>
                                                        {
                                                            let row = row_for_subtree.clone();
                                                            view! {
                                                                <Button
                                                                    size=ButtonSize::Small
                                                                    appearance=ButtonAppearance::Secondary
                                                                    class="status-toggle--danger"
                                                                    on_click=move |_| ask_delete(&row, true)
                                                                >
                                                                    "Avec descendants"
                                                                </Button>
                                                            }
                                                        }
                                                    </Show>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && rows.with(|r| r.is_empty())>
                        <div class="table__empty">"Aucune catégorie"</div>
                    </Show>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Supprimer une catégorie"
                message=Signal::derive(move || pending.with(|p| p.as_ref().map(PendingDelete::message).unwrap_or_default()))
                confirm_label="Supprimer"
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| pending.set(None))
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_message_mentions_descendants() {
        let target = PendingDelete {
            id: "1".into(),
            name: "Agriculture".into(),
            with_descendants: true,
            descendants: 4,
        };
        assert_eq!(
            target.message(),
            "Supprimer « Agriculture » et ses 4 sous-catégorie(s) ?"
        );
        let single = PendingDelete {
            with_descendants: false,
            ..target
        };
        assert_eq!(single.message(), "Supprimer la catégorie « Agriculture » ?");
    }
}
