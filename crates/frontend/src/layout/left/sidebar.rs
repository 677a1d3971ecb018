//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, icon)
    items: Vec<(&'static str, &'static str)>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "users",
            label: "Utilisateurs",
            icon: "users",
            items: vec![
                ("users_clients", "users"),
                ("users_professionals", "briefcase"),
                ("users_resellers", "store"),
            ],
        },
        MenuGroup {
            id: "marketplace",
            label: "Marketplace",
            icon: "shopping-bag",
            items: vec![
                ("auctions", "gavel"),
                ("tenders", "file-text"),
                ("direct_sales", "shopping-bag"),
                ("categories", "folder-open"),
            ],
        },
        MenuGroup {
            id: "content",
            label: "Contenu",
            icon: "megaphone",
            items: vec![("ads", "megaphone"), ("terms", "file-text")],
        },
        MenuGroup {
            id: "settings",
            label: "Administration",
            icon: "shield",
            items: vec![("roles", "shield")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let expanded_groups = RwSignal::new(vec!["users".to_string(), "marketplace".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let gid = group.id.to_string();
                    let gid_for_click = gid.clone();
                    let gid_for_chevron = gid.clone();
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = gid_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|g| g.contains(&gid_for_chevron))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=move || expanded_groups.with(|g| g.contains(&gid))>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .iter()
                                        .map(|&(key, icon_name)| {
                                            let label = tab_label_for_key(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || ctx.is_active(key)
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (key, _) in group.items {
                assert_ne!(tab_label_for_key(key), key, "missing label for {key}");
            }
        }
    }
}
