//! Admin notifications shown behind the bell of the top header.
//!
//! `NotificationsStore` lives in context; any page can push to it.

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::shared::icons::icon;

#[derive(Debug, Clone, PartialEq)]
pub struct AdminNotification {
    pub id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Newest first, bounded to `capacity` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationLog {
    items: Vec<AdminNotification>,
    next_id: u64,
    capacity: usize,
}

impl NotificationLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, text: impl Into<String>, at: DateTime<Utc>) -> u64 {
        self.next_id += 1;
        self.items.insert(
            0,
            AdminNotification {
                id: self.next_id,
                text: text.into(),
                created_at: at,
                read: false,
            },
        );
        self.items.truncate(self.capacity);
        self.next_id
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn items(&self) -> &[AdminNotification] {
        &self.items
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::with_capacity(50)
    }
}

#[derive(Clone, Copy)]
pub struct NotificationsStore {
    log: RwSignal<NotificationLog>,
}

impl NotificationsStore {
    pub fn new() -> Self {
        Self {
            log: RwSignal::new(NotificationLog::default()),
        }
    }

    pub fn push(&self, text: impl Into<String>) {
        let text = text.into();
        log::info!("notification: {}", text);
        self.log.update(|l| {
            l.push(text, Utc::now());
        });
    }

    pub fn unread_count(&self) -> usize {
        self.log.with(NotificationLog::unread_count)
    }

    pub fn mark_all_read(&self) {
        self.log.update(NotificationLog::mark_all_read);
    }

    pub fn items(&self) -> Vec<AdminNotification> {
        self.log.with(|l| l.items().to_vec())
    }
}

impl Default for NotificationsStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Bell button with unread badge and a dropdown list.
#[component]
pub fn NotificationsBell() -> impl IntoView {
    let store = expect_context::<NotificationsStore>();
    let open = RwSignal::new(false);

    let toggle = move |_| {
        let was_open = open.get_untracked();
        open.set(!was_open);
        if was_open {
            store.mark_all_read();
        }
    };

    view! {
        <div class="notifications">
            <button class="top-header__icon-btn" title="Notifications" on:click=toggle>
                {icon("bell")}
                <Show when=move || { store.unread_count() > 0 }>
                    <span class="notifications__badge">{move || store.unread_count().to_string()}</span>
                </Show>
            </button>
            <Show when=move || open.get()>
                <div class="notifications__dropdown">
                    <div class="notifications__header">
                        <span>"Notifications"</span>
                        <button class="notifications__mark" on:click=move |_| store.mark_all_read()>
                            "Tout marquer comme lu"
                        </button>
                    </div>
                    {move || {
                        let items = store.items();
                        if items.is_empty() {
                            view! { <div class="notifications__empty">"Aucune notification"</div> }
                                .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|n| {
                                    view! {
                                        <div
                                            class="notifications__item"
                                            class:notifications__item--unread=!n.read
                                        >
                                            <div>{n.text}</div>
                                            <small>{n.created_at.format("%d.%m.%Y %H:%M").to_string()}</small>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unread_and_mark_all_read() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut log = NotificationLog::with_capacity(2);
        log.push("Nouvelle enchère", at);
        log.push("Nouvel appel d'offres", at);
        log.push("Nouvel utilisateur", at);
        assert_eq!(log.items().len(), 2);
        assert_eq!(log.items()[0].text, "Nouvel utilisateur");
        assert_eq!(log.unread_count(), 2);
        log.mark_all_read();
        assert_eq!(log.unread_count(), 0);
    }
}
