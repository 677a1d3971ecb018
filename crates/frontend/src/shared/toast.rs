//! Transient messages in the bottom-right corner.
//!
//! `ToastStore` is provided through context in `App`; pages raise toasts
//! from their own error handlers.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const MAX_VISIBLE: usize = 5;
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Ordered toasts, oldest first, capped at `MAX_VISIBLE`.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            text: text.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastStore {
    queue: RwSignal<ToastQueue>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn push(&self, kind: ToastKind, text: impl Into<String>) {
        let text = text.into();
        match kind {
            ToastKind::Error => log::warn!("toast: {}", text),
            _ => log::debug!("toast: {}", text),
        }
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text));
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastKind::Info, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastStore {
    expect_context::<ToastStore>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || store.queue.with(|q| q.items().to_vec())
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| store.dismiss(id)>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_caps_and_dismisses() {
        let mut q = ToastQueue::default();
        let first = q.push(ToastKind::Info, "1");
        for i in 2..=6 {
            q.push(ToastKind::Error, i.to_string());
        }
        assert_eq!(q.items().len(), MAX_VISIBLE);
        assert!(q.items().iter().all(|t| t.id != first));

        let last = q.items()[MAX_VISIBLE - 1].id;
        q.dismiss(last);
        assert_eq!(q.items().len(), MAX_VISIBLE - 1);
        q.dismiss(999);
        assert_eq!(q.items().len(), MAX_VISIBLE - 1);
    }
}
