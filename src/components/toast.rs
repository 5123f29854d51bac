//! Toast Notifications
//!
//! Transient outcome messages stacked in the top-right corner. Each toast
//! dismisses itself after the configured timeout or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use list_manager::{Notice, Notifier, Tone};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub tone: Tone,
    pub message: String,
}

/// Shared queue of visible toasts
#[derive(Clone, Copy)]
pub struct ToastQueue {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl ToastQueue {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            timeout_ms,
        }
    }

    pub fn push(&self, notice: Notice) {
        let Some(id) = self.next_id.try_update_value(|next| {
            *next += 1;
            *next
        }) else {
            return;
        };
        match notice.tone {
            Tone::Error => log::warn!("[Toast] {}", notice.message),
            _ => log::debug!("[Toast] {}", notice.message),
        }
        self.items.update(|items| {
            items.push(Toast { id, tone: notice.tone, message: notice.message });
        });

        let queue = *self;
        spawn_local(async move {
            TimeoutFuture::new(queue.timeout_ms).await;
            queue.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|toast| toast.id != id));
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.get()
    }
}

/// `Notifier` port backed by the toast queue
pub struct ToastNotifier(pub ToastQueue);

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        self.0.push(notice);
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "toast toast-success",
        Tone::Info => "toast toast-info",
        Tone::Warning => "toast toast-warning",
        Tone::Error => "toast toast-error",
    }
}

#[component]
pub fn ToastHost(queue: ToastQueue) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || queue.items()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=tone_class(toast.tone) on:click=move |_| queue.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
