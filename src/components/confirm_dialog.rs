//! Confirm Dialog Component
//!
//! Blocking-style confirmation: `DialogConfirm::confirm` shows the dialog
//! and resolves once the user picks an answer. Opening a new prompt while
//! one is pending answers the old one with "no".

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;
use list_manager::{Confirm, ConfirmPrompt};

#[derive(Clone, Copy)]
pub struct ConfirmDialog {
    prompt: RwSignal<Option<ConfirmPrompt>>,
    pending: StoredValue<Option<oneshot::Sender<bool>>>,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(None),
            pending: StoredValue::new(None),
        }
    }

    pub async fn ask(&self, prompt: ConfirmPrompt) -> bool {
        let (tx, rx) = oneshot::channel();
        let previous = self.pending.try_update_value(|pending| pending.replace(tx)).flatten();
        if let Some(previous) = previous {
            previous.send(false).ok();
        }
        self.prompt.set(Some(prompt));
        // A dropped sender means the dialog went away unanswered
        rx.await.unwrap_or(false)
    }

    pub fn answer(&self, confirmed: bool) {
        if let Some(tx) = self.pending.try_update_value(Option::take).flatten() {
            tx.send(confirmed).ok();
        }
        self.prompt.try_set(None);
    }
}

/// `Confirm` port backed by the dialog host
pub struct DialogConfirm(pub ConfirmDialog);

#[async_trait(?Send)]
impl Confirm for DialogConfirm {
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        self.0.ask(prompt).await
    }
}

#[component]
pub fn ConfirmHost(dialog: ConfirmDialog) -> impl IntoView {
    let prompt = dialog.prompt;

    view! {
        <Show when=move || prompt.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| dialog.answer(false)>
                <div class="confirm-dialog" role="alertdialog" on:click=|ev| ev.stop_propagation()>
                    <div class="confirm-icon">"!"</div>
                    <h3>{move || prompt.with(|p| p.as_ref().map(|p| p.title.clone()))}</h3>
                    <p>{move || prompt.with(|p| p.as_ref().map(|p| p.text.clone()))}</p>
                    <div class="confirm-actions">
                        <button class="btn btn-danger" on:click=move |_| dialog.answer(true)>
                            {move || prompt.with(|p| p.as_ref().map(|p| p.confirm_label.clone()))}
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| dialog.answer(false)>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
