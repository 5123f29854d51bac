//! Modal Shell Component
//!
//! Backdrop, title bar and close button around a page's form content.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    /// Inline error shown above the body
    #[prop(into, optional)]
    error: Signal<Option<String>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal-panel" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>{move || title.get()}</h3>
                        <button class="modal-close" title="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
