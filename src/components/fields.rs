//! Form Field Components
//!
//! Labelled inputs bound to a staged value and an input callback.

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_manager::Attachment;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, default = "text".to_string())] input_type: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                class="form-input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = 3)] rows: u32,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                class="form-input"
                rows=rows
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// `options` are `(value, label)` pairs
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    options: &'static [(&'static str, &'static str)],
    #[prop(into, optional)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select
                class="form-input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .iter()
                    .map(|(option, text)| {
                        view! {
                            <option value=*option selected=move || value.get() == *option>
                                {*text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Reads the first selected file into memory; clearing the picker
/// reports `None`.
#[component]
pub fn FileField(
    #[prop(into)] label: String,
    #[prop(into)] on_file: Callback<Option<Attachment>>,
    #[prop(into, default = "image/*".to_string())] accept: String,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            on_file.run(None);
            return;
        };
        spawn_local(async move {
            match read_file(&file).await {
                Ok(attachment) => on_file.run(Some(attachment)),
                Err(err) => {
                    log::error!("[FileField] could not read {}: {:?}", file.name(), err);
                    on_file.run(None);
                }
            }
        });
    };

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input class="form-input" type="file" accept=accept on:change=on_change />
        </label>
    }
}

async fn read_file(file: &web_sys::File) -> Result<Attachment, wasm_bindgen::JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(Attachment {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
