//! Profile Settings Page
//!
//! The signed-in admin's own profile: fetched by user id, edited in a
//! plain form and saved as multipart with an optional new photo.

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_manager::{Attachment, FieldValue, FormFields, Notice};
use web_sys::SubmitEvent;

use super::session_api;
use crate::api::{fetch_profile, profile_form, update_profile, with_photo};
use crate::components::{FileField, TextArea, TextField};
use crate::context::use_app_context;
use crate::format::image_url;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let (api, user_id) = session_api();
    let api = StoredValue::new(api);

    let fields = RwSignal::new(FormFields::new());
    let image = RwSignal::new(None::<String>);
    let photo = RwSignal::new(None::<Attachment>);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Load on mount
    Effect::new(move |_| {
        let api = api.get_value();
        spawn_local(async move {
            match fetch_profile(&api, user_id).await {
                Ok(profile) => {
                    fields.try_set(profile_form(&profile));
                    image.try_set(profile.image.clone());
                }
                Err(err) => {
                    log::error!("[Profile] load failed: {}", err);
                    let message = err.user_message("Something went wrong while loading profile");
                    error.try_set(Some(message.clone()));
                    ctx.notify(Notice::error(message));
                }
            }
            loading.try_set(false);
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        error.set(None);
        let api = api.get_value();
        let staged = with_photo(fields.get_untracked(), photo.get_untracked().map(FieldValue::File));
        spawn_local(async move {
            match update_profile(&api, user_id, &staged).await {
                Ok(saved) => {
                    if saved.image.is_some() {
                        image.try_set(saved.image);
                    }
                    photo.try_set(None);
                    fields.try_update(|f| {
                        f.set_text("password", "");
                    });
                    let message = saved.ack.message.unwrap_or_else(|| "Profile updated successfully".to_string());
                    ctx.notify(Notice::success(message));
                }
                Err(err) => {
                    log::error!("[Profile] save failed: {}", err);
                    let message = err.user_message("Something went wrong while saving");
                    error.try_set(Some(message.clone()));
                    ctx.notify(Notice::error(message));
                }
            }
            saving.try_set(false);
        });
    };

    let text = move |name: &'static str| Signal::derive(move || fields.with(|f| f.text(name).to_string()));
    let input = move |name: &'static str| {
        Callback::new(move |value: String| fields.update(|f| f.set_text(name, value)))
    };
    let avatar = move || image_url(image.get().as_deref(), &ctx.asset_base());

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Profile"</h2>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <form class="profile-form grid-2" on:submit=on_submit>
                    <div class="profile-photo">
                        <img class="avatar avatar-lg" src=avatar alt="Profile photo" />
                        <FileField label="Change Photo" on_file=Callback::new(move |file| photo.set(file)) />
                    </div>
                    {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
                    <TextField label="Name" value=text("first_name") on_input=input("first_name") />
                    <TextField label="Partner Name" value=text("my_partner_name") on_input=input("my_partner_name") />
                    <TextField label="Mobile" value=text("mobile") on_input=input("mobile") />
                    <TextField
                        label="Partner Mobile"
                        value=text("my_partner_mobile")
                        on_input=input("my_partner_mobile")
                    />
                    <TextField label="Email" input_type="email" value=text("email") on_input=input("email") />
                    <TextArea label="Address" value=text("address") on_input=input("address") />
                    <TextField
                        label="New Password"
                        input_type="password"
                        value=text("password")
                        on_input=input("password")
                        placeholder="Leave blank to keep"
                    />
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" prop:disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
