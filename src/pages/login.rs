//! Login Page
//!
//! Email and password exchange for a token. Signed-in admins are sent
//! straight to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use list_manager::Notice;
use web_sys::SubmitEvent;

use crate::api::{login, login_error_text, login_toast_text};
use crate::components::TextField;
use crate::context::use_app_context;
use crate::session::Session;
use crate::store::{store_login, use_app_store, AppStateStoreFields};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let logged_in = move || store.session().with(|session| session.logged_in);

    view! {
        <Show when=move || !logged_in() fallback=|| view! { <Redirect path="/dashboard" /> }>
            <LoginForm />
        </Show>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
        if email_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let api = ctx.api(&Session::logged_out());
        let navigate = navigate.clone();
        spawn_local(async move {
            match login(&api, &email_value, &password_value).await {
                Ok(grant) => {
                    store_login(&store, Session::from(grant));
                    ctx.notify(Notice::success("Login Successful!"));
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    log::warn!("[Login] rejected: {}", err);
                    error.try_set(Some(login_error_text(&err)));
                    ctx.notify(Notice::error(login_toast_text(&err)));
                }
            }
            submitting.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h2>"Admin Login"</h2>
                {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
                <TextField
                    label="Email"
                    input_type="email"
                    value=email
                    on_input=Callback::new(move |value| email.set(value))
                    placeholder="Enter email"
                />
                <TextField
                    label="Password"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |value| password.set(value))
                    placeholder="Enter password"
                />
                <button type="submit" class="btn btn-primary btn-block" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
