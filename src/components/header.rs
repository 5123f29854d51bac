//! Header Component
//!
//! Top bar with the sidebar toggle and the signed-in admin's name.

use leptos::prelude::*;

use crate::store::{store_toggle_sidebar, use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let name = move || store.session().with(|session| session.greeting_name().to_string());

    view! {
        <header class="app-header">
            <button
                class="sidebar-toggle"
                title="Toggle sidebar"
                on:click=move |_| store_toggle_sidebar(&store)
            >
                "☰"
            </button>
            <span class="app-title">"Marriage Coach Admin"</span>
            <span class="header-user">"Welcome, " {name}</span>
        </header>
    }
}
