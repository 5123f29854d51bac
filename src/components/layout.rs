//! Guarded Layout
//!
//! Wraps every signed-in page in the header and sidebar. Without a
//! session the page is replaced by a redirect to `/login`.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::{Header, Sidebar};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();
    let logged_in = move || store.session().with(|session| session.logged_in);
    let layout_class = move || {
        if store.sidebar_visible().get() {
            "app-layout"
        } else {
            "app-layout sidebar-hidden"
        }
    };

    view! {
        <Show when=logged_in fallback=|| view! { <Redirect path="/login" /> }>
            <div class=layout_class>
                <Header />
                <div class="app-body">
                    <Show when=move || store.sidebar_visible().get()>
                        <Sidebar />
                    </Show>
                    <main class="app-content">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
