//! Sidebar Component
//!
//! Navigation links for every guarded page plus the logout action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use list_manager::{ConfirmPrompt, Notice};

use crate::context::use_app_context;
use crate::store::{store_logout, use_app_store};

/// `(href, label)` for each sidebar entry
const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/daily-check-in", "Daily Check-In"),
    ("/daily-check-in-answer", "Daily Answers"),
    ("/daily-ratings", "Daily Ratings"),
    ("/weakly-check-in", "Weekly Check-In"),
    ("/weekly-answers", "Weekly Answers"),
    ("/partner-list", "Users"),
    ("/recommendations", "Recommendations"),
    ("/leaderboard", "Leaderboard"),
    ("/relationship-progress", "Relationship Progress"),
    ("/analytics", "Result Analytics"),
    ("/settings/profile", "Profile"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let prompt = ConfirmPrompt::new("Are you sure?", "You will be logged out!")
                .with_confirm_label("Yes, logout");
            if !ctx.dialog.ask(prompt).await {
                return;
            }
            store_logout(&store);
            ctx.notify(Notice::success("Logged out successfully"));
            navigate("/login", Default::default());
        });
    };

    view! {
        <nav class="sidebar">
            <ul class="sidebar-links">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <A href=*href attr:class="sidebar-link">
                                    {*label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="sidebar-logout" on:click=logout>
                "Logout"
            </button>
        </nav>
    }
}
