//! Coach Admin App
//!
//! Root component: shared services, the global store, routes and the
//! toast and confirm hosts.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{ConfirmHost, Shell, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    AnalyticsPage, DailyAnswersPage, DailyQuestionsPage, DashboardPage, LeaderboardPage, LoginPage, NotFound,
    PartnersPage, ProfilePage, RatingsPage, RecommendationsPage, RelationshipPage, WeeklyAnswersPage,
    WeeklyQuestionsPage,
};
use crate::store::{use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);
    provide_context(Store::new(AppState::new()));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/dashboard") view=|| view! { <Shell><DashboardPage /></Shell> } />
                <Route path=path!("/daily-check-in") view=|| view! { <Shell><DailyQuestionsPage /></Shell> } />
                <Route
                    path=path!("/daily-check-in-answer")
                    view=|| view! { <Shell><DailyAnswersPage /></Shell> }
                />
                <Route path=path!("/daily-ratings") view=|| view! { <Shell><RatingsPage /></Shell> } />
                <Route path=path!("/weakly-check-in") view=|| view! { <Shell><WeeklyQuestionsPage /></Shell> } />
                <Route path=path!("/weekly-answers") view=|| view! { <Shell><WeeklyAnswersPage /></Shell> } />
                <Route path=path!("/partner-list") view=|| view! { <Shell><PartnersPage /></Shell> } />
                <Route path=path!("/settings/profile") view=|| view! { <Shell><ProfilePage /></Shell> } />
                <Route path=path!("/recommendations") view=|| view! { <Shell><RecommendationsPage /></Shell> } />
                <Route path=path!("/leaderboard") view=|| view! { <Shell><LeaderboardPage /></Shell> } />
                <Route
                    path=path!("/relationship-progress")
                    view=|| view! { <Shell><RelationshipPage /></Shell> }
                />
                <Route path=path!("/analytics") view=|| view! { <Shell><AnalyticsPage /></Shell> } />
            </Routes>
        </Router>
        <ToastHost queue=ctx.toasts />
        <ConfirmHost dialog=ctx.dialog />
    }
}

/// `/` lands on the dashboard or the login form
#[component]
fn Home() -> impl IntoView {
    let store = use_app_store();
    move || {
        if store.session().with(|session| session.logged_in) {
            view! { <Redirect path="/dashboard" /> }
        } else {
            view! { <Redirect path="/login" /> }
        }
    }
}
