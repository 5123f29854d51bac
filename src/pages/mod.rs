//! Pages
//!
//! One component per route. List pages bind a `ListSource` through
//! `use_list`; the rest fetch a single record on mount.

mod analytics;
mod daily_answers;
mod daily_questions;
mod dashboard;
mod leaderboard;
mod login;
mod not_found;
mod partners;
mod profile;
mod ratings;
mod recommendations;
mod relationship;
mod weekly_answers;
mod weekly_questions;

pub use analytics::AnalyticsPage;
pub use daily_answers::DailyAnswersPage;
pub use daily_questions::DailyQuestionsPage;
pub use dashboard::DashboardPage;
pub use leaderboard::LeaderboardPage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use partners::PartnersPage;
pub use profile::ProfilePage;
pub use ratings::RatingsPage;
pub use recommendations::RecommendationsPage;
pub use relationship::RelationshipPage;
pub use weekly_answers::WeeklyAnswersPage;
pub use weekly_questions::WeeklyQuestionsPage;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_manager::{capitalize, ListResult, ModalMode, Notice};

use crate::api::ApiClient;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Client for the signed-in session and the acting user id
fn session_api() -> (ApiClient, Option<u64>) {
    let ctx = use_app_context();
    let session = use_app_store().session().get_untracked();
    (ctx.api(&session), session.user_id)
}

/// Single-record page data: `None` while loading, the error text on failure
type Loaded<T> = Option<Result<T, String>>;

/// Run `fetch` once on mount; failures are logged and toasted
fn load_on_mount<T, F, Fut>(what: &'static str, fetch: F) -> RwSignal<Loaded<T>>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ListResult<T>> + 'static,
{
    let ctx = use_app_context();
    let data = RwSignal::new(None);
    Effect::new(move |_| {
        let pending = fetch();
        spawn_local(async move {
            let loaded = match pending.await {
                Ok(value) => Ok(value),
                Err(err) => {
                    log::error!("[Pages] loading {} failed: {}", what, err);
                    let message = err.user_message(&format!("Something went wrong while loading {}", what));
                    ctx.notify(Notice::error(message.clone()));
                    Err(message)
                }
            };
            data.try_set(Some(loaded));
        });
    });
    data
}

/// Modal heading for a record noun such as "question"
fn modal_title(mode: Option<ModalMode>, noun: &str) -> String {
    let noun = capitalize(noun);
    match mode {
        Some(ModalMode::Create) => format!("Add {}", noun),
        Some(ModalMode::Edit) => format!("Edit {}", noun),
        Some(ModalMode::View) | None => format!("{} Details", noun),
    }
}

/// Submit button text, switching while a save is in flight
fn submit_label(busy: bool, mode: Option<ModalMode>) -> &'static str {
    match (busy, mode) {
        (true, _) => "Saving...",
        (false, Some(ModalMode::Create)) => "Create",
        (false, _) => "Update",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_title() {
        assert_eq!(modal_title(Some(ModalMode::Create), "question"), "Add Question");
        assert_eq!(modal_title(Some(ModalMode::Edit), "user"), "Edit User");
        assert_eq!(modal_title(Some(ModalMode::View), "answer"), "Answer Details");
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(true, Some(ModalMode::Create)), "Saving...");
        assert_eq!(submit_label(false, Some(ModalMode::Create)), "Create");
        assert_eq!(submit_label(false, Some(ModalMode::Edit)), "Update");
    }
}
