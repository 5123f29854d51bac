//! Leaderboard Page

use leptos::prelude::*;

use super::{load_on_mount, session_api};
use crate::api::fetch_leaderboard;
use crate::models::LeaderboardStats;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let (api, _) = session_api();
    let stats = load_on_mount("leaderboard", move || {
        let api = api.clone();
        async move { fetch_leaderboard(&api).await }
    });

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Leaderboard"</h2>
            </div>
            {move || match stats.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(Err(message)) => view! { <p class="form-error">{message}</p> }.into_any(),
                Some(Ok(stats)) => view! { <LeaderboardView stats=stats /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn LeaderboardView(stats: LeaderboardStats) -> impl IntoView {
    let cards = [
        ("Your Score", stats.user_score),
        ("Level", stats.level),
        ("Streak Days", stats.streak_days),
        ("Regional Avg", stats.regional_avg),
        ("Top 10 Avg", stats.top_10_avg),
    ];
    let empty = stats.leaderboard.is_empty();

    view! {
        <div class="stat-cards">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stat-card">
                            <span class="stat-label">{label}</span>
                            <span class="stat-value">{value}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Rank"</th>
                    <th>"Name"</th>
                    <th>"Score"</th>
                </tr>
            </thead>
            <tbody>
                {empty
                    .then(|| {
                        view! {
                            <tr class="placeholder-row">
                                <td colspan=3>"No records found"</td>
                            </tr>
                        }
                    })}
                {stats
                    .leaderboard
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! {
                            <tr>
                                <td>{index + 1}</td>
                                <td>{entry.name}</td>
                                <td>{entry.score}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
