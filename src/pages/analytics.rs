//! Result Analytics Page
//!
//! Score datasets rendered as horizontal bars scaled to each series' peak.

use leptos::prelude::*;

use super::{load_on_mount, session_api};
use crate::api::fetch_analytics;
use crate::format::{bar_width, parse_percent};
use crate::models::AnalyticsReport;

/// Largest value of a series, never below zero
fn series_peak(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().filter(|v| v.is_finite()).fold(0.0, f64::max)
}

/// `(label, value)` rows plus the peak they are scaled against
fn report_series(report: &AnalyticsReport) -> [(&'static str, Vec<(String, f64)>, f64); 4] {
    let overall = vec![("Overall".to_string(), report.overall_score())];
    let trends: Vec<_> = report.trends.iter().map(|t| (t.date.clone(), t.score)).collect();
    let progress: Vec<_> = report
        .progress_reports
        .iter()
        .map(|p| (p.category.clone(), p.value))
        .collect();
    let week = vec![
        ("Communication".to_string(), parse_percent(&report.week_vs_last_week.communication)),
        ("Trust".to_string(), parse_percent(&report.week_vs_last_week.trust)),
    ];

    [
        ("Overall Score", overall, 100.0),
        ("Score Trends", trends.clone(), series_peak(trends.iter().map(|(_, v)| *v))),
        ("Progress Reports", progress.clone(), series_peak(progress.iter().map(|(_, v)| *v))),
        ("This Week vs Last Week", week.clone(), series_peak(week.iter().map(|(_, v)| v.abs()))),
    ]
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let (api, _) = session_api();
    let report = load_on_mount("analytics", move || {
        let api = api.clone();
        async move { fetch_analytics(&api).await }
    });

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Result Analytics"</h2>
            </div>
            {move || match report.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(Err(message)) => view! { <p class="form-error">{message}</p> }.into_any(),
                Some(Ok(report)) => {
                    report_series(&report)
                        .into_iter()
                        .map(|(title, rows, peak)| view! { <BarChart title=title rows=rows peak=peak /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn BarChart(title: &'static str, rows: Vec<(String, f64)>, peak: f64) -> impl IntoView {
    view! {
        <div class="chart">
            <h3>{title}</h3>
            {rows.is_empty().then(|| view! { <p class="empty">"No data"</p> })}
            {rows
                .into_iter()
                .map(|(label, value)| {
                    let style = format!("width: {}%", bar_width(value.abs(), peak));
                    let class = if value < 0.0 { "bar-fill negative" } else { "bar-fill" };
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{label}</span>
                            <div class="bar-track">
                                <div class=class style=style></div>
                            </div>
                            <span class="bar-value">{value}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
