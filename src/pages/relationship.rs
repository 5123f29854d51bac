//! Relationship Progress Page
//!
//! Read-only streak table with a progress bar per couple.

use leptos::prelude::*;

use super::session_api;
use crate::api::ProgressList;
use crate::components::{PageSizeSelect, Pagination, SearchBar, TableBody};
use crate::format::{bar_width, display_date, parse_percent};
use crate::list_handle::use_list;

#[component]
pub fn RelationshipPage() -> impl IntoView {
    let (api, _) = session_api();
    let list = use_list(ProgressList::new(api));

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Relationship Progress"</h2>
            </div>
            <div class="list-controls">
                <PageSizeSelect value=list.page_size_signal() on_change=list.page_size_callback() />
                <SearchBar
                    value=list.search_signal()
                    on_search=list.search_callback()
                    placeholder="Search name or email..."
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Streak"</th>
                        <th>"Points"</th>
                        <th>"Tier"</th>
                        <th>"Progress"</th>
                        <th>"Updated"</th>
                    </tr>
                </thead>
                <TableBody status=list.status_signal() columns=8>
                    {move || {
                        let offset = list.page_offset();
                        list.page_items()
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                let width = format!(
                                    "width: {}%",
                                    bar_width(parse_percent(&entry.progress_percent), 100.0),
                                );
                                view! {
                                    <tr>
                                        <td>{offset + index + 1}</td>
                                        <td>{entry.user_name.clone()}</td>
                                        <td>{entry.user_email.clone()}</td>
                                        <td>{format!("{} days", entry.streak_days)}</td>
                                        <td>{entry.points.clone()}</td>
                                        <td>{entry.tier.clone()}</td>
                                        <td title=entry.description.clone()>
                                            <div class="bar-track">
                                                <div class="bar-fill" style=width></div>
                                            </div>
                                            <span class="bar-label">{entry.progress_percent.clone()}</span>
                                        </td>
                                        <td>{display_date(entry.created_at.as_deref())}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </table>
            <Pagination page=list.page_signal() total=list.total_signal() on_change=list.page_callback() />
        </section>
    }
}
