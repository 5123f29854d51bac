//! Weekly Check-In Answers Page
//!
//! Read-only: answers are listed and searched, never edited.

use leptos::prelude::*;

use super::session_api;
use crate::api::WeeklyAnswers;
use crate::components::{PageSizeSelect, Pagination, SearchBar, TableBody};
use crate::format::display_date;
use crate::list_handle::use_list;

#[component]
pub fn WeeklyAnswersPage() -> impl IntoView {
    let (api, _) = session_api();
    let list = use_list(WeeklyAnswers::new(api));

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Weekly Check-In Answers"</h2>
            </div>
            <div class="list-controls">
                <PageSizeSelect value=list.page_size_signal() on_change=list.page_size_callback() />
                <SearchBar
                    value=list.search_signal()
                    on_search=list.search_callback()
                    placeholder="Search question, answer, user or email..."
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"User"</th>
                        <th>"Email"</th>
                        <th>"Question"</th>
                        <th>"Answer"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <TableBody status=list.status_signal() columns=6>
                    {move || {
                        let offset = list.page_offset();
                        list.page_items()
                            .into_iter()
                            .enumerate()
                            .map(|(index, row)| {
                                let answer = row.0;
                                view! {
                                    <tr>
                                        <td>{offset + index + 1}</td>
                                        <td>{answer.user_name().to_string()}</td>
                                        <td>{answer.user_email().to_string()}</td>
                                        <td>{answer.question_text().to_string()}</td>
                                        <td>{answer.answer.clone()}</td>
                                        <td>{display_date(answer.created_at.as_deref())}</td>
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
