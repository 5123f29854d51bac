//! Daily Ratings Page

use leptos::prelude::*;

use super::session_api;
use crate::api::Ratings;
use crate::components::{PageSizeSelect, Pagination, RowActions, SearchBar, TableBody};
use crate::format::display_date;
use crate::list_handle::use_list;

const RATINGS_PAGE_SIZE: usize = 5;

#[component]
pub fn RatingsPage() -> impl IntoView {
    let (api, _) = session_api();
    let list = use_list(Ratings::new(api)).with_page_size(RATINGS_PAGE_SIZE);

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Daily Ratings"</h2>
            </div>
            <div class="list-controls">
                <PageSizeSelect value=list.page_size_signal() on_change=list.page_size_callback() />
                <SearchBar
                    value=list.search_signal()
                    on_search=list.search_callback()
                    placeholder="Search user or feedback..."
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"User"</th>
                        <th>"Rating"</th>
                        <th>"Feedback"</th>
                        <th>"Date"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <TableBody status=list.status_signal() columns=6>
                    {move || {
                        let offset = list.page_offset();
                        list.page_items()
                            .into_iter()
                            .enumerate()
                            .map(|(index, rating)| {
                                let id = rating.id;
                                view! {
                                    <tr>
                                        <td>{offset + index + 1}</td>
                                        <td>{rating.user_name.clone()}</td>
                                        <td class="rating">{rating.rating.clone()} " ★"</td>
                                        <td>{rating.feedback.clone()}</td>
                                        <td>{display_date(rating.created_at.as_deref())}</td>
                                        <RowActions
                                            on_delete=Callback::new(move |_| list.delete(id))
                                            busy=list.busy_signal()
                                        />
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
