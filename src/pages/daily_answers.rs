//! Daily Check-In Answers Page
//!
//! Answers are viewed or have their text corrected; edits patch the row
//! in place and deletes drop it locally.

use leptos::prelude::*;
use list_manager::ModalMode;
use web_sys::SubmitEvent;

use super::{modal_title, session_api, submit_label};
use crate::api::DailyAnswers;
use crate::components::{Modal, PageSizeSelect, Pagination, RowActions, SearchBar, TableBody, TextArea};
use crate::format::display_date;
use crate::list_handle::use_list;

#[component]
pub fn DailyAnswersPage() -> impl IntoView {
    let (api, _) = session_api();
    let list = use_list(DailyAnswers::new(api));

    let title = Signal::derive(move || modal_title(list.modal_mode(), "answer"));
    let viewing = move || list.modal_mode() == Some(ModalMode::View);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        list.submit();
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Daily Check-In Answers"</h2>
            </div>
            <div class="list-controls">
                <PageSizeSelect value=list.page_size_signal() on_change=list.page_size_callback() />
                <SearchBar
                    value=list.search_signal()
                    on_search=list.search_callback()
                    placeholder="Search answer, question or user..."
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"User"</th>
                        <th>"Question"</th>
                        <th>"Answer"</th>
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
                            .map(|(index, answer)| {
                                let id = answer.id;
                                let to_view = answer.clone();
                                let to_edit = answer.clone();
                                view! {
                                    <tr>
                                        <td>{offset + index + 1}</td>
                                        <td>{answer.user_name().to_string()}</td>
                                        <td>{answer.question_text().to_string()}</td>
                                        <td>{answer.answer.clone()}</td>
                                        <td>{display_date(answer.created_at.as_deref())}</td>
                                        <RowActions
                                            on_view=Callback::new(move |_| list.open_view(to_view.clone()))
                                            on_edit=Callback::new(move |_| list.open_edit(to_edit.clone()))
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
            <Modal
                open=list.modal_open_signal()
                title=title
                on_close=list.close_callback()
                error=list.modal_error_signal()
            >
                {move || {
                    list.modal_target()
                        .map(|answer| {
                            view! {
                                <dl class="detail-list">
                                    <dt>"User"</dt>
                                    <dd>{answer.user_name().to_string()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{answer.user_email().to_string()}</dd>
                                    <dt>"Question"</dt>
                                    <dd>{answer.question_text().to_string()}</dd>
                                    <dt>"Date"</dt>
                                    <dd>{display_date(answer.created_at.as_deref())}</dd>
                                </dl>
                            }
                        })
                }}
                <form class="modal-form" on:submit=on_submit>
                    <TextArea
                        label="Answer"
                        value=Signal::derive(move || {
                            if viewing() {
                                list.modal_target().map(|a| a.answer).unwrap_or_default()
                            } else {
                                list.field("answer")
                            }
                        })
                        on_input=list.field_callback("answer")
                        rows=4
                        disabled=Signal::derive(viewing)
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn" on:click=move |_| list.close_modal()>
                            "Close"
                        </button>
                        <Show when=move || !viewing()>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                prop:disabled=move || list.is_busy()
                            >
                                {move || submit_label(list.is_busy(), list.modal_mode())}
                            </button>
                        </Show>
                    </div>
                </form>
            </Modal>
        </section>
    }
}
