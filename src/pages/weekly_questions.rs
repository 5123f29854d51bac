//! Weekly Check-In Questions Page

use leptos::prelude::*;
use list_manager::capitalize;
use web_sys::SubmitEvent;

use super::{modal_title, session_api, submit_label};
use crate::api::{WeeklyQuestions, QUESTION_STATUSES};
use crate::components::{
    Modal, PageSizeSelect, Pagination, RowActions, SearchBar, SelectField, TableBody, TextField,
};
use crate::format::display_date;
use crate::list_handle::use_list;

#[component]
pub fn WeeklyQuestionsPage() -> impl IntoView {
    let (api, user_id) = session_api();
    let list = use_list(WeeklyQuestions::new(api, user_id));

    let title = Signal::derive(move || modal_title(list.modal_mode(), "weekly question"));
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        list.submit();
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Weekly Check-In Questions"</h2>
                <button class="btn btn-primary" on:click=move |_| list.open_create()>
                    "Add Question"
                </button>
            </div>
            <div class="list-controls">
                <PageSizeSelect value=list.page_size_signal() on_change=list.page_size_callback() />
                <SearchBar value=list.search_signal() on_search=list.search_callback() />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Question"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <TableBody status=list.status_signal() columns=5>
                    {move || {
                        let offset = list.page_offset();
                        list.page_items()
                            .into_iter()
                            .enumerate()
                            .map(|(index, question)| {
                                let id = question.id;
                                let record = question.clone();
                                let status_class = format!("badge badge-{}", question.status.to_lowercase());
                                view! {
                                    <tr>
                                        <td>{offset + index + 1}</td>
                                        <td>{question.question.clone()}</td>
                                        <td>
                                            <span class=status_class>{capitalize(&question.status)}</span>
                                        </td>
                                        <td>{display_date(question.created_at.as_deref())}</td>
                                        <RowActions
                                            on_edit=Callback::new(move |_| list.open_edit(record.clone()))
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
                <form class="modal-form" on:submit=on_submit>
                    <TextField
                        label="Question"
                        value=list.field_signal("question")
                        on_input=list.field_callback("question")
                        placeholder="Enter weekly question"
                    />
                    <SelectField
                        label="Status"
                        value=list.field_signal("status")
                        on_change=list.field_callback("status")
                        options=QUESTION_STATUSES
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn" on:click=move |_| list.close_modal()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" prop:disabled=move || list.is_busy()>
                            {move || submit_label(list.is_busy(), list.modal_mode())}
                        </button>
                    </div>
                </form>
            </Modal>
        </section>
    }
}
