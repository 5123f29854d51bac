//! Recommendations Page

use leptos::prelude::*;
use web_sys::SubmitEvent;

use super::{modal_title, session_api, submit_label};
use crate::api::Recommendations;
use crate::components::{
    FileField, Modal, PageSizeSelect, Pagination, RowActions, SearchBar, TableBody, TextArea, TextField,
};
use crate::context::use_app_context;
use crate::format::{display_date, image_url};
use crate::list_handle::use_list;

const RECOMMENDATIONS_PAGE_SIZE: usize = 5;

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let ctx = use_app_context();
    let asset_base = StoredValue::new(ctx.asset_base());
    let (api, user_id) = session_api();
    let list = use_list(Recommendations::new(api, user_id)).with_page_size(RECOMMENDATIONS_PAGE_SIZE);

    let title = Signal::derive(move || modal_title(list.modal_mode(), "recommendation"));
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        list.submit();
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Recommendations"</h2>
                <button class="btn btn-primary" on:click=move |_| list.open_create()>
                    "Add Recommendation"
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
                        <th>"Image"</th>
                        <th>"Title"</th>
                        <th>"Subtitle"</th>
                        <th>"Description"</th>
                        <th>"Button"</th>
                        <th>"Created"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <TableBody status=list.status_signal() columns=8>
                    {move || {
                        let offset = list.page_offset();
                        list.page_items()
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let id = item.id;
                                let record = item.clone();
                                let picture = asset_base.with_value(|base| image_url(item.image.as_deref(), base));
                                let link = item.button_link.clone();
                                view! {
                                    <tr>
                                        <td>{offset + index + 1}</td>
                                        <td>
                                            <img class="thumb" src=picture alt="" />
                                        </td>
                                        <td>{item.title.clone()}</td>
                                        <td>{item.subtitle.clone()}</td>
                                        <td>{item.description.clone()}</td>
                                        <td>
                                            <a href=link target="_blank" rel="noopener">
                                                {item.button_label.clone()}
                                            </a>
                                        </td>
                                        <td>{display_date(item.created_at.as_deref())}</td>
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
                    <TextField label="Title" value=list.field_signal("title") on_input=list.field_callback("title") />
                    <TextField
                        label="Subtitle"
                        value=list.field_signal("subtitle")
                        on_input=list.field_callback("subtitle")
                    />
                    <TextArea
                        label="Description"
                        value=list.field_signal("description")
                        on_input=list.field_callback("description")
                        rows=4
                    />
                    <TextField
                        label="Button Label"
                        value=list.field_signal("button_label")
                        on_input=list.field_callback("button_label")
                    />
                    <TextField
                        label="Button Link"
                        input_type="url"
                        value=list.field_signal("button_link")
                        on_input=list.field_callback("button_link")
                    />
                    <FileField label="Image" on_file=Callback::new(move |file| list.set_file("image", file)) />
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
