//! Users Page
//!
//! Registered couples with avatar, contact details and role. Editing goes
//! through the profile update endpoint with an optional new photo.

use leptos::prelude::*;
use list_manager::capitalize;
use web_sys::SubmitEvent;

use super::{modal_title, session_api, submit_label};
use crate::api::{Partners, PARTNER_ROLES};
use crate::components::{
    FileField, Modal, PageSizeSelect, Pagination, RowActions, SearchBar, SelectField, TableBody, TextField,
};
use crate::context::use_app_context;
use crate::format::image_url;
use crate::list_handle::use_list;

#[component]
pub fn PartnersPage() -> impl IntoView {
    let ctx = use_app_context();
    let asset_base = StoredValue::new(ctx.asset_base());
    let (api, _) = session_api();
    let list = use_list(Partners::new(api));

    let title = Signal::derive(move || modal_title(list.modal_mode(), "user"));
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        list.submit();
    };

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"Users"</h2>
            </div>
            <div class="list-controls">
                <PageSizeSelect value=list.page_size_signal() on_change=list.page_size_callback() />
                <SearchBar
                    value=list.search_signal()
                    on_search=list.search_callback()
                    placeholder="Search name, email or mobile..."
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Photo"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Mobile"</th>
                        <th>"Partner"</th>
                        <th>"Role"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <TableBody status=list.status_signal() columns=8>
                    {move || {
                        let offset = list.page_offset();
                        list.page_items()
                            .into_iter()
                            .enumerate()
                            .map(|(index, partner)| {
                                let id = partner.id;
                                let record = partner.clone();
                                let avatar = asset_base
                                    .with_value(|base| image_url(partner.image.as_deref(), base));
                                view! {
                                    <tr>
                                        <td>{offset + index + 1}</td>
                                        <td>
                                            <img class="avatar" src=avatar alt="" />
                                        </td>
                                        <td>{partner.first_name.clone()}</td>
                                        <td>{partner.email.clone()}</td>
                                        <td>{partner.mobile.clone()}</td>
                                        <td>{partner.my_partner_name.clone()}</td>
                                        <td>{capitalize(&partner.partner)}</td>
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
                <form class="modal-form grid-2" on:submit=on_submit>
                    <TextField label="Name" value=list.field_signal("my_name") on_input=list.field_callback("my_name") />
                    <TextField
                        label="Partner Name"
                        value=list.field_signal("my_partner_name")
                        on_input=list.field_callback("my_partner_name")
                    />
                    <TextField label="Mobile" value=list.field_signal("mobile") on_input=list.field_callback("mobile") />
                    <TextField
                        label="Email"
                        input_type="email"
                        value=list.field_signal("email")
                        on_input=list.field_callback("email")
                    />
                    <TextField
                        label="Partner Mobile"
                        value=list.field_signal("my_partner_mobile")
                        on_input=list.field_callback("my_partner_mobile")
                    />
                    <TextField
                        label="Partner Email"
                        input_type="email"
                        value=list.field_signal("my_partner_email")
                        on_input=list.field_callback("my_partner_email")
                    />
                    <SelectField
                        label="Role"
                        value=list.field_signal("partner")
                        on_change=list.field_callback("partner")
                        options=PARTNER_ROLES
                        placeholder="Select role".to_string()
                    />
                    <FileField
                        label="Photo"
                        on_file=Callback::new(move |file| list.set_file("upload_photo", file))
                    />
                    <TextField
                        label="New Password"
                        input_type="password"
                        value=list.field_signal("password")
                        on_input=list.field_callback("password")
                        placeholder="Leave blank to keep"
                    />
                    <TextField
                        label="Confirm Password"
                        input_type="password"
                        value=list.field_signal("password_confirm")
                        on_input=list.field_callback("password_confirm")
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
