//! Table Body Component
//!
//! Renders the placeholder row matching the list's view status, or the
//! rows themselves.

use leptos::prelude::*;
use list_manager::ListView;

pub fn status_text(status: ListView) -> Option<&'static str> {
    match status {
        ListView::Loading => Some("Loading..."),
        ListView::NoRecords => Some("No records found"),
        ListView::NoResults => Some("No results"),
        ListView::Rows => None,
    }
}

#[component]
pub fn TableBody(
    #[prop(into)] status: Signal<ListView>,
    /// Column count of the surrounding table
    columns: usize,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <tbody>
            {move || match status_text(status.get()) {
                Some(text) => {
                    view! {
                        <tr class="placeholder-row">
                            <td colspan=columns>{text}</td>
                        </tr>
                    }
                        .into_any()
                }
                None => children().into_any(),
            }}
        </tbody>
    }
}

/// View/edit/delete buttons for one row; omitted callbacks hide their button
#[component]
pub fn RowActions(
    #[prop(into, optional)] on_view: Option<Callback<()>>,
    #[prop(into, optional)] on_edit: Option<Callback<()>>,
    #[prop(into, optional)] on_delete: Option<Callback<()>>,
    #[prop(into, optional)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <td class="row-actions">
            {on_view
                .map(|cb| {
                    view! {
                        <button class="btn btn-sm btn-info" on:click=move |_| cb.run(())>
                            "View"
                        </button>
                    }
                })}
            {on_edit
                .map(|cb| {
                    view! {
                        <button
                            class="btn btn-sm btn-primary"
                            prop:disabled=move || busy.get()
                            on:click=move |_| cb.run(())
                        >
                            "Edit"
                        </button>
                    }
                })}
            {on_delete
                .map(|cb| {
                    view! {
                        <button
                            class="btn btn-sm btn-danger"
                            prop:disabled=move || busy.get()
                            on:click=move |_| cb.run(())
                        >
                            "Delete"
                        </button>
                    }
                })}
        </td>
    }
}
