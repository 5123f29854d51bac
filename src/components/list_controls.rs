//! List Controls
//!
//! Search box and page-size selector shown above list tables.

use leptos::prelude::*;
use list_manager::PAGE_SIZE_OPTIONS;

#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into, default = "Search...".to_string())] placeholder: String,
) -> impl IntoView {
    view! {
        <input
            class="search-input"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_search.run(event_target_value(&ev))
        />
    }
}

#[component]
pub fn PageSizeSelect(
    #[prop(into)] value: Signal<usize>,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <label class="page-size">
            "Show "
            <select on:change=move |ev| {
                if let Ok(size) = event_target_value(&ev).parse() {
                    on_change.run(size);
                }
            }>
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || value.get() == size>
                                {size}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            " entries"
        </label>
    }
}
