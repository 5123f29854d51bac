//! Pagination Component
//!
//! Previous/next buttons around a window of page numbers.

use leptos::prelude::*;

/// Page numbers to show: at most `width` pages centred on `page`
pub fn page_window(page: usize, total: usize, width: usize) -> Vec<usize> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let page = page.clamp(1, total);
    let start = page.saturating_sub(width / 2).max(1).min(total + 1 - width);
    (start..start + width).collect()
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    /// Requested page; the list clamps it
    #[prop(into)]
    on_change: Callback<i64>,
) -> impl IntoView {
    let go = move |target: usize| on_change.run(target as i64);

    view! {
        <nav class="pagination">
            <button
                class="page-btn"
                prop:disabled=move || page.get() <= 1
                on:click=move |_| on_change.run(page.get_untracked() as i64 - 1)
            >
                "Previous"
            </button>
            {move || {
                let current = page.get();
                page_window(current, total.get(), 5)
                    .into_iter()
                    .map(|n| {
                        view! {
                            <button
                                class=if n == current { "page-btn active" } else { "page-btn" }
                                on:click=move |_| go(n)
                            >
                                {n}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="page-btn"
                prop:disabled=move || page.get() >= total.get()
                on:click=move |_| on_change.run(page.get_untracked() as i64 + 1)
            >
                "Next"
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_centred() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_at_edges() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_narrower_than_width() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0, 5), vec![1]);
    }
}
