//! Pagination Component
//!
//! Numbered page buttons with `...` truncation windows around the current
//! page, plus prev/next.

use leptos::prelude::*;

use crate::context::AppContext;

/// Pages kept visible on each side of the current page
const RANGE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(u32),
    Dots,
}

/// Visible page window for `current` out of `page_size` total pages.
/// Dots collapse the runs between the leading/trailing edge pages and the
/// window around the current page, each side at most once.
pub fn page_window(current: u32, page_size: u32) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut dot_before = false;
    let mut dot_after = false;
    for page_number in 1..=page_size {
        let near_start = current <= RANGE * 2 + 1;
        let near_end = current >= page_size.saturating_sub(RANGE * 2);
        let hidden_after =
            page_number > current + RANGE && page_number + RANGE < page_size + 1;
        let hidden_before = page_number > RANGE && page_number + RANGE < current;
        if near_start && hidden_after {
            if !dot_after {
                dot_after = true;
                items.push(PageItem::Dots);
            }
        } else if !near_start && !near_end && hidden_before {
            if !dot_before {
                dot_before = true;
                items.push(PageItem::Dots);
            }
        } else if !near_start && !near_end && hidden_after {
            if !dot_after {
                dot_after = true;
                items.push(PageItem::Dots);
            }
        } else if near_end && !near_start && hidden_before {
            if !dot_before {
                dot_before = true;
                items.push(PageItem::Dots);
            }
        } else {
            items.push(PageItem::Page(page_number));
        }
    }
    items
}

#[component]
pub fn Pagination(#[prop(into)] page_size: Signal<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let current = move || ctx.query.get().page;
    let go_to = move |page: u32| {
        ctx.query.update(|q| q.page = page);
    };

    view! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled=move || current() <= 1
                on:click=move |_| go_to(current().saturating_sub(1))
            >
                "Prev"
            </button>
            {move || {
                page_window(current(), page_size.get())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Dots => view! { <span class="page-dots">"..."</span> }.into_any(),
                        PageItem::Page(page) => {
                            let class = move || {
                                if current() == page { "page-btn active" } else { "page-btn" }
                            };
                            view! {
                                <button class=class on:click=move |_| go_to(page)>
                                    {page}
                                </button>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()
            }}
            <button
                class="page-btn"
                disabled=move || current() >= page_size.get()
                on:click=move |_| go_to(current() + 1)
            >
                "Next"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Dots, Page};

    #[test]
    fn test_short_list_has_no_dots() {
        assert_eq!(
            page_window(1, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            page_window(1, 20),
            vec![Page(1), Page(2), Page(3), Dots, Page(19), Page(20)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_window(10, 20),
            vec![
                Page(1),
                Page(2),
                Dots,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Dots,
                Page(19),
                Page(20)
            ]
        );
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            page_window(18, 20),
            vec![
                Page(1),
                Page(2),
                Dots,
                Page(16),
                Page(17),
                Page(18),
                Page(19),
                Page(20)
            ]
        );
    }
}
