//! Sort Bar Component
//!
//! Sort buttons, price order select, and compact prev/next paging above the
//! product grid.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::query::{Order, SortBy};

const SORT_BUTTONS: &[(SortBy, &str)] = &[
    (SortBy::View, "Popular"),
    (SortBy::CreatedAt, "Latest"),
    (SortBy::Sold, "Top sales"),
];

#[component]
pub fn SortBar(#[prop(into)] page_size: Signal<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // createdAt is the backend default when nothing is picked
    let active_sort = move || ctx.query.get().sort_by.unwrap_or(SortBy::CreatedAt);

    let pick_sort = move |sort_by: SortBy| {
        ctx.query.update(|q| {
            q.sort_by = Some(sort_by);
            q.order = None;
            q.page = 1;
        });
    };

    let pick_price_order = move |ev: web_sys::Event| {
        let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        else {
            return;
        };
        let order = match select.value().as_str() {
            "asc" => Order::Asc,
            "desc" => Order::Desc,
            _ => return,
        };
        ctx.query.update(|q| {
            q.sort_by = Some(SortBy::Price);
            q.order = Some(order);
            q.page = 1;
        });
    };

    view! {
        <div class="sort-bar">
            <span class="sort-label">"Sort by"</span>
            {SORT_BUTTONS
                .iter()
                .map(|&(sort_by, label)| {
                    view! {
                        <button
                            class=move || {
                                if active_sort() == sort_by {
                                    "sort-btn active"
                                } else {
                                    "sort-btn"
                                }
                            }
                            on:click=move |_| pick_sort(sort_by)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
            <select
                class=move || {
                    if active_sort() == SortBy::Price { "sort-select active" } else { "sort-select" }
                }
                prop:value=move || {
                    match ctx.query.get() {
                        q if q.sort_by == Some(SortBy::Price) => {
                            q.order.map(Order::as_str).unwrap_or("").to_string()
                        }
                        _ => String::new(),
                    }
                }
                on:change=pick_price_order
            >
                <option value="">"Price"</option>
                <option value="asc">"Price: low to high"</option>
                <option value="desc">"Price: high to low"</option>
            </select>

            <div class="sort-paging">
                <span class="sort-page-indicator">
                    {move || ctx.query.get().page} "/" {move || page_size.get()}
                </span>
                <button
                    class="page-btn"
                    disabled=move || ctx.query.get().page <= 1
                    on:click=move |_| ctx.query.update(|q| q.page = q.page.saturating_sub(1).max(1))
                >
                    "‹"
                </button>
                <button
                    class="page-btn"
                    disabled=move || ctx.query.get().page >= page_size.get()
                    on:click=move |_| ctx.query.update(|q| q.page += 1)
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
