//! Aside Filter Component
//!
//! Product list sidebar: category list, price range, minimum rating, and a
//! clear-all reset. Every change lands in the shared query config, which
//! drives a refetch.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Category;
use crate::rules;

#[component]
pub fn AsideFilter(#[prop(into)] categories: Signal<Vec<Category>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (price_min, set_price_min) = signal(String::new());
    let (price_max, set_price_max) = signal(String::new());
    let (price_error, set_price_error) = signal(Option::<String>::None);

    let apply_price = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let min = price_min.get_untracked();
        let max = price_max.get_untracked();
        if let Some(message) = rules::validate_price_range(&min, &max) {
            set_price_error.set(Some(message));
            return;
        }
        set_price_error.set(None);
        ctx.query.update(|q| {
            q.price_min = min.parse().ok();
            q.price_max = max.parse().ok();
            q.page = 1;
        });
    };

    let clear_all = move |_| {
        set_price_min.set(String::new());
        set_price_max.set(String::new());
        set_price_error.set(None);
        ctx.query.update(|q| q.reset_filters());
    };

    view! {
        <aside class="aside-filter">
            <div class="filter-section">
                <div class="filter-title">"Categories"</div>
                <button
                    class=move || {
                        if ctx.query.get().category.is_none() {
                            "category-item active"
                        } else {
                            "category-item"
                        }
                    }
                    on:click=move |_| ctx.query.update(|q| {
                        q.category = None;
                        q.page = 1;
                    })
                >
                    "All categories"
                </button>
                <For
                    each=move || categories.get()
                    key=|category| category.id.clone()
                    children=move |category| {
                        let id = category.id.clone();
                        let active_id = category.id.clone();
                        let is_active = move || {
                            ctx.query.get().category.as_deref() == Some(active_id.as_str())
                        };
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "category-item active" } else { "category-item" }
                                }
                                on:click=move |_| {
                                    let id = id.clone();
                                    ctx.query.update(|q| {
                                        q.category = Some(id);
                                        q.page = 1;
                                    });
                                }
                            >
                                {category.name.clone()}
                            </button>
                        }
                    }
                />
            </div>

            <div class="filter-section">
                <div class="filter-title">"Price range"</div>
                <form class="price-range-form" on:submit=apply_price>
                    <input
                        type="text"
                        placeholder="From"
                        prop:value=move || price_min.get()
                        on:input=move |ev| set_price_min.set(event_target_value(&ev))
                    />
                    <span>"–"</span>
                    <input
                        type="text"
                        placeholder="To"
                        prop:value=move || price_max.get()
                        on:input=move |ev| set_price_max.set(event_target_value(&ev))
                    />
                    <button type="submit">"Apply"</button>
                    <div class="form-error">{move || price_error.get().unwrap_or_default()}</div>
                </form>
            </div>

            <div class="filter-section">
                <div class="filter-title">"Rating"</div>
                {(1..=5u8)
                    .rev()
                    .map(|stars| {
                        view! {
                            <button
                                class=move || {
                                    if ctx.query.get().rating_filter == Some(stars) {
                                        "rating-item active"
                                    } else {
                                        "rating-item"
                                    }
                                }
                                on:click=move |_| ctx.query.update(|q| {
                                    q.rating_filter = Some(stars);
                                    q.page = 1;
                                })
                            >
                                {"★".repeat(stars as usize)} " & up"
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <button class="clear-filter-btn" on:click=clear_all>
                "Clear all"
            </button>
        </aside>
    }
}
