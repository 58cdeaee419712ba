//! Purchase History Page
//!
//! Order list filtered by lifecycle status tabs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::UserSideNav;
use crate::context::AppContext;
use crate::format::{format_currency, generate_name_id};
use crate::models::{purchase_status, Purchase};
use crate::route::Route;
use crate::toast::use_toasts;

const STATUS_TABS: &[(i32, &str)] = &[
    (purchase_status::ALL, "All"),
    (purchase_status::WAIT_FOR_CONFIRMATION, "To confirm"),
    (purchase_status::WAIT_FOR_GETTING, "To pick up"),
    (purchase_status::IN_PROGRESS, "Shipping"),
    (purchase_status::DELIVERED, "Delivered"),
    (purchase_status::CANCELLED, "Cancelled"),
];

#[component]
pub fn PurchaseHistory() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();

    let (status, set_status) = signal(purchase_status::ALL);
    let (purchases, set_purchases) = signal(Vec::<Purchase>::new());

    Effect::new(move |_| {
        let current = status.get();
        spawn_local(async move {
            match api::purchase::list(current).await {
                Ok(res) => set_purchases.set(res.data),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <div class="user-page">
            <UserSideNav />
            <div class="user-panel">
                <div class="history-tabs">
                    {STATUS_TABS
                        .iter()
                        .map(|&(tab_status, label)| {
                            view! {
                                <button
                                    class=move || {
                                        if status.get() == tab_status {
                                            "history-tab active"
                                        } else {
                                            "history-tab"
                                        }
                                    }
                                    on:click=move |_| set_status.set(tab_status)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show
                    when=move || !purchases.get().is_empty()
                    fallback=|| view! { <div class="history-empty">"No purchases yet"</div> }
                >
                    <For
                        each=move || purchases.get()
                        key=|purchase| purchase.id.clone()
                        children=move |purchase| {
                            let slug = generate_name_id(
                                &purchase.product.name,
                                &purchase.product.id,
                            );
                            let total =
                                purchase.price * u64::from(purchase.buy_count);
                            view! {
                                <div
                                    class="history-row"
                                    on:click=move |_| {
                                        ctx.navigate(Route::ProductDetail(slug.clone()))
                                    }
                                >
                                    <img
                                        class="history-image"
                                        src=purchase.product.image.clone()
                                        alt=purchase.product.name.clone()
                                    />
                                    <div class="history-info">
                                        <div class="history-name">
                                            {purchase.product.name.clone()}
                                        </div>
                                        <div class="history-count">
                                            "x" {purchase.buy_count}
                                        </div>
                                    </div>
                                    <div class="history-prices">
                                        <span class="price-old">
                                            "₫"
                                            {format_currency(purchase.price_before_discount)}
                                        </span>
                                        <span class="price-current">
                                            "₫" {format_currency(purchase.price)}
                                        </span>
                                    </div>
                                    <div class="history-total">
                                        "Order total: ₫" {format_currency(total)}
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
