//! Cart Page
//!
//! In-cart purchase list with selection, quantity editing, batch delete,
//! and checkout. Server data is merged into the extended line sequence by
//! [`crate::cart::reconcile`]; mutations never edit list membership
//! locally, they refetch and let reconciliation do it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cart;
use crate::components::QuantityController;
use crate::context::AppContext;
use crate::format::{format_currency, generate_name_id};
use crate::models::{purchase_status, Purchase};
use crate::route::Route;
use crate::store::{
    store_set_all_checked, store_set_cart, store_set_line_buy_count, store_set_line_checked,
    store_set_line_disabled, use_app_store, AppStateStoreFields,
};
use crate::toast::use_toasts;

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let toasts = use_toasts();

    // Pre-selected purchase carried by a buy-now navigation; applies for
    // this mount only and is cleared when the page goes away.
    let preselected = ctx.cart_preselected.get_untracked();
    on_cleanup(move || ctx.cart_preselected.set(None));

    // Raw server rows from the latest fetch; the typed-quantity guard
    // compares against these, not the locally echoed values.
    let (server_cart, set_server_cart) = signal(Vec::<Purchase>::new());

    // fetch + reconcile on mount and whenever the reload trigger bumps
    Effect::new(move |_| {
        let _ = ctx.cart_reload.get();
        let preselected = preselected.clone();
        spawn_local(async move {
            match api::purchase::list(purchase_status::IN_CART).await {
                Ok(res) => {
                    set_server_cart.set(res.data.clone());
                    let merged =
                        cart::reconcile(&store.cart().get_untracked(), res.data, preselected.as_deref());
                    store_set_cart(&store, merged);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let all_checked = Memo::new(move |_| cart::is_all_checked(&store.cart().get()));
    let checked_count = Memo::new(move |_| cart::checked_count(&store.cart().get()));
    let total_price = Memo::new(move |_| cart::total_checked_price(&store.cart().get()));
    let total_savings = Memo::new(move |_| cart::total_checked_savings(&store.cart().get()));

    let (buying, set_buying) = signal(false);

    // Quantity mutation: optimistic disabled flag, then update + refetch.
    // The disabled check doubles as a per-item serializer for rapid
    // repeated clicks.
    let handle_quantity = move |purchase_id: String, value: u32, enabled: bool| {
        let Some(line) = store
            .cart()
            .get_untracked()
            .iter()
            .find(|line| line.id() == purchase_id)
            .cloned()
        else {
            return;
        };
        if !enabled || line.disabled {
            return;
        }
        store_set_line_disabled(&store, &purchase_id, true);
        let product_id = line.purchase.product.id.clone();
        spawn_local(async move {
            match api::purchase::update(&product_id, value).await {
                Ok(res) => toasts.success(res.message),
                Err(err) => toasts.error(err.to_string()),
            }
            // refetch reconciles and clears the disabled flag either way
            ctx.reload_cart();
        });
    };

    let handle_delete = move |purchase_ids: Vec<String>| {
        if purchase_ids.is_empty() {
            return;
        }
        spawn_local(async move {
            if let Err(err) = api::purchase::delete(&purchase_ids).await {
                toasts.error(err.to_string());
            }
            ctx.reload_cart();
        });
    };

    // Checkout: no request when nothing is checked
    let handle_buy = move |_| {
        let body = cart::checkout_body(&store.cart().get_untracked());
        if body.is_empty() || buying.get_untracked() {
            return;
        }
        set_buying.set(true);
        spawn_local(async move {
            match api::purchase::buy_products(&body).await {
                Ok(res) => toasts.success(res.message),
                Err(err) => toasts.error(err.to_string()),
            }
            set_buying.set(false);
            ctx.reload_cart();
        });
    };

    view! {
        <div class="cart-page">
            <Show
                when=move || !store.cart().get().is_empty()
                fallback=move || {
                    view! {
                        <div class="cart-empty">
                            <div class="cart-empty-text">"Your cart is empty"</div>
                            <button
                                class="go-shopping-btn"
                                on:click=move |_| ctx.navigate(Route::ProductList)
                            >
                                "Go shopping"
                            </button>
                        </div>
                    }
                }
            >
                <div class="cart-header">
                    <label class="cart-check-all">
                        <input
                            type="checkbox"
                            prop:checked=move || all_checked.get()
                            on:change=move |_| {
                                store_set_all_checked(&store, !all_checked.get_untracked());
                            }
                        />
                        "Product"
                    </label>
                    <span class="cart-col">"Unit price"</span>
                    <span class="cart-col">"Quantity"</span>
                    <span class="cart-col">"Total"</span>
                    <span class="cart-col">"Actions"</span>
                </div>

                <div class="cart-body">
                    <For
                        each=move || store.cart().get()
                        key=|line| {
                            (
                                line.id().to_string(),
                                line.checked,
                                line.disabled,
                                line.purchase.buy_count,
                            )
                        }
                        children=move |line| {
                            let purchase_id = line.id().to_string();
                            let check_id = purchase_id.clone();
                            let type_id = purchase_id.clone();
                            let delete_id = purchase_id.clone();
                            let focus_id = purchase_id.clone();
                            let inc_id = purchase_id.clone();
                            let dec_id = purchase_id.clone();
                            let max = line.purchase.product.quantity;
                            let slug = generate_name_id(
                                &line.purchase.product.name,
                                &line.purchase.product.id,
                            );
                            let checked = line.checked;
                            let disabled = line.disabled;
                            let buy_count = line.purchase.buy_count;
                            view! {
                                <div class="cart-row">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |ev| {
                                            store_set_line_checked(
                                                &store,
                                                &check_id,
                                                event_target_checked(&ev),
                                            );
                                        }
                                    />
                                    <div
                                        class="cart-product"
                                        on:click=move |_| {
                                            ctx.navigate(Route::ProductDetail(slug.clone()))
                                        }
                                    >
                                        <img
                                            class="cart-product-image"
                                            src=line.purchase.product.image.clone()
                                            alt=line.purchase.product.name.clone()
                                        />
                                        <span class="cart-product-name">
                                            {line.purchase.product.name.clone()}
                                        </span>
                                    </div>
                                    <div class="cart-unit-price">
                                        <span class="price-old">
                                            "₫"
                                            {format_currency(line.purchase.price_before_discount)}
                                        </span>
                                        <span class="price-current">
                                            "₫" {format_currency(line.purchase.price)}
                                        </span>
                                    </div>
                                    <QuantityController
                                        max=max
                                        value=buy_count
                                        disabled=disabled
                                        on_increase=move |value: u32| {
                                            handle_quantity(inc_id.clone(), value, value <= max)
                                        }
                                        on_decrease=move |value: u32| {
                                            handle_quantity(dec_id.clone(), value, value >= 1)
                                        }
                                        on_type=move |value: u32| {
                                            store_set_line_buy_count(&store, &type_id, value)
                                        }
                                        on_focus_out=Callback::new(move |value: u32| {
                                            let unchanged = server_cart
                                                .get_untracked()
                                                .iter()
                                                .find(|p| p.id == focus_id)
                                                .map(|p| p.buy_count == value)
                                                .unwrap_or(true);
                                            handle_quantity(
                                                focus_id.clone(),
                                                value,
                                                value >= 1 && value <= max && !unchanged,
                                            )
                                        })
                                    />
                                    <span class="cart-line-total">
                                        "₫" {format_currency(line.total())}
                                    </span>
                                    <button
                                        class="cart-delete-btn"
                                        on:click=move |_| handle_delete(vec![delete_id.clone()])
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="cart-footer">
                    <label class="cart-check-all">
                        <input
                            type="checkbox"
                            prop:checked=move || all_checked.get()
                            on:change=move |_| {
                                store_set_all_checked(&store, !all_checked.get_untracked());
                            }
                        />
                        "Select all (" {move || store.cart().get().len()} ")"
                    </label>
                    <button
                        class="cart-delete-btn"
                        on:click=move |_| {
                            handle_delete(cart::checked_ids(&store.cart().get_untracked()))
                        }
                    >
                        "Delete"
                    </button>
                    <div class="cart-totals">
                        <div class="cart-total-price">
                            "Total (" {move || checked_count.get()} " items): ₫"
                            {move || format_currency(total_price.get())}
                        </div>
                        <div class="cart-total-savings">
                            "Saved ₫" {move || format_currency(total_savings.get())}
                        </div>
                    </div>
                    <button
                        class="checkout-btn"
                        disabled=move || buying.get()
                        on:click=handle_buy
                    >
                        "Check out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
