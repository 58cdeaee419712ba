//! Product Detail Page
//!
//! Image gallery, quantity selection, add-to-cart, and buy-now. Buy-now
//! adds the item and lands on the cart with that purchase pre-selected.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::QuantityController;
use crate::context::AppContext;
use crate::format::{extract_id_from_slug, format_currency, format_social};
use crate::models::Product;
use crate::route::Route;
use crate::toast::use_toasts;

#[component]
pub fn ProductDetail(slug: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();

    let product_id = extract_id_from_slug(&slug).unwrap_or_default().to_string();
    let (product, set_product) = signal(Option::<Product>::None);
    let (active_image, set_active_image) = signal(String::new());
    let (buy_count, set_buy_count) = signal(1u32);

    Effect::new(move |_| {
        let id = product_id.clone();
        spawn_local(async move {
            match api::product::detail(&id).await {
                Ok(res) => {
                    set_active_image.set(res.data.image.clone());
                    set_product.set(Some(res.data));
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    // shared by add-to-cart and buy-now
    let add_to_cart = move |navigate_to_cart: bool| {
        let Some(product) = product.get_untracked() else {
            return;
        };
        let count = buy_count.get_untracked();
        spawn_local(async move {
            match api::purchase::add_to_cart(&product.id, count).await {
                Ok(res) => {
                    if navigate_to_cart {
                        ctx.cart_preselected.set(Some(res.data.id));
                        ctx.navigate(Route::Cart);
                    } else {
                        toasts.success(res.message);
                    }
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="product-detail-page">
            {move || {
                product
                    .get()
                    .map(|product| {
                        let max = product.quantity;
                        let thumbnails = product.images.clone();
                        view! {
                            <div class="product-detail">
                                <div class="product-gallery">
                                    <img
                                        class="product-image-main"
                                        src=move || active_image.get()
                                        alt=product.name.clone()
                                    />
                                    <div class="product-thumbnails">
                                        {thumbnails
                                            .into_iter()
                                            .map(|image| {
                                                let src = image.clone();
                                                view! {
                                                    <img
                                                        class=move || {
                                                            if active_image.get() == image {
                                                                "product-thumbnail active"
                                                            } else {
                                                                "product-thumbnail"
                                                            }
                                                        }
                                                        src=src.clone()
                                                        on:mouseenter=move |_| set_active_image.set(src.clone())
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div class="product-info">
                                    <h1 class="product-title">{product.name.clone()}</h1>
                                    <div class="product-stats">
                                        <span>{format!("{:.1} ★", product.rating)}</span>
                                        <span>{format_social(product.sold)} " sold"</span>
                                    </div>
                                    <div class="product-prices">
                                        <span class="price-old">
                                            "₫" {format_currency(product.price_before_discount)}
                                        </span>
                                        <span class="price-current">
                                            "₫" {format_currency(product.price)}
                                        </span>
                                    </div>
                                    <div class="product-quantity-row">
                                        <span>"Quantity"</span>
                                        <QuantityController
                                            max=max
                                            value=buy_count
                                            disabled=Signal::derive(|| false)
                                            on_increase=move |value: u32| set_buy_count.set(value)
                                            on_decrease=move |value: u32| set_buy_count.set(value)
                                            on_type=move |value: u32| set_buy_count.set(value)
                                        />
                                        <span class="stock-note">
                                            {format_currency(u64::from(max))} " pieces available"
                                        </span>
                                    </div>
                                    <div class="product-actions">
                                        <button class="add-to-cart-btn" on:click=move |_| add_to_cart(false)>
                                            "Add to cart"
                                        </button>
                                        <button class="buy-now-btn" on:click=move |_| add_to_cart(true)>
                                            "Buy now"
                                        </button>
                                    </div>
                                    <div class="product-description">{product.description.clone()}</div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
