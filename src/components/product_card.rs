//! Product Card Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::format::{format_currency, format_social, generate_name_id};
use crate::models::Product;
use crate::route::Route;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let slug = generate_name_id(&product.name, &product.id);

    view! {
        <div
            class="product-card"
            on:click=move |_| ctx.navigate(Route::ProductDetail(slug.clone()))
        >
            <img class="product-card-image" src=product.image.clone() alt=product.name.clone() />
            <div class="product-card-body">
                <div class="product-card-name">{product.name.clone()}</div>
                <div class="product-card-price">
                    <span class="price-old">
                        "₫" {format_currency(product.price_before_discount)}
                    </span>
                    <span class="price-current">"₫" {format_currency(product.price)}</span>
                </div>
                <div class="product-card-meta">
                    <span class="product-rating">{format!("{:.1}", product.rating)} "★"</span>
                    <span class="product-sold">{format_social(product.sold)} " sold"</span>
                </div>
            </div>
        </div>
    }
}
