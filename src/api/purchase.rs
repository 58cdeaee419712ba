//! Purchase (Cart) API Bindings

use serde::Serialize;

use super::ApiError;
use crate::models::{BuyItem, DeletedCount, Envelope, Purchase};

#[derive(Serialize)]
struct CartItemBody<'a> {
    product_id: &'a str,
    buy_count: u32,
}

/// In-cart (or historical) purchases for the current user, filtered by
/// lifecycle status
pub async fn list(status: i32) -> Result<Envelope<Vec<Purchase>>, ApiError> {
    super::get(&format!("purchases?status={status}")).await
}

pub async fn add_to_cart(product_id: &str, buy_count: u32) -> Result<Envelope<Purchase>, ApiError> {
    super::post(
        "purchases/add-to-cart",
        &CartItemBody {
            product_id,
            buy_count,
        },
    )
    .await
}

pub async fn update(product_id: &str, buy_count: u32) -> Result<Envelope<Purchase>, ApiError> {
    super::put(
        "purchases/update-purchase",
        &CartItemBody {
            product_id,
            buy_count,
        },
    )
    .await
}

/// Batch delete by purchase id
pub async fn delete(purchase_ids: &[String]) -> Result<Envelope<DeletedCount>, ApiError> {
    super::delete_with_body("purchases", purchase_ids).await
}

/// Checkout: one entry per checked cart line
pub async fn buy_products(items: &[BuyItem]) -> Result<Envelope<Vec<Purchase>>, ApiError> {
    super::post("purchases/buy-products", items).await
}
