//! Frontend Models
//!
//! Data structures matching the REST backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// Product category as returned by `GET categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub price: u64,
    pub price_before_discount: u64,
    /// Available stock
    pub quantity: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub sold: u64,
    #[serde(default)]
    pub view: u64,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// A single cart/order line as returned by the purchases endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(rename = "_id")]
    pub id: String,
    pub buy_count: u32,
    pub price: u64,
    pub price_before_discount: u64,
    /// Lifecycle tag, see [`purchase_status`]
    pub status: i32,
    #[serde(default)]
    pub user: String,
    pub product: Product,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// Purchase lifecycle status tags used by `GET purchases?status=`
pub mod purchase_status {
    pub const IN_CART: i32 = -1;
    pub const ALL: i32 = 0;
    pub const WAIT_FOR_CONFIRMATION: i32 = 1;
    pub const WAIT_FOR_GETTING: i32 = 2;
    pub const IN_PROGRESS: i32 = 3;
    pub const DELIVERED: i32 = 4;
    pub const CANCELLED: i32 = 5;
}

/// Authenticated user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

impl User {
    /// Display name, falling back to the email address
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Success envelope wrapping every 2xx response body
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

/// Response body for endpoints that only return a message
#[derive(Debug, Clone, Deserialize)]
pub struct MessageOnly {
    pub message: String,
}

/// `login`/`register` payload
#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    pub access_token: String,
    pub user: User,
}

/// `GET products` payload
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListData {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub page_size: u32,
}

/// `DELETE purchases` payload
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeletedCount {
    pub deleted_count: u32,
}

/// One checkout entry for `POST purchases/buy-products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuyItem {
    pub product_id: String,
    pub buy_count: u32,
}
