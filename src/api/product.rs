//! Product & Category API Bindings

use super::ApiError;
use crate::models::{Category, Envelope, Product, ProductListData};
use crate::query::QueryConfig;

pub async fn list(config: &QueryConfig) -> Result<Envelope<ProductListData>, ApiError> {
    super::get(&format!("products?{}", config.to_query_string())).await
}

pub async fn detail(id: &str) -> Result<Envelope<Product>, ApiError> {
    super::get(&format!("products/{id}")).await
}

pub async fn categories() -> Result<Envelope<Vec<Category>>, ApiError> {
    super::get("categories").await
}
