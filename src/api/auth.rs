//! Auth API Bindings

use serde::Serialize;

use super::ApiError;
use crate::models::{AuthData, Envelope, MessageOnly};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn register(email: &str, password: &str) -> Result<Envelope<AuthData>, ApiError> {
    super::post("register", &Credentials { email, password }).await
}

pub async fn login(email: &str, password: &str) -> Result<Envelope<AuthData>, ApiError> {
    super::post("login", &Credentials { email, password }).await
}

pub async fn logout() -> Result<MessageOnly, ApiError> {
    super::post("logout", &serde_json::json!({})).await
}
