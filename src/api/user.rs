//! User Profile API Bindings

use serde::Serialize;

use super::ApiError;
use crate::models::{Envelope, User};

/// `PUT user` body; unset fields are left untouched server-side
#[derive(Debug, Default, Serialize)]
pub struct UpdateProfileBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

pub async fn profile() -> Result<Envelope<User>, ApiError> {
    super::get("me").await
}

pub async fn update_profile(body: &UpdateProfileBody) -> Result<Envelope<User>, ApiError> {
    super::put("user", body).await
}
