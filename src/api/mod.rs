//! REST API Bindings
//!
//! Thin fetch wrappers over the storefront backend, organized by domain.
//! Every call attaches the stored access token and decodes the shared
//! response envelopes; a 401 purges the session before surfacing.

pub mod auth;
pub mod product;
pub mod purchase;
pub mod user;

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::auth as session;
use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fetch failed before a response arrived
    Network(String),
    /// Response body did not match the expected shape
    Decode(String),
    /// 401; the stored session has already been purged
    Unauthorized,
    /// 422 with per-field messages
    Form {
        message: String,
        fields: HashMap<String, String>,
    },
    /// Any other non-2xx status
    Server { status: u16, message: String },
}

impl ApiError {
    /// Field-level message from a 422, if any
    pub fn field(&self, name: &str) -> Option<String> {
        match self {
            ApiError::Form { fields, .. } => fields.get(name).cloned(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "Network error: {detail}"),
            ApiError::Decode(detail) => write!(f, "Unexpected response: {detail}"),
            ApiError::Unauthorized => write!(f, "Session expired, please sign in again"),
            ApiError::Form { message, .. } | ApiError::Server { message, .. } => {
                write!(f, "{message}")
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<HashMap<String, String>>,
}

pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    dispatch("GET", path, None).await
}

pub(crate) async fn post<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    dispatch("POST", path, Some(encode(body)?)).await
}

pub(crate) async fn put<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    dispatch("PUT", path, Some(encode(body)?)).await
}

pub(crate) async fn delete_with_body<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    dispatch("DELETE", path, Some(encode(body)?)).await
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))
}

async fn dispatch<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);

    let headers = Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    if let Some(token) = session::access_token() {
        headers.set("authorization", &token).map_err(js_err)?;
    }
    init.set_headers(&headers);
    if let Some(payload) = &body {
        init.set_body(&JsValue::from_str(payload));
    }

    let url = format!("{}{}", config::BASE_URL, path);
    let request = Request::new_with_str_and_init(&url, &init).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not yield a Response".to_string()))?;

    let status = response.status();
    if response.ok() {
        let body = JsFuture::from(response.json().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        return serde_wasm_bindgen::from_value(body)
            .map_err(|err| ApiError::Decode(err.to_string()));
    }

    web_sys::console::warn_1(&format!("[API] {method} {path} -> {status}").into());
    // the error body may be empty or non-JSON
    let parsed = match response.json() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(body) => serde_wasm_bindgen::from_value::<ErrorBody>(body).unwrap_or_default(),
            Err(_) => ErrorBody::default(),
        },
        Err(_) => ErrorBody::default(),
    };
    let message = if parsed.message.is_empty() {
        format!("HTTP {status}")
    } else {
        parsed.message
    };
    match status {
        401 => {
            session::purge_session();
            Err(ApiError::Unauthorized)
        }
        422 => Err(ApiError::Form {
            message,
            fields: parsed.data.unwrap_or_default(),
        }),
        _ => Err(ApiError::Server { status, message }),
    }
}

fn js_err(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}
