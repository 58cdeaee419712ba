//! App Configuration
//!
//! Compile-time constants for the REST backend.

/// Base URL of the storefront REST API, trailing slash included
pub const BASE_URL: &str = "https://api-ecom.duthanhduoc.com/";

/// Default page size for product listings
pub const DEFAULT_PAGE_LIMIT: u32 = 20;
