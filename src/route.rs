//! Route Definitions
//!
//! In-app navigation targets and their URL paths. The app keeps the current
//! route in a context signal and mirrors it into the browser history.

use crate::format::extract_id_from_slug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ProductList,
    /// Product detail addressed by its `name-i-id` slug
    ProductDetail(String),
    Cart,
    Login,
    Register,
    Profile,
    ChangePassword,
    PurchaseHistory,
}

impl Route {
    pub fn to_path(&self) -> String {
        match self {
            Route::ProductList => "/".to_string(),
            Route::ProductDetail(slug) => format!("/{slug}"),
            Route::Cart => "/cart".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Profile => "/user/profile".to_string(),
            Route::ChangePassword => "/user/password".to_string(),
            Route::PurchaseHistory => "/user/purchase".to_string(),
        }
    }

    /// Map a location pathname back to a route. Unknown paths fall back to
    /// the product list.
    pub fn from_path(path: &str) -> Route {
        match path {
            "" | "/" => Route::ProductList,
            "/cart" => Route::Cart,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/user/profile" => Route::Profile,
            "/user/password" => Route::ChangePassword,
            "/user/purchase" => Route::PurchaseHistory,
            other => {
                let slug = other.trim_start_matches('/');
                if extract_id_from_slug(slug).is_some() {
                    Route::ProductDetail(slug.to_string())
                } else {
                    Route::ProductList
                }
            }
        }
    }

    /// Routes that require a signed-in session
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Cart | Route::Profile | Route::ChangePassword | Route::PurchaseHistory
        )
    }

    /// Routes only reachable while signed out
    pub fn guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

/// Current route from the browser location; product list when unavailable
pub fn current_route() -> Route {
    match web_sys::window().and_then(|w| w.location().pathname().ok()) {
        Some(path) => Route::from_path(&path),
        None => Route::ProductList,
    }
}

/// Current location search string (`?a=b`), empty when unavailable
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::ProductList,
            Route::ProductDetail("shirt-i-abc123".to_string()),
            Route::Cart,
            Route::Login,
            Route::Register,
            Route::Profile,
            Route::ChangePassword,
            Route::PurchaseHistory,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_unknown_path_falls_back_to_list() {
        assert_eq!(Route::from_path("/not-a-slug"), Route::ProductList);
        assert_eq!(Route::from_path("/a/b/c"), Route::ProductList);
    }

    #[test]
    fn test_guards() {
        assert!(Route::Cart.requires_auth());
        assert!(Route::Profile.requires_auth());
        assert!(!Route::ProductList.requires_auth());
        assert!(Route::Login.guest_only());
        assert!(!Route::Cart.guest_only());
    }
}
