//! Application Context
//!
//! Shared session state provided via the Leptos Context API: auth flags,
//! the current route, the product list query, and the cart refetch trigger.

use leptos::prelude::*;

use crate::auth;
use crate::models::User;
use crate::query::QueryConfig;
use crate::route::Route;
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub route: RwSignal<Route>,
    pub is_authenticated: RwSignal<bool>,
    pub profile: RwSignal<Option<User>>,
    /// Product list filter/sort/paging state
    pub query: RwSignal<QueryConfig>,
    /// Purchase id carried by a buy-now navigation, consumed by one cart mount
    pub cart_preselected: RwSignal<Option<String>>,
    /// Bumped to trigger a cart refetch
    pub cart_reload: RwSignal<u32>,
    store: AppStore,
}

impl AppContext {
    /// Build the context, restoring any persisted session
    pub fn new(initial_route: Route, initial_query: QueryConfig, store: AppStore) -> Self {
        let token = auth::access_token();
        let profile = auth::load_profile();
        Self {
            route: RwSignal::new(initial_route),
            is_authenticated: RwSignal::new(token.is_some()),
            profile: RwSignal::new(profile),
            query: RwSignal::new(initial_query),
            cart_preselected: RwSignal::new(None),
            cart_reload: RwSignal::new(0),
            store,
        }
    }

    /// Switch routes and mirror the new path into the browser history
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&route.to_path()),
                );
            }
        }
        self.route.set(route);
    }

    /// Route change coming from the browser itself (popstate); no push
    pub fn sync_route(&self, route: Route) {
        self.route.set(route);
    }

    /// Trigger a cart refetch
    pub fn reload_cart(&self) {
        self.cart_reload.update(|v| *v += 1);
    }

    /// Mark the session signed in after a successful login/register
    pub fn sign_in(&self, user: User) {
        self.is_authenticated.set(true);
        self.profile.set(Some(user));
    }

    /// Clear-session reset: auth flags, profile, and the cart sequence
    pub fn reset(&self) {
        self.is_authenticated.set(false);
        self.profile.set(None);
        self.cart_preselected.set(None);
        self.store.cart().set(Vec::new());
    }
}
