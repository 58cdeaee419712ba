//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The extended
//! cart line sequence lives here: it is rebuilt by reconciliation whenever
//! fresh server data lands, and mutated in place only for the two narrow
//! optimistic paths (checked toggles, disabled/typed-quantity echoes).

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::CartLine;

/// Session-scoped shared state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Extended cart lines for the current session
    pub cart: Vec<CartLine>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole cart sequence (reconciliation output)
pub fn store_set_cart(store: &AppStore, lines: Vec<CartLine>) {
    store.cart().set(lines);
}

pub fn store_set_line_checked(store: &AppStore, purchase_id: &str, checked: bool) {
    if let Some(line) = store
        .cart()
        .write()
        .iter_mut()
        .find(|line| line.id() == purchase_id)
    {
        line.checked = checked;
    }
}

pub fn store_set_all_checked(store: &AppStore, checked: bool) {
    for line in store.cart().write().iter_mut() {
        line.checked = checked;
    }
}

pub fn store_set_line_disabled(store: &AppStore, purchase_id: &str, disabled: bool) {
    if let Some(line) = store
        .cart()
        .write()
        .iter_mut()
        .find(|line| line.id() == purchase_id)
    {
        line.disabled = disabled;
    }
}

/// Echo a directly typed quantity for display; no server round-trip
pub fn store_set_line_buy_count(store: &AppStore, purchase_id: &str, buy_count: u32) {
    if let Some(line) = store
        .cart()
        .write()
        .iter_mut()
        .find(|line| line.id() == purchase_id)
    {
        line.purchase.buy_count = buy_count;
    }
}
