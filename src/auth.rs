//! Session Persistence
//!
//! Access token and profile snapshot in `localStorage`, plus the
//! clear-session browser event the fetch layer fires on a 401 so the app
//! can reset its context.

use web_sys::Storage;

use crate::models::User;

const TOKEN_KEY: &str = "access_token";
const PROFILE_KEY: &str = "profile";

/// Window event dispatched after the session is purged
pub const CLEAR_SESSION_EVENT: &str = "clear-session";

fn storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn access_token() -> Option<String> {
    storage()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn load_profile() -> Option<User> {
    let raw = storage().and_then(|s| s.get_item(PROFILE_KEY).ok().flatten())?;
    serde_json::from_str(&raw).ok()
}

/// Persist token and profile after a successful login/register
pub fn save_session(token: &str, user: &User) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    save_profile(user);
}

pub fn save_profile(user: &User) {
    let Some(storage) = storage() else { return };
    match serde_json::to_string(user) {
        Ok(raw) => {
            let _ = storage.set_item(PROFILE_KEY, &raw);
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("[AUTH] profile not saved: {err}").into());
        }
    }
}

pub fn clear_storage() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(PROFILE_KEY);
    }
}

/// Drop the stored session and notify the app (context reset is wired up
/// as a window listener on [`CLEAR_SESSION_EVENT`]).
pub fn purge_session() {
    clear_storage();
    if let Some(window) = web_sys::window() {
        if let Ok(event) = web_sys::CustomEvent::new(CLEAR_SESSION_EVENT) {
            let _ = window.dispatch_event(&event);
        }
    }
}
