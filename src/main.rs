//! Shopfront Frontend Entry Point

mod api;
mod app;
mod auth;
mod cart;
mod components;
mod config;
mod context;
mod format;
mod models;
mod query;
mod route;
mod rules;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
