//! Header Component
//!
//! Logo, product search, cart entry with a line count badge, and the
//! auth-aware account menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (search, set_search) = signal(String::new());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let term = search.get_untracked();
        ctx.query.update(|q| q.set_search_name(term));
        ctx.navigate(Route::ProductList);
    };

    let on_logout = move |_| {
        spawn_local(async move {
            // the local session goes away even if the API call fails
            let _ = api::auth::logout().await;
            auth::clear_storage();
            ctx.reset();
            ctx.navigate(Route::ProductList);
        });
    };

    view! {
        <header class="app-header">
            <button class="logo" on:click=move |_| ctx.navigate(Route::ProductList)>
                "Shopfront"
            </button>

            <form class="search-form" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Search products"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>

            <button class="cart-link" on:click=move |_| ctx.navigate(Route::Cart)>
                "Cart"
                <span class="cart-badge">{move || store.cart().get().len()}</span>
            </button>

            {move || {
                if ctx.is_authenticated.get() {
                    let display_name = ctx
                        .profile
                        .get()
                        .map(|user| user.display_name().to_string())
                        .unwrap_or_default();
                    view! {
                        <div class="account-menu">
                            <button
                                class="account-name"
                                on:click=move |_| ctx.navigate(Route::Profile)
                            >
                                {display_name}
                            </button>
                            <button class="logout-btn" on:click=on_logout>
                                "Logout"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="account-menu">
                            <button
                                class="link-btn"
                                on:click=move |_| ctx.navigate(Route::Login)
                            >
                                "Sign in"
                            </button>
                            <button
                                class="link-btn"
                                on:click=move |_| ctx.navigate(Route::Register)
                            >
                                "Register"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </header>
    }
}
