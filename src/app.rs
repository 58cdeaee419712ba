//! Shopfront App
//!
//! Root component: session restore, route switching with auth guards, the
//! clear-session listener, and browser history sync.

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::auth;
use crate::components::{
    CartPage, ChangePassword, Header, Login, ProductDetail, ProductList, Profile,
    PurchaseHistory, Register, ToastStack,
};
use crate::context::AppContext;
use crate::query::QueryConfig;
use crate::route::{current_route, current_search, Route};
use crate::store::AppState;
use crate::toast::Toasts;

#[component]
pub fn App() -> impl IntoView {
    let store = reactive_stores::Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(
        current_route(),
        QueryConfig::from_search(&current_search()),
        store,
    );
    provide_context(ctx);
    provide_context(Toasts::new());

    // 401s anywhere purge the stored session and fire this event
    if let Some(window) = web_sys::window() {
        let on_clear = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            ctx.reset();
            ctx.sync_route(Route::Login);
        });
        let _ = window.add_event_listener_with_callback(
            auth::CLEAR_SESSION_EVENT,
            on_clear.as_ref().unchecked_ref(),
        );
        on_clear.forget();

        // back/forward buttons
        let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            ctx.sync_route(current_route());
        });
        let _ = window
            .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        on_popstate.forget();
    }

    view! {
        <div class="app-layout">
            <Header />
            <main class="page-content">
                {move || {
                    let route = ctx.route.get();
                    let authenticated = ctx.is_authenticated.get();
                    // auth guards: protected pages bounce to login,
                    // guest-only pages bounce home
                    if route.requires_auth() && !authenticated {
                        return view! { <Login /> }.into_any();
                    }
                    if route.guest_only() && authenticated {
                        return view! { <ProductList /> }.into_any();
                    }
                    match route {
                        Route::ProductList => view! { <ProductList /> }.into_any(),
                        Route::ProductDetail(slug) => {
                            view! { <ProductDetail slug=slug /> }.into_any()
                        }
                        Route::Cart => view! { <CartPage /> }.into_any(),
                        Route::Login => view! { <Login /> }.into_any(),
                        Route::Register => view! { <Register /> }.into_any(),
                        Route::Profile => view! { <Profile /> }.into_any(),
                        Route::ChangePassword => view! { <ChangePassword /> }.into_any(),
                        Route::PurchaseHistory => view! { <PurchaseHistory /> }.into_any(),
                    }
                }}
            </main>
            <ToastStack />
        </div>
    }
}
