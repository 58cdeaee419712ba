//! User Side Navigation
//!
//! Shared sidebar for the account pages.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn UserSideNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let nav_links = [
        (Route::Profile, "My profile"),
        (Route::ChangePassword, "Change password"),
        (Route::PurchaseHistory, "My purchases"),
    ];

    view! {
        <nav class="user-side-nav">
            <div class="user-side-profile">
                {move || {
                    ctx.profile
                        .get()
                        .map(|user| user.display_name().to_string())
                        .unwrap_or_default()
                }}
            </div>
            {nav_links
                .into_iter()
                .map(|(route, label)| {
                    let target = route.clone();
                    view! {
                        <button
                            class=move || {
                                if ctx.route.get() == route {
                                    "user-nav-link active"
                                } else {
                                    "user-nav-link"
                                }
                            }
                            on:click=move |_| ctx.navigate(target.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
