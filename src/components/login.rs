//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::auth;
use crate::components::FormInput;
use crate::context::AppContext;
use crate::route::Route;
use crate::rules;
use crate::toast::use_toasts;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(Option::<String>::None);
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let email_invalid = rules::validate_email(&email_value);
        let password_invalid = rules::validate_password(&password_value);
        set_email_error.set(email_invalid.clone());
        set_password_error.set(password_invalid.clone());
        if email_invalid.is_some() || password_invalid.is_some() || submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            match api::auth::login(&email_value, &password_value).await {
                Ok(res) => {
                    auth::save_session(&res.data.access_token, &res.data.user);
                    ctx.sign_in(res.data.user);
                    ctx.navigate(Route::ProductList);
                }
                Err(err @ ApiError::Form { .. }) => {
                    set_email_error.set(err.field("email"));
                    set_password_error.set(err.field("password"));
                }
                Err(err) => toasts.error(err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit novalidate>
                <div class="auth-title">"Sign in"</div>
                <FormInput
                    input_type="email"
                    placeholder="Email"
                    value=email
                    set_value=set_email
                    error=email_error
                />
                <FormInput
                    input_type="password"
                    placeholder="Password"
                    value=password
                    set_value=set_password
                    error=password_error
                />
                <button class="auth-submit" type="submit" disabled=move || submitting.get()>
                    "Sign in"
                </button>
                <div class="auth-switch">
                    <span>"New here?"</span>
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| ctx.navigate(Route::Register)
                    >
                        "Create an account"
                    </button>
                </div>
            </form>
        </div>
    }
}
