//! Change Password Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, user::UpdateProfileBody, ApiError};
use crate::components::{FormInput, UserSideNav};
use crate::rules;
use crate::toast::use_toasts;

#[component]
pub fn ChangePassword() -> impl IntoView {
    let toasts = use_toasts();

    let (password, set_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (new_password_error, set_new_password_error) = signal(Option::<String>::None);
    let (confirm_error, set_confirm_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let password_value = password.get_untracked();
        let new_value = new_password.get_untracked();
        let confirm_value = confirm.get_untracked();
        let password_invalid = rules::validate_password(&password_value);
        let new_invalid = rules::validate_password(&new_value);
        let confirm_invalid = rules::validate_confirm_password(&new_value, &confirm_value);
        set_password_error.set(password_invalid.clone());
        set_new_password_error.set(new_invalid.clone());
        set_confirm_error.set(confirm_invalid.clone());
        if password_invalid.is_some()
            || new_invalid.is_some()
            || confirm_invalid.is_some()
            || submitting.get_untracked()
        {
            return;
        }
        let body = UpdateProfileBody {
            password: Some(password_value),
            new_password: Some(new_value),
            ..Default::default()
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::user::update_profile(&body).await {
                Ok(res) => {
                    set_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm.set(String::new());
                    toasts.success(res.message);
                }
                Err(err @ ApiError::Form { .. }) => {
                    set_password_error.set(err.field("password"));
                    set_new_password_error.set(err.field("new_password"));
                }
                Err(err) => toasts.error(err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="user-page">
            <UserSideNav />
            <form class="user-panel" on:submit=on_submit novalidate>
                <div class="user-panel-title">"Change password"</div>
                <FormInput
                    input_type="password"
                    placeholder="Current password"
                    value=password
                    set_value=set_password
                    error=password_error
                />
                <FormInput
                    input_type="password"
                    placeholder="New password"
                    value=new_password
                    set_value=set_new_password
                    error=new_password_error
                />
                <FormInput
                    input_type="password"
                    placeholder="Confirm new password"
                    value=confirm
                    set_value=set_confirm
                    error=confirm_error
                />
                <button class="user-submit" type="submit" disabled=move || submitting.get()>
                    "Update"
                </button>
            </form>
        </div>
    }
}
