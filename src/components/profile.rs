//! Profile Page
//!
//! Fetches the authoritative profile on mount and lets the user edit
//! name/phone/address/date of birth. Saves propagate to the context and
//! the persisted session snapshot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, user::UpdateProfileBody, ApiError};
use crate::auth;
use crate::components::{FormInput, UserSideNav};
use crate::context::AppContext;
use crate::rules;
use crate::toast::use_toasts;

fn some_if_filled(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = use_toasts();

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (date_of_birth, set_date_of_birth) = signal(String::new());
    let (name_error, set_name_error) = signal(Option::<String>::None);
    let (phone_error, set_phone_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::user::profile().await {
                Ok(res) => {
                    set_name.set(res.data.name.clone().unwrap_or_default());
                    set_phone.set(res.data.phone.clone().unwrap_or_default());
                    set_address.set(res.data.address.clone().unwrap_or_default());
                    // ISO timestamp from the server, yyyy-mm-dd for the date input
                    let dob = res.data.date_of_birth.clone().unwrap_or_default();
                    set_date_of_birth.set(dob.split('T').next().unwrap_or_default().to_string());
                    auth::save_profile(&res.data);
                    ctx.profile.set(Some(res.data));
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get_untracked();
        let name_invalid = rules::validate_name(&name_value);
        set_name_error.set(name_invalid.clone());
        if name_invalid.is_some() || submitting.get_untracked() {
            return;
        }
        let body = UpdateProfileBody {
            name: Some(name_value),
            phone: Some(phone.get_untracked()),
            address: Some(address.get_untracked()),
            date_of_birth: some_if_filled(date_of_birth.get_untracked()),
            ..Default::default()
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::user::update_profile(&body).await {
                Ok(res) => {
                    auth::save_profile(&res.data);
                    ctx.profile.set(Some(res.data));
                    toasts.success(res.message);
                }
                Err(err @ ApiError::Form { .. }) => {
                    set_name_error.set(err.field("name"));
                    set_phone_error.set(err.field("phone"));
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
                <div class="user-panel-title">"My profile"</div>
                <div class="user-panel-email">
                    "Email: " {move || ctx.profile.get().map(|u| u.email).unwrap_or_default()}
                </div>
                <FormInput
                    input_type="text"
                    placeholder="Name"
                    value=name
                    set_value=set_name
                    error=name_error
                />
                <FormInput
                    input_type="text"
                    placeholder="Phone"
                    value=phone
                    set_value=set_phone
                    error=phone_error
                />
                <FormInput
                    input_type="text"
                    placeholder="Address"
                    value=address
                    set_value=set_address
                    error=Signal::derive(|| None::<String>)
                />
                <div class="form-field">
                    <input
                        type="date"
                        prop:value=move || date_of_birth.get()
                        on:input=move |ev| set_date_of_birth.set(event_target_value(&ev))
                    />
                </div>
                <button class="user-submit" type="submit" disabled=move || submitting.get()>
                    "Save"
                </button>
            </form>
        </div>
    }
}
