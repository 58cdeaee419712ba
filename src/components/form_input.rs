//! Form Input Component
//!
//! Text input with an attached validation-error line.

use leptos::prelude::*;

#[component]
pub fn FormInput(
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
            <div class="form-error">{move || error.get().unwrap_or_default()}</div>
        </div>
    }
}
