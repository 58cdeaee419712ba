//! Quantity Controller Component
//!
//! Stepper input bounded by available stock. Increase/decrease clamp before
//! notifying; direct typing goes through `on_type` only, and `on_focus_out`
//! fires when the input loses focus so the caller can commit typed values.

use leptos::prelude::*;

#[component]
pub fn QuantityController(
    /// Available stock; values clamp to 1..=max
    max: u32,
    #[prop(into)] value: Signal<u32>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_increase: Callback<u32>,
    #[prop(into)] on_decrease: Callback<u32>,
    #[prop(into)] on_type: Callback<u32>,
    #[prop(optional, into)] on_focus_out: Option<Callback<u32>>,
) -> impl IntoView {
    let (local, set_local) = signal(value.get_untracked());

    // follow external changes (refetch landing a new buy_count)
    Effect::new(move |_| set_local.set(value.get()));

    let clamp = move |v: u32| v.clamp(1, max.max(1));

    view! {
        <div class="quantity-controller">
            <button
                class="quantity-btn"
                disabled=move || disabled.get()
                on:click=move |_| {
                    let next = clamp(local.get_untracked().saturating_sub(1));
                    on_decrease.run(next);
                }
            >
                "−"
            </button>
            <input
                class="quantity-input"
                type="text"
                disabled=move || disabled.get()
                prop:value=move || local.get().to_string()
                on:input=move |ev| {
                    let typed = event_target_value(&ev)
                        .chars()
                        .filter(char::is_ascii_digit)
                        .collect::<String>()
                        .parse::<u32>()
                        .unwrap_or(1);
                    let typed = clamp(typed);
                    set_local.set(typed);
                    on_type.run(typed);
                }
                on:blur=move |_| {
                    if let Some(callback) = on_focus_out {
                        callback.run(local.get_untracked());
                    }
                }
            />
            <button
                class="quantity-btn"
                disabled=move || disabled.get()
                on:click=move |_| {
                    let next = clamp(local.get_untracked().saturating_add(1));
                    on_increase.run(next);
                }
            >
                "+"
            </button>
        </div>
    }
}
