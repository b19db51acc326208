//! Confirm Button Component
//!
//! Inline two-step confirmation for destructive or irreversible actions.

use leptos::prelude::*;

/// Inline confirmation button
///
/// Shows `label` initially. When clicked, shows `prompt` with Yes/No
/// buttons; only Yes runs `on_confirm`.
///
/// # Arguments
/// * `label` - Text of the initial button (e.g., "Delete" or "Approve")
/// * `button_class` - CSS class for the initial button
/// * `prompt` - Question shown while confirming (e.g., "Reject this order?")
/// * `disabled` - Disables the initial button (action not allowed, or busy)
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] button_class: String,
    #[prop(into)] prompt: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="inline-confirm">
                <span class="inline-confirm-text me-1">{prompt.clone()}</span>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-success"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary ms-1"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
