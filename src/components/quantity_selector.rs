//! Quantity Selector Component
//!
//! −/+ stepper bounded to the orderable range.

use leptos::prelude::*;

use crate::validation::Quantity;

#[component]
pub fn QuantitySelector(
    quantity: RwSignal<Quantity>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="input-group input-group-sm quantity-selector">
            <button
                type="button"
                class="btn btn-outline-secondary"
                disabled=move || disabled.get() || !quantity.get().can_decrement()
                on:click=move |_| quantity.update(|q| *q = q.decrement())
            >
                "−"
            </button>
            <span class="form-control text-center">{move || quantity.get().get()}</span>
            <button
                type="button"
                class="btn btn-outline-secondary"
                disabled=move || disabled.get() || !quantity.get().can_increment()
                on:click=move |_| quantity.update(|q| *q = q.increment())
            >
                "+"
            </button>
        </div>
    }
}
