//! Toast Overlay Component
//!
//! Top-right stack of notifications. The container only exists while
//! there is something to show.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastOverlay() -> impl IntoView {
    let notifier = use_app_context().notifier;

    view! {
        <Show when=move || !notifier.is_empty()>
            <div class="toast-container position-fixed top-0 end-0 p-3">
                <For
                    each=move || notifier.toasts()
                    key=|toast| toast.id
                    children=move |toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=format!("{} show", toast.severity.css_class())
                                role="alert"
                            >
                                <div class="d-flex">
                                    <div class="toast-body">{toast.message}</div>
                                    <button
                                        type="button"
                                        class="btn-close btn-close-white me-2 m-auto"
                                        on:click=move |_| notifier.dismiss(id)
                                    ></button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
