//! Protected Route Wrapper
//!
//! Renders its children only when the session passes the access check,
//! otherwise redirects.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::guard::{guard_decision, Access, AccessDecision};

#[component]
pub fn Protected(access: Access, children: ChildrenFn) -> impl IntoView {
    let session = use_app_context().session;
    let navigate = use_navigate();
    let decision =
        Memo::new(move |_| guard_decision(&session.get(), access, session.is_signing_out()));

    Effect::new(move |_| {
        if let AccessDecision::Redirect { to, alert } = decision.get() {
            if let Some(message) = alert {
                show_alert(message);
            }
            log::info!("[GUARD] Redirecting to {}", to.path());
            navigate(to.path(), Default::default());
        }
    });

    view! {
        <Show when=move || decision.get().is_allowed()>
            {children()}
        </Show>
    }
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
