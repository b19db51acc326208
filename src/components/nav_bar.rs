//! Navigation Bar Component
//!
//! Role-aware links, the signed-in user badge and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::guard::{nav_entries, NavEntry, Page};
use crate::handlers;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let logging_out = RwSignal::new(false);

    let on_logout = move |_: web_sys::MouseEvent| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        ctx.notifier.show(ctx.session.sign_out());

        let api = ctx.api();
        spawn_local(async move {
            handlers::auth::end_backend_session(&api).await;
        });

        let delay_ms = ctx.config().logout_delay_ms;
        let navigate = navigate.clone();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            logging_out.set(false);
            navigate(Page::Home.path(), Default::default());
            ctx.session.finish_sign_out();
        });
    };

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-primary mb-4">
            <div class="container">
                <a class="navbar-brand" href="/">"🍽️ QuickBite"</a>
                <ul class="navbar-nav ms-auto align-items-center">
                    {move || {
                        nav_entries(&ctx.session.get())
                            .into_iter()
                            .map(|entry| match entry {
                                NavEntry::Link { label, page } => view! {
                                    <li class="nav-item">
                                        <a class="nav-link" href=page.path()>{label}</a>
                                    </li>
                                }
                                .into_any(),
                                NavEntry::User(badge) => view! {
                                    <li class="nav-item">
                                        <span class="nav-link text-light">
                                            <i class="bi bi-person-circle"></i>" "{badge}
                                        </span>
                                    </li>
                                }
                                .into_any(),
                                NavEntry::Logout => view! {
                                    <li class="nav-item">
                                        <button
                                            class="btn btn-outline-light btn-sm ms-2"
                                            disabled=move || logging_out.get()
                                            on:click=on_logout.clone()
                                        >
                                            "Logout"
                                        </button>
                                    </li>
                                }
                                .into_any(),
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </nav>
    }
}
