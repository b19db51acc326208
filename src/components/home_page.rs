//! Home and Not Found Pages

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::guard::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_app_context().session;

    view! {
        <div class="container text-center py-5">
            <h1 class="display-4">"Welcome to QuickBite"</h1>
            <p class="lead">"Order fresh food from the campus canteen."</p>
            <div class="d-flex justify-content-center gap-2 mt-4">
                <a class="btn btn-primary btn-lg" href=Page::Menu.path()>"Browse Menu"</a>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| view! {
                        <a class="btn btn-outline-primary btn-lg" href=Page::Login.path()>
                            "Login"
                        </a>
                    }
                >
                    <a class="btn btn-outline-primary btn-lg" href=Page::Orders.path()>
                        "My Orders"
                    </a>
                </Show>
            </div>
        </div>
    }
}

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container text-center py-5">
            <h1 class="display-1 text-muted">"404"</h1>
            <p class="lead">"Page not found"</p>
            <a class="btn btn-primary" href=Page::Home.path()>"Go Home"</a>
        </div>
    }
}
