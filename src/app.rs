//! QuickBite Frontend App
//!
//! Router, shared context and the page shell.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{
    AdminPage, HomePage, LoginPage, MenuPage, NavBar, NotFound, OrdersPage, Protected,
    RegisterPage, ToastOverlay,
};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::guard::Access;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    log::info!("[APP] Starting with backend at '{}'", config.api_base);
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <NavBar />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/menu") view=MenuPage />
                    <Route
                        path=path!("/orders")
                        view=|| view! {
                            <Protected access=Access::Authenticated>
                                <OrdersPage />
                            </Protected>
                        }
                    />
                    <Route
                        path=path!("/admin")
                        view=|| view! {
                            <Protected access=Access::Admin>
                                <AdminPage />
                            </Protected>
                        }
                    />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                </Routes>
            </main>
            <ToastOverlay />
        </Router>
    }
}
