//! Admin Page Component
//!
//! Dashboard cards, menu management and order handling. One concurrent
//! load fills the admin store; mutations re-fetch the list they touched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::context::{use_app_context, AppContext};
use crate::handlers;
use crate::store::{
    dashboard_stats, store_apply_snapshot, store_set_menu, store_set_orders, AdminState,
    AdminStore,
};
use crate::tasks::TaskAction;

use super::{AddMenuItemForm, AdminMenuTable, AdminOrdersTable};

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let store: AdminStore = Store::new(AdminState::default());
    provide_context(store);
    let load_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let api = ctx.api();
        let session = ctx.session.get_untracked();
        let tasks = ctx.tasks();
        let ticket = tasks.begin(TaskAction::LoadDashboard, "");
        spawn_local(async move {
            let result = handlers::admin::load_dashboard(&api, &session).await;
            if !tasks.finish(&ticket) {
                return;
            }
            match result {
                Ok(snapshot) => {
                    load_error.set(None);
                    store_apply_snapshot(&store, snapshot);
                }
                Err(e) => {
                    log::error!("[ADMIN] Dashboard load failed: {}", e);
                    load_error.set(Some(e.to_string()));
                    ctx.notifier.error(&e);
                }
            }
        });
    });

    view! {
        <div class="container">
            <h2 class="mb-4"><i class="bi bi-speedometer2"></i>" Admin Dashboard"</h2>
            {move || load_error.get().map(|message| view! {
                <div class="alert alert-danger">
                    <i class="bi bi-exclamation-triangle"></i>" "{message}
                </div>
            })}
            <DashboardCards store=store />
            <div class="row">
                <div class="col-lg-4 mb-4">
                    <AddMenuItemForm />
                </div>
                <div class="col-lg-8 mb-4">
                    <AdminMenuTable />
                </div>
            </div>
            <AdminOrdersTable />
        </div>
    }
}

fn stat_card(
    title: &'static str,
    icon: &'static str,
    tone: &'static str,
    count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="col-md-3 col-sm-6 mb-3">
            <div class=format!("card text-white bg-{} h-100", tone)>
                <div class="card-body">
                    <h6 class="card-title"><i class=icon></i>" "{title}</h6>
                    <h2 class="mb-0">{move || count.get()}</h2>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DashboardCards(store: AdminStore) -> impl IntoView {
    let stats = Memo::new(move |_| dashboard_stats(&store));
    let menu_items = Signal::derive(move || stats.get().menu_items);
    let total_orders = Signal::derive(move || stats.get().total_orders);
    let pending_orders = Signal::derive(move || stats.get().pending_orders);
    let users = Signal::derive(move || stats.get().users);

    view! {
        <div class="row mb-4">
            {stat_card("Menu Items", "bi bi-list-ul", "primary", menu_items)}
            {stat_card("Total Orders", "bi bi-bag", "success", total_orders)}
            {stat_card("Pending Orders", "bi bi-clock-history", "warning", pending_orders)}
            {stat_card("Users", "bi bi-people", "info", users)}
        </div>
    }
}

// ========================
// Re-fetch helpers
// ========================

/// Reload the menu list into the store
pub(super) fn refresh_menu(ctx: AppContext, store: AdminStore) {
    let api = ctx.api();
    let session = ctx.session.get_untracked();
    let tasks = ctx.tasks();
    let ticket = tasks.begin(TaskAction::LoadMenu, "admin");
    spawn_local(async move {
        let result = handlers::admin::load_admin_menu(&api, &session).await;
        if !tasks.finish(&ticket) {
            return;
        }
        match result {
            Ok(items) => store_set_menu(&store, items),
            Err(e) => ctx.notifier.error(&e),
        }
    });
}

/// Reload all orders into the store
pub(super) fn refresh_orders(ctx: AppContext, store: AdminStore) {
    let api = ctx.api();
    let session = ctx.session.get_untracked();
    let tasks = ctx.tasks();
    let ticket = tasks.begin(TaskAction::LoadOrders, "all");
    spawn_local(async move {
        let result = handlers::admin::load_all_orders(&api, &session).await;
        if !tasks.finish(&ticket) {
            return;
        }
        match result {
            Ok(orders) => store_set_orders(&store, orders),
            Err(e) => ctx.notifier.error(&e),
        }
    });
}
