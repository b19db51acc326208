//! Admin Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! latest dashboard snapshot; the stats cards and both admin tables read
//! from it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::handlers::admin::AdminSnapshot;
use crate::models::{MenuItem, Order, OrderStatus, User};
use crate::view::DashboardStats;

/// Admin page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    pub menu_items: Vec<MenuItem>,
    pub orders: Vec<Order>,
    pub users: Vec<User>,
    /// Set once the first dashboard load has finished
    pub loaded: bool,
}

pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

pub fn dashboard_stats(store: &AdminStore) -> DashboardStats {
    DashboardStats::compute(
        &store.menu_items().read(),
        &store.orders().read(),
        &store.users().read(),
    )
}

// ========================
// Store Helper Functions
// ========================

/// Replace everything with a freshly fetched snapshot
pub fn store_apply_snapshot(store: &AdminStore, snapshot: AdminSnapshot) {
    *store.menu_items().write() = snapshot.menu;
    *store.orders().write() = snapshot.orders;
    *store.users().write() = snapshot.users;
    *store.loaded().write() = true;
}

pub fn store_set_menu(store: &AdminStore, items: Vec<MenuItem>) {
    *store.menu_items().write() = items;
}

pub fn store_set_orders(store: &AdminStore, orders: Vec<Order>) {
    *store.orders().write() = orders;
}

/// Remove a menu item by ID ahead of the re-fetch
pub fn store_remove_menu_item(store: &AdminStore, id: &str) {
    store.menu_items().write().retain(|item| item.id != id);
}

/// Set an order's status by ID ahead of the re-fetch
pub fn store_set_order_status(store: &AdminStore, id: &str, status: OrderStatus) {
    if let Some(order) = store.orders().write().iter_mut().find(|o| o.id == id) {
        order.status = status;
    }
}
