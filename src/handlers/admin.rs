//! Admin Handlers
//!
//! Dashboard loading, menu management and order status changes. Every
//! handler checks the session role before sending anything; the backend
//! checks it again.

use crate::api::{MenuApi, OrderApi, QuickBiteApi};
use crate::error::{CommandResult, ValidationError};
use crate::models::{MenuItem, Order, User};
use crate::session::Session;
use crate::validation::validate_menu_item;
use crate::view::StatusAction;

use super::{require_admin, Feedback};

/// Everything the admin page shows, fetched together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminSnapshot {
    pub menu: Vec<MenuItem>,
    pub orders: Vec<Order>,
    pub users: Vec<User>,
}

/// Fetch menu, orders and users concurrently. Fails if any of them fails.
pub async fn load_dashboard<A: QuickBiteApi>(
    api: &A,
    session: &Session,
) -> CommandResult<AdminSnapshot> {
    require_admin(session)?;
    let (menu, orders, users) =
        futures::join!(api.list_menu(), api.list_all_orders(), api.list_users());
    let snapshot = AdminSnapshot {
        menu: menu?,
        orders: orders?,
        users: users?,
    };
    log::info!(
        "[ADMIN] Dashboard: {} items, {} orders, {} users",
        snapshot.menu.len(),
        snapshot.orders.len(),
        snapshot.users.len()
    );
    Ok(snapshot)
}

pub async fn load_admin_menu<A: MenuApi>(
    api: &A,
    session: &Session,
) -> CommandResult<Vec<MenuItem>> {
    require_admin(session)?;
    api.list_menu().await
}

pub async fn load_all_orders<A: OrderApi>(api: &A, session: &Session) -> CommandResult<Vec<Order>> {
    require_admin(session)?;
    api.list_all_orders().await
}

// ========================
// Menu management
// ========================

pub async fn create_menu_item<A: MenuApi>(
    api: &A,
    session: &Session,
    name: &str,
    description: &str,
    price: &str,
) -> CommandResult<Feedback> {
    require_admin(session)?;
    let draft = validate_menu_item(name, description, price)?;
    let item = api.create_menu_item(&draft).await?;
    log::info!("[ADMIN] Added menu item {} ({})", item.name, item.id);
    Ok(Feedback::success("Menu item added successfully!"))
}

pub async fn update_menu_item<A: MenuApi>(
    api: &A,
    session: &Session,
    id: &str,
    name: &str,
    description: &str,
    price: &str,
) -> CommandResult<Feedback> {
    require_admin(session)?;
    let draft = validate_menu_item(name, description, price)?;
    api.update_menu_item(id, &draft).await?;
    log::info!("[ADMIN] Updated menu item {}", id);
    Ok(Feedback::success("Menu item updated successfully!"))
}

/// Delete a menu item. The caller has already asked for confirmation.
pub async fn delete_menu_item<A: MenuApi>(
    api: &A,
    session: &Session,
    id: &str,
) -> CommandResult<Feedback> {
    require_admin(session)?;
    api.delete_menu_item(id).await?;
    log::info!("[ADMIN] Deleted menu item {}", id);
    Ok(Feedback::success("Menu item deleted successfully!"))
}

// ========================
// Order status
// ========================

/// Apply `action` to `order`, refusing transitions the current status
/// does not allow.
pub async fn change_order_status<A: OrderApi>(
    api: &A,
    session: &Session,
    order: &Order,
    action: StatusAction,
) -> CommandResult<Feedback> {
    require_admin(session)?;
    let target = action.target();
    if !action.allowed_from(&order.status) {
        return Err(ValidationError::StatusTransition {
            from: order.status.as_str().to_string(),
            to: target.as_str().to_string(),
        }
        .into());
    }
    api.update_order_status(&order.id, &target).await?;
    log::info!("[ADMIN] Order {} -> {}", order.id, target.as_str());
    Ok(Feedback::success(action.success_message()))
}
