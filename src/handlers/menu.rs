//! Menu Handlers
//!
//! Loading the public menu and placing orders from it.

use crate::api::{MenuApi, OrderApi};
use crate::error::CommandResult;
use crate::models::{MenuItem, Order, OrderRequest};
use crate::session::Session;
use crate::validation::Quantity;

use super::{require_user, Feedback};

pub async fn load_menu<A: MenuApi>(api: &A) -> CommandResult<Vec<MenuItem>> {
    let items = api.list_menu().await?;
    log::info!("[MENU] Loaded {} items", items.len());
    Ok(items)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order: Order,
    pub feedback: Feedback,
}

/// Place an order for `quantity` portions of a menu item.
///
/// Needs an authenticated session; the quantity must be within `[1, 10]`.
pub async fn place_order<A: OrderApi>(
    api: &A,
    session: &Session,
    menu_item_id: &str,
    quantity: u32,
) -> CommandResult<PlacedOrder> {
    let user_id = require_user(session)?;
    let quantity = Quantity::new(quantity)?;
    let request = OrderRequest {
        user_id: user_id.to_string(),
        menu_item_id: menu_item_id.to_string(),
        quantity: quantity.get(),
    };
    let order = api.place_order(&request).await?;
    log::info!("[MENU] Placed order {} x{}", order.id, order.quantity);
    Ok(PlacedOrder {
        feedback: Feedback::success(format!(
            "✅ Order placed successfully! Quantity: {}",
            quantity.get()
        )),
        order,
    })
}
