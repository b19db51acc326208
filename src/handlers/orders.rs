//! Order Handlers
//!
//! The signed-in user's own orders.

use crate::api::OrderApi;
use crate::error::CommandResult;
use crate::models::Order;
use crate::session::Session;

use super::require_user;

pub async fn load_my_orders<A: OrderApi>(api: &A, session: &Session) -> CommandResult<Vec<Order>> {
    let user_id = require_user(session)?;
    let orders = api.list_user_orders(user_id).await?;
    log::info!("[ORDERS] Loaded {} orders", orders.len());
    Ok(orders)
}

/// Look up one order of the current user for the details view
pub fn find_order<'a>(orders: &'a [Order], id: &str) -> Option<&'a Order> {
    orders.iter().find(|o| o.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeBackend;
    use crate::error::CommandError;
    use crate::handlers::test_support::signed_in;
    use crate::models::{OrderStatus, Role};

    #[tokio::test]
    async fn test_only_own_orders_listed() {
        let api = FakeBackend::new()
            .with_user("u1", "meera", "pass@123", Role::Student)
            .with_user("u2", "arjun", "pass@123", Role::Student)
            .with_order("o1", "meera", OrderStatus::Pending)
            .with_order("o2", "arjun", OrderStatus::Delivered);
        let orders = load_my_orders(&api, &signed_in("u1", "meera", Role::Student)).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert!(find_order(&orders, "o1").is_some());
        assert!(find_order(&orders, "o2").is_none());
        assert_eq!(api.calls(), vec!["GET /order/user/u1"]);
    }

    #[tokio::test]
    async fn test_requires_session() {
        let api = FakeBackend::new();
        let err = load_my_orders(&api, &Session::default()).await.unwrap_err();
        assert_eq!(err, CommandError::Unauthenticated);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let api = FakeBackend::new().with_user("u1", "meera", "pass@123", Role::Student);
        let offline = "Could not reach the server. Please try again.";
        api.fail_next(CommandError::Transport(offline.into()));
        let err = load_my_orders(&api, &signed_in("u1", "meera", Role::Student)).await.unwrap_err();
        assert!(matches!(err, CommandError::Transport(_)));
    }
}
