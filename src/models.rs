//! Frontend Models
//!
//! Data structures matching the QuickBite backend DTOs.

use serde::{Deserialize, Serialize};

// ========================
// Users & Roles
// ========================

/// Role attached to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Admin => "ADMIN",
        }
    }

    /// Anything that is not exactly `ADMIN` is treated as a student
    pub fn from_wire(s: &str) -> Self {
        match s {
            "ADMIN" => Role::Admin,
            _ => Role::Student,
        }
    }
}

/// A `null` role from the backend counts as missing
impl From<Option<String>> for Role {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map(Role::from_wire).unwrap_or_default()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// User as returned by `/auth/login`, `/auth/register` and `GET /auth`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub role: Role,
}

/// Login / registration request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// ========================
// Menu
// ========================

/// Menu item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// Body of `POST /menu` and `PUT /menu/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

// ========================
// Orders
// ========================

/// Order lifecycle state
///
/// Values the client does not know yet deserialize into `Unknown` so a
/// newer backend never breaks rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum OrderStatus {
    Pending,
    Approved,
    Completed,
    Delivered,
    Rejected,
    Unknown(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "PENDING" => OrderStatus::Pending,
            "APPROVED" => OrderStatus::Approved,
            "COMPLETED" => OrderStatus::Completed,
            "DELIVERED" => OrderStatus::Delivered,
            "REJECTED" => OrderStatus::Rejected,
            other => OrderStatus::Unknown(other.to_string()),
        }
    }

    /// Completed and delivered both count as finished for summaries
    pub fn is_finished(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Delivered)
    }
}

impl From<Option<String>> for OrderStatus {
    fn from(s: Option<String>) -> Self {
        OrderStatus::from_wire(s.as_deref().unwrap_or_default())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Order data structure (matches backend `OrderDTO`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    pub item_name: String,
    #[serde(default)]
    pub quantity: u32,
    pub status: OrderStatus,
}

/// Body of `POST /order/place`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub user_id: String,
    pub menu_item_id: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_backend_shape() {
        let json = r#"{
            "id": "o1",
            "itemName": "Dosa",
            "status": "APPROVED",
            "username": "ravi",
            "quantity": 3
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.item_name, "Dosa");
        assert_eq!(order.quantity, 3);
        assert_eq!(order.status, OrderStatus::Approved);
        assert_eq!(order.username.as_deref(), Some("ravi"));
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let json = r#"{"id":"o2","itemName":"Tea","status":"COOKING"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown("COOKING".to_string()));
        assert_eq!(order.status.as_str(), "COOKING");
        assert_eq!(order.quantity, 0);
    }

    #[test]
    fn test_role_defaults_to_student() {
        let user: User = serde_json::from_str(r#"{"id":"u1","username":"ravi"}"#).unwrap();
        assert_eq!(user.role, Role::Student);
        let json = r#"{"id":"u2","username":"root","role":"ADMIN"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Admin);
        let json = r#"{"id":"u3","username":"x","role":"GUEST"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_null_role_does_not_break_user_list() {
        let json = r#"[
            {"id": "u1", "username": "ravi", "role": null},
            {"id": "u2", "username": "root", "role": "ADMIN"}
        ]"#;
        let users: Vec<User> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].role, Role::Student);
        assert_eq!(users[1].role, Role::Admin);
    }

    #[test]
    fn test_null_status_is_unknown() {
        let json = r#"{"id":"o3","itemName":"Tea","status":null}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown(String::new()));
        assert_eq!(order.status.label(), "Unknown");
    }

    #[test]
    fn test_order_request_uses_camel_case() {
        let body = OrderRequest {
            user_id: "u1".to_string(),
            menu_item_id: "m9".to_string(),
            quantity: 2,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["menuItemId"], "m9");
        assert_eq!(json["quantity"], 2);
    }
}
