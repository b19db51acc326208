//! View State
//!
//! Pure derivations from fetched snapshots: labels, badges, totals,
//! counts and which actions are available. Components only lay these out.

use crate::models::{MenuItem, Order, OrderStatus, User};

pub const CURRENCY: &str = "₹";
const MENU_DESCRIPTION_FALLBACK: &str = "Delicious food item";

pub fn format_price(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY, amount)
}

// ========================
// Status display
// ========================

/// Bootstrap contextual color of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Warning,
    Info,
    Success,
    Danger,
    Secondary,
}

impl Tone {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Warning => "badge bg-warning text-dark",
            Tone::Info => "badge bg-info",
            Tone::Success => "badge bg-success",
            Tone::Danger => "badge bg-danger",
            Tone::Secondary => "badge bg-secondary",
        }
    }
}

/// Admin transition out of the current status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Approve,
    Reject,
    Deliver,
}

impl StatusAction {
    pub const ALL: [StatusAction; 3] =
        [StatusAction::Approve, StatusAction::Reject, StatusAction::Deliver];

    pub fn target(&self) -> OrderStatus {
        match self {
            StatusAction::Approve => OrderStatus::Approved,
            StatusAction::Reject => OrderStatus::Rejected,
            StatusAction::Deliver => OrderStatus::Delivered,
        }
    }

    /// Only pending orders can be approved or rejected; only approved
    /// orders can be delivered.
    pub fn allowed_from(&self, current: &OrderStatus) -> bool {
        match self {
            StatusAction::Approve | StatusAction::Reject => *current == OrderStatus::Pending,
            StatusAction::Deliver => *current == OrderStatus::Approved,
        }
    }

    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            StatusAction::Approve => "Approve this order?",
            StatusAction::Reject => "Reject this order?",
            StatusAction::Deliver => "Mark this order as delivered?",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusAction::Approve => "Approve",
            StatusAction::Reject => "Reject",
            StatusAction::Deliver => "Deliver",
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self {
            StatusAction::Approve => "btn btn-sm btn-success",
            StatusAction::Reject => "btn btn-sm btn-danger",
            StatusAction::Deliver => "btn btn-sm btn-primary",
        }
    }

    pub fn success_message(&self) -> String {
        format!("Order {} successfully!", self.target().as_str().to_lowercase())
    }
}

impl OrderStatus {
    pub fn tone(&self) -> Tone {
        match self {
            OrderStatus::Pending => Tone::Warning,
            OrderStatus::Approved => Tone::Info,
            OrderStatus::Completed | OrderStatus::Delivered => Tone::Success,
            OrderStatus::Rejected => Tone::Danger,
            OrderStatus::Unknown(_) => Tone::Secondary,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Completed => "Completed",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Unknown(_) => "Unknown",
        }
    }

    /// Bootstrap icon class
    pub fn icon(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "bi bi-clock-history text-warning",
            OrderStatus::Approved => "bi bi-check-circle text-info",
            OrderStatus::Completed => "bi bi-check-circle-fill text-success",
            OrderStatus::Delivered => "bi bi-box-seam text-success",
            OrderStatus::Rejected => "bi bi-x-circle text-danger",
            OrderStatus::Unknown(_) => "bi bi-question-circle",
        }
    }

    /// Explanation shown to the customer in the order details
    pub fn customer_message(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Your order is being processed. Please wait for confirmation.",
            OrderStatus::Approved => "Your order has been approved and is being prepared.",
            OrderStatus::Completed => "Your order is ready for pickup/delivery.",
            OrderStatus::Delivered => "Your order has been delivered. Enjoy your meal!",
            OrderStatus::Rejected => "Sorry, your order was rejected. Please contact support.",
            OrderStatus::Unknown(_) => "Order status unknown.",
        }
    }
}

// ========================
// Menu
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl MenuCard {
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: description_or(item, MENU_DESCRIPTION_FALLBACK),
            price: format_price(item.price),
        }
    }
}

/// Row of the admin menu table
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl MenuRow {
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: description_or(item, "-"),
            price: format_price(item.price),
        }
    }
}

fn description_or(item: &MenuItem, fallback: &str) -> String {
    item.description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

pub fn menu_cards(items: &[MenuItem]) -> Vec<MenuCard> {
    items.iter().map(MenuCard::from_item).collect()
}

// ========================
// Orders
// ========================

/// Display-only total: the order DTO has no line price
pub fn estimated_total(quantity: u32, unit_estimate: f64) -> String {
    format_price(quantity as f64 * unit_estimate)
}

/// Row of the customer's order table
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub item_name: String,
    pub quantity: u32,
    pub estimated_total: String,
    pub status: OrderStatus,
}

impl OrderRow {
    pub fn from_order(order: &Order, unit_estimate: f64) -> Self {
        Self {
            id: order.id.clone(),
            item_name: order.item_name.clone(),
            quantity: order.quantity,
            estimated_total: estimated_total(order.quantity, unit_estimate),
            status: order.status.clone(),
        }
    }
}

/// Action button state in the admin order table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState {
    pub action: StatusAction,
    pub enabled: bool,
}

/// Row of the admin order table
#[derive(Debug, Clone, PartialEq)]
pub struct AdminOrderRow {
    pub id: String,
    pub username: String,
    pub item_name: String,
    pub quantity: u32,
    pub status: OrderStatus,
    pub actions: [ActionState; 3],
}

impl AdminOrderRow {
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            username: order
                .username
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            item_name: order.item_name.clone(),
            // Older orders were stored without a quantity
            quantity: order.quantity.max(1),
            status: order.status.clone(),
            actions: StatusAction::ALL.map(|action| ActionState {
                action,
                enabled: action.allowed_from(&order.status),
            }),
        }
    }

    pub fn is_enabled(&self, action: StatusAction) -> bool {
        self.actions.iter().any(|a| a.action == action && a.enabled)
    }
}

/// Cards above the customer's order table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            total: orders.len(),
            pending: count_pending(orders),
            completed: orders.iter().filter(|o| o.status.is_finished()).count(),
        }
    }
}

fn count_pending(orders: &[Order]) -> usize {
    orders.iter().filter(|o| o.status == OrderStatus::Pending).count()
}

// ========================
// Admin dashboard
// ========================

/// Counts computed client-side over full result sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub menu_items: usize,
    pub total_orders: usize,
    pub pending_orders: usize,
    pub users: usize,
}

impl DashboardStats {
    pub fn compute(menu: &[MenuItem], orders: &[Order], users: &[User]) -> Self {
        Self {
            menu_items: menu.len(),
            total_orders: orders.len(),
            pending_orders: count_pending(orders),
            users: users.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn order(id: &str, status: &str, quantity: u32) -> Order {
        Order {
            id: id.to_string(),
            username: None,
            item_name: "Masala Dosa".to_string(),
            quantity,
            status: OrderStatus::from_wire(status),
        }
    }

    fn item(id: &str, description: Option<&str>, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: description.map(str::to_string),
            price,
        }
    }

    #[test]
    fn test_price_has_two_decimals() {
        assert_eq!(format_price(45.0), "₹45.00");
        assert_eq!(format_price(12.345), "₹12.35");
    }

    #[test]
    fn test_badge_mapping() {
        assert_eq!(OrderStatus::Pending.tone(), Tone::Warning);
        assert_eq!(OrderStatus::Approved.tone(), Tone::Info);
        assert_eq!(OrderStatus::Completed.tone(), Tone::Success);
        assert_eq!(OrderStatus::Delivered.tone(), Tone::Success);
        assert_eq!(OrderStatus::Rejected.tone(), Tone::Danger);
    }

    #[test]
    fn test_unknown_status_falls_back_to_secondary() {
        for raw in ["", "pending", "COOKING", "CANCELLED"] {
            let status = OrderStatus::from_wire(raw);
            assert_eq!(status.tone(), Tone::Secondary, "{}", raw);
            assert_eq!(status.label(), "Unknown");
            assert_eq!(status.icon(), "bi bi-question-circle");
            assert_eq!(status.customer_message(), "Order status unknown.");
        }
    }

    #[test]
    fn test_description_fallbacks() {
        let bare = item("1", None, 10.0);
        let blank = item("2", Some("   "), 10.0);
        assert_eq!(MenuCard::from_item(&bare).description, "Delicious food item");
        assert_eq!(MenuCard::from_item(&blank).description, "Delicious food item");
        assert_eq!(MenuRow::from_item(&bare).description, "-");
        let described = item("3", Some("Crispy"), 10.0);
        assert_eq!(MenuCard::from_item(&described).description, "Crispy");
    }

    #[test]
    fn test_markup_in_names_stays_plain_text() {
        // Text is handed to the DOM as text nodes, so it must not be
        // pre-escaped here either (that would show `&lt;` to the user).
        let raw = MenuItem {
            id: "9".to_string(),
            name: "<b>Chai</b> & \"Biscuit\" 'n'".to_string(),
            description: Some("<script>alert(1)</script>".to_string()),
            price: 20.0,
        };
        let card = MenuCard::from_item(&raw);
        assert_eq!(card.name, raw.name);
        assert_eq!(card.description, "<script>alert(1)</script>");
    }

    #[test]
    fn test_estimated_total() {
        assert_eq!(estimated_total(3, 150.0), "₹450.00");
        let row = OrderRow::from_order(&order("o1", "PENDING", 2), 150.0);
        assert_eq!(row.estimated_total, "₹300.00");
    }

    #[test]
    fn test_pending_order_actions() {
        let row = AdminOrderRow::from_order(&order("o1", "PENDING", 1));
        assert!(row.is_enabled(StatusAction::Approve));
        assert!(row.is_enabled(StatusAction::Reject));
        assert!(!row.is_enabled(StatusAction::Deliver));
    }

    #[test]
    fn test_approved_order_actions() {
        let row = AdminOrderRow::from_order(&order("o1", "APPROVED", 1));
        assert!(!row.is_enabled(StatusAction::Approve));
        assert!(!row.is_enabled(StatusAction::Reject));
        assert!(row.is_enabled(StatusAction::Deliver));
    }

    #[test]
    fn test_terminal_orders_have_no_actions() {
        for status in ["DELIVERED", "REJECTED", "COMPLETED", "LOST"] {
            let row = AdminOrderRow::from_order(&order("o1", status, 1));
            assert!(row.actions.iter().all(|a| !a.enabled), "{}", status);
        }
    }

    #[test]
    fn test_admin_row_defaults() {
        let row = AdminOrderRow::from_order(&order("o1", "PENDING", 0));
        assert_eq!(row.username, "N/A");
        assert_eq!(row.quantity, 1);
    }

    #[test]
    fn test_confirm_prompts_differ() {
        assert_eq!(StatusAction::Approve.confirm_prompt(), "Approve this order?");
        assert_eq!(StatusAction::Reject.confirm_prompt(), "Reject this order?");
        assert_eq!(StatusAction::Deliver.confirm_prompt(), "Mark this order as delivered?");
        assert_eq!(StatusAction::Deliver.success_message(), "Order delivered successfully!");
    }

    #[test]
    fn test_order_summary() {
        let orders = vec![
            order("1", "PENDING", 1),
            order("2", "PENDING", 1),
            order("3", "COMPLETED", 1),
            order("4", "DELIVERED", 1),
            order("5", "REJECTED", 1),
        ];
        let summary = OrderSummary::from_orders(&orders);
        assert_eq!(summary, OrderSummary { total: 5, pending: 2, completed: 2 });
    }

    #[test]
    fn test_dashboard_stats() {
        let menu = vec![item("1", None, 1.0), item("2", None, 2.0)];
        let orders = vec![
            order("1", "PENDING", 1),
            order("2", "APPROVED", 1),
            order("3", "PENDING", 4),
        ];
        let users = vec![User { id: "u".into(), username: "x".into(), role: Role::Student }];
        let stats = DashboardStats::compute(&menu, &orders, &users);
        assert_eq!(
            stats,
            DashboardStats { menu_items: 2, total_orders: 3, pending_orders: 2, users: 1 }
        );
    }
}
