//! UI Components
//!
//! Pages and reusable Leptos components.

mod admin_menu;
mod admin_orders;
mod admin_page;
mod auth_pages;
mod confirm_button;
mod home_page;
mod menu_page;
mod nav_bar;
mod orders_page;
mod protected;
mod quantity_selector;
mod toast_overlay;

pub use admin_menu::{AddMenuItemForm, AdminMenuTable};
pub use admin_orders::AdminOrdersTable;
pub use admin_page::AdminPage;
pub use auth_pages::{LoginPage, RegisterPage};
pub use confirm_button::ConfirmButton;
pub use home_page::{HomePage, NotFound};
pub use menu_page::MenuPage;
pub use nav_bar::NavBar;
pub use orders_page::OrdersPage;
pub use protected::Protected;
pub use quantity_selector::QuantitySelector;
pub use toast_overlay::ToastOverlay;
