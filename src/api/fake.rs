//! In-memory backend for handler tests.
//!
//! Mirrors the REST contracts closely enough for round-trip tests and
//! records every call so tests can assert that nothing was sent.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use async_trait::async_trait;

use super::{AuthApi, MenuApi, OrderApi};
use crate::error::{CommandError, CommandResult};
use crate::models::{
    Credentials, MenuItem, MenuItemDraft, Order, OrderRequest, OrderStatus, Role, User,
};

#[derive(Default)]
pub struct FakeBackend {
    pub users: RefCell<Vec<(User, String)>>,
    pub menu: RefCell<Vec<MenuItem>>,
    pub orders: RefCell<Vec<Order>>,
    calls: RefCell<Vec<String>>,
    next_id: Cell<u32>,
    fail_next: RefCell<Option<CommandError>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, id: &str, username: &str, password: &str, role: Role) -> Self {
        let user = User {
            id: id.to_string(),
            username: username.to_string(),
            role,
        };
        self.users.borrow_mut().push((user, password.to_string()));
        self
    }

    pub fn with_menu_item(self, id: &str, name: &str, price: f64) -> Self {
        self.menu.borrow_mut().push(MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price,
        });
        self
    }

    pub fn with_order(self, id: &str, username: &str, status: OrderStatus) -> Self {
        self.orders.borrow_mut().push(Order {
            id: id.to_string(),
            username: Some(username.to_string()),
            item_name: "Thali".to_string(),
            quantity: 1,
            status,
        });
        self
    }

    /// Make the next call fail with `err`
    pub fn fail_next(&self, err: CommandError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) -> CommandResult<()> {
        self.calls.borrow_mut().push(call.into());
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        self.next_id.set(self.next_id.get() + 1);
        format!("{}{}", prefix, self.next_id.get())
    }

    fn not_found(message: &str) -> CommandError {
        CommandError::Rejected {
            status: 404,
            message: message.to_string(),
            field_errors: BTreeMap::new(),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeBackend {
    async fn login(&self, credentials: &Credentials) -> CommandResult<User> {
        self.record("POST /auth/login")?;
        self.users
            .borrow()
            .iter()
            .find(|(u, p)| u.username == credentials.username && *p == credentials.password)
            .map(|(u, _)| u.clone())
            .ok_or(CommandError::Rejected {
                status: 401,
                message: "Invalid username or password".to_string(),
                field_errors: BTreeMap::new(),
            })
    }

    async fn register(&self, credentials: &Credentials) -> CommandResult<User> {
        self.record("POST /auth/register")?;
        if self.users.borrow().iter().any(|(u, _)| u.username == credentials.username) {
            return Err(CommandError::Rejected {
                status: 409,
                message: "Username already exists".to_string(),
                field_errors: BTreeMap::new(),
            });
        }
        let user = User {
            id: self.next_id("u"),
            username: credentials.username.clone(),
            role: Role::Student,
        };
        self.users.borrow_mut().push((user.clone(), credentials.password.clone()));
        Ok(user)
    }

    async fn logout(&self) -> CommandResult<()> {
        self.record("POST /auth/logout")
    }

    async fn list_users(&self) -> CommandResult<Vec<User>> {
        self.record("GET /auth")?;
        Ok(self.users.borrow().iter().map(|(u, _)| u.clone()).collect())
    }
}

#[async_trait(?Send)]
impl MenuApi for FakeBackend {
    async fn list_menu(&self) -> CommandResult<Vec<MenuItem>> {
        self.record("GET /menu")?;
        Ok(self.menu.borrow().clone())
    }

    async fn create_menu_item(&self, draft: &MenuItemDraft) -> CommandResult<MenuItem> {
        self.record("POST /menu")?;
        let item = MenuItem {
            id: self.next_id("m"),
            name: draft.name.clone(),
            description: Some(draft.description.clone()).filter(|d| !d.is_empty()),
            price: draft.price,
        };
        self.menu.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn update_menu_item(&self, id: &str, draft: &MenuItemDraft) -> CommandResult<MenuItem> {
        self.record(format!("PUT /menu/{}", id))?;
        let mut menu = self.menu.borrow_mut();
        let item = menu
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Self::not_found("Menu item not found"))?;
        item.name = draft.name.clone();
        item.description = Some(draft.description.clone());
        item.price = draft.price;
        Ok(item.clone())
    }

    async fn delete_menu_item(&self, id: &str) -> CommandResult<()> {
        self.record(format!("DELETE /menu/{}", id))?;
        let mut menu = self.menu.borrow_mut();
        let before = menu.len();
        menu.retain(|i| i.id != id);
        if menu.len() == before {
            return Err(Self::not_found("Menu item not found"));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl OrderApi for FakeBackend {
    async fn place_order(&self, request: &OrderRequest) -> CommandResult<Order> {
        self.record("POST /order/place")?;
        let item_name = self
            .menu
            .borrow()
            .iter()
            .find(|i| i.id == request.menu_item_id)
            .map(|i| i.name.clone())
            .ok_or_else(|| Self::not_found("Menu item not found"))?;
        let username = self
            .users
            .borrow()
            .iter()
            .find(|(u, _)| u.id == request.user_id)
            .map(|(u, _)| u.username.clone())
            .ok_or_else(|| Self::not_found("User not found"))?;
        let order = Order {
            id: self.next_id("o"),
            username: Some(username),
            item_name,
            quantity: request.quantity,
            status: OrderStatus::Pending,
        };
        self.orders.borrow_mut().push(order.clone());
        Ok(order)
    }

    async fn list_user_orders(&self, user_id: &str) -> CommandResult<Vec<Order>> {
        self.record(format!("GET /order/user/{}", user_id))?;
        let username = self
            .users
            .borrow()
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(u, _)| u.username.clone());
        Ok(self
            .orders
            .borrow()
            .iter()
            .filter(|o| o.username.is_some() && o.username == username)
            .cloned()
            .collect())
    }

    async fn list_all_orders(&self) -> CommandResult<Vec<Order>> {
        self.record("GET /order/all")?;
        Ok(self.orders.borrow().clone())
    }

    async fn update_order_status(&self, id: &str, status: &OrderStatus) -> CommandResult<Order> {
        self.record(format!("PUT /order/{}/status?status={}", id, status.as_str()))?;
        let mut orders = self.orders.borrow_mut();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| Self::not_found("Order not found"))?;
        order.status = status.clone();
        Ok(order.clone())
    }
}
