//! Order Bindings
//!
//! `/order` endpoints.

use async_trait::async_trait;
use reqwest::Method;

use super::RestClient;
use crate::error::CommandResult;
use crate::models::{Order, OrderRequest, OrderStatus};

#[async_trait(?Send)]
pub trait OrderApi {
    async fn place_order(&self, request: &OrderRequest) -> CommandResult<Order>;
    async fn list_user_orders(&self, user_id: &str) -> CommandResult<Vec<Order>>;
    /// Every order of every user (admin)
    async fn list_all_orders(&self) -> CommandResult<Vec<Order>>;
    async fn update_order_status(&self, id: &str, status: &OrderStatus) -> CommandResult<Order>;
}

#[async_trait(?Send)]
impl OrderApi for RestClient {
    async fn place_order(&self, request: &OrderRequest) -> CommandResult<Order> {
        let builder = self.request(Method::POST, "/order/place").json(request);
        self.send_json(builder, "Failed to place order").await
    }

    async fn list_user_orders(&self, user_id: &str) -> CommandResult<Vec<Order>> {
        let builder = self.request(Method::GET, &format!("/order/user/{}", user_id));
        self.send_json(builder, "Failed to load orders").await
    }

    async fn list_all_orders(&self) -> CommandResult<Vec<Order>> {
        let builder = self.request(Method::GET, "/order/all");
        self.send_json(builder, "Failed to load orders").await
    }

    async fn update_order_status(&self, id: &str, status: &OrderStatus) -> CommandResult<Order> {
        let builder = self
            .request(Method::PUT, &format!("/order/{}/status", id))
            .query(&[("status", status.as_str())]);
        self.send_json(builder, "Failed to update order").await
    }
}
