//! Menu Bindings
//!
//! `/menu` endpoints.

use async_trait::async_trait;
use reqwest::Method;

use super::RestClient;
use crate::error::CommandResult;
use crate::models::{MenuItem, MenuItemDraft};

#[async_trait(?Send)]
pub trait MenuApi {
    async fn list_menu(&self) -> CommandResult<Vec<MenuItem>>;
    async fn create_menu_item(&self, draft: &MenuItemDraft) -> CommandResult<MenuItem>;
    async fn update_menu_item(&self, id: &str, draft: &MenuItemDraft) -> CommandResult<MenuItem>;
    async fn delete_menu_item(&self, id: &str) -> CommandResult<()>;
}

#[async_trait(?Send)]
impl MenuApi for RestClient {
    async fn list_menu(&self) -> CommandResult<Vec<MenuItem>> {
        let builder = self.request(Method::GET, "/menu");
        self.send_json(builder, "Failed to load menu").await
    }

    async fn create_menu_item(&self, draft: &MenuItemDraft) -> CommandResult<MenuItem> {
        let builder = self.request(Method::POST, "/menu").json(draft);
        self.send_json(builder, "Failed to add item").await
    }

    async fn update_menu_item(&self, id: &str, draft: &MenuItemDraft) -> CommandResult<MenuItem> {
        let builder = self.request(Method::PUT, &format!("/menu/{}", id)).json(draft);
        self.send_json(builder, "Failed to update item").await
    }

    async fn delete_menu_item(&self, id: &str) -> CommandResult<()> {
        let builder = self.request(Method::DELETE, &format!("/menu/{}", id));
        self.send_empty(builder, "Failed to delete item").await
    }
}
