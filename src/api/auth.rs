//! Auth Bindings
//!
//! `/auth` endpoints: login, registration, logout and the user list.

use async_trait::async_trait;
use reqwest::Method;

use super::RestClient;
use crate::error::CommandResult;
use crate::models::{Credentials, User};

#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> CommandResult<User>;
    async fn register(&self, credentials: &Credentials) -> CommandResult<User>;
    /// Invalidate the backend session cookie
    async fn logout(&self) -> CommandResult<()>;
    /// All users (admin)
    async fn list_users(&self) -> CommandResult<Vec<User>>;
}

#[async_trait(?Send)]
impl AuthApi for RestClient {
    async fn login(&self, credentials: &Credentials) -> CommandResult<User> {
        let builder = self.request(Method::POST, "/auth/login").json(credentials);
        self.send_json(builder, "Invalid credentials or login failed").await
    }

    async fn register(&self, credentials: &Credentials) -> CommandResult<User> {
        let builder = self.request(Method::POST, "/auth/register").json(credentials);
        self.send_json(builder, "Registration failed").await
    }

    async fn logout(&self) -> CommandResult<()> {
        let builder = self.request(Method::POST, "/auth/logout");
        self.send_empty(builder, "Failed to logout").await
    }

    async fn list_users(&self) -> CommandResult<Vec<User>> {
        let builder = self.request(Method::GET, "/auth");
        self.send_json(builder, "Failed to load users").await
    }
}
