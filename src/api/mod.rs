//! REST Bindings
//!
//! Frontend bindings to the QuickBite backend, organized by domain.
//! Every call goes through `RestClient`, which turns non-success statuses
//! into `CommandError::Rejected` and network/decode failures into
//! `CommandError::Transport`.

mod auth;
mod menu;
mod order;
#[cfg(test)]
pub mod fake;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{CommandError, CommandResult};

pub use auth::AuthApi;
pub use menu::MenuApi;
pub use order::OrderApi;

/// Everything the UI needs from the backend
pub trait QuickBiteApi: AuthApi + MenuApi + OrderApi {}

impl<T: AuthApi + MenuApi + OrderApi> QuickBiteApi for T {}

const NETWORK_ERROR: &str = "Could not reach the server. Please try again.";
const DECODE_ERROR: &str = "Unexpected response from the server.";

/// HTTP client for the backend (fetch on wasm32)
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        // Send the backend session cookie along with every call
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> CommandResult<reqwest::Response> {
        let response = builder.send().await.map_err(|e| {
            log::error!("[API] Request failed: {}", e);
            CommandError::Transport(NETWORK_ERROR.to_string())
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::warn!("[API] {} ({}): {}", fallback, status.as_u16(), body);
        Err(CommandError::from_response(status.as_u16(), &body, fallback))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> CommandResult<T> {
        let response = self.send(builder, fallback).await?;
        response.json::<T>().await.map_err(|e| {
            log::error!("[API] Could not decode response: {}", e);
            CommandError::Transport(DECODE_ERROR.to_string())
        })
    }

    /// For endpoints whose success body is irrelevant
    async fn send_empty(&self, builder: RequestBuilder, fallback: &str) -> CommandResult<()> {
        self.send(builder, fallback).await.map(|_| ())
    }
}
