//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::RestClient;
use crate::config::ClientConfig;
use crate::notify::Notifier;
use crate::session::SessionContext;
use crate::tasks::Tasks;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session, restored from local storage at start-up
    pub session: SessionContext,
    /// Toast surface
    pub notifier: Notifier,
    api: StoredValue<RestClient>,
    tasks: StoredValue<Tasks>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            session: SessionContext::load(),
            notifier: Notifier::new(config.toast_ttl_ms),
            api: StoredValue::new(RestClient::new(config.api_base.clone())),
            tasks: StoredValue::new(Tasks::default()),
            config: StoredValue::new(config),
        }
    }

    /// Backend client
    pub fn api(&self) -> RestClient {
        self.api.get_value()
    }

    /// Latest request per (action, target)
    pub fn tasks(&self) -> Tasks {
        self.tasks.get_value()
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
