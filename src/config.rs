//! Client Configuration
//!
//! Resolved once in `main` and shared through `AppContext`.

use log::LevelFilter;

/// Price per unit used for display-only order totals.
///
/// The order DTO carries no line price, so totals shown to the user are an
/// estimate and are always labelled as such.
pub const DEFAULT_UNIT_PRICE_ESTIMATE: f64 = 150.0;
pub const DEFAULT_TOAST_TTL_MS: u32 = 3_000;
pub const DEFAULT_LOGOUT_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend origin, without trailing slash
    pub api_base: String,
    pub unit_price_estimate: f64,
    pub toast_ttl_ms: u32,
    pub logout_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl ClientConfig {
    pub fn new(api_base: &str, log_level: Option<&str>) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            unit_price_estimate: DEFAULT_UNIT_PRICE_ESTIMATE,
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            logout_delay_ms: DEFAULT_LOGOUT_DELAY_MS,
            log_level: log_level
                .and_then(console_logger::parse_level)
                .unwrap_or(LevelFilter::Info),
        }
    }

    /// Build from `QUICKBITE_API_BASE` / `QUICKBITE_LOG` (compile time),
    /// falling back to the origin the page was served from.
    pub fn from_env() -> Self {
        let api_base = match option_env!("QUICKBITE_API_BASE") {
            Some(base) if !base.trim().is_empty() => base.to_string(),
            _ => page_origin().unwrap_or_default(),
        };
        Self::new(&api_base, option_env!("QUICKBITE_LOG"))
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
