//! Command Handlers
//!
//! User-triggered actions. Each validates its input, issues the request
//! and returns the data to re-render plus the feedback to show. Components
//! own the busy state, the toast and the re-fetch.

pub mod admin;
pub mod auth;
pub mod menu;
pub mod orders;

use crate::error::{CommandError, CommandResult};
use crate::notify::Severity;
use crate::session::Session;

/// Message for the notification surface
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }
}

impl From<&CommandError> for Feedback {
    fn from(err: &CommandError) -> Self {
        Self {
            message: err.to_string(),
            severity: err.severity(),
        }
    }
}

/// User id of an authenticated session
fn require_user(session: &Session) -> CommandResult<&str> {
    match (&session.user_id, session.is_authenticated()) {
        (Some(id), true) => Ok(id),
        _ => Err(CommandError::Unauthenticated),
    }
}

fn require_admin(session: &Session) -> CommandResult<()> {
    require_user(session)?;
    if !session.is_admin() {
        log::warn!("[ADMIN] Refusing admin action for non-admin session");
        return Err(CommandError::Forbidden);
    }
    Ok(())
}
