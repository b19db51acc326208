//! Client Errors
//!
//! Validation failures caught before any request, and failures of the
//! request itself.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::notify::Severity;

/// A form value rejected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Username must be between 3 and 50 characters")]
    UsernameLength,
    #[error("Username can only contain letters, numbers, and underscores")]
    UsernameCharacters,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Password must contain at least one symbol (@#$%^&+=!*())")]
    PasswordMissingSymbol,
    #[error("Item name must be between 2 and 100 characters")]
    ItemNameLength,
    #[error("Description must not exceed 500 characters")]
    DescriptionTooLong,
    #[error("Price must be greater than 0")]
    InvalidPrice,
    #[error("Please select a valid quantity (1-10)")]
    InvalidQuantity,
    #[error("This order cannot move from {from} to {to}")]
    StatusTransition { from: String, to: String },
}

impl ValidationError {
    /// Form field the message belongs next to
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::UsernameTooShort
            | ValidationError::UsernameLength
            | ValidationError::UsernameCharacters => Some("username"),
            ValidationError::PasswordTooShort | ValidationError::PasswordMissingSymbol => {
                Some("password")
            }
            ValidationError::ItemNameLength => Some("name"),
            ValidationError::DescriptionTooLong => Some("description"),
            ValidationError::InvalidPrice => Some("price"),
            ValidationError::InvalidQuantity => Some("quantity"),
            ValidationError::StatusTransition { .. } => None,
        }
    }
}

/// Failure of a command handler
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The backend answered with a non-success status
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        field_errors: BTreeMap<String, String>,
    },
    /// Network unreachable or a body that could not be decoded
    #[error("{0}")]
    Transport(String),
    #[error("Please login first")]
    Unauthenticated,
    #[error("Access denied. Admin privileges required.")]
    Forbidden,
}

/// JSON error body sent by the backend
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

impl CommandError {
    /// Build a `Rejected` error from a non-success response body.
    ///
    /// Falls back to `fallback` when the body is not JSON or carries neither
    /// a message nor field errors.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = match parsed.message.filter(|m| !m.trim().is_empty()) {
            Some(message) => message,
            None if !parsed.errors.is_empty() => parsed
                .errors
                .iter()
                .map(|(field, msg)| format!("{}: {}", field, msg))
                .collect::<Vec<_>>()
                .join(", "),
            None => fallback.to_string(),
        };
        CommandError::Rejected {
            status,
            message,
            field_errors: parsed.errors,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            CommandError::Validation(_) | CommandError::Unauthenticated => Severity::Warning,
            _ => Severity::Danger,
        }
    }

    /// Field-level messages, keyed by form field name
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            CommandError::Rejected { field_errors, .. } if !field_errors.is_empty() => {
                Some(field_errors)
            }
            _ => None,
        }
    }
}

impl CommandError {
    /// Messages to show under form fields: backend field errors, or the
    /// local validation failure when it maps to a field.
    pub fn inline_errors(&self) -> BTreeMap<String, String> {
        match self {
            CommandError::Rejected { .. } => self.field_errors().cloned().unwrap_or_default(),
            CommandError::Validation(err) => err
                .field()
                .map(|field| BTreeMap::from([(field.to_string(), err.to_string())]))
                .unwrap_or_default(),
            _ => BTreeMap::new(),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
