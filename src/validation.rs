//! Form Validation
//!
//! Checks run before any request is sent. Each returns the typed value the
//! backend call needs.

use crate::error::ValidationError;
use crate::models::{Credentials, MenuItemDraft};

/// Symbols a password must contain at least one of
pub const PASSWORD_SYMBOLS: &str = "@#$%^&+=!*()";

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

/// Number of portions to order, always within `[1, 10]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if (MIN_QUANTITY..=MAX_QUANTITY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidQuantity)
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self((self.0 + 1).min(MAX_QUANTITY))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(MIN_QUANTITY))
    }

    pub fn can_increment(&self) -> bool {
        self.0 < MAX_QUANTITY
    }

    pub fn can_decrement(&self) -> bool {
        self.0 > MIN_QUANTITY
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(MIN_QUANTITY)
    }
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(ValidationError::PasswordMissingSymbol);
    }
    Ok(())
}

/// Login form: username of at least 3 characters plus a valid password
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    let username = username.trim();
    if username.chars().count() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }
    validate_password(password)?;
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Registration form: stricter username rules than login
pub fn validate_registration(
    username: &str,
    password: &str,
) -> Result<Credentials, ValidationError> {
    let username = username.trim();
    let password = password.trim();
    if !(3..=50).contains(&username.chars().count()) {
        return Err(ValidationError::UsernameLength);
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::UsernameCharacters);
    }
    validate_password(password)?;
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Add / edit menu item form. `price` is the raw input text.
pub fn validate_menu_item(
    name: &str,
    description: &str,
    price: &str,
) -> Result<MenuItemDraft, ValidationError> {
    let name = name.trim();
    let description = description.trim();
    if !(2..=100).contains(&name.chars().count()) {
        return Err(ValidationError::ItemNameLength);
    }
    if description.chars().count() > 500 {
        return Err(ValidationError::DescriptionTooLong);
    }
    let price = price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or(ValidationError::InvalidPrice)?;
    Ok(MenuItemDraft {
        name: name.to_string(),
        description: description.to_string(),
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rejects_short_username() {
        let err = validate_login("ab", "secret!").unwrap_err();
        assert_eq!(err.to_string(), "Username must be at least 3 characters");
    }

    #[test]
    fn test_password_needs_symbol() {
        assert_eq!(validate_login("asha", "secret1"), Err(ValidationError::PasswordMissingSymbol));
        assert_eq!(validate_login("asha", "se!"), Err(ValidationError::PasswordTooShort));
        assert!(validate_login("asha", "secret(").is_ok());
        for symbol in PASSWORD_SYMBOLS.chars() {
            let password = format!("abcde{}", symbol);
            assert!(validate_registration("asha", &password).is_ok(), "{}", password);
        }
    }

    #[test]
    fn test_registration_username_rules() {
        let long_name = "a".repeat(51);
        for (username, expected) in [
            ("ab", ValidationError::UsernameLength),
            (long_name.as_str(), ValidationError::UsernameLength),
            ("bad name", ValidationError::UsernameCharacters),
            ("dev-ops", ValidationError::UsernameCharacters),
        ] {
            assert_eq!(validate_registration(username, "secret!"), Err(expected), "{}", username);
        }
        let creds = validate_registration("  chef_99 ", " secret! ").unwrap();
        assert_eq!(creds.username, "chef_99");
        assert_eq!(creds.password, "secret!");
    }

    #[test]
    fn test_menu_item_rules() {
        assert_eq!(validate_menu_item("A", "", "10"), Err(ValidationError::ItemNameLength));
        let long_name = "x".repeat(101);
        assert_eq!(validate_menu_item(&long_name, "", "10"), Err(ValidationError::ItemNameLength));
        let long_description = "d".repeat(501);
        assert_eq!(
            validate_menu_item("Idli", &long_description, "10"),
            Err(ValidationError::DescriptionTooLong)
        );
        assert_eq!(validate_menu_item("Idli", "", "0"), Err(ValidationError::InvalidPrice));
        assert_eq!(validate_menu_item("Idli", "", "-4"), Err(ValidationError::InvalidPrice));
        assert_eq!(validate_menu_item("Idli", "", "abc"), Err(ValidationError::InvalidPrice));
        assert_eq!(validate_menu_item("Idli", "", "NaN"), Err(ValidationError::InvalidPrice));
        let draft = validate_menu_item(" Idli ", " Steamed ", "45.5").unwrap();
        assert_eq!(draft.name, "Idli");
        assert_eq!(draft.description, "Steamed");
        assert_eq!(draft.price, 45.5);
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(Quantity::new(0).is_err());
        assert!(Quantity::new(11).is_err());
        let q = Quantity::new(10).unwrap();
        assert_eq!(q.increment().get(), 10);
        assert!(!q.can_increment());
        let q = Quantity::default();
        assert_eq!(q.get(), 1);
        assert_eq!(q.decrement().get(), 1);
        assert!(!q.can_decrement());
        assert_eq!(q.increment().increment().get(), 3);
    }
}
