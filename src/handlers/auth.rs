//! Auth Handlers
//!
//! Login, registration and logout.

use crate::api::AuthApi;
use crate::error::CommandResult;
use crate::guard::{landing_page, Page};
use crate::models::User;
use crate::session::{KeyValueStore, SessionStore};
use crate::validation::{validate_login, validate_registration};

use super::Feedback;

/// Result of a successful login or registration
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub user: User,
    pub landing: Page,
    pub feedback: Feedback,
}

pub async fn login<A: AuthApi>(api: &A, username: &str, password: &str) -> CommandResult<SignedIn> {
    let credentials = validate_login(username, password)?;
    let user = api.login(&credentials).await?;
    log::info!("[AUTH] Logged in as {} ({})", user.username, user.role.as_str());
    Ok(SignedIn {
        landing: landing_page(user.role),
        feedback: Feedback::success(format!("Welcome {}", user.username)),
        user,
    })
}

pub async fn register<A: AuthApi>(
    api: &A,
    username: &str,
    password: &str,
) -> CommandResult<SignedIn> {
    let credentials = validate_registration(username, password)?;
    let user = api.register(&credentials).await?;
    log::info!("[AUTH] Registered {}", user.username);
    Ok(SignedIn {
        landing: landing_page(user.role),
        feedback: Feedback::success("Registered successfully!"),
        user,
    })
}

/// Clears the stored session. Runs before the backend call so the user is
/// signed out locally even when the backend never answers.
pub fn sign_out<S: KeyValueStore>(store: &SessionStore<S>) -> Feedback {
    store.logout();
    log::info!("[AUTH] Cleared local session");
    Feedback::success("Logged out successfully")
}

/// Ends the backend session. Failures are logged only.
pub async fn end_backend_session<A: AuthApi>(api: &A) {
    if let Err(e) = api.logout().await {
        log::warn!("[AUTH] Backend logout failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeBackend;
    use crate::error::{CommandError, ValidationError};
    use crate::models::Role;
    use crate::notify::Severity;
    use crate::session::{MemoryStorage, Session};

    #[tokio::test]
    async fn test_short_username_rejected_without_request() {
        let api = FakeBackend::new();
        let err = login(&api, "ab", "secret!").await.unwrap_err();
        assert_eq!(err.to_string(), "Username must be at least 3 characters");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_weak_password_rejected_without_request() {
        let api = FakeBackend::new();
        for password in ["secret", "password1", "abcdefgh"] {
            let err = login(&api, "meera", password).await.unwrap_err();
            assert_eq!(err, CommandError::Validation(ValidationError::PasswordMissingSymbol));
            let err = register(&api, "meera", password).await.unwrap_err();
            assert_eq!(err, CommandError::Validation(ValidationError::PasswordMissingSymbol));
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_admin_lands_on_admin_page() {
        let api = FakeBackend::new().with_user("u1", "root", "admin@123", Role::Admin);
        let signed_in = login(&api, "root", "admin@123").await.unwrap();
        assert_eq!(signed_in.landing, Page::Admin);
        assert_eq!(signed_in.user.id, "u1");
        assert_eq!(signed_in.feedback.severity, Severity::Success);
        assert_eq!(api.calls(), vec!["POST /auth/login"]);
    }

    #[tokio::test]
    async fn test_wrong_password_surfaces_backend_message() {
        let api = FakeBackend::new().with_user("u1", "meera", "pass@123", Role::Student);
        let err = login(&api, "meera", "nope@123").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid username or password");
        assert_eq!(err.severity(), Severity::Danger);
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let api = FakeBackend::new();
        let registered = register(&api, "new_user", "hello#1").await.unwrap();
        assert_eq!(registered.landing, Page::Menu);
        assert_eq!(registered.user.role, Role::Student);
        let again = register(&api, "new_user", "hello#1").await.unwrap_err();
        assert_eq!(again.to_string(), "Username already exists");
        let signed_in = login(&api, "new_user", "hello#1").await.unwrap();
        assert_eq!(signed_in.user, registered.user);
    }

    #[tokio::test]
    async fn test_sign_out_is_local_and_immediate() {
        let api = FakeBackend::new().with_user("u1", "meera", "pass@123", Role::Student);
        let signed_in = login(&api, "meera", "pass@123").await.unwrap();
        let store = SessionStore::new(MemoryStorage::default());
        store.login(&signed_in.user);

        let feedback = sign_out(&store);
        assert_eq!(feedback, Feedback::success("Logged out successfully"));
        assert_eq!(store.get_session(), Session::default());
        assert_eq!(api.calls(), vec!["POST /auth/login"]);
    }

    #[tokio::test]
    async fn test_backend_logout_failure_keeps_local_sign_out() {
        let api = FakeBackend::new();
        let store = SessionStore::new(MemoryStorage::default());
        store.login(&User {
            id: "u1".to_string(),
            username: "meera".to_string(),
            role: Role::Student,
        });
        sign_out(&store);
        api.fail_next(CommandError::Transport("offline".to_string()));
        end_backend_session(&api).await;
        assert_eq!(api.calls(), vec!["POST /auth/logout"]);
        assert!(!store.get_session().is_authenticated());
    }
}
