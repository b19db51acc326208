//! Navigation Guard
//!
//! Role-aware navigation links and page access checks. These only gate
//! what the UI shows; the backend re-validates every privileged request.

use crate::models::Role;
use crate::session::Session;

/// Pages of the single-page app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Menu,
    Orders,
    Admin,
    Login,
    Register,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Menu => "/menu",
            Page::Orders => "/orders",
            Page::Admin => "/admin",
            Page::Login => "/login",
            Page::Register => "/register",
        }
    }
}

/// Where a freshly signed-in user lands
pub fn landing_page(role: Role) -> Page {
    match role {
        Role::Admin => Page::Admin,
        Role::Student => Page::Menu,
    }
}

/// What a page requires from the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// Render nothing and stay put; a logout redirect is already pending
    Hold,
    Redirect {
        to: Page,
        alert: Option<&'static str>,
    },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

pub const ADMIN_REQUIRED: &str = "Access denied. Admin privileges required.";

pub fn check_access(session: &Session, access: Access) -> AccessDecision {
    match access {
        Access::Public => AccessDecision::Allow,
        _ if !session.is_authenticated() => AccessDecision::Redirect {
            to: Page::Login,
            alert: None,
        },
        Access::Admin if session.role != Role::Admin => AccessDecision::Redirect {
            to: Page::Menu,
            alert: Some(ADMIN_REQUIRED),
        },
        _ => AccessDecision::Allow,
    }
}

/// Like `check_access`, but a session that was just signed out is held
/// instead of being sent to the login page.
pub fn guard_decision(session: &Session, access: Access, signing_out: bool) -> AccessDecision {
    match check_access(session, access) {
        AccessDecision::Redirect { to: Page::Login, .. } if signing_out => AccessDecision::Hold,
        decision => decision,
    }
}

// ========================
// Navigation bar
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    Link { label: &'static str, page: Page },
    /// `username (ROLE)` badge
    User(String),
    Logout,
}

pub fn nav_entries(session: &Session) -> Vec<NavEntry> {
    let mut entries = vec![
        NavEntry::Link { label: "Home", page: Page::Home },
        NavEntry::Link { label: "Menu", page: Page::Menu },
    ];
    if session.is_authenticated() {
        entries.push(NavEntry::Link { label: "My Orders", page: Page::Orders });
        if session.role == Role::Admin {
            entries.push(NavEntry::Link { label: "Admin", page: Page::Admin });
        }
        let username = session.username.clone().unwrap_or_default();
        entries.push(NavEntry::User(format!("{} ({})", username, session.role.as_str())));
        entries.push(NavEntry::Logout);
    } else {
        entries.push(NavEntry::Link { label: "Login", page: Page::Login });
        entries.push(NavEntry::Link { label: "Register", page: Page::Register });
    }
    entries
}
