//! Mock authentication store backing the profile dropdown.
//!
//! Demo mode only: a fixed set of accounts, matched by mobile number, held
//! in memory for the session. In production this would be a real
//! authentication service; here it exists so the profile UI has something
//! to show.

use serde::Serialize;

/// Account role shown on the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A farmer using the assistant for their own plots.
    Farmer,
    /// A field agent supporting multiple farms.
    FieldAgent,
}

impl Role {
    /// Display label, e.g. "Field Agent".
    pub fn label(&self) -> &'static str {
        match self {
            Role::Farmer => "Farmer",
            Role::FieldAgent => "Field Agent",
        }
    }
}

/// A demo user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Mobile number, used as the demo login credential.
    pub mobile: String,
    /// Optional role label.
    pub role: Option<Role>,
}

/// In-memory session store. No persistence, no real credentials.
#[derive(Debug, Default)]
pub struct AuthStore {
    current: Option<User>,
}

/// The demo accounts `login` will accept.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            name: "Ravi Kumar".to_string(),
            mobile: "9876543210".to_string(),
            role: Some(Role::Farmer),
        },
        User {
            name: "Lakshmi Devi".to_string(),
            mobile: "9123456780".to_string(),
            role: Some(Role::FieldAgent),
        },
    ]
}

impl AuthStore {
    /// Create a store with nobody logged in.
    pub fn new() -> Self {
        Self::default()
    }

    /// The logged-in user, if any.
    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Log in by mobile number against the demo accounts.
    ///
    /// Returns the user on success, `None` for an unknown number.
    pub fn login(&mut self, mobile: &str) -> Option<User> {
        let user = demo_users().into_iter().find(|u| u.mobile == mobile)?;
        self.current = Some(user.clone());
        Some(user)
    }

    /// Log in as the first demo account. Used by the dashboard's one-key
    /// demo login.
    pub fn login_demo(&mut self) -> User {
        let user = demo_users().remove(0);
        self.current = Some(user.clone());
        user
    }

    /// Clear the session.
    pub fn logout(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        let store = AuthStore::new();
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_login_known_mobile() {
        let mut store = AuthStore::new();
        let user = store.login("9876543210").unwrap();
        assert_eq!(user.name, "Ravi Kumar");
        assert_eq!(user.role, Some(Role::Farmer));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_login_unknown_mobile_fails() {
        let mut store = AuthStore::new();
        assert!(store.login("0000000000").is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut store = AuthStore::new();
        store.login_demo();
        assert!(store.is_authenticated());
        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Farmer.label(), "Farmer");
        assert_eq!(Role::FieldAgent.label(), "Field Agent");
    }
}
