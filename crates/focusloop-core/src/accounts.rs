//! Demo-only credential store.
//!
//! Usernames map to plaintext passwords in the local snapshot store. This
//! exists to gate the UI, not to protect anything; do not put real secrets
//! here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialStore {
    users: HashMap<String, String>,
    current: Option<String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Create an account and sign it in. Empty username or password is a
    /// validation error; an existing username is a conflict. Neither
    /// mutates the store.
    pub fn sign_up(&mut self, username: &str, password: &str) -> Result<(), ValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        if self.users.contains_key(username) {
            return Err(ValidationError::UsernameTaken(username.to_string()));
        }
        self.users.insert(username.to_string(), password.to_string());
        self.current = Some(username.to_string());
        Ok(())
    }

    pub fn sign_in(&mut self, username: &str, password: &str) -> Result<(), ValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        match self.users.get(username) {
            Some(stored) if stored == password => {
                self.current = Some(username.to_string());
                Ok(())
            }
            _ => Err(ValidationError::BadCredentials),
        }
    }

    pub fn sign_out(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_and_in() {
        let mut store = CredentialStore::new();
        store.sign_up("ada", "pw").unwrap();
        assert_eq!(store.current_user(), Some("ada"));
        store.sign_out();
        assert_eq!(store.current_user(), None);
        store.sign_in("ada", "pw").unwrap();
        assert_eq!(store.current_user(), Some("ada"));
    }

    #[test]
    fn empty_fields_rejected_without_mutation() {
        let mut store = CredentialStore::new();
        assert_eq!(store.sign_up("", "pw").unwrap_err(), ValidationError::EmptyUsername);
        assert_eq!(store.sign_up("ada", "").unwrap_err(), ValidationError::EmptyPassword);
        assert_eq!(store.user_count(), 0);
    }

    #[test]
    fn duplicate_username_is_a_conflict() {
        let mut store = CredentialStore::new();
        store.sign_up("ada", "pw").unwrap();
        assert_eq!(
            store.sign_up("ada", "other").unwrap_err(),
            ValidationError::UsernameTaken("ada".into())
        );
        assert_eq!(store.user_count(), 1);
        // Original password still in force.
        store.sign_in("ada", "pw").unwrap();
    }

    #[test]
    fn wrong_password_keeps_previous_session() {
        let mut store = CredentialStore::new();
        store.sign_up("ada", "pw").unwrap();
        assert_eq!(
            store.sign_in("ada", "nope").unwrap_err(),
            ValidationError::BadCredentials
        );
        assert_eq!(store.current_user(), Some("ada"));
    }
}
