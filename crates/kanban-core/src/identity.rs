//! Identity
//!
//! Who is using the board. The board only loads, mutates and persists while
//! a user is signed in.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

impl User {
    /// Validate and normalize an email into a user
    pub fn from_email(email: &str) -> Result<Self, AuthError> {
        let email = email.trim();
        if !EMAIL.is_match(email) {
            return Err(AuthError::InvalidEmail(email.to_string()));
        }
        Ok(Self { email: email.to_lowercase() })
    }

    /// Part before the `@`, for the header
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Source of the current user
pub trait IdentityProvider {
    fn current_user(&self) -> Option<User>;
    fn sign_in(&self, email: &str) -> Result<User, AuthError>;
    fn sign_out(&self) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email() {
        let user = User::from_email("  Ilhom@Example.com ").unwrap();
        assert_eq!(user.email, "ilhom@example.com");
        assert_eq!(user.display_name(), "ilhom");
    }

    #[test]
    fn test_rejects_bad_email() {
        for bad in ["", "ilhom", "a@b", "a b@c.d", "@example.com"] {
            assert!(matches!(User::from_email(bad), Err(AuthError::InvalidEmail(_))), "{bad}");
        }
    }
}
