//! Local Identity
//!
//! Email-only sign-in remembered in local storage. Stands in for a hosted
//! identity service.

use kanban_core::{AuthError, IdentityProvider, User};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalIdentity {
    user_key: String,
}

impl LocalIdentity {
    pub fn new(config: &AppConfig) -> Self {
        Self { user_key: config.user_key.clone() }
    }
}

impl IdentityProvider for LocalIdentity {
    fn current_user(&self) -> Option<User> {
        let raw = storage::read_key(&self.user_key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "discarding unreadable stored user");
                storage::remove_key(&self.user_key);
                None
            }
        }
    }

    fn sign_in(&self, email: &str) -> Result<User, AuthError> {
        let user = User::from_email(email)?;
        let raw = serde_json::to_string(&user).map_err(|e| AuthError::Unavailable(e.to_string()))?;
        storage::write_key(&self.user_key, &raw);
        info!(user = %user.email, "signed in");
        Ok(user)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        storage::remove_key(&self.user_key);
        info!("signed out");
        Ok(())
    }
}
