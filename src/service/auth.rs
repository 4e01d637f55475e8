use crate::model::User;
use crate::util::error::AuthError;
use tracing::{info, warn};

/// Seam for credential checks. The stored collection carries plaintext
/// passwords, so the production implementation is a straight equality
/// comparison; a hashing scheme can be swapped in here without touching any
/// call site.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, candidate: &str, stored: &str) -> bool;
}

/// Case-sensitive equality against the stored secret.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, candidate: &str, stored: &str) -> bool {
        candidate == stored
    }
}

/// Linear scan for an exact username match whose credentials verify. No
/// lockout, no rate limiting.
pub fn authenticate<'a>(
    users: &'a [User],
    username: &str,
    password: &str,
    verifier: &dyn CredentialVerifier,
) -> Result<&'a User, AuthError> {
    match users
        .iter()
        .find(|u| u.username == username && verifier.verify(password, &u.password))
    {
        Some(user) => {
            info!(username = %user.username, role = %user.role, "login succeeded");
            Ok(user)
        }
        None => {
            warn!(username = %username, "login failed");
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Typed capability check for the two-role gate.
pub fn require_admin(user: &User) -> Result<(), AuthError> {
    if user.role.is_admin() {
        Ok(())
    } else {
        Err(AuthError::AdminRequired)
    }
}

/// The in-process session: just the current user. No tokens, no expiry.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn set(&mut self, user: User) {
        self.current = Some(user);
    }

    pub(crate) fn clear(&mut self) {
        self.current = None;
    }
}
