use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Minimum length for both usernames and passwords.
pub const MIN_CREDENTIAL_LENGTH: usize = 3;

/// User entity - an account that can own blogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Display name.
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(username: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check registration input before the password is hashed.
    pub fn validate_registration(username: &str, password: &str) -> Result<(), DomainError> {
        if username.chars().count() < MIN_CREDENTIAL_LENGTH {
            return Err(DomainError::Validation(format!(
                "username must be at least {MIN_CREDENTIAL_LENGTH} characters"
            )));
        }
        if password.chars().count() < MIN_CREDENTIAL_LENGTH {
            return Err(DomainError::Validation(format!(
                "password must be at least {MIN_CREDENTIAL_LENGTH} characters"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_registration() {
        assert!(User::validate_registration("root", "sekret").is_ok());
        assert!(User::validate_registration("ro", "sekret").is_err());
        assert!(User::validate_registration("root", "pw").is_err());
    }
}
