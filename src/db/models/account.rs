//! Account Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Account ID type
pub type AccountId = RecordId;

/// Account model matching the SurrealDB schema
///
/// Serialized in full for storage; handlers never return accounts, so the
/// hash stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<AccountId>,
    pub username: String,
    pub password_hash: String,
    /// Role claim embedded into issued tokens ("Admin", "Manager", "User", ...)
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Register payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreate {
    pub username: String,
    pub password: String,
    pub role: Option<String>,
}

impl Account {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2 (random salt, default cost)
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hash = Account::hash_password("s3cret").expect("hashing failed");
        assert!(hash.starts_with("$argon2"));

        let account = Account {
            id: None,
            username: "maria".to_string(),
            password_hash: hash,
            role: "User".to_string(),
            created_at: Utc::now(),
        };

        assert!(account.verify_password("s3cret").unwrap());
        assert!(!account.verify_password("wrong").unwrap());
    }
}
