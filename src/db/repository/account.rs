//! Account Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Account, AccountCreate};
use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "account";

/// Role given to self-registered accounts that do not pick one
pub const DEFAULT_ROLE: &str = "User";

/// Role required for order deletion and granted to the seeded account
pub const ADMIN_ROLE: &str = "Admin";

#[derive(Clone)]
pub struct AccountRepository {
    base: BaseRepository,
}

impl AccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find account by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE username = $username LIMIT 1")
            .bind(("username", username_owned))
            .await?;
        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Create a new account
    ///
    /// Username uniqueness is checked before insert; the plaintext password
    /// is hashed here and never stored.
    pub async fn create(&self, data: AccountCreate) -> RepoResult<Account> {
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Username '{}' already exists",
                data.username
            )));
        }

        let password_hash = Account::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let account = Account {
            id: None,
            username: data.username,
            password_hash,
            role: data.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            created_at: Utc::now(),
        };

        let created: Option<Account> = self.base.db().create(TABLE).content(account).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create account".to_string()))
    }

    /// True if at least one account carries the Admin role
    pub async fn admin_exists(&self) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE role = $role LIMIT 1")
            .bind(("role", ADMIN_ROLE.to_string()))
            .await?;
        let accounts: Vec<Account> = result.take(0)?;
        Ok(!accounts.is_empty())
    }
}
