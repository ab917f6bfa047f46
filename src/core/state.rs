use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::models::AccountCreate;
use crate::db::repository::{AccountRepository, account::ADMIN_ROLE};
use crate::utils::AppError;

/// Seeded administrative username
const ADMIN_USERNAME: &str = "admin";

/// Server state - shared handles for all request handlers
///
/// Cloning is cheap (Arc / handle clones). The JWT signing key inside
/// `jwt_service` is read-only after startup.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize server state against the on-disk database
    ///
    /// 1. Ensure the working directory exists
    /// 2. Open the database at `work_dir/orders.db`
    /// 3. Build the token service from the configured JWT settings
    /// 4. Seed the default admin account if no admin exists
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let work_dir = PathBuf::from(&config.work_dir);
        std::fs::create_dir_all(&work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {}", e)))?;

        let db_path = work_dir.join("orders.db");
        let db = DbService::new(&db_path.to_string_lossy()).await?.db;

        let state = Self::with_db(config.clone(), db);
        state.seed_admin_account().await?;
        Ok(state)
    }

    /// Initialize with an in-memory database (tests)
    pub async fn initialize_in_memory(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new_in_memory().await?.db;
        let state = Self::with_db(config.clone(), db);
        state.seed_admin_account().await?;
        Ok(state)
    }

    fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Create the default admin account on first boot
    ///
    /// Skipped when any account already carries the Admin role, so a
    /// renamed or re-passworded admin is left alone on restart.
    async fn seed_admin_account(&self) -> Result<(), AppError> {
        let accounts = AccountRepository::new(self.db.clone());
        if accounts.admin_exists().await? {
            return Ok(());
        }

        accounts
            .create(AccountCreate {
                username: ADMIN_USERNAME.to_string(),
                password: self.config.admin_password.clone(),
                role: Some(ADMIN_ROLE.to_string()),
            })
            .await?;

        tracing::info!(username = ADMIN_USERNAME, "Seeded default admin account");
        Ok(())
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
