//! Dining Table Model
//!
//! Collaborator-owned: the order core only reads tables.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub label: String,
}

/// Create dining table payload (seeding and tests)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub label: String,
}
