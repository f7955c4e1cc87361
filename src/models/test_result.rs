use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw `test_results` row. `answers` and `analysis` stay serialized here and
/// are deserialized by the store when building the joined read model.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestResult {
    pub id: i64,
    pub user_id: i64,
    pub test_name: String,
    pub test_type: String,
    pub score: i64,
    pub max_score: i64,
    pub passed: bool,
    pub answers: String,
    pub analysis: String,
    pub completed_at: DateTime<Utc>,
}

/// `test_results` joined with owning user identity.
#[derive(Debug, Clone, FromRow)]
pub struct TestResultWithUser {
    pub id: i64,
    pub user_id: i64,
    pub test_name: String,
    pub test_type: String,
    pub score: i64,
    pub max_score: i64,
    pub passed: bool,
    pub answers: String,
    pub analysis: String,
    pub completed_at: DateTime<Utc>,
    pub full_name: String,
    pub telegram: String,
    pub role: String,
}
