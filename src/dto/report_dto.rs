use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use sqlx::FromRow;

use crate::models::session::SessionWithUser;
use crate::models::test_result::TestResultWithUser;

/// Envelope for every admin/reporting read endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RoleStats {
    pub role: String,
    pub count: i64,
    pub active_count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TestStats {
    pub test_name: String,
    pub test_type: String,
    pub attempts: i64,
    pub passed_count: i64,
    pub avg_score: f64,
    pub max_score: i64,
    pub min_score: i64,
}

/// Test result joined with its owner, with the stored blobs deserialized
/// back to structured JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResultView {
    pub id: i64,
    pub user_id: i64,
    pub test_name: String,
    pub test_type: String,
    pub score: i64,
    pub max_score: i64,
    pub passed: bool,
    pub answers: JsonValue,
    pub analysis: JsonValue,
    pub completed_at: DateTime<Utc>,
    pub full_name: String,
    pub telegram: String,
    pub role: String,
}

impl From<TestResultWithUser> for TestResultView {
    fn from(row: TestResultWithUser) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            test_name: row.test_name,
            test_type: row.test_type,
            score: row.score,
            max_score: row.max_score,
            passed: row.passed,
            answers: serde_json::from_str(&row.answers).unwrap_or(JsonValue::Null),
            analysis: serde_json::from_str(&row.analysis).unwrap_or(JsonValue::Null),
            completed_at: row.completed_at,
            full_name: row.full_name,
            telegram: row.telegram,
            role: row.role,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSessionView {
    pub id: i64,
    pub user_id: i64,
    pub session_data: JsonValue,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub full_name: String,
    pub telegram: String,
}

impl From<SessionWithUser> for ActiveSessionView {
    fn from(row: SessionWithUser) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            session_data: serde_json::from_str(&row.session_data).unwrap_or(JsonValue::Null),
            created_at: row.created_at,
            expires_at: row.expires_at,
            full_name: row.full_name,
            telegram: row.telegram,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_users: i64,
    pub active_users: i64,
    pub total_tests: i64,
    pub users_by_role: Vec<RoleStats>,
    pub test_stats: Vec<TestStats>,
}
