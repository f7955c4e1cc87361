use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub session_data: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// `user_sessions` joined with user identity, as returned by the active
/// sessions query.
#[derive(Debug, Clone, FromRow)]
pub struct SessionWithUser {
    pub id: i64,
    pub user_id: i64,
    pub session_data: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub full_name: String,
    pub telegram: String,
}

/// Activity snapshot recorded once per submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub test_completed: String,
    pub last_activity: DateTime<Utc>,
}
