use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub telegram: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub is_active: bool,
}
