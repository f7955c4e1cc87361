use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use crate::dto::report_dto::{RoleStats, TestStats};
use crate::error::Result;
use crate::models::session::{SessionData, SessionWithUser};
use crate::models::test_result::TestResultWithUser;
use crate::models::user::User;
use crate::scoring::{Classification, TestKind, TestScores};

pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy)]
pub struct UpsertedUser {
    pub id: i64,
    pub is_new: bool,
}

#[derive(Clone)]
pub struct StoreService {
    pool: SqlitePool,
}

impl StoreService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert-or-touch by telegram handle in a single atomic statement, so two
    /// concurrent submissions from the same handle cannot both insert.
    /// Timestamps are bound from here with sub-second precision; on a fresh
    /// insert created_at and last_login carry the identical value, which is
    /// what the RETURNING clause keys `is_new` on.
    pub async fn upsert_user(
        &self,
        full_name: &str,
        telegram: &str,
        role: &str,
    ) -> Result<UpsertedUser> {
        let now = Utc::now();
        let (id, is_new): (i64, bool) = sqlx::query_as(
            r#"
            INSERT INTO users (full_name, telegram, role, created_at, last_login)
            VALUES (?1, ?2, ?3, ?4, ?4)
            ON CONFLICT(telegram) DO UPDATE SET last_login = excluded.last_login
            RETURNING id, (created_at = last_login) AS is_new
            "#,
        )
        .bind(full_name)
        .bind(telegram)
        .bind(role)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(UpsertedUser { id, is_new })
    }

    /// Append-only: every submission gets its own row. The typed payloads are
    /// serialized to TEXT here, at the storage edge.
    pub async fn save_test_result(
        &self,
        user_id: i64,
        kind: TestKind,
        score: i64,
        passed: bool,
        answers: &TestScores,
        analysis: &Classification,
    ) -> Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO test_results
                (user_id, test_name, test_type, score, max_score, passed, answers, analysis, completed_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(kind.name())
        .bind(kind.category())
        .bind(score)
        .bind(kind.max_score())
        .bind(passed)
        .bind(serde_json::to_string(answers)?)
        .bind(serde_json::to_string(analysis)?)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn create_session(&self, user_id: i64, data: &SessionData) -> Result<i64> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(SESSION_TTL_HOURS);
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO user_sessions (user_id, session_data, created_at, expires_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(serde_json::to_string(data)?)
        .bind(now)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn get_user(&self, telegram: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, telegram, role, created_at, last_login, is_active
            FROM users
            WHERE telegram = ?1
            "#,
        )
        .bind(telegram)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, telegram, role, created_at, last_login, is_active
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn role_stats(&self) -> Result<Vec<RoleStats>> {
        let stats = sqlx::query_as::<_, RoleStats>(
            r#"
            SELECT
                role,
                COUNT(*) AS count,
                COUNT(CASE WHEN is_active = 1 THEN 1 END) AS active_count
            FROM users
            GROUP BY role
            ORDER BY count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stats)
    }

    pub async fn results_for_user(&self, user_id: i64) -> Result<Vec<TestResultWithUser>> {
        let results = sqlx::query_as::<_, TestResultWithUser>(
            r#"
            SELECT tr.id, tr.user_id, tr.test_name, tr.test_type, tr.score, tr.max_score,
                   tr.passed, tr.answers, tr.analysis, tr.completed_at,
                   u.full_name, u.telegram, u.role
            FROM test_results tr
            JOIN users u ON tr.user_id = u.id
            WHERE tr.user_id = ?1
            ORDER BY tr.completed_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(results)
    }

    pub async fn results_for_role(&self, role: &str) -> Result<Vec<TestResultWithUser>> {
        let results = sqlx::query_as::<_, TestResultWithUser>(
            r#"
            SELECT tr.id, tr.user_id, tr.test_name, tr.test_type, tr.score, tr.max_score,
                   tr.passed, tr.answers, tr.analysis, tr.completed_at,
                   u.full_name, u.telegram, u.role
            FROM test_results tr
            JOIN users u ON tr.user_id = u.id
            WHERE u.role = ?1
            ORDER BY tr.completed_at DESC
            "#,
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;
        Ok(results)
    }

    pub async fn all_results(&self) -> Result<Vec<TestResultWithUser>> {
        let results = sqlx::query_as::<_, TestResultWithUser>(
            r#"
            SELECT tr.id, tr.user_id, tr.test_name, tr.test_type, tr.score, tr.max_score,
                   tr.passed, tr.answers, tr.analysis, tr.completed_at,
                   u.full_name, u.telegram, u.role
            FROM test_results tr
            JOIN users u ON tr.user_id = u.id
            ORDER BY tr.completed_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(results)
    }

    pub async fn test_stats(&self) -> Result<Vec<TestStats>> {
        let stats = sqlx::query_as::<_, TestStats>(
            r#"
            SELECT
                test_name,
                test_type,
                COUNT(*) AS attempts,
                COUNT(CASE WHEN passed = 1 THEN 1 END) AS passed_count,
                AVG(score) AS avg_score,
                MAX(score) AS max_score,
                MIN(score) AS min_score
            FROM test_results
            GROUP BY test_name, test_type
            ORDER BY attempts DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stats)
    }

    /// Expiry is enforced at query time only; expired rows stay for audit.
    pub async fn active_sessions(&self) -> Result<Vec<SessionWithUser>> {
        let sessions = sqlx::query_as::<_, SessionWithUser>(
            r#"
            SELECT us.id, us.user_id, us.session_data, us.created_at, us.expires_at,
                   u.full_name, u.telegram
            FROM user_sessions us
            JOIN users u ON us.user_id = u.id
            WHERE us.expires_at > ?1
            ORDER BY us.created_at DESC
            "#,
        )
        .bind(Utc::now())
        .fetch_all(&self.pool)
        .await?;
        Ok(sessions)
    }
}
