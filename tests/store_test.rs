use chrono::{Duration, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use screening_backend::models::session::SessionData;
use screening_backend::scoring::{DiscScores, TestKind, TestScores};
use screening_backend::services::store_service::{StoreService, SESSION_TTL_HOURS};

// One connection only: every pooled connection would otherwise open its own
// private in-memory database.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}

fn disc_scores() -> TestScores {
    TestScores::Disc {
        scores: DiscScores {
            d: 9,
            i: 12,
            s: 2,
            c: 1,
        },
    }
}

#[tokio::test]
async fn upsert_dedupes_on_telegram_handle() {
    let store = StoreService::new(test_pool().await);

    let first = store.upsert_user("Jane Doe", "@jane", "broker").await.unwrap();
    assert!(first.is_new);

    let second = store.upsert_user("Jane Doe", "@jane", "broker").await.unwrap();
    assert!(!second.is_new);
    assert_eq!(first.id, second.id);

    let users = store.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn upsert_touches_last_login_monotonically() {
    let store = StoreService::new(test_pool().await);

    store.upsert_user("Jane Doe", "@jane", "broker").await.unwrap();
    let before = store.get_user("@jane").await.unwrap().unwrap();

    for _ in 0..3 {
        store.upsert_user("Jane Doe", "@jane", "broker").await.unwrap();
    }
    let after = store.get_user("@jane").await.unwrap().unwrap();

    assert_eq!(after.created_at, before.created_at);
    assert!(after.last_login > before.last_login);
}

#[tokio::test]
async fn results_are_append_only() {
    let store = StoreService::new(test_pool().await);
    let user = store.upsert_user("Jane Doe", "@jane", "broker").await.unwrap();

    let scores = disc_scores();
    let analysis = scores.classify();
    for _ in 0..3 {
        store
            .save_test_result(user.id, TestKind::Disc, 12, true, &scores, &analysis)
            .await
            .unwrap();
    }

    let results = store.results_for_user(user.id).await.unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.test_name == "DISC"));
    assert!(results.iter().all(|r| r.max_score == 24));
    assert!(results.iter().all(|r| r.passed));
}

#[tokio::test]
async fn sessions_expire_after_exactly_twenty_four_hours() {
    let store = StoreService::new(test_pool().await);
    let user = store.upsert_user("Jane Doe", "@jane", "broker").await.unwrap();

    let before = Utc::now();
    store
        .create_session(
            user.id,
            &SessionData {
                test_completed: "DISC".to_string(),
                last_activity: before,
            },
        )
        .await
        .unwrap();

    let sessions = store.active_sessions().await.unwrap();
    assert_eq!(sessions.len(), 1);

    let ttl = sessions[0].expires_at - sessions[0].created_at;
    assert_eq!(ttl, Duration::hours(SESSION_TTL_HOURS));
}

#[tokio::test]
async fn expired_sessions_are_filtered_but_not_deleted() {
    let pool = test_pool().await;
    let store = StoreService::new(pool.clone());
    let user = store.upsert_user("Jane Doe", "@jane", "broker").await.unwrap();

    // Seed one already-expired row directly.
    let past = Utc::now() - Duration::hours(1);
    sqlx::query(
        "INSERT INTO user_sessions (user_id, session_data, created_at, expires_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(user.id)
    .bind("{}")
    .bind(past - Duration::hours(SESSION_TTL_HOURS))
    .bind(past)
    .execute(&pool)
    .await
    .unwrap();

    store
        .create_session(
            user.id,
            &SessionData {
                test_completed: "EQ".to_string(),
                last_activity: Utc::now(),
            },
        )
        .await
        .unwrap();

    let active = store.active_sessions().await.unwrap();
    assert_eq!(active.len(), 1);

    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_sessions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 2);
}

#[tokio::test]
async fn test_stats_aggregate_per_test() {
    let store = StoreService::new(test_pool().await);
    let user = store.upsert_user("Jane Doe", "@jane", "broker").await.unwrap();

    let scores = disc_scores();
    let analysis = scores.classify();
    for (score, passed) in [(10, true), (20, true), (6, false)] {
        store
            .save_test_result(user.id, TestKind::Disc, score, passed, &scores, &analysis)
            .await
            .unwrap();
    }

    let stats = store.test_stats().await.unwrap();
    assert_eq!(stats.len(), 1);
    let disc = &stats[0];
    assert_eq!(disc.test_name, "DISC");
    assert_eq!(disc.attempts, 3);
    assert_eq!(disc.passed_count, 2);
    assert_eq!(disc.max_score, 20);
    assert_eq!(disc.min_score, 6);
    assert!((disc.avg_score - 12.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn role_stats_count_users_per_role() {
    let store = StoreService::new(test_pool().await);
    store.upsert_user("A", "@a", "broker").await.unwrap();
    store.upsert_user("B", "@b", "broker").await.unwrap();
    store.upsert_user("C", "@c", "designer").await.unwrap();

    let stats = store.role_stats().await.unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].role, "broker");
    assert_eq!(stats[0].count, 2);
    assert_eq!(stats[0].active_count, 2);
    assert_eq!(stats[1].role, "designer");
    assert_eq!(stats[1].count, 1);
}
