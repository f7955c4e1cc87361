pub mod admin;
pub mod health;
pub mod submit;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

/// Full API surface. Layered (CORS, tracing, body limits) in main.
pub fn api_router() -> Router<AppState> {
    let submit_api = Router::new()
        .route("/api/submit-disc", post(submit::submit_disc))
        .route("/api/submit-eq", post(submit::submit_eq))
        .route("/api/submit-spq", post(submit::submit_spq))
        .route("/api/submit-hubbard", post(submit::submit_hubbard))
        .route("/api/submit-integrity", post(submit::submit_integrity))
        .route("/api/submit-oca", post(submit::submit_oca))
        .route("/api/submit-aptitude", post(submit::submit_aptitude))
        .route("/api/submit-kfu", post(submit::submit_kfu));

    let admin_api = Router::new()
        .route("/api/users", get(admin::list_users))
        .route("/api/users/:telegram", get(admin::get_user))
        .route("/api/test-results", get(admin::all_results))
        .route("/api/user/:user_id/results", get(admin::results_for_user))
        .route("/api/results/role/:role", get(admin::results_for_role))
        .route("/api/stats/roles", get(admin::role_stats))
        .route("/api/stats/tests", get(admin::test_stats))
        .route("/api/stats/overview", get(admin::overview))
        .route("/api/sessions/active", get(admin::active_sessions));

    Router::new()
        .route("/health", get(health::health))
        .merge(submit_api)
        .merge(admin_api)
}
