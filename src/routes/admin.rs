use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::dto::report_dto::DataResponse;
use crate::error::{Error, Result};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "All registered candidates"))
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.report_service.users().await?;
    Ok(Json(DataResponse::new(users)))
}

#[utoipa::path(
    get,
    path = "/api/users/{telegram}",
    params(("telegram" = String, Path, description = "Telegram handle")),
    responses(
        (status = 200, description = "Candidate found"),
        (status = 404, description = "No candidate with this handle")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(telegram): Path<String>,
) -> Result<impl IntoResponse> {
    let user = state
        .report_service
        .user_by_telegram(&telegram)
        .await?
        .ok_or_else(|| Error::NotFound(format!("No user with handle {}", telegram)))?;
    Ok(Json(DataResponse::new(user)))
}

#[utoipa::path(
    get,
    path = "/api/test-results",
    responses((status = 200, description = "All test results, newest first"))
)]
#[axum::debug_handler]
pub async fn all_results(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let results = state.report_service.all_results().await?;
    Ok(Json(DataResponse::new(results)))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}/results",
    params(("user_id" = i64, Path, description = "User ID")),
    responses((status = 200, description = "Results for one candidate"))
)]
#[axum::debug_handler]
pub async fn results_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let results = state.report_service.results_for_user(user_id).await?;
    Ok(Json(DataResponse::new(results)))
}

#[utoipa::path(
    get,
    path = "/api/results/role/{role}",
    params(("role" = String, Path, description = "Target role")),
    responses((status = 200, description = "Results for all candidates in a role"))
)]
#[axum::debug_handler]
pub async fn results_for_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<impl IntoResponse> {
    let results = state.report_service.results_for_role(&role).await?;
    Ok(Json(DataResponse::new(results)))
}

#[utoipa::path(
    get,
    path = "/api/stats/roles",
    responses((status = 200, description = "Candidate counts per role"))
)]
#[axum::debug_handler]
pub async fn role_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.report_service.role_stats().await?;
    Ok(Json(DataResponse::new(stats)))
}

#[utoipa::path(
    get,
    path = "/api/stats/tests",
    responses((status = 200, description = "Aggregate statistics per test"))
)]
#[axum::debug_handler]
pub async fn test_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.report_service.test_stats().await?;
    Ok(Json(DataResponse::new(stats)))
}

#[utoipa::path(
    get,
    path = "/api/stats/overview",
    responses((status = 200, description = "Combined dashboard numbers"))
)]
#[axum::debug_handler]
pub async fn overview(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.report_service.overview().await?;
    Ok(Json(DataResponse::new(stats)))
}

#[utoipa::path(
    get,
    path = "/api/sessions/active",
    responses((status = 200, description = "Sessions that have not expired yet"))
)]
#[axum::debug_handler]
pub async fn active_sessions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let sessions = state.report_service.active_sessions().await?;
    Ok(Json(DataResponse::new(sessions)))
}
