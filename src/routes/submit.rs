use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

use crate::dto::submission_dto::{
    AptitudeSubmission, DiscSubmission, EqSubmission, HubbardSubmission, IntegritySubmission,
    KfuSubmission, OcaSubmission, SpqSubmission, SubmitResponse, Submission,
};
use crate::error::Result;
use crate::services::submission_service::SubmissionOutcome;
use crate::AppState;

async fn run(state: AppState, submission: Submission) -> Result<Json<SubmitResponse>> {
    let kind = submission.scores.kind();
    let outcome: SubmissionOutcome = state.submission_service.process(submission).await?;
    Ok(Json(SubmitResponse {
        success: true,
        message: format!("{} result recorded", kind.name()),
        analysis: outcome.classification,
        user_id: outcome.user_id,
    }))
}

#[utoipa::path(
    post,
    path = "/api/submit-disc",
    responses(
        (status = 200, description = "Submission scored and recorded"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_disc(
    State(state): State<AppState>,
    Json(payload): Json<DiscSubmission>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    run(state, payload.into_submission()).await
}

#[utoipa::path(
    post,
    path = "/api/submit-eq",
    responses(
        (status = 200, description = "Submission scored and recorded"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_eq(
    State(state): State<AppState>,
    Json(payload): Json<EqSubmission>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    run(state, payload.into_submission()).await
}

#[utoipa::path(
    post,
    path = "/api/submit-spq",
    responses(
        (status = 200, description = "Submission scored and recorded"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_spq(
    State(state): State<AppState>,
    Json(payload): Json<SpqSubmission>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    run(state, payload.into_submission()).await
}

#[utoipa::path(
    post,
    path = "/api/submit-hubbard",
    responses(
        (status = 200, description = "Submission scored and recorded"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_hubbard(
    State(state): State<AppState>,
    Json(payload): Json<HubbardSubmission>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    run(state, payload.into_submission()).await
}

#[utoipa::path(
    post,
    path = "/api/submit-integrity",
    responses(
        (status = 200, description = "Submission scored and recorded"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_integrity(
    State(state): State<AppState>,
    Json(payload): Json<IntegritySubmission>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    run(state, payload.into_submission()).await
}

#[utoipa::path(
    post,
    path = "/api/submit-oca",
    responses(
        (status = 200, description = "Submission scored and recorded"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_oca(
    State(state): State<AppState>,
    Json(payload): Json<OcaSubmission>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    run(state, payload.into_submission()).await
}

#[utoipa::path(
    post,
    path = "/api/submit-aptitude",
    responses(
        (status = 200, description = "Submission scored and recorded"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_aptitude(
    State(state): State<AppState>,
    Json(payload): Json<AptitudeSubmission>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    run(state, payload.into_submission()).await
}

#[utoipa::path(
    post,
    path = "/api/submit-kfu",
    responses(
        (status = 200, description = "Submission scored and recorded"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_kfu(
    State(state): State<AppState>,
    Json(payload): Json<KfuSubmission>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    run(state, payload.into_submission()).await
}
