use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use quizkit_core::models::response::{Response, ResponseDraft};
use quizkit_storage::{RecordError, responses};

use crate::error::ApiError;
use crate::state::AppState;

/// Record one graded answer. `isCorrect` is trusted as sent.
///
/// Any failure to record, including a store failure, is a 400.
pub async fn create_response(
    State(state): State<AppState>,
    draft: Result<Json<ResponseDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Response>), ApiError> {
    let Json(draft) = draft?;
    let response = responses::create(state.store.as_ref(), draft)
        .await
        .map_err(|e| match e {
            RecordError::Storage(err) => {
                tracing::error!("failed to record response: {err}");
                ApiError::BadRequest("failed to record response".to_string())
            }
            other => other.into(),
        })?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_responses_for_question(
    State(state): State<AppState>,
    question_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Response>>, ApiError> {
    let Path(question_id) = question_id?;
    let responses = responses::list_by_question(state.store.as_ref(), question_id).await?;
    Ok(Json(responses))
}
