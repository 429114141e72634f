use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use quizkit_core::models::question::{Question, QuestionDraft};
use quizkit_storage::questions;

use crate::error::{ApiError, MessageBody};
use crate::state::AppState;

pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = questions::list(state.store.as_ref()).await?;
    Ok(Json(questions))
}

pub async fn get_question(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Question>, ApiError> {
    let Path(id) = id?;
    let question = questions::get(state.store.as_ref(), id).await?;
    Ok(Json(question))
}

pub async fn create_question(
    State(state): State<AppState>,
    draft: Result<Json<QuestionDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    let Json(draft) = draft?;
    let question = questions::create(state.store.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

pub async fn update_question(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    draft: Result<Json<QuestionDraft>, JsonRejection>,
) -> Result<Json<Question>, ApiError> {
    let Path(id) = id?;
    let Json(draft) = draft?;
    let question = questions::update(state.store.as_ref(), id, draft).await?;
    Ok(Json(question))
}

pub async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(id) = id?;
    questions::delete(state.store.as_ref(), id).await?;
    Ok(Json(MessageBody::new("Question deleted successfully")))
}
