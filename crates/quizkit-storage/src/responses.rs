//! The response recorder: append-only storage of graded answers.

use uuid::Uuid;

use quizkit_core::keys;
use quizkit_core::models::response::{Response, ResponseDraft};

use crate::documents::{load_all, save_json};
use crate::error::RecordError;
use crate::store::DocumentStore;

/// Validate and persist one response.
///
/// The referenced question is not looked up; orphan references are stored.
pub async fn create(
    store: &dyn DocumentStore,
    draft: ResponseDraft,
) -> Result<Response, RecordError> {
    let response = draft.into_response(Uuid::new_v4(), jiff::Timestamp::now())?;

    save_json(
        store,
        &keys::response(response.question_id, response.id),
        &response,
    )
    .await?;

    tracing::info!(
        id = %response.id,
        question_id = %response.question_id,
        is_correct = response.is_correct,
        "response recorded"
    );
    Ok(response)
}

/// Every response recorded for `question_id`, oldest first.
pub async fn list_by_question(
    store: &dyn DocumentStore,
    question_id: Uuid,
) -> Result<Vec<Response>, RecordError> {
    let mut responses: Vec<Response> =
        load_all(store, &keys::responses_for_question(question_id)).await?;
    responses.sort_by_key(|r| r.created_at);
    Ok(responses)
}
