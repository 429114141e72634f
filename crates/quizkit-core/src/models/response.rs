use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;

/// A recorded answer to one question.
///
/// `is_correct` is computed by the submitting client and stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Response {
    pub id: Uuid,
    pub question_id: Uuid,
    pub answer: String,
    pub is_correct: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResponseDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

impl ResponseDraft {
    pub fn new(question_id: Uuid, answer: &str, is_correct: bool) -> Self {
        Self {
            question_id: Some(question_id),
            answer: Some(answer.to_string()),
            is_correct: Some(is_correct),
        }
    }

    /// All three fields are required; an empty answer counts as missing.
    pub fn into_response(
        self,
        id: Uuid,
        now: jiff::Timestamp,
    ) -> Result<Response, ValidationError> {
        let question_id = self
            .question_id
            .ok_or(ValidationError::MissingField("questionId"))?;
        let answer = self
            .answer
            .filter(|a| !a.is_empty())
            .ok_or(ValidationError::MissingField("answer"))?;
        let is_correct = self
            .is_correct
            .ok_or(ValidationError::MissingField("isCorrect"))?;

        Ok(Response {
            id,
            question_id,
            answer,
            is_correct,
            created_at: now,
            updated_at: now,
        })
    }
}
