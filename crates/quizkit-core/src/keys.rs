//! Document key conventions.
//!
//! Pure string functions. These define the canonical layout of documents in
//! the quiz store: one JSON document per question, and responses grouped
//! under the question they answer so that listing by question is a prefix scan.

use uuid::Uuid;

pub const QUESTIONS_PREFIX: &str = "questions/";

pub const RESPONSES_PREFIX: &str = "responses/";

pub fn question(id: Uuid) -> String {
    format!("questions/{id}.json")
}

pub fn responses_for_question(question_id: Uuid) -> String {
    format!("responses/{question_id}/")
}

pub fn response(question_id: Uuid, id: Uuid) -> String {
    format!("responses/{question_id}/{id}.json")
}
