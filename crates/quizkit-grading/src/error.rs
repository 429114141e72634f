use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(Uuid),

    #[error("answer for question {0} is empty; leave it unanswered instead")]
    EmptyAnswer(Uuid),
}
