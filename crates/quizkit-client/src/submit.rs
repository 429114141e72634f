use futures::future::join_all;
use uuid::Uuid;

use quizkit_core::models::response::{Response, ResponseDraft};
use quizkit_grading::{QuizSession, ScoreCard, Submission};

use crate::client::QuizClient;
use crate::error::ClientError;

/// A response the server did not record.
#[derive(Debug)]
pub struct FailedResponse {
    pub draft: ResponseDraft,
    pub error: ClientError,
}

/// Outcome of submitting a quiz.
///
/// The score is computed locally and is final regardless of how many
/// responses were recorded; `failed` lists the ones that were lost.
#[derive(Debug)]
pub struct SubmissionReport {
    pub card: ScoreCard,
    pub recorded: Vec<Response>,
    pub failed: Vec<FailedResponse>,
    pub unanswered: Vec<Uuid>,
}

impl SubmissionReport {
    pub fn succeeded(&self) -> usize {
        self.recorded.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Every answered question has a stored response.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl QuizClient {
    /// Grade the session and record one response per answered question.
    ///
    /// All writes are issued concurrently and none are retried; partial
    /// failure is reported, not raised.
    pub async fn submit(&self, session: QuizSession) -> SubmissionReport {
        let Submission {
            card,
            responses,
            unanswered,
        } = session.submit();

        let results = join_all(responses.into_iter().map(|draft| async move {
            let result = self.create_response(&draft).await;
            (draft, result)
        }))
        .await;

        let mut recorded = Vec::new();
        let mut failed = Vec::new();
        for (draft, result) in results {
            match result {
                Ok(response) => recorded.push(response),
                Err(error) => failed.push(FailedResponse { draft, error }),
            }
        }

        if failed.is_empty() {
            tracing::info!(
                score = card.score,
                max_score = card.max_score,
                recorded = recorded.len(),
                "quiz submitted"
            );
        } else {
            tracing::warn!(
                score = card.score,
                recorded = recorded.len(),
                failed = failed.len(),
                "quiz submitted but some responses were not recorded"
            );
        }

        SubmissionReport {
            card,
            recorded,
            failed,
            unanswered,
        }
    }
}
