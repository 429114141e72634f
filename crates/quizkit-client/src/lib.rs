//! quizkit-client
//!
//! Typed HTTP client for the quiz API, plus the respondent-side submission
//! flow: grade locally, then record every response concurrently.

pub mod client;
pub mod error;
pub mod submit;

pub use client::QuizClient;
pub use error::ClientError;
pub use submit::{FailedResponse, SubmissionReport};
