//! quizkit-grading
//!
//! The scoring engine. Pure and synchronous: no storage, no I/O.
//! Every question type is graded by the same rule, an exact string
//! comparison between the submitted answer and the stored correct answer.

pub mod error;
pub mod scoring;
pub mod session;

pub use scoring::{AnsweredQuestion, ScoreCard, grade, grade_value, max_score, score};
pub use session::{QuizSession, Submission};
