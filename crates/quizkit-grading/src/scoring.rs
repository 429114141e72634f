use serde::{Deserialize, Serialize};
use ts_rs::TS;

use quizkit_core::models::question::Question;

/// Whether `submitted` is the correct answer to `question`.
///
/// Plain string equality with the stored correct answer: no trimming, no
/// case folding, no per-type rules. A malformed or out-of-range
/// `correct_answer` simply never matches.
pub fn grade(question: &Question, submitted: &str) -> bool {
    submitted == question.correct_answer
}

/// [`grade`] for an answer that arrived as arbitrary JSON.
///
/// Only a JSON string can match; `2` is not `"2"`.
pub fn grade_value(question: &Question, submitted: &serde_json::Value) -> bool {
    submitted
        .as_str()
        .is_some_and(|answer| grade(question, answer))
}

/// A question paired with the respondent's answer, if they gave one.
#[derive(Debug, Clone, Copy)]
pub struct AnsweredQuestion<'a> {
    pub question: &'a Question,
    pub answer: Option<&'a str>,
}

impl AnsweredQuestion<'_> {
    pub fn is_correct(&self) -> bool {
        self.answer.is_some_and(|a| grade(self.question, a))
    }

    /// Points this answer earns: all of them, or none.
    pub fn awarded(&self) -> f64 {
        if self.is_correct() {
            self.question.points
        } else {
            0.0
        }
    }
}

/// Total points over the correctly answered questions.
pub fn score(answered: &[AnsweredQuestion<'_>]) -> f64 {
    answered.iter().map(AnsweredQuestion::awarded).sum()
}

/// Points available if every question were answered correctly.
pub fn max_score<'a>(questions: impl IntoIterator<Item = &'a Question>) -> f64 {
    questions.into_iter().map(|q| q.points).sum()
}

/// Outcome of grading a whole quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreCard {
    pub score: f64,
    pub max_score: f64,
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl ScoreCard {
    pub fn from_answers(answered: &[AnsweredQuestion<'_>]) -> Self {
        Self {
            score: score(answered),
            max_score: max_score(answered.iter().map(|a| a.question)),
            correct: answered.iter().filter(|a| a.is_correct()).count(),
            answered: answered.iter().filter(|a| a.answer.is_some()).count(),
            total: answered.len(),
        }
    }
}
