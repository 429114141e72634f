use std::collections::HashMap;

use uuid::Uuid;

use quizkit_core::models::question::Question;
use quizkit_core::models::response::ResponseDraft;

use crate::error::SessionError;
use crate::scoring::{AnsweredQuestion, ScoreCard};

/// One respondent's pass through a quiz.
///
/// Answers accumulate locally until [`QuizSession::submit`], which consumes
/// the session, so a quiz can only be submitted once.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: HashMap<Uuid, String>,
}

/// A graded quiz, ready to be recorded.
#[derive(Debug, Clone)]
pub struct Submission {
    pub card: ScoreCard,
    /// One draft per answered question, in quiz order.
    pub responses: Vec<ResponseDraft>,
    /// Questions left blank; they score zero and produce no response.
    pub unanswered: Vec<Uuid>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: HashMap::new(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer_for(&self, question_id: Uuid) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    /// Record (or change) the answer for one question.
    ///
    /// An empty answer is rejected: the server would refuse to record it.
    pub fn answer(
        &mut self,
        question_id: Uuid,
        answer: impl Into<String>,
    ) -> Result<(), SessionError> {
        if !self.questions.iter().any(|q| q.id == question_id) {
            return Err(SessionError::UnknownQuestion(question_id));
        }
        let answer = answer.into();
        if answer.is_empty() {
            return Err(SessionError::EmptyAnswer(question_id));
        }
        self.answers.insert(question_id, answer);
        Ok(())
    }

    /// Select option `index` of a question, encoded the way it is graded.
    pub fn choose(&mut self, question_id: Uuid, index: usize) -> Result<(), SessionError> {
        self.answer(question_id, index.to_string())
    }

    /// Grade every question and build the responses to record.
    pub fn submit(self) -> Submission {
        let answered: Vec<AnsweredQuestion<'_>> = self
            .questions
            .iter()
            .map(|question| AnsweredQuestion {
                question,
                answer: self.answers.get(&question.id).map(String::as_str),
            })
            .collect();

        let card = ScoreCard::from_answers(&answered);

        let mut responses = Vec::new();
        let mut unanswered = Vec::new();
        for a in &answered {
            match a.answer {
                Some(answer) => responses.push(ResponseDraft::new(
                    a.question.id,
                    answer,
                    a.is_correct(),
                )),
                None => unanswered.push(a.question.id),
            }
        }

        Submission {
            card,
            responses,
            unanswered,
        }
    }
}
