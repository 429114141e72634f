use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;

pub const DEFAULT_TITLE: &str = "New Question";
pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_CORRECT_ANSWER: &str = "0";
pub const DEFAULT_POINTS: f64 = 1.0;
pub const DEFAULT_ANSWER_SLOTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum QuestionType {
    FillInBlanks,
    Comprehension,
    Mcq,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::FillInBlanks => "fillInBlanks",
            QuestionType::Comprehension => "comprehension",
            QuestionType::Mcq => "mcq",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fillInBlanks" => Ok(QuestionType::FillInBlanks),
            "comprehension" => Ok(QuestionType::Comprehension),
            "mcq" => Ok(QuestionType::Mcq),
            other => Err(ValidationError::InvalidQuestionType(other.to_string())),
        }
    }
}

/// A stored quiz question.
///
/// `answers` is positional: the option at index `i` is selected by submitting
/// the decimal string `i`, and `correct_answer` holds that string for the
/// right option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub title: String,
    pub category: String,
    pub content: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
    pub points: f64,
    /// Reading passage; only rendered for comprehension questions.
    pub paragraph: String,
    /// Caller-defined extra fields, carried through untouched.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Question {
    /// Check the constraints every stored question must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.category.is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if !self.points.is_finite() || self.points < 0.0 {
            return Err(ValidationError::InvalidPoints(self.points));
        }
        Ok(())
    }

    /// Position of the correct option, if `correct_answer` names one exactly
    /// as a submitted option index would be written.
    pub fn correct_index(&self) -> Option<usize> {
        (0..self.answers.len()).find(|i| i.to_string() == self.correct_answer)
    }

    /// Whether any submittable option can ever grade as correct.
    pub fn is_gradable(&self) -> bool {
        self.correct_index().is_some()
    }

    /// A comprehension question with nothing to read.
    pub fn is_missing_passage(&self) -> bool {
        self.question_type == QuestionType::Comprehension && self.paragraph.trim().is_empty()
    }
}

/// A partially filled question submitted for creation or update.
///
/// On create, absent optional fields take their defaults; on update, only the
/// fields present replace the stored ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionDraft {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl QuestionDraft {
    /// Shorthand for the three fields a new question cannot do without.
    pub fn new(question_type: QuestionType, title: &str, category: &str) -> Self {
        Self {
            question_type: Some(question_type.to_string()),
            title: Some(title.to_string()),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    /// Build a new question, filling defaults for everything optional.
    ///
    /// `type`, `title` and `category` must be present and non-empty.
    pub fn into_question(
        self,
        id: Uuid,
        now: jiff::Timestamp,
    ) -> Result<Question, ValidationError> {
        let question_type = parse_type(required(self.question_type, "type")?.as_str())?;
        let title = required(self.title, "title")?;
        let category = required(self.category, "category")?;

        let question = Question {
            id,
            question_type,
            title,
            category,
            content: self.content.unwrap_or_default(),
            answers: self
                .answers
                .unwrap_or_else(|| vec![String::new(); DEFAULT_ANSWER_SLOTS]),
            correct_answer: self
                .correct_answer
                .unwrap_or_else(|| DEFAULT_CORRECT_ANSWER.to_string()),
            points: self.points.unwrap_or(DEFAULT_POINTS),
            paragraph: self.paragraph.unwrap_or_default(),
            metadata: self.metadata.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        question.validate()?;
        Ok(question)
    }

    /// Replace the fields present in this draft on a copy of `existing`.
    ///
    /// `id` and `created_at` are kept; `updated_at` becomes `now`. The merged
    /// record is validated as a whole.
    pub fn apply_to(
        self,
        existing: &Question,
        now: jiff::Timestamp,
    ) -> Result<Question, ValidationError> {
        let mut merged = existing.clone();

        if let Some(question_type) = self.question_type {
            merged.question_type = parse_type(&question_type)?;
        }
        if let Some(title) = self.title {
            merged.title = title;
        }
        if let Some(category) = self.category {
            merged.category = category;
        }
        if let Some(content) = self.content {
            merged.content = content;
        }
        if let Some(answers) = self.answers {
            merged.answers = answers;
        }
        if let Some(correct_answer) = self.correct_answer {
            merged.correct_answer = correct_answer;
        }
        if let Some(points) = self.points {
            merged.points = points;
        }
        if let Some(paragraph) = self.paragraph {
            merged.paragraph = paragraph;
        }
        if let Some(metadata) = self.metadata {
            merged.metadata = metadata;
        }
        merged.updated_at = now;

        merged.validate()?;
        Ok(merged)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

fn parse_type(value: &str) -> Result<QuestionType, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField("type"));
    }
    value.parse()
}
