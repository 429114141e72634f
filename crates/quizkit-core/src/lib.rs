//! quizkit-core
//!
//! Pure domain types for questions and responses, draft validation, and
//! document key conventions. No storage or transport dependency.

pub mod error;
pub mod keys;
pub mod models;

pub use error::ValidationError;
