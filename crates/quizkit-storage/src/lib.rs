//! quizkit-storage
//!
//! Persistence for questions and responses on top of an opaque document
//! store. The production backend is S3; an in-memory backend serves tests
//! and local runs.

pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod questions;
pub mod responses;
pub mod s3;
pub mod store;

pub use error::{RecordError, StorageError};
pub use memory::MemoryStore;
pub use s3::S3Store;
pub use store::{Document, DocumentStore};
