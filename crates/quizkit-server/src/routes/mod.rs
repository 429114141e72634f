pub mod health;
pub mod questions;
pub mod responses;

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;

use crate::error::MessageBody;

/// Catch-all used when no UI directory is configured.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody::new(format!("Route not found: {}", uri.path()))),
    )
}
