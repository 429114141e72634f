//! quizkit-server
//!
//! The quiz HTTP API: question CRUD and response recording over a
//! [`DocumentStore`](quizkit_storage::DocumentStore).

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

pub use state::AppState;

/// Build the API router.
///
/// Unknown routes fall back to the UI in `static_dir` (its `index.html` for
/// anything that is not a file), or to a JSON 404 when there is no UI.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(
            "/questions",
            get(routes::questions::list_questions).post(routes::questions::create_question),
        )
        .route(
            "/questions/{id}",
            get(routes::questions::get_question)
                .put(routes::questions::update_question)
                .delete(routes::questions::delete_question),
        )
        .route("/responses", post(routes::responses::create_response))
        .route(
            "/responses/question/{question_id}",
            get(routes::responses::list_responses_for_question),
        );

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api);

    let app = match static_dir {
        Some(dir) => app.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => app.fallback(routes::not_found),
    };

    app.layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
