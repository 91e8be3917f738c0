use std::path::PathBuf;

use axum::{routing::get, Router};
use repository::Repository;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod healthz;
pub mod not_found;
pub mod post;
mod response;

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
    // read-only, for the shallow /health file check
    db_path: PathBuf,
}

pub fn serve(repository: Repository, db_path: PathBuf) -> Router {
    info!(task = "start api serving");

    let state = ApiState {
        repo: repository,
        db_path,
    };

    Router::new()
        .route("/", get(post::get_posts))
        .route("/post/:id", get(post::get_post))
        .route("/new", get(post::new_post).post(post::create_post))
        .route("/health", get(healthz::get_health))
        .fallback(not_found::get_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
