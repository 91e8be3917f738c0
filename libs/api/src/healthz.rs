use axum::{extract::State, Json};
use serde::Serialize;

use crate::ApiState;

#[derive(Serialize)]
pub struct GetHealthResponse {
    pub status: &'static str,
    pub db: &'static str,
}

/// Liveness only: reports whether the storage file exists right now,
/// without opening a connection. Always 200, even when the file is
/// missing.
pub(super) async fn get_health(
    State(state): State<ApiState>,
) -> Json<GetHealthResponse> {
    let db = if state.db_path.exists() {
        "ok"
    } else {
        "missing"
    };

    Json(GetHealthResponse { status: "ok", db })
}
