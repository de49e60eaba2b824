use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use sqlx::Connection;
use tracing::{instrument, warn};

use crate::state::AppState;

/// Liveness only. Never touches the store, so it stays 200 while the
/// database is down.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness: acquires a pooled connection and pings it. Reports the store
/// as down on either step failing.
#[instrument(skip(state))]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let probe = async {
        let mut conn = state.db.acquire().await?;
        conn.ping().await
    };

    match probe.await {
        Ok(()) => (StatusCode::OK, Json(json!({ "db": "connected" }))),
        Err(e) => {
            warn!(error = %e, "readiness probe failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "db": "down" })))
        }
    }
}
