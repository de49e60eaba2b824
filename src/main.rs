use anyhow::Context;

mod app;
mod config;
mod error;
mod health;
mod schema;
mod state;
mod users;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "userdir=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;

    // No listener until the table exists; a CRUD service with no schema
    // cannot serve its contract.
    schema::ensure_schema(&state.db)
        .await
        .context("initialize database schema")?;

    let app = app::build_app(state.clone());
    app::serve(state, app).await
}
