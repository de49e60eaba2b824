use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::error::{self, ApiError};
use crate::state::AppState;

use super::dto::{DeleteResponse, UserPayload};
use super::repo::{self, User};
use super::services::validate_user;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = repo::list(&state.db)
        .await
        .map_err(|e| error::from_repo(&state.config, e))?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = repo::get(&state.db, id)
        .await
        .map_err(|e| error::from_repo(&state.config, e))?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new_user = validate_user(payload).map_err(|problems| {
        warn!(?problems, "create rejected");
        error::validation(problems)
    })?;

    let user = repo::create(&state.db, &new_user)
        .await
        .map_err(|e| error::from_repo(&state.config, e))?;

    info!(user_id = user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let new_user = validate_user(payload).map_err(|problems| {
        warn!(id, ?problems, "update rejected");
        error::validation(problems)
    })?;

    let user = repo::update(&state.db, id, &new_user)
        .await
        .map_err(|e| error::from_repo(&state.config, e))?;

    info!(user_id = user.id, "user updated");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    repo::delete(&state.db, id)
        .await
        .map_err(|e| error::from_repo(&state.config, e))?;

    info!(user_id = id, "user deleted");
    Ok(Json(DeleteResponse { deleted: true }))
}
