use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{errors::AppResult, state::AppState, users::dto::User};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/registration", post(registration))
        .route("/list", get(list))
}

/// The body is decoded as JSON whatever the `Content-Type` header says.
#[instrument(skip(state, body))]
pub async fn registration(State(state): State<AppState>, body: Bytes) -> AppResult<StatusCode> {
    let user: User = serde_json::from_slice(&body)?;
    let email = user.email.clone();

    state.users.registration(user).await?;

    info!(%email, "user registered");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}
