//! Login/logout routes.
//!
//! Development only: any non-empty username/password pair is accepted.

use axum::{Json, extract::State, http::StatusCode};
use roster_core::{ApiError, Credentials, SessionToken};
use uuid::Uuid;

use crate::state::AppState;

/// POST /api/login - Issue a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<SessionToken>, (StatusCode, Json<ApiError>)> {
    credentials.validate().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_code(e.to_string(), "INVALID_CREDENTIALS")),
        )
    })?;

    let token = state.create_session(credentials.username.clone()).await;
    tracing::info!(username = %credentials.username, "Issued session token");

    Ok(Json(SessionToken {
        token: token.to_string(),
    }))
}

/// POST /api/logout - Revoke a session token.
pub async fn logout(
    State(state): State<AppState>,
    Json(session): Json<SessionToken>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    let token = Uuid::parse_str(&session.token).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_code("Malformed session token", "BAD_TOKEN")),
        )
    })?;

    match state.end_session(token).await {
        Some(username) => {
            tracing::info!(%username, "Session ended");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::with_code("Unknown session", "NOT_FOUND")),
        )),
    }
}
