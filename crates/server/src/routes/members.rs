//! Roster API routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use roster_core::{ApiError, MemberRecord, SynagogueId, SynagogueSummary};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for the member list.
#[derive(Debug, Default, Deserialize)]
pub struct MemberFilter {
    pub synagogue: Option<SynagogueId>,
}

/// GET /api/members - List members, optionally of one synagogue.
pub async fn list_members(
    State(state): State<AppState>,
    Query(filter): Query<MemberFilter>,
) -> Result<Json<Vec<MemberRecord>>, (StatusCode, Json<ApiError>)> {
    match filter.synagogue {
        Some(id) => members_of(&state, id),
        None => Ok(Json(state.roster.all_members())),
    }
}

/// GET /api/synagogues - List synagogues.
pub async fn list_synagogues(State(state): State<AppState>) -> Json<Vec<SynagogueSummary>> {
    Json(state.roster.synagogues().to_vec())
}

/// GET /api/synagogues/:id/members - List the members of one synagogue.
pub async fn synagogue_members(
    State(state): State<AppState>,
    Path(id): Path<SynagogueId>,
) -> Result<Json<Vec<MemberRecord>>, (StatusCode, Json<ApiError>)> {
    members_of(&state, id)
}

fn members_of(
    state: &AppState,
    id: SynagogueId,
) -> Result<Json<Vec<MemberRecord>>, (StatusCode, Json<ApiError>)> {
    state
        .roster
        .members_of(id)
        .map(|members| Json(members.to_vec()))
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::with_code(
                    format!("Synagogue not found: {}", id),
                    "NOT_FOUND",
                )),
            )
        })
}
