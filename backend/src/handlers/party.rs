//! HTTP handlers for party management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::{Party, PartySummary};
use crate::services::party::{PartyInput, PartyService};
use crate::AppState;

/// List all parties
pub async fn list_parties(State(state): State<AppState>) -> AppResult<Json<Vec<PartySummary>>> {
    let service = PartyService::new(state.db);
    let parties = service.list_parties().await?;
    Ok(Json(parties))
}

/// Create a new party
pub async fn create_party(
    State(state): State<AppState>,
    Json(input): Json<PartyInput>,
) -> AppResult<Json<Party>> {
    let service = PartyService::new(state.db);
    let party = service.create_party(input).await?;
    Ok(Json(party))
}

/// Get party details by id
pub async fn get_party(
    State(state): State<AppState>,
    Path(party_id): Path<i64>,
) -> AppResult<Json<Party>> {
    let service = PartyService::new(state.db);
    let party = service.get_party(party_id).await?;
    Ok(Json(party))
}

/// Update an existing party
pub async fn update_party(
    State(state): State<AppState>,
    Path(party_id): Path<i64>,
    Json(input): Json<PartyInput>,
) -> AppResult<Json<Party>> {
    let service = PartyService::new(state.db);
    let party = service.update_party(party_id, input).await?;
    Ok(Json(party))
}
