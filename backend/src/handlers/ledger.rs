//! HTTP handlers for party and item ledger endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::AppResult;
use crate::services::ledger::{ItemLedger, LedgerService, PartyLedger};
use crate::AppState;
use shared::types::LedgerWindow;

/// Get the windowed ledger for a party
pub async fn get_party_ledger(
    State(state): State<AppState>,
    Path(party_id): Path<i64>,
    Query(window): Query<LedgerWindow>,
) -> AppResult<Json<PartyLedger>> {
    let service = LedgerService::new(state.db);
    let ledger = service.party_ledger(party_id, &window).await?;
    Ok(Json(ledger))
}

/// Get the windowed ledger for an item
pub async fn get_item_ledger(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Query(window): Query<LedgerWindow>,
) -> AppResult<Json<ItemLedger>> {
    let service = LedgerService::new(state.db);
    let ledger = service.item_ledger(item_id, &window).await?;
    Ok(Json(ledger))
}
