//! HTTP handlers for gatebook entry endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::AppResult;
use crate::models::GateEntry;
use crate::services::gatebook::{EntryFilter, GateEntryWithNames, GatebookService, RecordEntryInput};
use crate::AppState;

/// Record a gatebook entry (transaction plus atomic inventory update)
pub async fn record_entry(
    State(state): State<AppState>,
    Json(input): Json<RecordEntryInput>,
) -> AppResult<Json<GateEntry>> {
    let service = GatebookService::new(state.db);
    let entry = service.record_entry(input).await?;
    Ok(Json(entry))
}

/// List transactions with optional date/party/item filters
pub async fn list_entries(
    State(state): State<AppState>,
    Query(filter): Query<EntryFilter>,
) -> AppResult<Json<Vec<GateEntryWithNames>>> {
    let service = GatebookService::new(state.db);
    let entries = service.list_entries(&filter).await?;
    Ok(Json(entries))
}
