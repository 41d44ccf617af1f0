//! HTTP handlers for inventory endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::InventoryRecord;
use crate::services::inventory::{InventoryService, InventoryStatus};
use crate::AppState;

/// Input for a manual stock override
#[derive(Debug, Deserialize)]
pub struct SetQuantityInput {
    pub quantity: Decimal,
}

/// On-hand quantity for one item
#[derive(Debug, Serialize)]
pub struct StockLevel {
    pub item_id: i64,
    pub quantity: Decimal,
}

/// Get the current on-hand quantity for one item
pub async fn get_current_stock(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> AppResult<Json<StockLevel>> {
    let service = InventoryService::new(state.db);
    let quantity = service.current_stock(item_id).await?;
    Ok(Json(StockLevel { item_id, quantity }))
}

/// Get inventory status for all items
pub async fn get_inventory_status(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InventoryStatus>>> {
    let service = InventoryService::new(state.db);
    let status = service.status().await?;
    Ok(Json(status))
}

/// Manually set the stock quantity for an item
pub async fn set_inventory_quantity(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(input): Json<SetQuantityInput>,
) -> AppResult<Json<InventoryRecord>> {
    let service = InventoryService::new(state.db);
    let record = service.set_quantity(item_id, input.quantity).await?;
    Ok(Json(record))
}
