//! HTTP handlers for item management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::{Item, ItemSummary};
use crate::services::item::{ItemInput, ItemService};
use crate::AppState;

/// List all items
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<ItemSummary>>> {
    let service = ItemService::new(state.db);
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item (and its zero-quantity inventory record)
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> AppResult<Json<Item>> {
    let service = ItemService::new(state.db);
    let item = service.create_item(input).await?;
    Ok(Json(item))
}

/// Get item details by id
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> AppResult<Json<Item>> {
    let service = ItemService::new(state.db);
    let item = service.get_item(item_id).await?;
    Ok(Json(item))
}

/// Update an existing item
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(input): Json<ItemInput>,
) -> AppResult<Json<Item>> {
    let service = ItemService::new(state.db);
    let item = service.update_item(item_id, input).await?;
    Ok(Json(item))
}
