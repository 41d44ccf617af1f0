//! Route definitions for the Gatebook backend

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Party management and party ledger
        .nest("/parties", party_routes())
        // Item management and item ledger
        .nest("/items", item_routes())
        // Inventory status and manual overrides
        .nest("/inventory", inventory_routes())
        // Gatebook entries
        .nest("/gatebook", gatebook_routes())
        // Balance sheet and dashboard reports
        .nest("/reports", report_routes())
}

/// Party management routes
fn party_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_parties).post(handlers::create_party))
        .route(
            "/:party_id",
            get(handlers::get_party).put(handlers::update_party),
        )
        .route("/:party_id/ledger", get(handlers::get_party_ledger))
}

/// Item management routes
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/:item_id",
            get(handlers::get_item).put(handlers::update_item),
        )
        .route("/:item_id/ledger", get(handlers::get_item_ledger))
}

/// Inventory routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_inventory_status))
        .route(
            "/:item_id",
            get(handlers::get_current_stock).put(handlers::set_inventory_quantity),
        )
}

/// Gatebook entry routes
fn gatebook_routes() -> Router<AppState> {
    Router::new().route(
        "/entries",
        get(handlers::list_entries).post(handlers::record_entry),
    )
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/balance-sheet", get(handlers::get_balance_sheet))
        .route("/dashboard", get(handlers::get_dashboard))
}
