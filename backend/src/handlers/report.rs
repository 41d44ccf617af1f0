//! HTTP handlers for balance sheet and dashboard reports

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::balance_sheet::{BalanceSheet, BalanceSheetService};
use crate::services::dashboard::{DashboardData, DashboardService};
use crate::AppState;

/// Query parameters for the balance sheet snapshot
#[derive(Debug, Deserialize)]
pub struct BalanceSheetQuery {
    /// Defaults to today when omitted
    pub as_of: Option<NaiveDate>,
}

/// Get the balance sheet as of a date
pub async fn get_balance_sheet(
    State(state): State<AppState>,
    Query(query): Query<BalanceSheetQuery>,
) -> AppResult<Json<BalanceSheet>> {
    let as_of = query.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let service = BalanceSheetService::new(state.db);
    let sheet = service.snapshot(as_of).await?;
    Ok(Json(sheet))
}

/// Get dashboard aggregates
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardData>> {
    let service = DashboardService::new(state.db);
    let data = service.snapshot().await?;
    Ok(Json(data))
}
