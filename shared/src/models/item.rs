//! Item (stock-keeping unit) models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked stock-keeping unit.
///
/// Each item owns exactly one inventory record, created together with
/// the item.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Compact item listing entry for dropdowns and pickers
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItemSummary {
    pub id: i64,
    pub name: String,
}
