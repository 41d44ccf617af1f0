//! Inventory models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running on-hand quantity for one item.
///
/// The counter is adjusted as a side effect of transaction insertion and
/// otherwise only by an explicit manual override. `baseline_reset_at` is
/// set whenever an operator overrides the quantity: a NULL value means
/// the counter is still derivable from the transaction log, a non-NULL
/// value marks the counter as a new baseline from that moment on.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryRecord {
    pub id: i64,
    pub item_id: i64,
    pub quantity: Decimal,
    pub baseline_reset_at: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,
}
