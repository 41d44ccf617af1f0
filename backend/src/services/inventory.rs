//! Inventory projection service
//!
//! The on-hand counter is maintained as a side effect of gatebook
//! entries, so reads here are O(1) lookups rather than log replays. A
//! manual override is allowed as an escape hatch; it stamps the record's
//! baseline_reset_at so overridden stock stays distinguishable from
//! log-derived stock.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use crate::models::InventoryRecord;
use shared::validation;

/// Service for inventory status and manual stock corrections
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// Inventory status line for one item
#[derive(Debug, Clone, Serialize)]
pub struct InventoryStatus {
    pub item_id: i64,
    pub item_name: String,
    pub unit: Option<String>,
    pub quantity: Decimal,
    /// Most recent incoming rate; zero when the item was never purchased
    pub last_rate: Decimal,
    /// quantity x last incoming rate
    pub value: Decimal,
    pub baseline_reset_at: Option<DateTime<Utc>>,
}

/// Row for the status query
#[derive(Debug, FromRow)]
struct StatusRow {
    item_id: i64,
    item_name: String,
    unit: Option<String>,
    quantity: Decimal,
    last_rate: Decimal,
    baseline_reset_at: Option<DateTime<Utc>>,
}

/// Asset value of a stock position at its last purchase price.
///
/// Last-incoming-rate is the valuation basis throughout the system (not
/// weighted average, not FIFO); items that were never purchased value
/// at zero.
pub fn valuation(quantity: Decimal, last_incoming_rate: Option<Decimal>) -> Decimal {
    quantity * last_incoming_rate.unwrap_or(Decimal::ZERO)
}

impl InventoryService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Current on-hand quantity for one item (stored counter, not a
    /// recomputation from the log)
    pub async fn current_stock(&self, item_id: i64) -> AppResult<Decimal> {
        let quantity = sqlx::query_scalar::<_, Decimal>(
            "SELECT quantity FROM inventory WHERE item_id = $1",
        )
        .bind(item_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        Ok(quantity)
    }

    /// Inventory status for all items: quantity, last incoming rate,
    /// and valuation, ordered by item name.
    pub async fn status(&self) -> AppResult<Vec<InventoryStatus>> {
        let rows = sqlx::query_as::<_, StatusRow>(
            r#"
            SELECT i.id AS item_id, i.name AS item_name, i.unit,
                   COALESCE(inv.quantity, 0) AS quantity,
                   COALESCE(
                       (SELECT t.rate FROM transactions t
                        WHERE t.item_id = i.id AND t.transaction_type = 'incoming'
                        ORDER BY t.transaction_date DESC, t.id DESC
                        LIMIT 1), 0
                   ) AS last_rate,
                   inv.baseline_reset_at
            FROM items i
            LEFT JOIN inventory inv ON inv.item_id = i.id
            ORDER BY i.name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| InventoryStatus {
                value: valuation(r.quantity, Some(r.last_rate)),
                item_id: r.item_id,
                item_name: r.item_name,
                unit: r.unit,
                quantity: r.quantity,
                last_rate: r.last_rate,
                baseline_reset_at: r.baseline_reset_at,
            })
            .collect())
    }

    /// Manually override the stored quantity for an item.
    ///
    /// This intentionally breaks replay-equivalence with the transaction
    /// log; the record's baseline_reset_at is stamped so the override is
    /// visible to audits.
    pub async fn set_quantity(
        &self,
        item_id: i64,
        new_quantity: Decimal,
    ) -> AppResult<InventoryRecord> {
        if let Err(msg) = validation::validate_stock_override(new_quantity) {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: msg.to_string(),
            });
        }

        let record = sqlx::query_as::<_, InventoryRecord>(
            r#"
            UPDATE inventory
            SET quantity = $1, baseline_reset_at = now(), last_updated = now()
            WHERE item_id = $2
            RETURNING id, item_id, quantity, baseline_reset_at, last_updated
            "#,
        )
        .bind(new_quantity)
        .bind(item_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        tracing::info!(item_id, %new_quantity, "Manual inventory override");

        Ok(record)
    }
}
