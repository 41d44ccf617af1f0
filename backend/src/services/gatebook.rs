//! Gatebook entry service: validated transaction recording with an
//! atomic inventory side effect, plus filtered transaction listing.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use crate::models::{GateEntry, TransactionType};
use shared::validation;

/// Service for recording and listing gatebook transactions
#[derive(Clone)]
pub struct GatebookService {
    db: PgPool,
}

/// Input for recording a gatebook entry
#[derive(Debug, Deserialize)]
pub struct RecordEntryInput {
    /// Defaults to today when omitted; must not lie in the future
    pub transaction_date: Option<NaiveDate>,
    pub party_id: i64,
    pub item_id: i64,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub transaction_type: TransactionType,
    pub description: Option<String>,
}

/// Filters for the transaction list
#[derive(Debug, Default, Deserialize)]
pub struct EntryFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub party_id: Option<i64>,
    pub item_id: Option<i64>,
}

/// Transaction row joined with party and item names for display
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GateEntryWithNames {
    pub id: i64,
    pub transaction_date: NaiveDate,
    pub party_name: String,
    pub item_name: String,
    pub quantity: Decimal,
    pub unit: Option<String>,
    pub rate: Decimal,
    pub amount: Decimal,
    pub description: Option<String>,
    pub transaction_type: TransactionType,
}

/// Validate the field-level contract of an entry in order: quantity,
/// then rate, then the date. Existence and stock checks come after,
/// against the store.
pub fn validate_entry(input: &RecordEntryInput, today: NaiveDate) -> AppResult<NaiveDate> {
    if let Err(msg) = validation::validate_quantity(input.quantity) {
        return Err(AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        });
    }

    if let Err(msg) = validation::validate_rate(input.rate) {
        return Err(AppError::Validation {
            field: "rate".to_string(),
            message: msg.to_string(),
        });
    }

    let date = input.transaction_date.unwrap_or(today);
    if let Err(msg) = validation::validate_entry_date(date, today) {
        return Err(AppError::Validation {
            field: "transaction_date".to_string(),
            message: msg.to_string(),
        });
    }

    Ok(date)
}

/// Reject an outgoing movement that would drive the on-hand quantity
/// below zero. Incoming movements always pass.
pub fn check_stock(
    transaction_type: TransactionType,
    requested: Decimal,
    on_hand: Decimal,
) -> AppResult<()> {
    if transaction_type == TransactionType::Outgoing && requested > on_hand {
        return Err(AppError::InsufficientStock(format!(
            "Insufficient stock. Available: {}",
            on_hand
        )));
    }
    Ok(())
}

/// Signed inventory delta of a movement
pub fn inventory_delta(transaction_type: TransactionType, quantity: Decimal) -> Decimal {
    match transaction_type {
        TransactionType::Incoming => quantity,
        TransactionType::Outgoing => -quantity,
    }
}

impl GatebookService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a gatebook entry.
    ///
    /// The transaction row and the inventory adjustment are applied in
    /// one database transaction: both happen or neither does. The
    /// inventory row is locked for the duration of the check-and-update
    /// so concurrent entries against the same item serialize.
    pub async fn record_entry(&self, input: RecordEntryInput) -> AppResult<GateEntry> {
        let date = validate_entry(&input, Utc::now().date_naive())?;

        let mut tx = self.db.begin().await?;

        let party_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM parties WHERE id = $1)")
                .bind(input.party_id)
                .fetch_one(&mut *tx)
                .await?;

        if !party_exists {
            return Err(AppError::NotFound("Party".to_string()));
        }

        // Lock the item's inventory row; also serves as the item
        // existence check since every item owns exactly one record.
        let on_hand = sqlx::query_scalar::<_, Decimal>(
            "SELECT quantity FROM inventory WHERE item_id = $1 FOR UPDATE",
        )
        .bind(input.item_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        check_stock(input.transaction_type, input.quantity, on_hand)?;

        let amount = input.quantity * input.rate;

        let entry = sqlx::query_as::<_, GateEntry>(
            r#"
            INSERT INTO transactions
                (transaction_date, party_id, item_id, quantity, rate, description,
                 transaction_type, amount)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, transaction_date, party_id, item_id, quantity, rate,
                      description, transaction_type, amount, created_at
            "#,
        )
        .bind(date)
        .bind(input.party_id)
        .bind(input.item_id)
        .bind(input.quantity)
        .bind(input.rate)
        .bind(&input.description)
        .bind(input.transaction_type)
        .bind(amount)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE inventory SET quantity = quantity + $1, last_updated = now() WHERE item_id = $2",
        )
        .bind(inventory_delta(input.transaction_type, input.quantity))
        .bind(input.item_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            entry_id = entry.id,
            item_id = entry.item_id,
            transaction_type = entry.transaction_type.as_str(),
            "Recorded gatebook entry"
        );

        Ok(entry)
    }

    /// List transactions with optional date range, party, and item
    /// filters, newest first.
    pub async fn list_entries(&self, filter: &EntryFilter) -> AppResult<Vec<GateEntryWithNames>> {
        let entries = sqlx::query_as::<_, GateEntryWithNames>(
            r#"
            SELECT t.id, t.transaction_date, p.name AS party_name, i.name AS item_name,
                   t.quantity, i.unit, t.rate, t.amount, t.description, t.transaction_type
            FROM transactions t
            JOIN parties p ON t.party_id = p.id
            JOIN items i ON t.item_id = i.id
            WHERE ($1::date IS NULL OR t.transaction_date >= $1)
              AND ($2::date IS NULL OR t.transaction_date <= $2)
              AND ($3::bigint IS NULL OR t.party_id = $3)
              AND ($4::bigint IS NULL OR t.item_id = $4)
            ORDER BY t.transaction_date DESC, t.id DESC
            "#,
        )
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.party_id)
        .bind(filter.item_id)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }
}
