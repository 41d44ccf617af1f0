//! Gatebook transaction models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a gatebook transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Purchase/receipt: increases inventory
    Incoming,
    /// Sale/issue: decreases inventory
    Outgoing,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Incoming => "incoming",
            TransactionType::Outgoing => "outgoing",
        }
    }
}

/// A single dated quantity/rate movement recorded at the gate.
///
/// Immutable once created; `amount` is stored exactly as
/// `quantity * rate`, with rounding applied only at display time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GateEntry {
    pub id: i64,
    pub transaction_date: NaiveDate,
    pub party_id: i64,
    pub item_id: i64,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub description: Option<String>,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}
