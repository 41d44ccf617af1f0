//! Party and item ledgers
//!
//! Both ledgers are windowed views: rows are ordered by transaction
//! date with the transaction id as tie-break, and the running balance is
//! a cumulative sum over exactly the rows inside the requested window.
//! Nothing is carried forward from history before the window start; an
//! all-time balance is obtained by omitting the date filter.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use crate::models::TransactionType;
use shared::types::LedgerWindow;

/// Service producing windowed party and item ledgers
#[derive(Clone)]
pub struct LedgerService {
    db: PgPool,
}

/// One row of a party ledger: a monetary movement with its running
/// balance within the window
#[derive(Debug, Clone, Serialize)]
pub struct PartyLedgerRow {
    pub id: i64,
    pub transaction_date: NaiveDate,
    pub item_name: String,
    pub quantity: Decimal,
    pub unit: Option<String>,
    pub rate: Decimal,
    pub amount: Decimal,
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
    pub description: Option<String>,
    pub transaction_type: TransactionType,
}

/// Party ledger with summary totals
#[derive(Debug, Clone, Serialize)]
pub struct PartyLedger {
    pub party_id: i64,
    pub party_name: String,
    pub rows: Vec<PartyLedgerRow>,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    /// Final running balance of the window (zero when empty)
    pub balance: Decimal,
}

/// One row of an item ledger: a quantity movement with its running
/// stock balance within the window
#[derive(Debug, Clone, Serialize)]
pub struct ItemLedgerRow {
    pub id: i64,
    pub transaction_date: NaiveDate,
    pub party_name: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
    pub quantity_in: Decimal,
    pub quantity_out: Decimal,
    pub balance: Decimal,
    pub description: Option<String>,
    pub transaction_type: TransactionType,
}

/// Item ledger with summary totals
#[derive(Debug, Clone, Serialize)]
pub struct ItemLedger {
    pub item_id: i64,
    pub item_name: String,
    pub unit: Option<String>,
    pub rows: Vec<ItemLedgerRow>,
    pub total_in: Decimal,
    pub total_out: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, FromRow)]
struct PartyLedgerRawRow {
    id: i64,
    transaction_date: NaiveDate,
    item_name: String,
    quantity: Decimal,
    unit: Option<String>,
    rate: Decimal,
    amount: Decimal,
    description: Option<String>,
    transaction_type: TransactionType,
}

#[derive(Debug, FromRow)]
struct ItemLedgerRawRow {
    id: i64,
    transaction_date: NaiveDate,
    party_name: String,
    quantity: Decimal,
    rate: Decimal,
    amount: Decimal,
    description: Option<String>,
    transaction_type: TransactionType,
}

/// A movement as seen by the ledger folds: its direction and the folded
/// magnitude (amount for party ledgers, quantity for item ledgers)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub transaction_type: TransactionType,
    pub magnitude: Decimal,
}

/// Split a movement into its (in, out) columns: incoming magnitudes go
/// to the first column, outgoing to the second.
pub fn split_columns(m: Movement) -> (Decimal, Decimal) {
    match m.transaction_type {
        TransactionType::Incoming => (m.magnitude, Decimal::ZERO),
        TransactionType::Outgoing => (Decimal::ZERO, m.magnitude),
    }
}

/// Fold a window-ordered sequence of movements into running balances,
/// starting from zero. Returns one cumulative (in - out) value per
/// movement.
pub fn running_balances(movements: &[Movement]) -> Vec<Decimal> {
    let mut balance = Decimal::ZERO;
    movements
        .iter()
        .map(|m| {
            let (inflow, outflow) = split_columns(*m);
            balance += inflow - outflow;
            balance
        })
        .collect()
}

impl LedgerService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Party ledger: debit for goods supplied to us (incoming), credit
    /// for goods received from us (outgoing), running balance restarting
    /// at zero at the window start.
    pub async fn party_ledger(
        &self,
        party_id: i64,
        window: &LedgerWindow,
    ) -> AppResult<PartyLedger> {
        let party_name = sqlx::query_scalar::<_, String>(
            "SELECT name FROM parties WHERE id = $1",
        )
        .bind(party_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Party".to_string()))?;

        let raw = sqlx::query_as::<_, PartyLedgerRawRow>(
            r#"
            SELECT t.id, t.transaction_date, i.name AS item_name, t.quantity, i.unit,
                   t.rate, t.amount, t.description, t.transaction_type
            FROM transactions t
            JOIN items i ON t.item_id = i.id
            WHERE t.party_id = $1
              AND ($2::date IS NULL OR t.transaction_date >= $2)
              AND ($3::date IS NULL OR t.transaction_date <= $3)
            ORDER BY t.transaction_date, t.id
            "#,
        )
        .bind(party_id)
        .bind(window.start_date)
        .bind(window.end_date)
        .fetch_all(&self.db)
        .await?;

        let movements: Vec<Movement> = raw
            .iter()
            .map(|r| Movement {
                transaction_type: r.transaction_type,
                magnitude: r.amount,
            })
            .collect();
        let balances = running_balances(&movements);

        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;
        let rows: Vec<PartyLedgerRow> = raw
            .into_iter()
            .zip(balances)
            .map(|(r, balance)| {
                let (debit, credit) = split_columns(Movement {
                    transaction_type: r.transaction_type,
                    magnitude: r.amount,
                });
                total_debit += debit;
                total_credit += credit;
                PartyLedgerRow {
                    id: r.id,
                    transaction_date: r.transaction_date,
                    item_name: r.item_name,
                    quantity: r.quantity,
                    unit: r.unit,
                    rate: r.rate,
                    amount: r.amount,
                    debit,
                    credit,
                    balance,
                    description: r.description,
                    transaction_type: r.transaction_type,
                }
            })
            .collect();

        let balance = rows.last().map(|r| r.balance).unwrap_or(Decimal::ZERO);

        Ok(PartyLedger {
            party_id,
            party_name,
            rows,
            total_debit,
            total_credit,
            balance,
        })
    }

    /// Item ledger: quantity-in for incoming, quantity-out for outgoing,
    /// running stock balance restarting at zero at the window start.
    pub async fn item_ledger(&self, item_id: i64, window: &LedgerWindow) -> AppResult<ItemLedger> {
        let item = sqlx::query_as::<_, (String, Option<String>)>(
            "SELECT name, unit FROM items WHERE id = $1",
        )
        .bind(item_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        let raw = sqlx::query_as::<_, ItemLedgerRawRow>(
            r#"
            SELECT t.id, t.transaction_date, p.name AS party_name, t.quantity,
                   t.rate, t.amount, t.description, t.transaction_type
            FROM transactions t
            JOIN parties p ON t.party_id = p.id
            WHERE t.item_id = $1
              AND ($2::date IS NULL OR t.transaction_date >= $2)
              AND ($3::date IS NULL OR t.transaction_date <= $3)
            ORDER BY t.transaction_date, t.id
            "#,
        )
        .bind(item_id)
        .bind(window.start_date)
        .bind(window.end_date)
        .fetch_all(&self.db)
        .await?;

        let movements: Vec<Movement> = raw
            .iter()
            .map(|r| Movement {
                transaction_type: r.transaction_type,
                magnitude: r.quantity,
            })
            .collect();
        let balances = running_balances(&movements);

        let mut total_in = Decimal::ZERO;
        let mut total_out = Decimal::ZERO;
        let rows: Vec<ItemLedgerRow> = raw
            .into_iter()
            .zip(balances)
            .map(|(r, balance)| {
                let (quantity_in, quantity_out) = split_columns(Movement {
                    transaction_type: r.transaction_type,
                    magnitude: r.quantity,
                });
                total_in += quantity_in;
                total_out += quantity_out;
                ItemLedgerRow {
                    id: r.id,
                    transaction_date: r.transaction_date,
                    party_name: r.party_name,
                    quantity: r.quantity,
                    rate: r.rate,
                    amount: r.amount,
                    quantity_in,
                    quantity_out,
                    balance,
                    description: r.description,
                    transaction_type: r.transaction_type,
                }
            })
            .collect();

        let balance = rows.last().map(|r| r.balance).unwrap_or(Decimal::ZERO);

        Ok(ItemLedger {
            item_id,
            item_name: item.0,
            unit: item.1,
            rows,
            total_in,
            total_out,
            balance,
        })
    }
}
