//! Balance sheet composition
//!
//! A point-in-time statement derived from the transaction log: inventory
//! valued at the last incoming rate at-or-before the as-of date,
//! receivables and payables from per-party net balances, and equity as
//! the plug figure (assets minus liabilities).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::AppResult;

/// Service producing balance sheet snapshots
#[derive(Clone)]
pub struct BalanceSheetService {
    db: PgPool,
}

/// One inventory asset line: a positive stock position valued at the
/// last purchase price known at the as-of date
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventoryAssetLine {
    pub item_name: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub value: Decimal,
}

/// A party's net balance up to the as-of date.
///
/// Positive net (incoming minus outgoing) classifies the party as a
/// receivable; negative net classifies it as a payable. A party lands in
/// at most one of the two buckets.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PartyNet {
    pub party_name: String,
    pub net: Decimal,
}

/// A receivable or payable line on the balance sheet
#[derive(Debug, Clone, Serialize)]
pub struct PartyBalanceLine {
    pub party_name: String,
    pub balance: Decimal,
}

/// Point-in-time balance sheet
#[derive(Debug, Clone, Serialize)]
pub struct BalanceSheet {
    pub as_of_date: NaiveDate,
    pub inventory: Vec<InventoryAssetLine>,
    pub inventory_total: Decimal,
    pub receivables: Vec<PartyBalanceLine>,
    pub receivables_total: Decimal,
    pub payables: Vec<PartyBalanceLine>,
    pub payables_total: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub equity: Decimal,
}

/// Compose a balance sheet from inventory asset lines and per-party net
/// balances. Pure; all date filtering happens upstream.
pub fn compose(
    as_of_date: NaiveDate,
    inventory: Vec<InventoryAssetLine>,
    nets: Vec<PartyNet>,
) -> BalanceSheet {
    let inventory_total: Decimal = inventory.iter().map(|line| line.value).sum();

    let mut receivables = Vec::new();
    let mut payables = Vec::new();
    for party in nets {
        if party.net > Decimal::ZERO {
            receivables.push(PartyBalanceLine {
                party_name: party.party_name,
                balance: party.net,
            });
        } else if party.net < Decimal::ZERO {
            payables.push(PartyBalanceLine {
                party_name: party.party_name,
                balance: -party.net,
            });
        }
        // Parties with a zero net appear in neither bucket.
    }

    let receivables_total: Decimal = receivables.iter().map(|line| line.balance).sum();
    let payables_total: Decimal = payables.iter().map(|line| line.balance).sum();

    let total_assets = inventory_total + receivables_total;
    let total_liabilities = payables_total;
    let equity = total_assets - total_liabilities;

    BalanceSheet {
        as_of_date,
        inventory,
        inventory_total,
        receivables,
        receivables_total,
        payables,
        payables_total,
        total_assets,
        total_liabilities,
        equity,
    }
}

impl BalanceSheetService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Balance sheet snapshot as of a date. All aggregation is
    /// restricted to transactions dated at or before it.
    pub async fn snapshot(&self, as_of_date: NaiveDate) -> AppResult<BalanceSheet> {
        let inventory = sqlx::query_as::<_, InventoryAssetLine>(
            r#"
            SELECT i.name AS item_name, inv.quantity,
                   COALESCE(
                       (SELECT t.rate FROM transactions t
                        WHERE t.item_id = i.id
                          AND t.transaction_type = 'incoming'
                          AND t.transaction_date <= $1
                        ORDER BY t.transaction_date DESC, t.id DESC
                        LIMIT 1), 0
                   ) AS rate,
                   inv.quantity * COALESCE(
                       (SELECT t.rate FROM transactions t
                        WHERE t.item_id = i.id
                          AND t.transaction_type = 'incoming'
                          AND t.transaction_date <= $1
                        ORDER BY t.transaction_date DESC, t.id DESC
                        LIMIT 1), 0
                   ) AS value
            FROM inventory inv
            JOIN items i ON inv.item_id = i.id
            WHERE inv.quantity > 0
            ORDER BY i.name
            "#,
        )
        .bind(as_of_date)
        .fetch_all(&self.db)
        .await?;

        let nets = sqlx::query_as::<_, PartyNet>(
            r#"
            SELECT p.name AS party_name,
                   COALESCE(SUM(
                       CASE WHEN t.transaction_type = 'incoming'
                            THEN t.amount ELSE -t.amount END
                   ), 0) AS net
            FROM transactions t
            JOIN parties p ON t.party_id = p.id
            WHERE t.transaction_date <= $1
            GROUP BY p.id, p.name
            ORDER BY p.name
            "#,
        )
        .bind(as_of_date)
        .fetch_all(&self.db)
        .await?;

        Ok(compose(as_of_date, inventory, nets))
    }
}
