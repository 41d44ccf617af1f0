//! Dashboard aggregates: entity counts, monthly movement totals, top
//! items and parties by value, and low-stock warnings.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::AppResult;
use crate::services::gatebook::GateEntryWithNames;

/// Items with less stock than this show up in the low-stock list
const LOW_STOCK_THRESHOLD: i64 = 10;

/// Service producing the dashboard snapshot
#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

/// Incoming/outgoing amount totals for one calendar month
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MonthlyTotal {
    /// Month in YYYY-MM form
    pub month: String,
    pub incoming: Decimal,
    pub outgoing: Decimal,
}

/// A top item or party ranked by total transaction value
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TopEntry {
    pub name: String,
    pub total_value: Decimal,
}

/// Transaction count per type
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TypeCount {
    pub transaction_type: String,
    pub count: i64,
}

/// An item below the low-stock threshold
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LowStockItem {
    pub item_name: String,
    pub quantity: Decimal,
}

/// Full dashboard snapshot
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub parties_count: i64,
    pub items_count: i64,
    pub transactions_count: i64,
    /// Current stock valued at the last incoming rate per item
    pub total_inventory_value: Decimal,
    pub recent_transactions: Vec<GateEntryWithNames>,
    /// Last 6 months of incoming/outgoing amount totals
    pub monthly_totals: Vec<MonthlyTotal>,
    pub top_items: Vec<TopEntry>,
    pub top_parties: Vec<TopEntry>,
    pub transaction_types: Vec<TypeCount>,
    pub low_stock_items: Vec<LowStockItem>,
}

impl DashboardService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn snapshot(&self) -> AppResult<DashboardData> {
        let parties_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM parties")
                .fetch_one(&self.db)
                .await?;

        let items_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
            .fetch_one(&self.db)
            .await?;

        let transactions_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions")
                .fetch_one(&self.db)
                .await?;

        let total_inventory_value = sqlx::query_scalar::<_, Option<Decimal>>(
            r#"
            SELECT SUM(inv.quantity * COALESCE(
                (SELECT t.rate FROM transactions t
                 WHERE t.item_id = inv.item_id AND t.transaction_type = 'incoming'
                 ORDER BY t.transaction_date DESC, t.id DESC
                 LIMIT 1), 0
            ))
            FROM inventory inv
            "#,
        )
        .fetch_one(&self.db)
        .await?
        .unwrap_or(Decimal::ZERO);

        let recent_transactions = sqlx::query_as::<_, GateEntryWithNames>(
            r#"
            SELECT t.id, t.transaction_date, p.name AS party_name, i.name AS item_name,
                   t.quantity, i.unit, t.rate, t.amount, t.description, t.transaction_type
            FROM transactions t
            JOIN parties p ON t.party_id = p.id
            JOIN items i ON t.item_id = i.id
            ORDER BY t.id DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let monthly_totals = sqlx::query_as::<_, MonthlyTotal>(
            r#"
            SELECT to_char(transaction_date, 'YYYY-MM') AS month,
                   COALESCE(SUM(CASE WHEN transaction_type = 'incoming'
                                     THEN amount ELSE 0 END), 0) AS incoming,
                   COALESCE(SUM(CASE WHEN transaction_type = 'outgoing'
                                     THEN amount ELSE 0 END), 0) AS outgoing
            FROM transactions
            WHERE transaction_date >= CURRENT_DATE - INTERVAL '6 months'
            GROUP BY to_char(transaction_date, 'YYYY-MM')
            ORDER BY month
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let top_items = sqlx::query_as::<_, TopEntry>(
            r#"
            SELECT i.name, SUM(t.amount) AS total_value
            FROM transactions t
            JOIN items i ON t.item_id = i.id
            GROUP BY t.item_id, i.name
            ORDER BY total_value DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let top_parties = sqlx::query_as::<_, TopEntry>(
            r#"
            SELECT p.name, SUM(t.amount) AS total_value
            FROM transactions t
            JOIN parties p ON t.party_id = p.id
            GROUP BY t.party_id, p.name
            ORDER BY total_value DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let transaction_types = sqlx::query_as::<_, TypeCount>(
            r#"
            SELECT transaction_type::text AS transaction_type, COUNT(*) AS count
            FROM transactions
            GROUP BY transaction_type
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let low_stock_items = sqlx::query_as::<_, LowStockItem>(
            r#"
            SELECT i.name AS item_name, inv.quantity
            FROM inventory inv
            JOIN items i ON inv.item_id = i.id
            WHERE inv.quantity < $1
            ORDER BY inv.quantity
            LIMIT 5
            "#,
        )
        .bind(Decimal::from(LOW_STOCK_THRESHOLD))
        .fetch_all(&self.db)
        .await?;

        Ok(DashboardData {
            parties_count,
            items_count,
            transactions_count,
            total_inventory_value,
            recent_transactions,
            monthly_totals,
            top_items,
            top_parties,
            transaction_types,
            low_stock_items,
        })
    }
}
