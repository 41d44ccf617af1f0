//! Party (counterparty) models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A counterparty (customer or supplier) in transactions.
///
/// Identity is the unique name; the id is stable once the party has been
/// referenced by a transaction. Parties are never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Party {
    pub id: i64,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Compact party listing entry for dropdowns and pickers
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PartySummary {
    pub id: i64,
    pub name: String,
}
