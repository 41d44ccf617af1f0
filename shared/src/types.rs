//! Common types used across the system

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional date window applied to ledger and transaction queries.
///
/// A windowed query restarts running balances at zero at `start_date`;
/// it does not carry a balance forward from history before the window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LedgerWindow {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
