//! HTTP handlers for the Gatebook backend

pub mod gatebook;
pub mod health;
pub mod inventory;
pub mod item;
pub mod ledger;
pub mod party;
pub mod report;

pub use gatebook::*;
pub use health::*;
pub use inventory::*;
pub use item::*;
pub use ledger::*;
pub use party::*;
pub use report::*;
