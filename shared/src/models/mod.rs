//! Domain models for Gatebook

mod inventory;
mod item;
mod party;
mod transaction;

pub use inventory::*;
pub use item::*;
pub use party::*;
pub use transaction::*;
