//! Business logic services for the Gatebook backend

pub mod balance_sheet;
pub mod dashboard;
pub mod gatebook;
pub mod inventory;
pub mod item;
pub mod ledger;
pub mod party;

pub use balance_sheet::BalanceSheetService;
pub use dashboard::DashboardService;
pub use gatebook::GatebookService;
pub use inventory::InventoryService;
pub use item::ItemService;
pub use ledger::LedgerService;
pub use party::PartyService;
