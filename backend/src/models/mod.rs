//! Database models for the Gatebook backend
//!
//! Re-exports models from the shared crate; service-specific row and
//! report types live next to the services that produce them.

pub use shared::models::*;
