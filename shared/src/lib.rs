//! Shared types and models for Gatebook
//!
//! This crate contains the domain models, display formatting, and
//! validation rules shared between the backend and other components of
//! the system.

pub mod format;
pub mod models;
pub mod types;
pub mod validation;

pub use format::*;
pub use models::*;
pub use types::*;
pub use validation::*;
