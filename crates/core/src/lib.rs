//! Tharwa Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the Tharwa wealth tracker:
//! the asset model, the valuation engine, the projection sequencer, and
//! the services wrapping them. It is database-agnostic and defines traits
//! that are implemented by the `storage-sqlite` crate.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod market_data;
pub mod portfolio;
pub mod utils;

// Re-export common types from asset and portfolio modules
pub use assets::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
