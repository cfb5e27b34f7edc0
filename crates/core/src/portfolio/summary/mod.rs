//! Portfolio summary module.
//!
//! Ties the asset collection and the current prices to the valuation,
//! allocation and projection calculators.

mod summary_model;
mod summary_service;
mod summary_traits;

pub use summary_model::*;
pub use summary_service::*;
pub use summary_traits::*;
