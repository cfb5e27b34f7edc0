//! Market data module - spot price snapshot, price service, and traits.

mod market_data_constants;
mod market_data_model;
mod market_data_service;
mod market_data_traits;


// Re-export the public interface
pub use market_data_constants::*;
pub use market_data_model::{MetalPrice, PriceSnapshot, PriceSource, PriceState};
pub use market_data_service::PriceService;
pub use market_data_traits::PriceServiceTrait;

// Re-export error types for convenience
pub use tharwa_market_data::MarketDataError;
