//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Provider capabilities used for routing
//! - Concrete providers: goldapi.io for metals, open.er-api.com for FX

mod capabilities;
mod traits;

pub mod exchange_rate_api;
pub mod gold_api;

// Re-exports
pub use capabilities::ProviderCapabilities;
pub use traits::MarketDataProvider;

use reqwest::StatusCode;

use crate::errors::MarketDataError;

/// Maps a non-success HTTP status to the matching error variant.
pub(crate) fn status_error(provider: &str, status: StatusCode) -> MarketDataError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        MarketDataError::RateLimited {
            provider: provider.to_string(),
        }
    } else {
        MarketDataError::ProviderError {
            provider: provider.to_string(),
            message: format!("HTTP {}", status),
        }
    }
}

/// Maps a transport error, keeping timeouts distinguishable.
pub(crate) fn transport_error(provider: &str, err: reqwest::Error) -> MarketDataError {
    if err.is_timeout() {
        MarketDataError::Timeout {
            provider: provider.to_string(),
        }
    } else {
        MarketDataError::Network(err)
    }
}
