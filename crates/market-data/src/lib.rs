//! Tharwa Market Data Crate
//!
//! Provider-agnostic spot price fetching for the Tharwa wealth tracker.
//!
//! # Overview
//!
//! The crate answers three questions on demand:
//! - what is one troy ounce of gold worth in USD (`XAU/USD`)
//! - what is one troy ounce of silver worth in USD (`XAG/USD`)
//! - how many EGP buy one USD (`USD/EGP`)
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   Instrument     |  (Metal { XAU, USD } / Fx { USD, EGP })
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | ProviderRegistry |  (capability filter, priority order, retry class)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Provider      |  (GoldApi, ExchangeRateApi)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |      Quote       |
//! +------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;

pub use errors::{MarketDataError, RetryClass};
pub use models::{Instrument, InstrumentKind, Quote};
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::gold_api::GoldApiProvider;
pub use provider::{MarketDataProvider, ProviderCapabilities};
pub use registry::ProviderRegistry;
