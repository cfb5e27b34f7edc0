//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Instrument, Quote};

use super::capabilities::ProviderCapabilities;

/// Trait for spot price providers.
///
/// Implement this trait to add support for a new price source. The
/// registry uses the provider's capabilities and priority to decide
/// when to call it.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tharwa_market_data::provider::{MarketDataProvider, ProviderCapabilities};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     fn capabilities(&self) -> ProviderCapabilities {
///         ProviderCapabilities {
///             instrument_kinds: &[InstrumentKind::Fx],
///             requires_api_key: false,
///         }
///     }
///
///     async fn get_latest_quote(&self, instrument: &Instrument) -> Result<Quote, MarketDataError> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "GOLD_API".
    fn id(&self) -> &'static str;

    /// Provider priority for ordering. Lower values = higher priority.
    fn priority(&self) -> u8 {
        10
    }

    /// Describes what this provider can price.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Fetch the latest quote for an instrument.
    async fn get_latest_quote(&self, instrument: &Instrument) -> Result<Quote, MarketDataError>;
}
