//! Provider registry for orchestrating market data providers.
//!
//! The registry manages multiple providers, handling:
//! - Provider selection based on instrument kind
//! - Ordering by priority
//! - Fallback to alternative providers on failure, driven by [`RetryClass`]

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::errors::{MarketDataError, RetryClass};
use crate::models::{Instrument, Quote};
use crate::provider::MarketDataProvider;

/// Delay before the single retry granted to `RetryClass::WithBackoff` errors.
const DEFAULT_BACKOFF: Duration = Duration::from_millis(500);

/// Provider registry for orchestrating spot price fetching.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn MarketDataProvider>>,
    backoff: Duration,
}

impl ProviderRegistry {
    /// Create a new provider registry.
    pub fn new(providers: Vec<Arc<dyn MarketDataProvider>>) -> Self {
        Self {
            providers,
            backoff: DEFAULT_BACKOFF,
        }
    }

    /// Override the delay used before retrying a transient failure.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Providers able to price `instrument`, best priority first.
    fn ordered_providers(&self, instrument: &Instrument) -> Vec<Arc<dyn MarketDataProvider>> {
        let mut providers: Vec<_> = self
            .providers
            .iter()
            .filter(|p| p.capabilities().supports(instrument))
            .cloned()
            .collect();
        providers.sort_by_key(|p| p.priority());
        providers
    }

    /// Fetch the latest quote for an instrument.
    ///
    /// Tries providers in priority order. A `Never` error stops the search,
    /// a `WithBackoff` error earns one delayed retry on the same provider,
    /// and anything else falls through to the next provider.
    pub async fn latest_quote(&self, instrument: &Instrument) -> Result<Quote, MarketDataError> {
        let providers = self.ordered_providers(instrument);

        if providers.is_empty() {
            warn!("No providers available for instrument {}", instrument);
            return Err(MarketDataError::NoProvidersAvailable);
        }

        for provider in providers {
            let mut retried = false;
            loop {
                match provider.get_latest_quote(instrument).await {
                    Ok(quote) => {
                        debug!(
                            "Fetched {} = {} {} from {}",
                            instrument,
                            quote.price,
                            quote.currency,
                            provider.id()
                        );
                        return Ok(quote);
                    }
                    Err(err) => {
                        let class = err.retry_class();
                        warn!(
                            "Provider {} failed for {}: {} ({:?})",
                            provider.id(),
                            instrument,
                            err,
                            class
                        );
                        match class {
                            RetryClass::Never => return Err(err),
                            RetryClass::WithBackoff if !retried => {
                                retried = true;
                                tokio::time::sleep(self.backoff).await;
                            }
                            _ => break,
                        }
                    }
                }
            }
        }

        Err(MarketDataError::AllProvidersFailed)
    }
}
