use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::{Arc, RwLock};
use tharwa_market_data::{Instrument, ProviderRegistry};

use super::market_data_model::{PriceSnapshot, PriceState};
use super::market_data_traits::PriceServiceTrait;
use crate::errors::Result;

/// Keeps the current price snapshot and refreshes it from the provider registry.
///
/// Readers always get a usable snapshot: live data when the last refresh
/// succeeded, the previous live data marked stale when it failed, and the
/// hard-coded fallback before anything live was ever seen.
pub struct PriceService {
    provider_registry: Arc<ProviderRegistry>,
    state: RwLock<PriceState>,
}

impl PriceService {
    pub fn new(provider_registry: Arc<ProviderRegistry>) -> Self {
        Self {
            provider_registry,
            state: RwLock::new(PriceState::fallback()),
        }
    }

    async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
        let gold = Instrument::gold_usd();
        let silver = Instrument::silver_usd();
        let usd_egp = Instrument::usd_egp();

        let (gold_quote, silver_quote, fx_quote) = tokio::try_join!(
            self.provider_registry.latest_quote(&gold),
            self.provider_registry.latest_quote(&silver),
            self.provider_registry.latest_quote(&usd_egp),
        )?;

        debug!(
            "Fetched quotes: {}={} {}={} {}={}",
            gold, gold_quote.price, silver, silver_quote.price, usd_egp, fx_quote.price
        );

        PriceSnapshot::from_quotes(&gold_quote, &silver_quote, &fx_quote)
    }

    /// Installs `snapshot` as the live state if it is valid; otherwise
    /// degrades the current state. Returns the state now being served.
    pub fn accept(&self, snapshot: PriceSnapshot, fetched_at: DateTime<Utc>) -> PriceState {
        match snapshot.validate() {
            Ok(()) => self.store(PriceState::live(snapshot, fetched_at)),
            Err(e) => {
                warn!("Rejecting price snapshot: {}", e);
                self.degrade()
            }
        }
    }

    /// Marks the current state degraded under a single write lock.
    pub(crate) fn degrade(&self) -> PriceState {
        let mut guard = self.state.write().unwrap_or_else(|e| e.into_inner());
        let next = guard.degraded();
        *guard = next;
        next
    }

    fn store(&self, next: PriceState) -> PriceState {
        let mut guard = self.state.write().unwrap_or_else(|e| e.into_inner());
        *guard = next;
        next
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    fn current(&self) -> PriceState {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    async fn refresh(&self) -> PriceState {
        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                let state = self.accept(snapshot, Utc::now());
                info!(
                    "Prices refreshed ({:?}): gold {} EGP/oz, silver {} EGP/oz, USD/EGP {}",
                    state.source,
                    state.snapshot.gold.egp.round_dp(2),
                    state.snapshot.silver.egp.round_dp(2),
                    state.snapshot.usd_to_egp
                );
                state
            }
            Err(e) => {
                warn!("Live price fetch failed: {}", e);
                self.degrade()
            }
        }
    }
}
