use async_trait::async_trait;

use super::market_data_model::{PriceSnapshot, PriceState};

/// Access to the current spot prices.
#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Current snapshot and its provenance. Never fails.
    fn current(&self) -> PriceState;

    /// Convenience accessor for the snapshot alone.
    fn snapshot(&self) -> PriceSnapshot {
        self.current().snapshot
    }

    /// Fetches fresh prices, degrading to stale or fallback on failure.
    async fn refresh(&self) -> PriceState;
}
