//! Provider capabilities used by the registry for routing.

use crate::models::{Instrument, InstrumentKind};

/// Describes what a market data provider can price.
#[derive(Clone, Debug)]
pub struct ProviderCapabilities {
    /// Instrument kinds this provider supports.
    pub instrument_kinds: &'static [InstrumentKind],

    /// Whether the provider needs an API key to answer at all.
    pub requires_api_key: bool,
}

impl ProviderCapabilities {
    pub fn supports(&self, instrument: &Instrument) -> bool {
        self.instrument_kinds.contains(&instrument.kind())
    }
}
