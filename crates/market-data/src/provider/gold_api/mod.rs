//! goldapi.io provider for precious metal spot prices.
//!
//! Supports `XAU` (gold) and `XAG` (silver), quoted per troy ounce.
//! Requests are authenticated with the `x-access-token` header.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{Instrument, InstrumentKind, Quote, GOLD_SYMBOL, SILVER_SYMBOL};
use crate::provider::{status_error, transport_error, MarketDataProvider, ProviderCapabilities};

/// Provider ID constant
const PROVIDER_ID: &str = "GOLD_API";

const DEFAULT_BASE_URL: &str = "https://www.goldapi.io/api";

/// Supported metal symbols
const SUPPORTED_METALS: &[&str] = &[GOLD_SYMBOL, SILVER_SYMBOL];

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Relevant part of a goldapi.io response.
#[derive(Debug, Deserialize)]
struct GoldApiResponse {
    /// Spot price per troy ounce in the quote currency
    price: Option<f64>,
    /// Absolute change since previous close
    ch: Option<f64>,
    /// Percent change since previous close
    chp: Option<f64>,
    /// Unix timestamp (seconds)
    timestamp: Option<i64>,
}

/// goldapi.io metals provider.
///
/// # Example
///
/// ```ignore
/// use tharwa_market_data::GoldApiProvider;
///
/// let provider = GoldApiProvider::new(Some("goldapi-xxxx".to_string()));
/// ```
pub struct GoldApiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GoldApiProvider {
    /// Create a provider. A missing or blank key makes every request fail
    /// with [`MarketDataError::MissingApiKey`] so the registry moves on.
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different host (self-hosted mirror, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn is_supported_metal(symbol: &str) -> bool {
        SUPPORTED_METALS.contains(&symbol)
    }

    /// Turns a response body into a quote.
    fn parse_quote(body: &str, currency: &str) -> Result<Quote, MarketDataError> {
        let resp: GoldApiResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        let raw_price = resp.price.ok_or_else(|| MarketDataError::ValidationFailed {
            message: "Metal price missing".to_string(),
        })?;
        if !raw_price.is_finite() || raw_price <= 0.0 {
            return Err(MarketDataError::ValidationFailed {
                message: format!("Invalid metal price {}", raw_price),
            });
        }
        let price = Decimal::try_from(raw_price).map_err(|_| MarketDataError::ValidationFailed {
            message: "Failed to convert price to decimal".to_string(),
        })?;

        let timestamp = resp
            .timestamp
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .unwrap_or_else(Utc::now);

        let change = resp.ch.and_then(|c| Decimal::try_from(c).ok());
        let change_pct = resp
            .chp
            .and_then(|c| Decimal::try_from(c).ok())
            .map(|c| c.round_dp(2));

        Ok(Quote::new(
            timestamp,
            price,
            currency.to_string(),
            PROVIDER_ID.to_string(),
        )
        .with_change(change, change_pct))
    }
}

#[async_trait]
impl MarketDataProvider for GoldApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        1
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            instrument_kinds: &[InstrumentKind::Metal],
            requires_api_key: true,
        }
    }

    async fn get_latest_quote(&self, instrument: &Instrument) -> Result<Quote, MarketDataError> {
        let (symbol, quote_currency) = match instrument {
            Instrument::Metal { symbol, quote } => (symbol.as_str(), quote.as_str()),
            other => {
                return Err(MarketDataError::UnsupportedInstrument(other.to_string()));
            }
        };

        if !Self::is_supported_metal(symbol) {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MarketDataError::MissingApiKey {
                provider: PROVIDER_ID.to_string(),
            })?;

        let url = format!("{}/{}/{}", self.base_url, symbol, quote_currency);

        let response = self
            .client
            .get(&url)
            .header("x-access-token", api_key)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER_ID, e))?;

        if !response.status().is_success() {
            return Err(status_error(PROVIDER_ID, response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(PROVIDER_ID, e))?;

        Self::parse_quote(&body, quote_currency)
    }
}
