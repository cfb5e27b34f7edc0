//! open.er-api.com provider for exchange rates.
//!
//! Free, keyless endpoint returning every rate against one base currency.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{Instrument, InstrumentKind, Quote};
use crate::provider::{status_error, transport_error, MarketDataProvider, ProviderCapabilities};

const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

const DEFAULT_BASE_URL: &str = "https://open.er-api.com/v6/latest";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// "success" or "error"
    result: Option<String>,
    /// Unix timestamp (seconds) of the last update
    time_last_update_unix: Option<i64>,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

pub struct ExchangeRateApiProvider {
    client: Client,
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn parse_rate(body: &str, to: &str) -> Result<Quote, MarketDataError> {
        let resp: LatestRatesResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        if let Some(result) = resp.result.as_deref() {
            if result != "success" {
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("API result '{}'", result),
                });
            }
        }

        let rate = *resp.rates.get(to).ok_or_else(|| {
            MarketDataError::SymbolNotFound(format!("{} rate missing from FX response", to))
        })?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(MarketDataError::ValidationFailed {
                message: format!("Invalid {} rate {}", to, rate),
            });
        }

        let price = Decimal::try_from(rate).map_err(|_| MarketDataError::ValidationFailed {
            message: "Failed to convert rate to decimal".to_string(),
        })?;

        let timestamp = resp
            .time_last_update_unix
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .unwrap_or_else(Utc::now);

        Ok(Quote::new(
            timestamp,
            price,
            to.to_string(),
            PROVIDER_ID.to_string(),
        ))
    }
}

impl Default for ExchangeRateApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        2
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            instrument_kinds: &[InstrumentKind::Fx],
            requires_api_key: false,
        }
    }

    async fn get_latest_quote(&self, instrument: &Instrument) -> Result<Quote, MarketDataError> {
        let (from, to) = match instrument {
            Instrument::Fx { from, to } => (from.as_str(), to.as_str()),
            other => {
                return Err(MarketDataError::UnsupportedInstrument(other.to_string()));
            }
        };

        let url = format!("{}/{}", self.base_url, from);

        let response = self
            .client
            .get(&url)
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

        Self::parse_rate(&body, to)
    }
}
