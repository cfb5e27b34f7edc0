use anyhow::Context;
use chrono_tz::Tz;
use std::{net::SocketAddr, time::Duration};
use tharwa_core::market_data::DEFAULT_PRICE_REFRESH_SECS;
use tharwa_core::utils::time_utils::DEFAULT_VALUATION_TZ;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub gold_api_key: Option<String>,
    pub price_refresh_interval: Duration,
    /// Zone in which calendar months begin for projections
    pub timezone: Tz,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `TH_*` variables, loading `.env` first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr: SocketAddr = var("TH_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8088".to_string())
            .parse()
            .context("Invalid TH_LISTEN_ADDR")?;
        let db_path = var("TH_DB_PATH").unwrap_or_else(|| "./db/tharwa.db".into());
        let gold_api_key = var("TH_GOLD_API_KEY");
        let refresh_secs: u64 = match var("TH_PRICE_REFRESH_SECS") {
            Some(raw) => raw.trim().parse().context("Invalid TH_PRICE_REFRESH_SECS")?,
            None => DEFAULT_PRICE_REFRESH_SECS,
        };
        let timezone: Tz = match var("TH_TIMEZONE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid TH_TIMEZONE '{}': {}", raw, e))?,
            None => DEFAULT_VALUATION_TZ,
        };
        let cors_allow = var("TH_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = match var("TH_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse().context("Invalid TH_REQUEST_TIMEOUT_MS")?,
            None => 30000,
        };

        Ok(Self {
            listen_addr,
            db_path,
            gold_api_key,
            price_refresh_interval: Duration::from_secs(refresh_secs.max(1)),
            timezone,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
