// SPDX-License-Identifier: MIT

//! Currency conversion via an exchange-rate API.
//!
//! Rates are cached per currency pair for an hour. When the upstream
//! API is unreachable the conversion falls back to a small static rate
//! table and is marked degraded.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::AppError;

const RATE_TTL: Duration = Duration::from_secs(60 * 60);

/// Units of each currency per 1 USD, used when the API is unreachable.
const USD_RATES: [(&str, f64); 8] = [
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 155.0),
    ("INR", 83.0),
    ("AUD", 1.50),
    ("CAD", 1.36),
    ("CHF", 0.88),
];

struct CachedRate {
    rate: f64,
    fetched_at: Instant,
}

/// Exchange-rate API client with an in-process rate cache.
#[derive(Clone)]
pub struct CurrencyService {
    http: reqwest::Client,
    /// None disables the API entirely (tests, offline deployments)
    base_url: Option<String>,
    cache: Arc<DashMap<String, CachedRate>>,
}

/// One completed conversion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub converted_amount: f64,
    /// True when the static fallback table supplied the rate
    pub degraded: bool,
}

#[derive(Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

impl CurrencyService {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Some(base_url),
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Offline service: conversions always use the fallback table.
    pub fn new_mock() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Convert an amount between two currencies.
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<Conversion, AppError> {
        let from = normalize_code(from)?;
        let to = normalize_code(to)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(AppError::BadRequest(
                "Amount must be a non-negative number".to_string(),
            ));
        }

        let (rate, degraded) = if from == to {
            (1.0, false)
        } else {
            self.rate(&from, &to).await
        };

        Ok(Conversion {
            amount,
            converted_amount: round_cents(amount * rate),
            from,
            to,
            rate,
            degraded,
        })
    }

    async fn rate(&self, from: &str, to: &str) -> (f64, bool) {
        let key = format!("{from}:{to}");
        if let Some(cached) = self.cache.get(&key) {
            if cached.fetched_at.elapsed() < RATE_TTL {
                return (cached.rate, false);
            }
        }

        match self.fetch_rate(from, to).await {
            Ok(rate) => {
                self.cache.insert(
                    key,
                    CachedRate {
                        rate,
                        fetched_at: Instant::now(),
                    },
                );
                (rate, false)
            }
            Err(e) => {
                tracing::warn!(
                    from,
                    to,
                    error = %e,
                    "Exchange-rate fetch failed, using static fallback rate"
                );
                (fallback_rate(from, to), true)
            }
        }
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, String> {
        let base = self
            .base_url
            .as_ref()
            .ok_or_else(|| "exchange-rate API disabled".to_string())?;

        let url = format!("{}/{}", base, from);
        let response = self.http.get(&url).send().await.map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()));
        }

        let body: RatesResponse = response.json().await.map_err(|e| e.to_string())?;
        body.rates
            .get(to)
            .copied()
            .ok_or_else(|| format!("no rate published for {to}"))
    }
}

/// Cross rate via the USD table; 1.0 when either side is unknown.
fn fallback_rate(from: &str, to: &str) -> f64 {
    let lookup = |code: &str| {
        USD_RATES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, rate)| *rate)
    };
    match (lookup(from), lookup(to)) {
        (Some(from_rate), Some(to_rate)) => to_rate / from_rate,
        _ => 1.0,
    }
}

fn normalize_code(code: &str) -> Result<String, AppError> {
    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(format!(
            "Invalid currency code: {code:?}"
        )));
    }
    Ok(code.to_ascii_uppercase())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_conversion_uses_fallback_table() {
        let service = CurrencyService::new_mock();
        let conversion = service.convert(100.0, "usd", "eur").await.unwrap();

        assert!(conversion.degraded);
        assert_eq!(conversion.from, "USD");
        assert_eq!(conversion.to, "EUR");
        assert!((conversion.converted_amount - 92.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_same_currency_is_identity() {
        let service = CurrencyService::new_mock();
        let conversion = service.convert(42.0, "EUR", "EUR").await.unwrap();

        assert!(!conversion.degraded);
        assert_eq!(conversion.rate, 1.0);
        assert_eq!(conversion.converted_amount, 42.0);
    }

    #[tokio::test]
    async fn test_unknown_pair_defaults_to_parity() {
        let service = CurrencyService::new_mock();
        let conversion = service.convert(10.0, "USD", "ZZZ").await.unwrap();

        assert!(conversion.degraded);
        assert_eq!(conversion.rate, 1.0);
    }

    #[tokio::test]
    async fn test_rejects_malformed_codes() {
        let service = CurrencyService::new_mock();
        for bad in ["US", "EURO", "12X", ""] {
            let err = service.convert(1.0, bad, "USD").await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_cross_rate_goes_through_usd() {
        // EUR -> JPY = (JPY per USD) / (EUR per USD)
        let rate = fallback_rate("EUR", "JPY");
        assert!((rate - 155.0 / 0.92).abs() < 1e-9);
    }
}
