//! Quote-style source: the currencylayer `live` endpoint.

use std::collections::HashMap;

use async_trait::async_trait;
use common_errors::PushError;
use common_structs::{CurrencyPair, RateQuote};
use serde::Deserialize;

use crate::config::CurrencyLayerConfig;
use crate::unix_now;

use super::RateProvider;

const LIVE_ENDPOINT: &str = "http://apilayer.net/api/live";

pub struct CurrencyLayer {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl CurrencyLayer {
    pub fn new(config: CurrencyLayerConfig) -> Self {
        CurrencyLayer {
            http: reqwest::Client::new(),
            api_key: config.api_key,
            endpoint: LIVE_ENDPOINT.to_owned(),
        }
    }
}

/// Body of a `live` response. The quote map is keyed by the concatenated
/// ticker, `TRYUSD` for source TRY and currency USD.
#[derive(Debug, Deserialize)]
struct LiveResponse {
    success: bool,
    #[serde(default)]
    quotes: HashMap<String, f64>,
    #[serde(default)]
    error: Option<LiveError>,
}

#[derive(Debug, Deserialize)]
struct LiveError {
    #[serde(default)]
    code: Option<u32>,
    #[serde(default)]
    info: Option<String>,
}

fn extract_rate(response: LiveResponse, ticker: &str) -> Result<String, PushError> {
    if !response.success {
        let reason = match response.error {
            Some(LiveError {
                code,
                info: Some(info),
            }) => match code {
                Some(code) => format!("{info} (code {code})"),
                None => info,
            },
            _ => "success flag was false".to_owned(),
        };
        return Err(PushError::PricingRejected(reason));
    }
    match response.quotes.get(ticker) {
        Some(rate) => Ok(rate.to_string()),
        None => Err(PushError::PricingShape(format!(
            "no `{ticker}` entry in quotes"
        ))),
    }
}

#[async_trait]
impl RateProvider for CurrencyLayer {
    async fn fetch_rate(&self, pair: &CurrencyPair, _amount: u64) -> Result<RateQuote, PushError> {
        log::debug!("requesting {pair} from currencylayer");
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("access_key", self.api_key.as_str()),
                ("currencies", pair.quote.as_str()),
                ("source", pair.base.as_str()),
                ("format", "1"),
            ])
            .send()
            .await
            .map_err(|err| PushError::PricingRequest(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PushError::PricingStatus(status.as_u16()));
        }

        let body: LiveResponse = response
            .json()
            .await
            .map_err(|err| PushError::PricingShape(err.to_string()))?;
        let rate = extract_rate(body, &pair.ticker())?;

        Ok(RateQuote {
            pair: pair.clone(),
            rate,
            fetched_at: unix_now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_body_yields_the_pair_rate() {
        let body: LiveResponse = serde_json::from_str(
            r#"{
                "success": true,
                "terms": "https://currencylayer.com/terms",
                "privacy": "https://currencylayer.com/privacy",
                "timestamp": 1718000000,
                "source": "TRY",
                "quotes": { "TRYUSD": 0.028 }
            }"#,
        )
        .unwrap();
        assert_eq!(extract_rate(body, "TRYUSD").unwrap(), "0.028");
    }

    #[test]
    fn rejection_carries_the_upstream_reason() {
        let body: LiveResponse = serde_json::from_str(
            r#"{
                "success": false,
                "error": { "code": 104, "info": "monthly usage limit reached" }
            }"#,
        )
        .unwrap();
        match extract_rate(body, "TRYUSD").unwrap_err() {
            PushError::PricingRejected(reason) => {
                assert!(reason.contains("monthly usage limit reached"));
                assert!(reason.contains("104"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn silent_rejection_is_still_a_rejection() {
        let body: LiveResponse = serde_json::from_str(r#"{ "success": false }"#).unwrap();
        assert!(matches!(
            extract_rate(body, "TRYUSD").unwrap_err(),
            PushError::PricingRejected(_)
        ));
    }

    #[test]
    fn missing_ticker_is_a_shape_error() {
        let body: LiveResponse = serde_json::from_str(
            r#"{ "success": true, "quotes": { "TRYEUR": 0.026 } }"#,
        )
        .unwrap();
        match extract_rate(body, "TRYUSD").unwrap_err() {
            PushError::PricingShape(reason) => assert!(reason.contains("TRYUSD")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rate_text_preserves_the_quoted_value() {
        let body: LiveResponse = serde_json::from_str(
            r#"{ "success": true, "quotes": { "USDAED": 3.6725 } }"#,
        )
        .unwrap();
        assert_eq!(extract_rate(body, "USDAED").unwrap(), "3.6725");
    }
}
