//! Convert-style source: the XE `convert_to` endpoint behind HTTP Basic
//! auth.

use async_trait::async_trait;
use common_errors::PushError;
use common_structs::{CurrencyPair, RateQuote};
use serde::Deserialize;

use crate::config::XeConfig;
use crate::unix_now;

use super::RateProvider;

pub struct XeConvert {
    http: reqwest::Client,
    base_url: String,
    account_id: String,
    api_key: String,
}

impl XeConvert {
    pub fn new(config: XeConfig) -> Self {
        XeConvert {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            account_id: config.account_id,
            api_key: config.api_key,
        }
    }

    fn convert_url(&self) -> String {
        format!("{}/v1/convert_to", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    #[serde(default)]
    from: Vec<ConvertSide>,
}

#[derive(Debug, Deserialize)]
struct ConvertSide {
    mid: MidRate,
}

/// `mid` arrives as a JSON number or string depending on the account plan;
/// both carry the same decimal text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MidRate {
    Text(String),
    Number(f64),
}

impl MidRate {
    fn into_decimal_string(self) -> String {
        match self {
            MidRate::Text(text) => text,
            MidRate::Number(number) => number.to_string(),
        }
    }
}

fn extract_mid(response: ConvertResponse) -> Result<String, PushError> {
    let side = response
        .from
        .into_iter()
        .next()
        .ok_or_else(|| PushError::PricingShape("empty `from` array".to_owned()))?;
    Ok(side.mid.into_decimal_string())
}

#[async_trait]
impl RateProvider for XeConvert {
    async fn fetch_rate(&self, pair: &CurrencyPair, amount: u64) -> Result<RateQuote, PushError> {
        log::debug!("requesting {pair} from xe");
        let amount = amount.to_string();
        let response = self
            .http
            .get(self.convert_url())
            .basic_auth(&self.account_id, Some(&self.api_key))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("from", pair.base.as_str()),
                ("to", pair.quote.as_str()),
                ("amount", amount.as_str()),
            ])
            .send()
            .await
            .map_err(|err| PushError::PricingRequest(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PushError::PricingStatus(status.as_u16()));
        }

        let body: ConvertResponse = response
            .json()
            .await
            .map_err(|err| PushError::PricingShape(err.to_string()))?;
        let rate = extract_mid(body)?;

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
    fn mid_as_string_is_taken_verbatim() {
        let body: ConvertResponse = serde_json::from_str(
            r#"{
                "terms": "http://www.xe.com/legal/dfs.php",
                "to": "AED",
                "amount": 1.0,
                "timestamp": "2024-06-10T00:00:00Z",
                "from": [ { "quotecurrency": "USD", "mid": "3.6725" } ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_mid(body).unwrap(), "3.6725");
    }

    #[test]
    fn mid_as_number_keeps_its_shortest_decimal_form() {
        let body: ConvertResponse = serde_json::from_str(
            r#"{ "from": [ { "quotecurrency": "USD", "mid": 3.6725 } ] }"#,
        )
        .unwrap();
        assert_eq!(extract_mid(body).unwrap(), "3.6725");
    }

    #[test]
    fn only_the_first_entry_is_used() {
        let body: ConvertResponse = serde_json::from_str(
            r#"{ "from": [ { "mid": "3.6725" }, { "mid": "999" } ] }"#,
        )
        .unwrap();
        assert_eq!(extract_mid(body).unwrap(), "3.6725");
    }

    #[test]
    fn empty_from_array_is_a_shape_error() {
        let body: ConvertResponse = serde_json::from_str(r#"{ "from": [] }"#).unwrap();
        assert!(matches!(
            extract_mid(body).unwrap_err(),
            PushError::PricingShape(_)
        ));
    }

    #[test]
    fn missing_from_field_is_a_shape_error() {
        let body: ConvertResponse =
            serde_json::from_str(r#"{ "to": "AED", "amount": 1.0 }"#).unwrap();
        assert!(matches!(
            extract_mid(body).unwrap_err(),
            PushError::PricingShape(_)
        ));
    }

    #[test]
    fn entry_without_mid_does_not_parse() {
        let parsed: Result<ConvertResponse, _> =
            serde_json::from_str(r#"{ "from": [ { "quotecurrency": "USD" } ] }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = XeConvert::new(XeConfig {
            base_url: "https://xecdapi.xe.com/".to_owned(),
            account_id: "account".to_owned(),
            api_key: "secret".to_owned(),
        });
        assert_eq!(client.convert_url(), "https://xecdapi.xe.com/v1/convert_to");
    }
}
