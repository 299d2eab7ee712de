//! Environment-sourced configuration, resolved once at process start.
//!
//! Every key is required and an empty value counts as missing, so a
//! half-filled `.env` fails before any network call is made.

use common_errors::PushError;

/// Loads a local `.env` when one is present. Scheduled runs inject real
/// process variables instead, so a missing file is not an error.
pub fn load_local_env() {
    match dotenv::dotenv() {
        Ok(path) => log::info!("loaded local environment from {}", path.display()),
        Err(_) => log::info!("using process environment"),
    }
}

/// JSON-RPC endpoint, signing key and controller address. Shared by both
/// pipelines.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub private_key: String,
    pub contract_address: String,
}

impl ChainConfig {
    pub fn from_env() -> Result<Self, PushError> {
        Self::from_lookup(&env_var)
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, PushError> {
        Ok(ChainConfig {
            rpc_url: require(lookup, "RPC_URL")?,
            private_key: require(lookup, "PRIVATE_KEY")?,
            contract_address: require(lookup, "CONTRACT_ADDRESS")?,
        })
    }
}

/// Credentials for the currencylayer `live` endpoint.
#[derive(Debug, Clone)]
pub struct CurrencyLayerConfig {
    pub api_key: String,
}

impl CurrencyLayerConfig {
    pub fn from_env() -> Result<Self, PushError> {
        Self::from_lookup(&env_var)
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, PushError> {
        Ok(CurrencyLayerConfig {
            api_key: require(lookup, "API_KEY")?,
        })
    }
}

/// Endpoint and credentials for the XE conversion API.
#[derive(Debug, Clone)]
pub struct XeConfig {
    pub base_url: String,
    pub account_id: String,
    pub api_key: String,
}

impl XeConfig {
    pub fn from_env() -> Result<Self, PushError> {
        Self::from_lookup(&env_var)
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, PushError> {
        Ok(XeConfig {
            base_url: require(lookup, "XE_API_URL")?,
            account_id: require(lookup, "XE_ACCOUNT_ID")?,
            api_key: require(lookup, "XE_API_KEY")?,
        })
    }
}

fn require(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, PushError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PushError::MissingConfig(key)),
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn chain_config_reads_all_three_keys() {
        let vars = table(&[
            ("RPC_URL", "https://rpc.example.test"),
            ("PRIVATE_KEY", "0xabc"),
            ("CONTRACT_ADDRESS", "0xdef"),
        ]);
        let config = ChainConfig::from_lookup(&|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.rpc_url, "https://rpc.example.test");
        assert_eq!(config.private_key, "0xabc");
        assert_eq!(config.contract_address, "0xdef");
    }

    #[test]
    fn missing_key_names_the_key() {
        let vars = table(&[("RPC_URL", "https://rpc.example.test")]);
        let err = ChainConfig::from_lookup(&|key| vars.get(key).cloned()).unwrap_err();
        match err {
            PushError::MissingConfig(key) => assert_eq!(key, "PRIVATE_KEY"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let vars = table(&[("API_KEY", "   ")]);
        let err = CurrencyLayerConfig::from_lookup(&|key| vars.get(key).cloned()).unwrap_err();
        match err {
            PushError::MissingConfig(key) => assert_eq!(key, "API_KEY"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn xe_config_requires_endpoint_and_both_credentials() {
        let vars = table(&[
            ("XE_API_URL", "https://xecdapi.xe.com"),
            ("XE_ACCOUNT_ID", "account"),
        ]);
        let err = XeConfig::from_lookup(&|key| vars.get(key).cloned()).unwrap_err();
        match err {
            PushError::MissingConfig(key) => assert_eq!(key, "XE_API_KEY"),
            other => panic!("unexpected error: {other:?}"),
        }

        let vars = table(&[
            ("XE_API_URL", "https://xecdapi.xe.com"),
            ("XE_ACCOUNT_ID", "account"),
            ("XE_API_KEY", "secret"),
        ]);
        let config = XeConfig::from_lookup(&|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.base_url, "https://xecdapi.xe.com");
    }
}
