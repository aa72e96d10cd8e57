use crate::registry::constants::{MAINNET_REGISTRY_APP_ID, TESTNET_REGISTRY_APP_ID};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MAINNET_ALGOD_URL: &str = "https://mainnet-api.algonode.cloud";
pub const TESTNET_ALGOD_URL: &str = "https://testnet-api.algonode.cloud";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown network '{0}', expected mainnet or testnet")]
    UnknownNetwork(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn registry_app_id(&self) -> u64 {
        match self {
            Network::Mainnet => MAINNET_REGISTRY_APP_ID,
            Network::Testnet => TESTNET_REGISTRY_APP_ID,
        }
    }

    /// Public algonode endpoint for this network
    pub fn default_algod_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_ALGOD_URL,
            Network::Testnet => TESTNET_ALGOD_URL,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Where and how to reach algod
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub network: Network,
    pub algod_url: String,
    /// Sent as `X-Algo-API-Token` when set
    pub algod_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}

impl ClientConfig {
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            algod_url: network.default_algod_url().to_string(),
            algod_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from `NFD_NETWORK`, `ALGOD_URL`, `ALGOD_TOKEN` and
    /// `ALGOD_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Result<Self, ConfigError> {
        let network = match var("NFD_NETWORK") {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => Network::default(),
        };
        let defaults = Self::for_network(network);

        Ok(Self {
            network,
            algod_url: var("ALGOD_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.algod_url),
            algod_token: var("ALGOD_TOKEN").filter(|v| !v.is_empty()),
            timeout_secs: var("ALGOD_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        })
    }

    pub fn registry_app_id(&self) -> u64 {
        self.network.registry_app_id()
    }
}
