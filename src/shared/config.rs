use alloy_primitives::{address, Address};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::domain::contracts::{UNISWAP_V2_FACTORY, UNISWAP_V2_ROUTER};
use crate::infrastructure::blockchain::DEFAULT_RPC_URL;
use crate::shared::errors::QuoteError;
use crate::shared::types::QuoteRequest;

/// WETH/USDT Uniswap V2 pair
pub const DEFAULT_POOL: Address = address!("0d4a11d5eeaac28ec3f61d100daf4d40471f1852");

/// WETH
pub const DEFAULT_FROM_TOKEN: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

/// USDT
pub const DEFAULT_TO_TOKEN: Address = address!("dac17f958d2ee523a2206206994597c13d831ec7");

pub const DEFAULT_FROM_AMOUNT: u64 = 1;

/// Fully resolved quote configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    pub rpc_url: String,
    pub factory_address: Address,
    pub router_address: Address,
    pub pool_address: Address,
    pub from_token: Address,
    pub to_token: Address,
    pub from_amount: u64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            factory_address: UNISWAP_V2_FACTORY,
            router_address: UNISWAP_V2_ROUTER,
            pool_address: DEFAULT_POOL,
            from_token: DEFAULT_FROM_TOKEN,
            to_token: DEFAULT_TO_TOKEN,
            from_amount: DEFAULT_FROM_AMOUNT,
        }
    }
}

impl QuoteConfig {
    /// Reject requests that can never produce a quote
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.from_token == self.to_token {
            return Err(QuoteError::InvalidInput(format!(
                "fromToken and toToken cannot be the same ({})",
                self.from_token
            )));
        }
        Ok(())
    }

    pub fn request(&self) -> QuoteRequest {
        QuoteRequest {
            pool_address: self.pool_address,
            from_token: self.from_token,
            to_token: self.to_token,
            from_amount: self.from_amount,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RpcCfg {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractsCfg {
    pub factory: Option<String>,
    pub router: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairCfg {
    pub pool: Option<String>,
    pub from_token: Option<String>,
    pub to_token: Option<String>,
    pub from_amount: Option<u64>,
}

/// One layer of unresolved settings: a config file, or CLI flags and environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub rpc: RpcCfg,
    #[serde(default)]
    pub contracts: ContractsCfg,
    #[serde(default)]
    pub quote: PairCfg,
}

impl ConfigLayer {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, QuoteError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            QuoteError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, QuoteError> {
        toml::from_str(content)
            .map_err(|e| QuoteError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Fill every unset field from `lower`
    pub fn or(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            rpc: RpcCfg {
                url: self.rpc.url.or(lower.rpc.url),
            },
            contracts: ContractsCfg {
                factory: self.contracts.factory.or(lower.contracts.factory),
                router: self.contracts.router.or(lower.contracts.router),
            },
            quote: PairCfg {
                pool: self.quote.pool.or(lower.quote.pool),
                from_token: self.quote.from_token.or(lower.quote.from_token),
                to_token: self.quote.to_token.or(lower.quote.to_token),
                from_amount: self.quote.from_amount.or(lower.quote.from_amount),
            },
        }
    }

    /// Apply defaults to unset fields and parse addresses
    pub fn resolve(self) -> Result<QuoteConfig, QuoteError> {
        let defaults = QuoteConfig::default();

        Ok(QuoteConfig {
            rpc_url: self.rpc.url.unwrap_or(defaults.rpc_url),
            factory_address: parse_or("factory", self.contracts.factory, defaults.factory_address)?,
            router_address: parse_or("router", self.contracts.router, defaults.router_address)?,
            pool_address: parse_or("pool", self.quote.pool, defaults.pool_address)?,
            from_token: parse_or("from token", self.quote.from_token, defaults.from_token)?,
            to_token: parse_or("to token", self.quote.to_token, defaults.to_token)?,
            from_amount: self.quote.from_amount.unwrap_or(defaults.from_amount),
        })
    }
}

fn parse_or(name: &str, value: Option<String>, default: Address) -> Result<Address, QuoteError> {
    match value {
        Some(s) => parse_address(name, &s),
        None => Ok(default),
    }
}

/// Parse a 0x-prefixed hex address; case is not significant
pub fn parse_address(name: &str, value: &str) -> Result<Address, QuoteError> {
    let trimmed = value.trim();
    if !trimmed.starts_with("0x") && !trimmed.starts_with("0X") {
        return Err(QuoteError::InvalidInput(format!(
            "invalid {} address {}: missing 0x prefix",
            name, value
        )));
    }
    Address::from_str(trimmed)
        .map_err(|e| QuoteError::InvalidInput(format!("invalid {} address {}: {}", name, value, e)))
}
