//! Contract interfaces consumed by the quoter, supplied as ABI fragments

use alloy_json_abi::Function;
use alloy_primitives::{address, Address};

use crate::shared::errors::QuoteError;

/// Uniswap V2 factory on Ethereum mainnet
pub const UNISWAP_V2_FACTORY: Address = address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");

/// Uniswap V2 Router02 on Ethereum mainnet
pub const UNISWAP_V2_ROUTER: Address = address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D");

pub const FACTORY_GET_PAIR: &str =
    "function getPair(address tokenA, address tokenB) external view returns (address pair)";

pub const ROUTER_GET_AMOUNTS_OUT: &str =
    "function getAmountsOut(uint256 amountIn, address[] path) external view returns (uint256[] amounts)";

pub const ERC20_DECIMALS: &str = "function decimals() external view returns (uint8)";

pub const ERC20_SYMBOL: &str = "function symbol() external view returns (string)";

/// Parsed read-only functions of the factory, router and ERC20 tokens
#[derive(Debug, Clone)]
pub struct ContractAbi {
    pub get_pair: Function,
    pub get_amounts_out: Function,
    pub decimals: Function,
    pub symbol: Function,
}

impl ContractAbi {
    /// Parse the standard Uniswap V2 / ERC20 fragments
    pub fn uniswap_v2() -> Result<Self, QuoteError> {
        Self::from_signatures(
            FACTORY_GET_PAIR,
            ROUTER_GET_AMOUNTS_OUT,
            ERC20_DECIMALS,
            ERC20_SYMBOL,
        )
    }

    pub fn from_signatures(
        get_pair: &str,
        get_amounts_out: &str,
        decimals: &str,
        symbol: &str,
    ) -> Result<Self, QuoteError> {
        Ok(Self {
            get_pair: parse_function(get_pair)?,
            get_amounts_out: parse_function(get_amounts_out)?,
            decimals: parse_function(decimals)?,
            symbol: parse_function(symbol)?,
        })
    }
}

fn parse_function(signature: &str) -> Result<Function, QuoteError> {
    Function::parse(signature).map_err(|e| {
        QuoteError::Connection(format!("cannot bind ABI fragment `{}`: {}", signature, e))
    })
}
