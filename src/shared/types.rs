//! Common types used across the application

use alloy_primitives::{Address, U256};
use rust_decimal::Decimal;
use std::fmt;

/// Immutable description of what to quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteRequest {
    pub pool_address: Address,
    pub from_token: Address,
    pub to_token: Address,
    pub from_amount: u64,
}

/// Display value of a token amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayAmount {
    /// Fits `Decimal`, possibly with truncated trailing fraction digits
    Exact(Decimal),
    /// `mantissa * 10^exponent`, for integer parts beyond `Decimal`'s range
    Scientific { mantissa: Decimal, exponent: u32 },
}

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayAmount::Exact(value) => write!(f, "{}", value),
            DisplayAmount::Scientific { mantissa, exponent } => write!(f, "{}e+{}", mantissa, exponent),
        }
    }
}

/// Human-readable outcome of a quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteResult {
    pub from_amount: u64,
    pub from_symbol: String,
    pub to_amount: DisplayAmount,
    pub to_symbol: String,
    /// Raw router output before scaling
    pub to_amount_raw: U256,
}

impl fmt::Display for QuoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.from_amount, self.from_symbol, self.to_amount, self.to_symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_quote_result_display() {
        let result = QuoteResult {
            from_amount: 1,
            from_symbol: "WETH".to_string(),
            to_amount: DisplayAmount::Exact(Decimal::from_str("3000.25").unwrap()),
            to_symbol: "USDT".to_string(),
            to_amount_raw: U256::from(3_000_250_000u64),
        };

        assert_eq!(result.to_string(), "1 WETH -> 3000.25 USDT");
    }

    #[test]
    fn test_scientific_display() {
        let amount = DisplayAmount::Scientific {
            mantissa: Decimal::from_str("1.5").unwrap(),
            exponent: 30,
        };
        assert_eq!(amount.to_string(), "1.5e+30");
    }
}
