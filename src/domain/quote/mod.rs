//! Quote domain - pair validation and price quotes

mod quote_resolver;

pub use quote_resolver::QuoteResolver;

use alloy_primitives::Address;

/// Outcome of comparing the factory's pair with the configured pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairValidity {
    Valid,
    Mismatch { expected: Address, actual: Address },
}

impl PairValidity {
    pub fn is_valid(&self) -> bool {
        matches!(self, PairValidity::Valid)
    }
}
