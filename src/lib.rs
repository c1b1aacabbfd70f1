//! v2quote - Uniswap V2 pair validation and amounts-out quotes

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod math;
pub mod shared;

// Re-export main types for convenience
pub use domain::quote::{PairValidity, QuoteResolver};
pub use infrastructure::blockchain::{ContractReader, RpcContractReader};
pub use shared::config::QuoteConfig;
pub use shared::errors::QuoteError;
pub use shared::types::{DisplayAmount, QuoteRequest, QuoteResult};
