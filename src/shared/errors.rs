//! Error handling for the application

use alloy_primitives::Address;
use thiserror::Error;

/// Errors raised while resolving a quote
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Remote call {function} on {contract} failed: {reason}")]
    RemoteCall {
        contract: Address,
        function: String,
        reason: String,
    },

    #[error("Invalid response from {function}: {reason}")]
    InvalidResponse { function: String, reason: String },

    #[error("Pair mismatch: expected pool {expected}, factory returned {actual}")]
    PairMismatch { expected: Address, actual: Address },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuoteError {
    pub fn remote_call(contract: Address, function: &str, reason: impl ToString) -> Self {
        QuoteError::RemoteCall {
            contract,
            function: function.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_response(function: &str, reason: impl ToString) -> Self {
        QuoteError::InvalidResponse {
            function: function.to_string(),
            reason: reason.to_string(),
        }
    }
}
