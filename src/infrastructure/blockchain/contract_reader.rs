use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::Function;
use alloy_primitives::Address;
use async_trait::async_trait;

use crate::shared::errors::QuoteError;

/// Read-only access to deployed contracts
///
/// Implementations dispatch `function` against the contract at `address` with
/// `args` and return the decoded outputs in declaration order.
#[async_trait]
pub trait ContractReader: Send + Sync {
    async fn call(
        &self,
        address: Address,
        function: &Function,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>, QuoteError>;
}
