//! In-memory contract reader for tests

use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::Function;
use alloy_primitives::Address;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::contract_reader::ContractReader;
use crate::shared::errors::QuoteError;

/// A recorded contract call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub address: Address,
    pub function: String,
    pub args: Vec<DynSolValue>,
}

/// Answers calls by (address, function name) and records every call it sees
#[derive(Default)]
pub struct MockContractReader {
    responses: HashMap<(Address, String), Result<Vec<DynSolValue>, QuoteError>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockContractReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, address: Address, function: &str, values: Vec<DynSolValue>) -> Self {
        self.responses.insert((address, function.to_string()), Ok(values));
        self
    }

    pub fn with_error(mut self, address: Address, function: &str, error: QuoteError) -> Self {
        self.responses.insert((address, function.to_string()), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, function: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.function == function)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ContractReader for MockContractReader {
    async fn call(
        &self,
        address: Address,
        function: &Function,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>, QuoteError> {
        self.calls.lock().unwrap().push(RecordedCall {
            address,
            function: function.name.clone(),
            args: args.to_vec(),
        });

        self.responses
            .get(&(address, function.name.clone()))
            .cloned()
            .unwrap_or_else(|| Err(QuoteError::remote_call(address, &function.name, "execution reverted")))
    }
}
