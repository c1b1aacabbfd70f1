//! Ethereum JSON-RPC client for read-only contract calls

use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::Function;
use alloy_primitives::Address;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, info};

use super::contract_reader::ContractReader;
use crate::shared::errors::QuoteError;

/// Public Ethereum mainnet endpoint
pub const DEFAULT_RPC_URL: &str = "https://ethereum-rpc.publicnode.com";

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)?;
        if let Some(data) = &self.data {
            write!(f, ", data: {}", data)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
enum RpcFailure {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(StatusCode),

    #[error("node error: {0}")]
    Node(JsonRpcError),

    #[error("response carries no result")]
    MissingResult,
}

/// Contract reader backed by `eth_call` over HTTP JSON-RPC
pub struct RpcContractReader {
    http_client: Client,
    url: Url,
    next_id: AtomicU64,
}

impl RpcContractReader {
    /// Connect to the node at `rpc_url` and make sure it answers
    pub async fn connect(rpc_url: &str) -> Result<Self, QuoteError> {
        let url = Url::parse(rpc_url)
            .map_err(|e| QuoteError::Connection(format!("invalid RPC URL {}: {}", rpc_url, e)))?;

        let reader = Self {
            http_client: Client::new(),
            url,
            next_id: AtomicU64::new(1),
        };

        let result = reader
            .request("eth_chainId", json!([]))
            .await
            .map_err(|e| QuoteError::Connection(format!("cannot reach node at {}: {}", rpc_url, e)))?;

        let chain_id = result
            .as_str()
            .and_then(parse_quantity)
            .ok_or_else(|| QuoteError::Connection(format!("invalid eth_chainId result: {}", result)))?;

        info!("Connected to chain {} via {}", chain_id, reader.url);
        Ok(reader)
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcFailure> {
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let response = self
            .http_client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RpcFailure::Status(response.status()));
        }

        let response: JsonRpcResponse = response.json().await?;

        if let Some(error) = response.error {
            return Err(RpcFailure::Node(error));
        }

        response.result.ok_or(RpcFailure::MissingResult)
    }

    async fn eth_call(&self, to: Address, data: &[u8]) -> Result<Value, RpcFailure> {
        self.request(
            "eth_call",
            json!([
                { "to": to.to_string(), "data": format!("0x{}", hex::encode(data)) },
                "latest"
            ]),
        )
        .await
    }
}

#[async_trait]
impl ContractReader for RpcContractReader {
    async fn call(
        &self,
        address: Address,
        function: &Function,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>, QuoteError> {
        let calldata = encode_call(function, args)?;
        debug!("eth_call {} on {} ({} bytes)", function.name, address, calldata.len());

        let result = self
            .eth_call(address, &calldata)
            .await
            .map_err(|e| QuoteError::remote_call(address, &function.name, e))?;

        let data = result
            .as_str()
            .ok_or_else(|| QuoteError::invalid_response(&function.name, "result is not a string"))
            .and_then(|s| decode_hex(&function.name, s))?;

        if data.is_empty() && !function.outputs.is_empty() {
            return Err(QuoteError::remote_call(
                address,
                &function.name,
                "empty return data, the target is not a conforming contract",
            ));
        }

        decode_return(function, &data)
    }
}

/// Selector followed by the ABI-encoded arguments
pub(crate) fn encode_call(function: &Function, args: &[DynSolValue]) -> Result<Vec<u8>, QuoteError> {
    function.abi_encode_input(args).map_err(|e| {
        QuoteError::InvalidInput(format!("cannot encode arguments for {}: {}", function.name, e))
    })
}

pub(crate) fn decode_return(function: &Function, data: &[u8]) -> Result<Vec<DynSolValue>, QuoteError> {
    function
        .abi_decode_output(data)
        .map_err(|e| QuoteError::invalid_response(&function.name, e))
}

fn decode_hex(function: &str, s: &str) -> Result<Vec<u8>, QuoteError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|e| QuoteError::invalid_response(function, e))
}

/// Parse a hex-encoded JSON-RPC quantity such as `0x1`
fn parse_quantity(s: &str) -> Option<u64> {
    let digits = s.strip_prefix("0x")?;
    u64::from_str_radix(digits, 16).ok()
}
