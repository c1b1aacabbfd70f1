//! Direct blockchain reading for EVM contracts

pub mod contract_reader;
pub mod rpc_client;
#[cfg(test)]
pub mod mock_reader;

pub use contract_reader::ContractReader;
pub use rpc_client::{RpcContractReader, DEFAULT_RPC_URL};
