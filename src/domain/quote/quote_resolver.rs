//! Pair validation and amounts-out quoting against a Uniswap V2 deployment

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};
use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::PairValidity;
use crate::domain::contracts::ContractAbi;
use crate::infrastructure::blockchain::ContractReader;
use crate::math::{scale_down, scale_up};
use crate::shared::config::QuoteConfig;
use crate::shared::errors::QuoteError;
use crate::shared::types::{QuoteRequest, QuoteResult};

pub struct QuoteResolver {
    reader: Arc<dyn ContractReader>,
    abi: ContractAbi,
    factory_address: Address,
    router_address: Address,
    request: QuoteRequest,
}

impl QuoteResolver {
    pub fn new(reader: Arc<dyn ContractReader>, config: &QuoteConfig) -> Result<Self, QuoteError> {
        config.validate()?;

        Ok(Self {
            reader,
            abi: ContractAbi::uniswap_v2()?,
            factory_address: config.factory_address,
            router_address: config.router_address,
            request: config.request(),
        })
    }

    /// Ask the factory which pair it holds for the token pair and compare it with the configured pool
    pub async fn check_is_pair_valid(&self) -> Result<PairValidity, QuoteError> {
        let outputs = self
            .reader
            .call(
                self.factory_address,
                &self.abi.get_pair,
                &[
                    DynSolValue::Address(self.request.from_token),
                    DynSolValue::Address(self.request.to_token),
                ],
            )
            .await?;

        let pair = outputs
            .first()
            .and_then(DynSolValue::as_address)
            .ok_or_else(|| QuoteError::invalid_response("getPair", "expected a single address"))?;

        if pair != self.request.pool_address {
            warn!(
                "expected pair address {}, got {}",
                self.request.pool_address, pair
            );
            return Ok(PairValidity::Mismatch {
                expected: self.request.pool_address,
                actual: pair,
            });
        }

        Ok(PairValidity::Valid)
    }

    pub async fn get_from_token_decimals(&self) -> Result<u8, QuoteError> {
        self.get_token_decimals(self.request.from_token).await
    }

    pub async fn get_to_token_decimals(&self) -> Result<u8, QuoteError> {
        self.get_token_decimals(self.request.to_token).await
    }

    pub async fn get_from_token_symbol(&self) -> Result<String, QuoteError> {
        self.get_token_symbol(self.request.from_token).await
    }

    pub async fn get_to_token_symbol(&self) -> Result<String, QuoteError> {
        self.get_token_symbol(self.request.to_token).await
    }

    /// Router quote along the [from, to] path
    pub async fn get_amounts_out(&self, amount_in: U256) -> Result<Vec<U256>, QuoteError> {
        let path = vec![
            DynSolValue::Address(self.request.from_token),
            DynSolValue::Address(self.request.to_token),
        ];

        let outputs = self
            .reader
            .call(
                self.router_address,
                &self.abi.get_amounts_out,
                &[DynSolValue::Uint(amount_in, 256), DynSolValue::Array(path)],
            )
            .await?;

        let amounts = outputs
            .first()
            .and_then(DynSolValue::as_array)
            .ok_or_else(|| QuoteError::invalid_response("getAmountsOut", "expected a uint256 array"))?;

        amounts
            .iter()
            .map(|value| {
                value
                    .as_uint()
                    .map(|(amount, _)| amount)
                    .ok_or_else(|| QuoteError::invalid_response("getAmountsOut", "expected uint256 elements"))
            })
            .collect()
    }

    pub async fn get_token_decimals(&self, token: Address) -> Result<u8, QuoteError> {
        let outputs = self.reader.call(token, &self.abi.decimals, &[]).await?;

        let (decimals, _) = outputs
            .first()
            .and_then(DynSolValue::as_uint)
            .ok_or_else(|| QuoteError::invalid_response("decimals", "expected a single uint8"))?;

        u8::try_from(decimals).map_err(|e| QuoteError::invalid_response("decimals", e))
    }

    pub async fn get_token_symbol(&self, token: Address) -> Result<String, QuoteError> {
        let outputs = self.reader.call(token, &self.abi.symbol, &[]).await?;

        outputs
            .first()
            .and_then(DynSolValue::as_str)
            .map(str::to_string)
            .ok_or_else(|| QuoteError::invalid_response("symbol", "expected a single string"))
    }

    /// Validate the pool, quote the configured amount and fetch display symbols, in that order
    pub async fn resolve(&self) -> Result<QuoteResult> {
        info!(
            "Resolving quote for {} of {} -> {} via pool {}",
            self.request.from_amount,
            self.request.from_token,
            self.request.to_token,
            self.request.pool_address
        );

        match self
            .check_is_pair_valid()
            .await
            .context("cannot check pair validity")?
        {
            PairValidity::Valid => info!("✅ Pool {} matches the token pair", self.request.pool_address),
            PairValidity::Mismatch { expected, actual } => {
                bail!(QuoteError::PairMismatch { expected, actual })
            }
        }

        let from_decimals = self
            .get_from_token_decimals()
            .await
            .context("cannot get FROM token decimals")?;
        let to_decimals = self
            .get_to_token_decimals()
            .await
            .context("cannot get TO token decimals")?;

        let amount_in = scale_up(self.request.from_amount, from_decimals)
            .context("cannot scale FROM amount")?;
        debug!("amount_in={} (decimals={})", amount_in, from_decimals);

        let amounts = self
            .get_amounts_out(amount_in)
            .await
            .context("cannot get amountsOut")?;

        let amount_out = match amounts.as_slice() {
            [_, amount_out] => *amount_out,
            other => {
                return Err(QuoteError::invalid_response(
                    "getAmountsOut",
                    format!("expected 2 amounts, got {}", other.len()),
                ))
                .context("invalid amountsOut");
            }
        };
        debug!("amount_out={} (decimals={})", amount_out, to_decimals);

        let to_amount = scale_down(amount_out, to_decimals).context("cannot scale TO amount")?;

        let from_symbol = self
            .get_from_token_symbol()
            .await
            .context("cannot get FROM token symbol")?;
        let to_symbol = self
            .get_to_token_symbol()
            .await
            .context("cannot get TO token symbol")?;

        Ok(QuoteResult {
            from_amount: self.request.from_amount,
            from_symbol,
            to_amount,
            to_symbol,
            to_amount_raw: amount_out,
        })
    }
}
