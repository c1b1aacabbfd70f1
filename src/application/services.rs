//! Application services

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::domain::quote::QuoteResolver;
use crate::infrastructure::blockchain::{ContractReader, RpcContractReader};
use crate::shared::config::QuoteConfig;
use crate::shared::types::QuoteResult;

/// One quote per instance: connect, validate the pool, quote
pub struct QuoteService {
    resolver: QuoteResolver,
}

impl QuoteService {
    /// Validate the request, then connect to the configured node
    pub async fn connect(config: &QuoteConfig) -> Result<Self> {
        config.validate().context("cannot create quote resolver")?;

        let reader = RpcContractReader::connect(&config.rpc_url)
            .await
            .context("cannot connect to Ethereum node")?;
        info!("Using factory {} and router {}", config.factory_address, config.router_address);

        Self::with_reader(Arc::new(reader), config)
    }

    pub fn with_reader(reader: Arc<dyn ContractReader>, config: &QuoteConfig) -> Result<Self> {
        let resolver = QuoteResolver::new(reader, config).context("cannot create quote resolver")?;
        Ok(Self { resolver })
    }

    pub async fn quote(&self) -> Result<QuoteResult> {
        let result = self.resolver.resolve().await?;
        info!("Quote resolved: {}", result);
        Ok(result)
    }
}
