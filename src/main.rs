mod app;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use v2quote::shared::config::{ConfigLayer, ContractsCfg, PairCfg, RpcCfg};

#[derive(Parser, Debug)]
#[command(version, about = "Validate a Uniswap V2 pool and quote a swap through the router")]
struct Args {
    /// Ethereum node URL
    #[arg(long, env = "ETH_URL")]
    eth_url: Option<String>,

    /// Uniswap pool (pair) address expected for the token pair
    #[arg(long, env = "POOL_ADDRESS", alias = "poolAddress")]
    pool_address: Option<String>,

    /// From token address
    #[arg(long, env = "FROM_TOKEN", alias = "fromToken")]
    from_token: Option<String>,

    /// To token address
    #[arg(long, env = "TO_TOKEN", alias = "toToken")]
    to_token: Option<String>,

    /// From token amount, in whole tokens
    #[arg(long, env = "FROM_AMOUNT", alias = "fromAmount")]
    from_amount: Option<u64>,

    /// Uniswap V2 factory address (overrides config)
    #[arg(long, env = "FACTORY_ADDRESS")]
    factory_address: Option<String>,

    /// Uniswap V2 router address (overrides config)
    #[arg(long, env = "ROUTER_ADDRESS")]
    router_address: Option<String>,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,
}

impl Args {
    fn into_layer(self) -> ConfigLayer {
        ConfigLayer {
            rpc: RpcCfg { url: self.eth_url },
            contracts: ContractsCfg {
                factory: self.factory_address,
                router: self.router_address,
            },
            quote: PairCfg {
                pool: self.pool_address,
                from_token: self.from_token,
                to_token: self.to_token,
                from_amount: self.from_amount,
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    // Priority: CLI args / environment > config file > defaults
    let file_layer = match &args.config {
        Some(path) => ConfigLayer::from_file(path)?,
        None => ConfigLayer::default(),
    };
    let quote_cfg = args.into_layer().or(file_layer).resolve()?;

    app::run(quote_cfg).await
}
