//! Walks through a full Aave V2 borrow cycle: wraps ETH, deposits the WETH as
//! collateral, borrows DAI against it and repays it.
//!
//! Point `rpc_url` at a mainnet fork (e.g. `anvil --fork-url <mainnet rpc>`)
//! and provide the signer in a `.env` file at the repository root:
//!
//! ```plain
//! EVM_PRIVATE_KEY="0x..."
//! # or
//! EVM_MNEMONIC="your mnemonic"
//! ```

use {
    clap::Parser,
    dotenvy::dotenv,
    lending_aave::{
        config, flow,
        market::AaveV2,
        math::{BASE_DECIMALS, to_display_units},
        setup,
    },
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

#[derive(Parser)]
#[command(name = "aave-borrow")]
#[command(about = "Deposits WETH into Aave V2, borrows DAI against it and repays it")]
struct Args {
    /// Path to the config file
    #[arg(long, default_value = "lending/aave/config.toml")]
    config: PathBuf,

    /// Stop after borrowing, leaving the debt open
    #[arg(long)]
    skip_repay: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing `.env` is fine, the variables may come from the shell.
    dotenv().ok();

    let args = Args::parse();

    let cfg = config::load_config(&args.config)?;

    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .init();

    let (provider, account) = setup::setup_ethereum_provider(&cfg.rpc_url)?;
    tracing::info!(%account, rpc_url = %cfg.rpc_url, "Using account");

    let market = AaveV2::new(&provider, account, &cfg);
    let summary = flow::run(&market, &cfg, args.skip_repay).await?;

    let debt = to_display_units(summary.account_data.total_debt_eth, BASE_DECIMALS)?;
    tracing::info!(
        lending_pool = %summary.lending_pool,
        borrowed = %summary.borrowed.display,
        debt_eth = %debt,
        "Done!"
    );

    Ok(())
}
