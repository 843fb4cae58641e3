use {
    crate::{
        addresses::mainnet::{DAI, WETH, aave_v2, chainlink},
        math::DEFAULT_SAFETY_FACTOR_BPS,
    },
    alloy::primitives::{Address, U256},
    config_parser::ConfigParser,
    serde::{Deserialize, Serialize},
    std::path::Path,
};

/// Prefix of the environment variables that override config file values.
pub const ENV_PREFIX: &str = "AAVE";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rpc_url: String,
    pub log_level: String,
    /// Amount of ETH to wrap and deposit, in ether.
    pub deposit_amount: String,
    pub safety_factor_bps: u16,
    pub interest_rate_mode: InterestRateMode,
    pub referral_code: u16,
    /// Blocks to wait for after each state changing transaction.
    pub confirmations: u64,
    /// Decimals of the borrowed asset.
    pub borrow_decimals: u8,
    pub addresses: Addresses,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            log_level: "info".to_string(),
            deposit_amount: "0.02".to_string(),
            safety_factor_bps: DEFAULT_SAFETY_FACTOR_BPS,
            interest_rate_mode: InterestRateMode::Stable,
            referral_code: 0,
            confirmations: 1,
            borrow_decimals: 18,
            addresses: Addresses::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Addresses {
    pub weth: Address,
    pub dai: Address,
    pub lending_pool_addresses_provider: Address,
    pub dai_eth_price_feed: Address,
}

impl Default for Addresses {
    fn default() -> Self {
        Self {
            weth: WETH,
            dai: DAI,
            lending_pool_addresses_provider: aave_v2::LENDING_POOL_ADDRESSES_PROVIDER,
            dai_eth_price_feed: chainlink::DAI_ETH_PRICE_FEED,
        }
    }
}

/// Aave V2 debt type.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterestRateMode {
    Stable,
    Variable,
}

impl InterestRateMode {
    pub fn as_u256(self) -> U256 {
        match self {
            InterestRateMode::Stable => U256::from(1),
            InterestRateMode::Variable => U256::from(2),
        }
    }
}

pub fn load_config<P>(path: P) -> Result<Config, config_parser::Error>
where
    P: AsRef<Path>,
{
    ConfigParser::new().with_env_prefix(ENV_PREFIX).parse(path)
}

// ----------------------------------- tests -----------------------------------
