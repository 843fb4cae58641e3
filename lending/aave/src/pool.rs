use {
    crate::{
        Error,
        config::InterestRateMode,
        contract_bindings::aave_v2::{ILendingPool, ILendingPoolAddressesProvider},
    },
    alloy::{
        primitives::{Address, TxHash, U256, utils::format_ether},
        providers::Provider,
    },
    tracing::{debug, info},
};

/// Snapshot of `getUserAccountData`. Amounts are in ETH wei.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountData {
    pub total_collateral_eth: U256,
    pub total_debt_eth: U256,
    pub available_borrows_eth: U256,
    /// Basis points.
    pub current_liquidation_threshold: U256,
    /// Basis points.
    pub ltv: U256,
    /// 18 decimals; below 1.0 the position can be liquidated.
    pub health_factor: U256,
}

impl From<ILendingPool::getUserAccountDataReturn> for AccountData {
    fn from(data: ILendingPool::getUserAccountDataReturn) -> Self {
        Self {
            total_collateral_eth: data.totalCollateralETH,
            total_debt_eth: data.totalDebtETH,
            available_borrows_eth: data.availableBorrowsETH,
            current_liquidation_threshold: data.currentLiquidationThreshold,
            ltv: data.ltv,
            health_factor: data.healthFactor,
        }
    }
}

/// Resolves the lending pool through the addresses provider.
pub async fn get_lending_pool(
    provider: &impl Provider,
    addresses_provider: Address,
) -> Result<Address, Error> {
    let lending_pool = ILendingPoolAddressesProvider::new(addresses_provider, &provider)
        .getLendingPool()
        .call()
        .await?;
    info!("LendingPool address {lending_pool}");

    Ok(lending_pool)
}

pub async fn deposit(
    provider: &impl Provider,
    lending_pool: Address,
    asset: Address,
    amount: U256,
    on_behalf_of: Address,
    referral_code: u16,
    confirmations: u64,
) -> Result<TxHash, Error> {
    let pool = ILendingPool::new(lending_pool, &provider);

    info!("Depositing...");
    let tx_hash = pool
        .deposit(asset, amount, on_behalf_of, referral_code)
        .send()
        .await?
        .with_required_confirmations(confirmations)
        .watch()
        .await?;
    info!(%tx_hash, "Deposited");

    Ok(tx_hash)
}

pub async fn get_borrow_user_data(
    provider: &impl Provider,
    lending_pool: Address,
    account: Address,
) -> Result<AccountData, Error> {
    let data: AccountData = ILendingPool::new(lending_pool, &provider)
        .getUserAccountData(account)
        .call()
        .await?
        .into();

    info!(
        "You have total {} worth of ETH deposited.",
        format_ether(data.total_collateral_eth)
    );
    info!(
        "You have total {} worth of ETH borrowed.",
        format_ether(data.total_debt_eth)
    );
    info!(
        "You can borrow {} worth of ETH.",
        format_ether(data.available_borrows_eth)
    );
    debug!(health_factor = %format_ether(data.health_factor), ltv = %data.ltv);

    Ok(data)
}

#[allow(clippy::too_many_arguments)]
pub async fn borrow(
    provider: &impl Provider,
    lending_pool: Address,
    asset: Address,
    amount: U256,
    rate_mode: InterestRateMode,
    referral_code: u16,
    on_behalf_of: Address,
    confirmations: u64,
) -> Result<TxHash, Error> {
    let tx_hash = ILendingPool::new(lending_pool, &provider)
        .borrow(
            asset,
            amount,
            rate_mode.as_u256(),
            referral_code,
            on_behalf_of,
        )
        .send()
        .await?
        .with_required_confirmations(confirmations)
        .watch()
        .await?;
    info!(%tx_hash, "Borrowed!");

    Ok(tx_hash)
}

/// Repays `amount` of `asset`. The pool must already be allowed to pull it.
pub async fn repay(
    provider: &impl Provider,
    lending_pool: Address,
    asset: Address,
    amount: U256,
    rate_mode: InterestRateMode,
    on_behalf_of: Address,
    confirmations: u64,
) -> Result<TxHash, Error> {
    let tx_hash = ILendingPool::new(lending_pool, &provider)
        .repay(asset, amount, rate_mode.as_u256(), on_behalf_of)
        .send()
        .await?
        .with_required_confirmations(confirmations)
        .watch()
        .await?;
    info!(%tx_hash, "Repaid!");

    Ok(tx_hash)
}

// ----------------------------------- tests -----------------------------------
