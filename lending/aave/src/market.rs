use {
    crate::{
        Error,
        config::Config,
        erc20::{allowance, approve_erc20, get_weth},
        pool::{AccountData, borrow, deposit, get_borrow_user_data, get_lending_pool, repay},
        price_feed::{get_dai_price, get_feed_decimals},
    },
    alloy::{
        primitives::{Address, I256, TxHash, U256},
        providers::Provider,
    },
    async_trait::async_trait,
};

/// The remote operations the borrow walkthrough is made of. Implementations
/// are bound to a single signing account.
#[async_trait(?Send)]
pub trait LendingMarket {
    /// Wraps `amount` of ETH and returns the resulting WETH balance.
    async fn wrap(&self, amount: U256) -> Result<U256, Error>;

    async fn lending_pool(&self) -> Result<Address, Error>;

    async fn approve(&self, token: Address, spender: Address, amount: U256)
    -> Result<TxHash, Error>;

    async fn allowance(&self, token: Address, spender: Address) -> Result<U256, Error>;

    async fn deposit(&self, pool: Address, asset: Address, amount: U256) -> Result<TxHash, Error>;

    async fn account_data(&self, pool: Address) -> Result<AccountData, Error>;

    async fn price(&self) -> Result<I256, Error>;

    async fn price_decimals(&self) -> Result<u8, Error>;

    async fn borrow(&self, pool: Address, asset: Address, amount: U256) -> Result<TxHash, Error>;

    async fn repay(&self, pool: Address, asset: Address, amount: U256) -> Result<TxHash, Error>;
}

/// Aave V2 on an EVM chain, reached through an alloy provider.
pub struct AaveV2<'a, P> {
    provider: &'a P,
    account: Address,
    config: &'a Config,
}

impl<'a, P> AaveV2<'a, P> {
    pub fn new(provider: &'a P, account: Address, config: &'a Config) -> Self {
        Self {
            provider,
            account,
            config,
        }
    }
}

#[async_trait(?Send)]
impl<P> LendingMarket for AaveV2<'_, P>
where
    P: Provider,
{
    async fn wrap(&self, amount: U256) -> Result<U256, Error> {
        get_weth(
            self.provider,
            self.config.addresses.weth,
            self.account,
            amount,
            self.config.confirmations,
        )
        .await
    }

    async fn lending_pool(&self) -> Result<Address, Error> {
        get_lending_pool(
            self.provider,
            self.config.addresses.lending_pool_addresses_provider,
        )
        .await
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, Error> {
        approve_erc20(
            self.provider,
            token,
            spender,
            amount,
            self.config.confirmations,
        )
        .await
    }

    async fn allowance(&self, token: Address, spender: Address) -> Result<U256, Error> {
        allowance(self.provider, token, self.account, spender).await
    }

    async fn deposit(&self, pool: Address, asset: Address, amount: U256) -> Result<TxHash, Error> {
        deposit(
            self.provider,
            pool,
            asset,
            amount,
            self.account,
            self.config.referral_code,
            self.config.confirmations,
        )
        .await
    }

    async fn account_data(&self, pool: Address) -> Result<AccountData, Error> {
        get_borrow_user_data(self.provider, pool, self.account).await
    }

    async fn price(&self) -> Result<I256, Error> {
        get_dai_price(self.provider, self.config.addresses.dai_eth_price_feed).await
    }

    async fn price_decimals(&self) -> Result<u8, Error> {
        get_feed_decimals(self.provider, self.config.addresses.dai_eth_price_feed).await
    }

    async fn borrow(&self, pool: Address, asset: Address, amount: U256) -> Result<TxHash, Error> {
        borrow(
            self.provider,
            pool,
            asset,
            amount,
            self.config.interest_rate_mode,
            self.config.referral_code,
            self.account,
            self.config.confirmations,
        )
        .await
    }

    async fn repay(&self, pool: Address, asset: Address, amount: U256) -> Result<TxHash, Error> {
        repay(
            self.provider,
            pool,
            asset,
            amount,
            self.config.interest_rate_mode,
            self.account,
            self.config.confirmations,
        )
        .await
    }
}
