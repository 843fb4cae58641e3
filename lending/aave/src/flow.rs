use {
    crate::{
        Error,
        config::Config,
        market::LendingMarket,
        math::{BASE_DECIMALS, BorrowParams, BorrowQuote, from_display_units, quote_borrow},
        pool::AccountData,
    },
    alloy::primitives::{Address, TxHash, U256},
    tracing::info,
};

#[derive(Clone, Debug)]
pub struct Summary {
    pub lending_pool: Address,
    pub borrowed: BorrowQuote,
    /// Account data after the last step that ran.
    pub account_data: AccountData,
}

/// Wraps ETH, deposits it as collateral, borrows DAI against it and repays
/// the DAI. Every call is awaited before the next one is issued; the first
/// failure aborts the run.
///
/// The config is checked before anything is sent, so a bad value never leaves
/// a half-opened position behind.
pub async fn run(
    market: &impl LendingMarket,
    config: &Config,
    skip_repay: bool,
) -> Result<Summary, Error> {
    let addresses = &config.addresses;
    let amount = deposit_amount(config)?;
    let mut params = BorrowParams {
        safety_factor_bps: config.safety_factor_bps,
        borrow_decimals: config.borrow_decimals,
        ..Default::default()
    };
    params.validate()?;

    market.wrap(amount).await?;

    let lending_pool = market.lending_pool().await?;

    market.approve(addresses.weth, lending_pool, amount).await?;

    market.deposit(lending_pool, addresses.weth, amount).await?;

    let account_data = market.account_data(lending_pool).await?;

    let price = market.price().await?;
    params.feed_decimals = market.price_decimals().await?;

    let borrowed = quote_borrow(account_data.available_borrows_eth, price, &params)?;
    info!("You can borrow {} DAI", borrowed.display);

    market
        .borrow(lending_pool, addresses.dai, borrowed.amount)
        .await?;

    let mut account_data = market.account_data(lending_pool).await?;

    if !skip_repay {
        repay_with_approval(market, lending_pool, addresses.dai, borrowed.amount).await?;

        account_data = market.account_data(lending_pool).await?;
    }

    Ok(Summary {
        lending_pool,
        borrowed,
        account_data,
    })
}

/// Approves the pool to pull `amount` of `asset` unless the current allowance
/// already covers it, then repays.
pub async fn repay_with_approval(
    market: &impl LendingMarket,
    lending_pool: Address,
    asset: Address,
    amount: U256,
) -> Result<TxHash, Error> {
    let current = market.allowance(asset, lending_pool).await?;
    if current < amount {
        market.approve(asset, lending_pool, amount).await?;
    } else {
        info!(%current, "Allowance already covers the repayment, skipping approval");
    }

    market.repay(lending_pool, asset, amount).await
}

fn deposit_amount(config: &Config) -> Result<U256, Error> {
    let amount = from_display_units(&config.deposit_amount, BASE_DECIMALS)?;
    if amount.is_zero() {
        return Err(Error::ZeroDeposit);
    }

    Ok(amount)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            addresses::mainnet::{DAI, WETH},
            market::AaveV2,
        },
        alloy::{
            primitives::{I256, address, utils::parse_ether},
            providers::ProviderBuilder,
            transports::mock::Asserter,
        },
        async_trait::async_trait,
        std::cell::RefCell,
    };

    const ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const LENDING_POOL: Address = address!("7d2768dE32b0b80b7a3454c06BdAc94A69DDc7A9");

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Wrap(U256),
        LendingPool,
        Approve { token: Address, amount: U256 },
        Allowance { token: Address },
        Deposit { asset: Address, amount: U256 },
        AccountData,
        Price,
        PriceDecimals,
        Borrow { asset: Address, amount: U256 },
        Repay { asset: Address, amount: U256 },
    }

    /// Records every call and answers with fixed values.
    struct RecordingMarket {
        calls: RefCell<Vec<Call>>,
        allowance: U256,
        available_borrows: U256,
        price: I256,
    }

    impl RecordingMarket {
        fn new(allowance: U256) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                allowance,
                // 0.016 ETH available, DAI at 0.0005 ETH.
                available_borrows: parse_ether("0.016").unwrap(),
                price: I256::from_raw(U256::from(500_000_000_000_000u64)),
            }
        }

        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.take()
        }
    }

    #[async_trait(?Send)]
    impl LendingMarket for RecordingMarket {
        async fn wrap(&self, amount: U256) -> Result<U256, Error> {
            self.record(Call::Wrap(amount));
            Ok(amount)
        }

        async fn lending_pool(&self) -> Result<Address, Error> {
            self.record(Call::LendingPool);
            Ok(LENDING_POOL)
        }

        async fn approve(
            &self,
            token: Address,
            spender: Address,
            amount: U256,
        ) -> Result<TxHash, Error> {
            assert_eq!(spender, LENDING_POOL);
            self.record(Call::Approve { token, amount });
            Ok(TxHash::ZERO)
        }

        async fn allowance(&self, token: Address, spender: Address) -> Result<U256, Error> {
            assert_eq!(spender, LENDING_POOL);
            self.record(Call::Allowance { token });
            Ok(self.allowance)
        }

        async fn deposit(
            &self,
            pool: Address,
            asset: Address,
            amount: U256,
        ) -> Result<TxHash, Error> {
            assert_eq!(pool, LENDING_POOL);
            self.record(Call::Deposit { asset, amount });
            Ok(TxHash::ZERO)
        }

        async fn account_data(&self, pool: Address) -> Result<AccountData, Error> {
            assert_eq!(pool, LENDING_POOL);
            self.record(Call::AccountData);
            Ok(AccountData {
                total_collateral_eth: parse_ether("0.02").unwrap(),
                total_debt_eth: U256::ZERO,
                available_borrows_eth: self.available_borrows,
                current_liquidation_threshold: U256::from(8_250),
                ltv: U256::from(8_000),
                health_factor: U256::MAX,
            })
        }

        async fn price(&self) -> Result<I256, Error> {
            self.record(Call::Price);
            Ok(self.price)
        }

        async fn price_decimals(&self) -> Result<u8, Error> {
            self.record(Call::PriceDecimals);
            Ok(18)
        }

        async fn borrow(
            &self,
            pool: Address,
            asset: Address,
            amount: U256,
        ) -> Result<TxHash, Error> {
            assert_eq!(pool, LENDING_POOL);
            self.record(Call::Borrow { asset, amount });
            Ok(TxHash::ZERO)
        }

        async fn repay(
            &self,
            pool: Address,
            asset: Address,
            amount: U256,
        ) -> Result<TxHash, Error> {
            assert_eq!(pool, LENDING_POOL);
            self.record(Call::Repay { asset, amount });
            Ok(TxHash::ZERO)
        }
    }

    fn deposit() -> U256 {
        parse_ether("0.02").unwrap()
    }

    fn borrowed() -> U256 {
        parse_ether("30.4").unwrap()
    }

    #[tokio::test]
    async fn steps_run_in_order() {
        let market = RecordingMarket::new(U256::ZERO);

        let summary = run(&market, &Config::default(), false).await.unwrap();

        assert_eq!(summary.lending_pool, LENDING_POOL);
        assert_eq!(summary.borrowed.amount, borrowed());
        assert_eq!(summary.borrowed.display, "30.400000000000000000");
        assert_eq!(market.calls(), vec![
            Call::Wrap(deposit()),
            Call::LendingPool,
            Call::Approve {
                token: WETH,
                amount: deposit(),
            },
            Call::Deposit {
                asset: WETH,
                amount: deposit(),
            },
            Call::AccountData,
            Call::Price,
            Call::PriceDecimals,
            Call::Borrow {
                asset: DAI,
                amount: borrowed(),
            },
            Call::AccountData,
            Call::Allowance { token: DAI },
            Call::Approve {
                token: DAI,
                amount: borrowed(),
            },
            Call::Repay {
                asset: DAI,
                amount: borrowed(),
            },
            Call::AccountData,
        ]);
    }

    #[tokio::test]
    async fn skipping_repay_stops_after_borrow() {
        let market = RecordingMarket::new(U256::ZERO);

        run(&market, &Config::default(), true).await.unwrap();

        let calls = market.calls();
        assert_eq!(calls.len(), 9);
        assert_eq!(calls.last(), Some(&Call::AccountData));
        assert!(!calls.iter().any(|call| matches!(call, Call::Repay { .. })));
    }

    #[tokio::test]
    async fn repay_approves_when_allowance_is_short() {
        let amount = borrowed();
        let market = RecordingMarket::new(amount - U256::from(1));

        repay_with_approval(&market, LENDING_POOL, DAI, amount)
            .await
            .unwrap();

        assert_eq!(market.calls(), vec![
            Call::Allowance { token: DAI },
            Call::Approve { token: DAI, amount },
            Call::Repay { asset: DAI, amount },
        ]);
    }

    #[tokio::test]
    async fn repay_skips_approval_when_allowance_covers_it() {
        let amount = borrowed();
        let market = RecordingMarket::new(amount);

        repay_with_approval(&market, LENDING_POOL, DAI, amount)
            .await
            .unwrap();

        assert_eq!(market.calls(), vec![
            Call::Allowance { token: DAI },
            Call::Repay { asset: DAI, amount },
        ]);
    }

    #[tokio::test]
    async fn invalid_safety_factor_fails_before_any_transaction() {
        let market = RecordingMarket::new(U256::ZERO);
        let config = Config {
            safety_factor_bps: 0,
            ..Default::default()
        };

        let err = run(&market, &config, false).await.unwrap_err();

        assert!(matches!(err, Error::InvalidSafetyFactor { bps: 0 }));
        assert!(market.calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_config_never_reaches_the_node() {
        // Any request against an empty asserter fails with a transport error.
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        let config = Config {
            safety_factor_bps: 10_001,
            ..Default::default()
        };
        let market = AaveV2::new(&provider, ACCOUNT, &config);

        let err = run(&market, &config, false).await.unwrap_err();

        assert!(matches!(err, Error::InvalidSafetyFactor { bps: 10_001 }));
    }

    #[tokio::test]
    async fn negative_deposit_fails_before_any_transaction() {
        let market = RecordingMarket::new(U256::ZERO);
        let config = Config {
            deposit_amount: "-0.02".to_string(),
            ..Default::default()
        };

        let err = run(&market, &config, false).await.unwrap_err();

        assert!(matches!(err, Error::NegativeAmount { .. }));
        assert!(market.calls().is_empty());
    }

    #[tokio::test]
    async fn zero_deposit_fails_before_any_transaction() {
        let market = RecordingMarket::new(U256::ZERO);
        let config = Config {
            deposit_amount: "0".to_string(),
            ..Default::default()
        };

        let err = run(&market, &config, false).await.unwrap_err();

        assert!(matches!(err, Error::ZeroDeposit));
        assert!(market.calls().is_empty());
    }
}
