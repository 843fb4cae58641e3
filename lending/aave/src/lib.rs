pub mod addresses {
    pub mod mainnet {
        use alloy::primitives::{Address, address};

        pub const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
        pub const DAI: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");

        pub mod aave_v2 {
            use super::*;

            pub const LENDING_POOL_ADDRESSES_PROVIDER: Address =
                address!("B53C1a33016B2DC2fF3653530bfF1848a515c8c5");
        }

        pub mod chainlink {
            use super::*;

            /// DAI priced in ETH, 18 decimals.
            pub const DAI_ETH_PRICE_FEED: Address =
                address!("773616E4d11A78F511299002da57A0a94577F1f4");
        }
    }
}

pub mod contract_bindings {
    pub mod erc20 {
        use alloy::sol;

        sol! {
            #[sol(rpc)]
            interface IERC20 {
                function approve(address spender, uint256 amount) external returns (bool);
                function allowance(address owner, address spender) external view returns (uint256);
                function balanceOf(address account) external view returns (uint256);
            }
        }

        sol! {
            #[sol(rpc)]
            interface IWETH {
                function deposit() external payable;
                function approve(address spender, uint256 amount) external returns (bool);
                function balanceOf(address account) external view returns (uint256);
            }
        }
    }

    pub mod aave_v2 {
        use alloy::sol;

        sol! {
            #[sol(rpc)]
            interface ILendingPoolAddressesProvider {
                function getLendingPool() external view returns (address);
            }
        }

        sol! {
            #[sol(rpc)]
            interface ILendingPool {
                function deposit(
                    address asset,
                    uint256 amount,
                    address onBehalfOf,
                    uint16 referralCode
                ) external;

                function borrow(
                    address asset,
                    uint256 amount,
                    uint256 interestRateMode,
                    uint16 referralCode,
                    address onBehalfOf
                ) external;

                function repay(
                    address asset,
                    uint256 amount,
                    uint256 rateMode,
                    address onBehalfOf
                ) external returns (uint256);

                function getUserAccountData(address user)
                    external
                    view
                    returns (
                        uint256 totalCollateralETH,
                        uint256 totalDebtETH,
                        uint256 availableBorrowsETH,
                        uint256 currentLiquidationThreshold,
                        uint256 ltv,
                        uint256 healthFactor
                    );
            }
        }
    }

    pub mod chainlink {
        use alloy::sol;

        sol! {
            #[sol(rpc)]
            interface AggregatorV3Interface {
                function decimals() external view returns (uint8);

                function latestRoundData()
                    external
                    view
                    returns (
                        uint80 roundId,
                        int256 answer,
                        uint256 startedAt,
                        uint256 updatedAt,
                        uint80 answeredInRound
                    );
            }
        }
    }
}

pub mod config;
mod error;
pub mod erc20;
pub mod flow;
pub mod market;
pub mod math;
pub mod pool;
pub mod price_feed;
pub mod setup;

pub use error::Error;
