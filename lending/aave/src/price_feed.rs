use {
    crate::{Error, contract_bindings::chainlink::AggregatorV3Interface},
    alloy::{
        primitives::{Address, I256},
        providers::Provider,
    },
    tracing::info,
};

/// Returns the answer of the feed's latest round, in the feed's own decimals.
pub async fn get_dai_price(provider: &impl Provider, price_feed: Address) -> Result<I256, Error> {
    let round = AggregatorV3Interface::new(price_feed, &provider)
        .latestRoundData()
        .call()
        .await?;
    info!("The DAI/ETH price is {}", round.answer);

    Ok(round.answer)
}

pub async fn get_feed_decimals(provider: &impl Provider, price_feed: Address) -> Result<u8, Error> {
    Ok(AggregatorV3Interface::new(price_feed, &provider)
        .decimals()
        .call()
        .await?)
}

// ----------------------------------- tests -----------------------------------
