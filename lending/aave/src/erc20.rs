use {
    crate::{
        Error,
        contract_bindings::erc20::{IERC20, IWETH},
    },
    alloy::{
        primitives::{Address, TxHash, U256, utils::format_ether},
        providers::Provider,
    },
    tracing::{debug, info},
};

/// Wraps `amount` of ETH into WETH and returns the account's WETH balance.
pub async fn get_weth(
    provider: &impl Provider,
    weth_address: Address,
    account: Address,
    amount: U256,
    confirmations: u64,
) -> Result<U256, Error> {
    let weth = IWETH::new(weth_address, &provider);

    debug!(%amount, "Wrapping ETH");
    let tx_hash = weth
        .deposit()
        .value(amount)
        .send()
        .await?
        .with_required_confirmations(confirmations)
        .watch()
        .await?;
    debug!(%tx_hash, "Wrapped");

    let balance = weth.balanceOf(account).call().await?;
    info!("Got {} WETH", format_ether(balance));

    Ok(balance)
}

/// Lets `spender` move `amount` of `token` on behalf of the signer.
pub async fn approve_erc20(
    provider: &impl Provider,
    token: Address,
    spender: Address,
    amount: U256,
    confirmations: u64,
) -> Result<TxHash, Error> {
    let erc20 = IERC20::new(token, &provider);

    let tx_hash = erc20
        .approve(spender, amount)
        .send()
        .await?
        .with_required_confirmations(confirmations)
        .watch()
        .await?;
    info!(%tx_hash, "Approved!");

    Ok(tx_hash)
}

pub async fn allowance(
    provider: &impl Provider,
    token: Address,
    owner: Address,
    spender: Address,
) -> Result<U256, Error> {
    Ok(IERC20::new(token, &provider)
        .allowance(owner, spender)
        .call()
        .await?)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::addresses::mainnet::{DAI, WETH},
        alloy::{
            primitives::{Bytes, address},
            providers::ProviderBuilder,
            sol_types::SolValue,
            transports::mock::Asserter,
        },
    };

    #[tokio::test]
    async fn reading_allowance() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());

        let approved = U256::from(20_000_000_000_000_000u64);
        asserter.push_success(&Bytes::from(approved.abi_encode()));

        let owner = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let amount = allowance(&provider, DAI, owner, WETH).await.unwrap();

        assert_eq!(amount, approved);
    }
}
