use {
    crate::Error,
    alloy::{
        network::EthereumWallet,
        primitives::Address,
        providers::{Provider, ProviderBuilder},
        signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
    },
    std::env,
};

pub const PRIVATE_KEY_VAR: &str = "EVM_PRIVATE_KEY";
pub const MNEMONIC_VAR: &str = "EVM_MNEMONIC";

/// Connects to `rpc_url` with a wallet built from the environment.
///
/// Returns the provider and the address of the account that signs every
/// transaction.
pub fn setup_ethereum_provider(rpc_url: &str) -> anyhow::Result<(impl Provider, Address)> {
    let signer = load_signer()?;
    let account = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::new(signer))
        .connect_http(rpc_url.parse()?);

    Ok((provider, account))
}

/// Reads `EVM_PRIVATE_KEY`, falling back to the first account of `EVM_MNEMONIC`.
pub fn load_signer() -> anyhow::Result<PrivateKeySigner> {
    let private_key = env::var(PRIVATE_KEY_VAR).ok();
    let mnemonic = env::var(MNEMONIC_VAR).ok();

    signer_from(private_key.as_deref(), mnemonic.as_deref())
}

fn signer_from(
    private_key: Option<&str>,
    mnemonic: Option<&str>,
) -> anyhow::Result<PrivateKeySigner> {
    if let Some(private_key) = private_key {
        return Ok(private_key.trim().parse()?);
    }

    if let Some(mnemonic) = mnemonic {
        let signer = MnemonicBuilder::<English>::default()
            .phrase(mnemonic.trim())
            .build()?;
        return Ok(signer);
    }

    Err(Error::MissingSigner.into())
}

// ----------------------------------- tests -----------------------------------
