use {
    alloy::primitives::{I256, utils::UnitsError},
    thiserror::Error,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),

    #[error(transparent)]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),

    #[error(transparent)]
    Units(#[from] UnitsError),

    #[error("oracle reported a non-positive price: {price}")]
    NonPositivePrice { price: I256 },

    #[error("amount must not be negative: {amount}")]
    NegativeAmount { amount: String },

    #[error("deposit amount must be greater than zero")]
    ZeroDeposit,

    #[error("safety factor must be within (0, 10000] basis points, got {bps}")]
    InvalidSafetyFactor { bps: u16 },

    #[error("arithmetic overflow while computing {what}")]
    Overflow { what: &'static str },

    #[error("no signer configured: set `EVM_PRIVATE_KEY` or `EVM_MNEMONIC`")]
    MissingSigner,
}
