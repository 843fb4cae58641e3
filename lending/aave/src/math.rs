use {
    crate::Error,
    alloy::primitives::{
        I256, U256,
        utils::{ParseUnits, format_units, parse_units},
    },
};

pub const BPS_DENOMINATOR: u16 = 10_000;

/// Borrow 95% of the available borrowing power.
pub const DEFAULT_SAFETY_FACTOR_BPS: u16 = 9_500;

/// Decimals of the ETH-denominated figures returned by `getUserAccountData`.
pub const BASE_DECIMALS: u8 = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorrowParams {
    /// Share of the available borrowing power to use, in basis points.
    pub safety_factor_bps: u16,
    /// Decimals of the price feed answer.
    pub feed_decimals: u8,
    /// Decimals of the asset being borrowed.
    pub borrow_decimals: u8,
}

impl BorrowParams {
    pub fn validate(&self) -> Result<(), Error> {
        if self.safety_factor_bps == 0 || self.safety_factor_bps > BPS_DENOMINATOR {
            return Err(Error::InvalidSafetyFactor {
                bps: self.safety_factor_bps,
            });
        }

        Ok(())
    }
}

impl Default for BorrowParams {
    fn default() -> Self {
        Self {
            safety_factor_bps: DEFAULT_SAFETY_FACTOR_BPS,
            feed_decimals: 18,
            borrow_decimals: 18,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorrowQuote {
    /// Amount in the borrowed asset's minor units.
    pub amount: U256,
    /// The same amount in whole units, e.g. `"1900.000000000000000000"`.
    pub display: String,
}

/// Computes `available × safety_factor × 1 / price`, in the borrowed asset's
/// minor units, rounding down.
///
/// `available` is denominated in base-asset wei. `price` is the oracle answer,
/// i.e. how many base-asset units one unit of the borrowed asset is worth,
/// scaled by `10^feed_decimals`.
pub fn borrow_amount(available: U256, price: I256, params: &BorrowParams) -> Result<U256, Error> {
    params.validate()?;

    if !price.is_positive() {
        return Err(Error::NonPositivePrice { price });
    }

    let numerator = available
        .checked_mul(U256::from(params.safety_factor_bps))
        .and_then(|n| n.checked_mul(pow10(params.feed_decimals)?))
        .and_then(|n| n.checked_mul(pow10(params.borrow_decimals)?))
        .ok_or(Error::Overflow {
            what: "borrow amount numerator",
        })?;

    let denominator = U256::from(BPS_DENOMINATOR)
        .checked_mul(price.into_raw())
        .and_then(|d| d.checked_mul(pow10(BASE_DECIMALS)?))
        .ok_or(Error::Overflow {
            what: "borrow amount denominator",
        })?;

    Ok(numerator / denominator)
}

pub fn quote_borrow(
    available: U256,
    price: I256,
    params: &BorrowParams,
) -> Result<BorrowQuote, Error> {
    let amount = borrow_amount(available, price, params)?;
    let display = to_display_units(amount, params.borrow_decimals)?;

    Ok(BorrowQuote { amount, display })
}

pub fn to_display_units(amount: U256, decimals: u8) -> Result<String, Error> {
    Ok(format_units(amount, decimals)?)
}

/// Parses a whole-unit amount such as `"0.02"` into minor units. Negative
/// amounts are rejected.
pub fn from_display_units(amount: &str, decimals: u8) -> Result<U256, Error> {
    match parse_units(amount, decimals)? {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => Err(Error::NegativeAmount {
            amount: amount.to_string(),
        }),
    }
}

fn pow10(exp: u8) -> Option<U256> {
    U256::from(10).checked_pow(U256::from(exp))
}

// ----------------------------------- tests -----------------------------------
