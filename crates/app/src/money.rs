//! Prices in minor units (two implied fraction digits).

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

const PRICE_SCALE: u32 = 2;

/// Errors raised while parsing a decimal price.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("price is not a decimal number")]
    Malformed(#[source] rust_decimal::Error),

    #[error("price cannot be negative")]
    Negative,

    #[error("price has more than two fraction digits")]
    TooPrecise,

    #[error("price is too large")]
    OutOfRange,
}

/// Render minor units as a fixed two-digit decimal, e.g. `1250` as `"12.50"`.
#[must_use]
pub fn format_price(minor: u64) -> String {
    Decimal::from_i128_with_scale(i128::from(minor), PRICE_SCALE).to_string()
}

/// Parse a decimal such as `"12.5"` or `"12.50"` into minor units.
///
/// # Errors
///
/// Returns an error for malformed, negative, overly precise or out-of-range input.
pub fn parse_price(input: &str) -> Result<u64, PriceError> {
    let value = Decimal::from_str(input.trim())
        .map_err(PriceError::Malformed)?
        .normalize();

    if value.is_sign_negative() && !value.is_zero() {
        return Err(PriceError::Negative);
    }

    if value.scale() > PRICE_SCALE {
        return Err(PriceError::TooPrecise);
    }

    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.to_u64())
        .filter(|minor| i64::try_from(*minor).is_ok())
        .ok_or(PriceError::OutOfRange)
}
