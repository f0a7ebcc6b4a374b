//! 18-decimal fixed-point helpers. Every multiplication and addition is checked;
//! leaving the 256-bit range yields `CambioError::ArithmeticOverflow`.

use rust_decimal::Decimal;

use crate::{CambioError, ONE, ONE_SQUARED, U256};

/// Number of decimals in a fixed-point rate.
pub const DECIMALS: u32 = 18;

/// `a * b`, failing with `ArithmeticOverflow` labelled `op`.
///
/// # Errors
/// Returns `ArithmeticOverflow` when the product does not fit in 256 bits.
pub fn mul(a: U256, b: U256, op: &'static str) -> Result<U256, CambioError> {
    a.checked_mul(b).ok_or_else(|| CambioError::overflow(op))
}

/// `a + b`, failing with `ArithmeticOverflow` labelled `op`.
///
/// # Errors
/// Returns `ArithmeticOverflow` when the sum does not fit in 256 bits.
pub fn add(a: U256, b: U256, op: &'static str) -> Result<U256, CambioError> {
    a.checked_add(b).ok_or_else(|| CambioError::overflow(op))
}

/// Combined rate of two wrapped forms: `src_rate * dst_rate / 1e18`.
///
/// # Errors
/// Returns `ArithmeticOverflow` when the intermediate product overflows.
pub fn combine_forms(src_rate: U256, dst_rate: U256) -> Result<U256, CambioError> {
    Ok(mul(src_rate, dst_rate, "wrapped form product")? / ONE)
}

/// Oracle rate adjusted for both wrapping rates: `rate * src_rate * dst_rate / 1e36`.
///
/// # Errors
/// Returns `ArithmeticOverflow` when either intermediate product overflows.
pub fn scale_sample(rate: U256, src_rate: U256, dst_rate: U256) -> Result<U256, CambioError> {
    let partial = mul(rate, src_rate, "sample scaling")?;
    Ok(mul(partial, dst_rate, "sample scaling")? / ONE_SQUARED)
}

/// Oracle rate adjusted for the source wrapping rate only: `rate * src_rate / 1e18`.
///
/// # Errors
/// Returns `ArithmeticOverflow` when the product overflows.
pub fn scale_sample_single(rate: U256, src_rate: U256) -> Result<U256, CambioError> {
    Ok(mul(rate, src_rate, "sample scaling")? / ONE)
}

/// Convert a fixed-point value to a `Decimal` for display.
///
/// Returns `None` when the value exceeds what `Decimal` can represent at 18
/// decimal places (about 7.9e10 whole units).
#[must_use]
pub fn to_decimal(value: U256) -> Option<Decimal> {
    let raw: u128 = value.try_into().ok()?;
    let raw = i128::try_from(raw).ok()?;
    Decimal::try_from_i128_with_scale(raw, DECIMALS).ok()
}
