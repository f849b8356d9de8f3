//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{CoreError, TokenAmount, INVALID_SLIPPAGE_TOLERANCE, SLIPPAGE_TOLERANCE_MUL_VALUE};

#[cfg(feature = "floats")]
use crate::ARITHMETIC_OVERFLOW;
#[cfg(feature = "floats")]
use libm::{floor, pow};
#[cfg(feature = "floats")]
use num_bigint::BigUint;
#[cfg(feature = "floats")]
use num_traits::{FromPrimitive, ToPrimitive};

/// Get the maximum amount with a slippage tolerance
/// e.g. Your estimated amount you send is 10000 with 100 slippage tolerance. The max you send will be 10100.
///
/// # Parameters
/// - `amount` - The amount without slippage tolerance
/// - `slippage_tolerance_bps` - The slippage tolerance in bps (should be in range 0..10000)
///
/// # Returns
/// - The maximum amount, rounded up
pub fn try_get_max_amount_with_slippage_tolerance(amount: &TokenAmount, slippage_tolerance_bps: u16) -> Result<TokenAmount, CoreError> {
    if slippage_tolerance_bps > SLIPPAGE_TOLERANCE_MUL_VALUE {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = amount * (SLIPPAGE_TOLERANCE_MUL_VALUE as u32 + slippage_tolerance_bps as u32);
    let denominator = SLIPPAGE_TOLERANCE_MUL_VALUE as u32;
    Ok((numerator + (denominator - 1)) / denominator)
}

/// Get the minimum amount with a slippage tolerance
/// e.g. Your estimated amount you receive is 10000 with 100 slippage tolerance. The min you receive will be 9900.
///
/// # Parameters
/// - `amount` - The amount without slippage tolerance
/// - `slippage_tolerance_bps` - The slippage tolerance in bps (should be in range 0..10000)
///
/// # Returns
/// - The minimum amount, rounded down
pub fn try_get_min_amount_with_slippage_tolerance(amount: &TokenAmount, slippage_tolerance_bps: u16) -> Result<TokenAmount, CoreError> {
    if slippage_tolerance_bps > SLIPPAGE_TOLERANCE_MUL_VALUE {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = amount * (SLIPPAGE_TOLERANCE_MUL_VALUE - slippage_tolerance_bps) as u32;
    Ok(numerator / SLIPPAGE_TOLERANCE_MUL_VALUE as u32)
}

/// Convert a native token amount into whole tokens.
#[cfg(feature = "floats")]
pub fn amount_to_ui_amount(amount: &TokenAmount, decimals: u8) -> f64 {
    amount.to_f64().unwrap_or(f64::INFINITY) / pow(10.0, decimals as f64)
}

/// Convert an amount of whole tokens into a native token amount.
///
/// # Parameters
/// - `ui_amount` - The amount in whole tokens
/// - `decimals` - The number of decimals of the token
///
/// # Returns
/// - The native amount, rounded down. Negative or NaN amounts become zero.
/// - `ARITHMETIC_OVERFLOW` if the scaled amount is not finite
#[cfg(feature = "floats")]
pub fn ui_amount_to_amount(ui_amount: f64, decimals: u8) -> Result<TokenAmount, CoreError> {
    if ui_amount.is_nan() || ui_amount <= 0.0 {
        return Ok(BigUint::default());
    }
    let amount = floor(ui_amount * pow(10.0, decimals as f64));
    if !amount.is_finite() {
        return Err(ARITHMETIC_OVERFLOW);
    }
    BigUint::from_f64(amount).ok_or(ARITHMETIC_OVERFLOW)
}
