//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{
    clamp_tick_index, get_full_range_tick_indexes, get_initializable_tick_index, CoreError, PriceRange, SqrtPriceX96, TickRange,
    FULL_RANGE_ONLY_TICK_SPACING_THRESHOLD, INVALID_TICK_SPACING, MAX_TICK_INDEX, MIN_TICK_INDEX, Q96_RESOLUTION, TICK_BASE,
};
use libm::{floor, log, pow, round, sqrt};
use num_bigint::BigUint;
use num_traits::{FromPrimitive, ToPrimitive, Zero};

// A tick computed from a price that sits this close to an integer is snapped to it.
const TICK_SNAP_EPSILON: f64 = 1e-9;

fn q96() -> f64 {
    pow(2.0, Q96_RESOLUTION as f64)
}

fn decimals_scale(decimals_a: u8, decimals_b: u8) -> f64 {
    pow(10.0, decimals_b as f64 - decimals_a as f64)
}

/// Convert a price into a tick index.
///
/// # Parameters
/// - `price` - The raw price (token B per token A, in native units)
///
/// # Returns
/// - The greatest tick index whose price is less than or equal to `price`, clamped to the tick bounds.
///   Non-positive or NaN prices map to `MIN_TICK_INDEX`, infinity to `MAX_TICK_INDEX`.
pub fn price_to_tick_index(price: f64) -> i32 {
    if price.is_nan() || price <= 0.0 {
        return MIN_TICK_INDEX;
    }
    if price.is_infinite() {
        return MAX_TICK_INDEX;
    }

    let tick = log(price) / log(TICK_BASE);
    let nearest = round(tick);
    let tick = if (tick - nearest).abs() < TICK_SNAP_EPSILON { nearest } else { floor(tick) };

    clamp_tick_index(tick.clamp(MIN_TICK_INDEX as f64, MAX_TICK_INDEX as f64) as i32)
}

/// Convert a tick index into a raw price: `1.0001^tick_index`.
pub fn tick_index_to_price(tick_index: i32) -> f64 {
    pow(TICK_BASE, tick_index as f64)
}

/// Convert a raw price into a sqrt price (X96).
///
/// # Parameters
/// - `price` - The raw price
///
/// # Returns
/// - `floor(sqrt(price) * 2^96)`, zero for non-positive or NaN prices
pub fn price_to_sqrt_price_x96(price: f64) -> SqrtPriceX96 {
    if price.is_nan() || price <= 0.0 {
        return BigUint::zero();
    }
    let sqrt_price = sqrt(price.min(f64::MAX)) * q96();
    BigUint::from_f64(sqrt_price.min(f64::MAX)).unwrap_or_default()
}

/// Convert a sqrt price (X96) into a raw price. Lossy, meant for display.
pub fn sqrt_price_x96_to_price(sqrt_price: &SqrtPriceX96) -> f64 {
    let sqrt_price = sqrt_price.to_f64().unwrap_or(f64::INFINITY) / q96();
    sqrt_price * sqrt_price
}

/// Convert a UI price (whole tokens) into a raw price (native units).
///
/// # Parameters
/// - `price` - The price of token A in token B, in whole tokens
/// - `decimals_a` - The number of decimals of token A
/// - `decimals_b` - The number of decimals of token B
///
/// # Returns
/// - `price * 10^(decimals_b - decimals_a)`
pub fn ui_price_to_raw_price(price: f64, decimals_a: u8, decimals_b: u8) -> f64 {
    price * decimals_scale(decimals_a, decimals_b)
}

pub fn raw_price_to_ui_price(price: f64, decimals_a: u8, decimals_b: u8) -> f64 {
    price / decimals_scale(decimals_a, decimals_b)
}

pub fn ui_price_to_tick_index(price: f64, decimals_a: u8, decimals_b: u8) -> i32 {
    price_to_tick_index(ui_price_to_raw_price(price, decimals_a, decimals_b))
}

pub fn tick_index_to_ui_price(tick_index: i32, decimals_a: u8, decimals_b: u8) -> f64 {
    raw_price_to_ui_price(tick_index_to_price(tick_index), decimals_a, decimals_b)
}

pub fn ui_price_to_sqrt_price_x96(price: f64, decimals_a: u8, decimals_b: u8) -> SqrtPriceX96 {
    price_to_sqrt_price_x96(ui_price_to_raw_price(price, decimals_a, decimals_b))
}

pub fn sqrt_price_x96_to_ui_price(sqrt_price: &SqrtPriceX96, decimals_a: u8, decimals_b: u8) -> f64 {
    raw_price_to_ui_price(sqrt_price_x96_to_price(sqrt_price), decimals_a, decimals_b)
}

/// Invert a price so that it is quoted in the other token. Zero inverts to infinity.
pub fn invert_price(price: f64) -> f64 {
    1.0 / price
}

/// Convert a UI price range into an initializable tick range.
///
/// # Parameters
/// - `range` - The price range in whole tokens
/// - `decimals_a` - The number of decimals of token A
/// - `decimals_b` - The number of decimals of token B
/// - `tick_spacing` - The tick spacing of the pool
///
/// # Returns
/// - A TickRange whose lower bound is rounded down and upper bound rounded up to the tick spacing.
///   Pools whose spacing is at least `FULL_RANGE_ONLY_TICK_SPACING_THRESHOLD` always get the full range.
/// - `INVALID_TICK_SPACING` if the tick spacing is zero
pub fn price_range_to_tick_range(range: &PriceRange, decimals_a: u8, decimals_b: u8, tick_spacing: u16) -> Result<TickRange, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    if tick_spacing >= FULL_RANGE_ONLY_TICK_SPACING_THRESHOLD {
        return Ok(get_full_range_tick_indexes(tick_spacing));
    }

    let lower = ui_price_to_tick_index(range.lower, decimals_a, decimals_b);
    let upper = ui_price_to_tick_index(range.upper, decimals_a, decimals_b);
    let tick_lower_index = get_initializable_tick_index(lower, tick_spacing, Some(false));
    let mut tick_upper_index = get_initializable_tick_index(upper, tick_spacing, Some(true));

    if tick_upper_index <= tick_lower_index {
        tick_upper_index = get_initializable_tick_index(tick_lower_index + tick_spacing as i32, tick_spacing, Some(true));
    }

    Ok(TickRange {
        tick_lower_index,
        tick_upper_index,
    })
}
