//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{SqrtPriceX96, TickRange, MAX_TICK_INDEX, MIN_TICK_INDEX};
use ethnum::U256;
use num_bigint::BigUint;

// sqrt(1.0001^-(2^i)) as X128, for i = 1..=19. The i = 0 factor seeds the ratio.
const SQRT_RATIO_SEED: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;
const SQRT_RATIO_FACTORS: [u128; 19] = [
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

/// Get the first and last tick index of the valid tick range for a given tick spacing.
///
/// # Parameters
/// - `tick_spacing` - A u16 integer representing the tick spacing
///
/// # Returns
/// - A TickRange struct containing the lower and upper tick index
pub fn get_full_range_tick_indexes(tick_spacing: u16) -> TickRange {
    let tick_spacing = tick_spacing.max(1) as i32;
    TickRange {
        tick_lower_index: (MIN_TICK_INDEX / tick_spacing) * tick_spacing,
        tick_upper_index: (MAX_TICK_INDEX / tick_spacing) * tick_spacing,
    }
}

/// Order two tick indexes so that the lower one comes first.
///
/// # Parameters
/// - `tick_index_1` - A i32 integer representing the first tick index
/// - `tick_index_2` - A i32 integer representing the second tick index
///
/// # Returns
/// - A TickRange struct containing the lower and upper tick index
pub fn order_tick_indexes(tick_index_1: i32, tick_index_2: i32) -> TickRange {
    if tick_index_1 < tick_index_2 {
        TickRange {
            tick_lower_index: tick_index_1,
            tick_upper_index: tick_index_2,
        }
    } else {
        TickRange {
            tick_lower_index: tick_index_2,
            tick_upper_index: tick_index_1,
        }
    }
}

pub fn is_tick_index_in_bounds(tick_index: i32) -> bool {
    (MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index)
}

pub fn clamp_tick_index(tick_index: i32) -> i32 {
    tick_index.clamp(MIN_TICK_INDEX, MAX_TICK_INDEX)
}

/// Get the closest tick index that is a multiple of the tick spacing.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick index
/// - `tick_spacing` - A u16 integer representing the tick spacing
/// - `round_up` - `Some(true)` rounds up, `Some(false)` rounds down, `None` rounds to the nearest
///
/// # Returns
/// - A i32 integer representing the initializable tick index, kept inside the full range
pub fn get_initializable_tick_index(tick_index: i32, tick_spacing: u16, round_up: Option<bool>) -> i32 {
    let spacing = tick_spacing.max(1) as i32;
    let remainder = tick_index.rem_euclid(spacing);
    let rounded_down = tick_index - remainder;

    let round_up = round_up.unwrap_or(remainder * 2 >= spacing);
    let result = if round_up && remainder > 0 { rounded_down + spacing } else { rounded_down };

    let full_range = get_full_range_tick_indexes(tick_spacing);
    result.clamp(full_range.tick_lower_index, full_range.tick_upper_index)
}

/// Get the exact sqrt price (X96) of a tick index.
/// Ticks outside of `[MIN_TICK_INDEX, MAX_TICK_INDEX]` are clamped.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick index
///
/// # Returns
/// - `sqrt(1.0001^tick_index) * 2^96`, rounded up
pub fn tick_index_to_sqrt_price_x96(tick_index: i32) -> SqrtPriceX96 {
    let tick_index = clamp_tick_index(tick_index);
    let abs_tick = tick_index.unsigned_abs();

    let mut ratio: U256 = if abs_tick & 0x1 != 0 {
        U256::from(SQRT_RATIO_SEED)
    } else {
        U256::ONE << 128
    };

    for (i, factor) in SQRT_RATIO_FACTORS.iter().enumerate() {
        if abs_tick & (0x2 << i) != 0 {
            ratio = (ratio * U256::from(*factor)) >> 128;
        }
    }

    if tick_index > 0 {
        ratio = U256::MAX / ratio;
    }

    // X128 -> X96, rounding up so that sqrt_price_x96_to_tick_index stays consistent.
    let remainder = ratio & U256::from(u32::MAX);
    let mut sqrt_price: U256 = ratio >> 32;
    if remainder != U256::ZERO {
        sqrt_price += U256::ONE;
    }

    BigUint::from_bytes_le(&sqrt_price.to_le_bytes())
}

/// Get the tick index for a sqrt price (X96).
///
/// # Parameters
/// - `sqrt_price` - The sqrt price of the pool as X96
///
/// # Returns
/// - The greatest tick index whose sqrt price is less than or equal to `sqrt_price`,
///   clamped to `[MIN_TICK_INDEX, MAX_TICK_INDEX]`
pub fn sqrt_price_x96_to_tick_index(sqrt_price: &SqrtPriceX96) -> i32 {
    let mut low = MIN_TICK_INDEX;
    let mut high = MAX_TICK_INDEX;

    if *sqrt_price < tick_index_to_sqrt_price_x96(low) {
        return low;
    }

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if tick_index_to_sqrt_price_x96(mid) <= *sqrt_price {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    low
}
