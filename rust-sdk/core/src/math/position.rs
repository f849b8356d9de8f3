//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{PositionRatio, PositionStatus, SqrtPriceX96, Q64_RESOLUTION, Q96_RESOLUTION};

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::{order_tick_indexes, tick_index_to_sqrt_price_x96};

/// Check if a position is in range.
/// When a position is in range it is earning fees
///
/// # Parameters
/// - `current_sqrt_price` - The sqrt price of the pool (X96)
/// - `tick_index_1` - A i32 integer representing the first tick index of the position
/// - `tick_index_2` - A i32 integer representing the second tick index of the position
///
/// # Returns
/// - A boolean value indicating if the position is in range
pub fn is_position_in_range(current_sqrt_price: &SqrtPriceX96, tick_index_1: i32, tick_index_2: i32) -> bool {
    position_status(current_sqrt_price, tick_index_1, tick_index_2) == PositionStatus::PriceInRange
}

/// Calculate the status of a position
/// The status can be one of four values:
/// - InRange: The position is in range, both tokens are held
/// - BelowRange: The position is below the range, only token A is held
/// - AboveRange: The position is above the range, only token B is held
/// - Invalid: Both ticks are equal
///
/// # Parameters
/// - `current_sqrt_price` - The sqrt price of the pool (X96)
/// - `tick_index_1` - A i32 integer representing the first tick index of the position
/// - `tick_index_2` - A i32 integer representing the second tick index of the position
///
/// # Returns
/// - A PositionStatus enum value indicating the status of the position
pub fn position_status(current_sqrt_price: &SqrtPriceX96, tick_index_1: i32, tick_index_2: i32) -> PositionStatus {
    let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
    let sqrt_price_lower = tick_index_to_sqrt_price_x96(tick_range.tick_lower_index);
    let sqrt_price_upper = tick_index_to_sqrt_price_x96(tick_range.tick_upper_index);

    if tick_index_1 == tick_index_2 {
        PositionStatus::Invalid
    } else if *current_sqrt_price <= sqrt_price_lower {
        PositionStatus::PriceBelowRange
    } else if *current_sqrt_price >= sqrt_price_upper {
        PositionStatus::PriceAboveRange
    } else {
        PositionStatus::PriceInRange
    }
}

/// Calculate the token_a / token_b value ratio of a (ficticious) position
///
/// # Parameters
/// - `current_sqrt_price` - The sqrt price of the pool (X96)
/// - `tick_index_1` - A i32 integer representing the first tick index of the position
/// - `tick_index_2` - A i32 integer representing the second tick index of the position
///
/// # Returns
/// - A PositionRatio struct containing the share of token_a and token_b as X64 values
pub fn position_ratio_x64(current_sqrt_price: &SqrtPriceX96, tick_index_1: i32, tick_index_2: i32) -> PositionRatio {
    let one_x64: u128 = 1 << Q64_RESOLUTION;
    match position_status(current_sqrt_price, tick_index_1, tick_index_2) {
        PositionStatus::Invalid => PositionRatio { ratio_a: 0, ratio_b: 0 },
        PositionStatus::PriceBelowRange => PositionRatio {
            ratio_a: one_x64,
            ratio_b: 0,
        },
        PositionStatus::PriceAboveRange => PositionRatio {
            ratio_a: 0,
            ratio_b: one_x64,
        },
        PositionStatus::PriceInRange => {
            let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
            let lower_sqrt_price = tick_index_to_sqrt_price_x96(tick_range.tick_lower_index);
            let upper_sqrt_price = tick_index_to_sqrt_price_x96(tick_range.tick_upper_index);

            let l = BigUint::from(1u8) << Q96_RESOLUTION;
            let p = current_sqrt_price * current_sqrt_price;

            let deposit_a_1 = (&l << Q96_RESOLUTION) / current_sqrt_price;
            let deposit_a_2 = (&l << Q96_RESOLUTION) / &upper_sqrt_price;
            let deposit_a = ((deposit_a_1 - deposit_a_2) * p) >> Q96_RESOLUTION;

            let deposit_b = l * (current_sqrt_price - lower_sqrt_price);

            let total_deposit = &deposit_a + deposit_b;

            let ratio_a = ((deposit_a << Q64_RESOLUTION) / total_deposit).to_u128().unwrap_or(one_x64);
            let ratio_b = one_x64 - ratio_a;

            PositionRatio { ratio_a, ratio_b }
        }
    }
}
