//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{ui_price_to_tick_index, EntryComposition, PositionMetrics, PriceRange};
use libm::sqrt;

const DAYS_PER_YEAR: f64 = 365.0;

/// Calculate the metrics of a position at the current price.
///
/// # Parameters
/// - `range` - The position range in UI prices
/// - `owned_amount_a` - The amount of token A currently held by the position, in whole tokens
/// - `owned_amount_b` - The amount of token B currently held by the position, in whole tokens
/// - `current_price` - The current UI price
/// - `entry` - The composition of the original deposit
/// - `recovery_buffer` - Margin applied on top of the break-even price, e.g. 1.10
/// - `decimals_a` - The number of decimals of token A
/// - `decimals_b` - The number of decimals of token B
///
/// # Returns
/// - The PositionMetrics. The impermanent loss is zero when the held value is not positive,
///   and the recovery price is infinite when the position is worth nothing.
#[allow(clippy::too_many_arguments)]
pub fn position_metrics(
    range: &PriceRange,
    owned_amount_a: f64,
    owned_amount_b: f64,
    current_price: f64,
    entry: &EntryComposition,
    recovery_buffer: f64,
    decimals_a: u8,
    decimals_b: u8,
) -> PositionMetrics {
    let current_value = owned_amount_a * current_price + owned_amount_b;
    let value_if_held = entry.amount_a * current_price + entry.amount_b;

    let impermanent_loss = if value_if_held > 0.0 { current_value / value_if_held - 1.0 } else { 0.0 };

    let performance = 1.0 + impermanent_loss;
    let recovery_price = if performance > 0.0 {
        current_price * (1.0 / performance) * recovery_buffer
    } else {
        f64::INFINITY
    };

    PositionMetrics {
        in_range: range.contains(current_price),
        value_at_entry: entry.value(),
        current_value,
        value_if_held,
        impermanent_loss,
        recovery_price,
        recovery_tick: ui_price_to_tick_index(recovery_price, decimals_a, decimals_b),
    }
}

/// Split a deposit the way a position over `range` holds it at `price`.
///
/// # Parameters
/// - `range` - The position range
/// - `price` - The entry price
/// - `value` - The deposited value, denominated in token B
///
/// # Returns
/// - The entry composition. Below the range the whole value is in token A, above it in token B.
pub fn entry_composition_for_range(range: &PriceRange, price: f64, value: f64) -> EntryComposition {
    if price <= range.lower {
        return EntryComposition::new(price, value / price, 0.0);
    }
    if price >= range.upper {
        return EntryComposition::new(price, 0.0, value);
    }

    // Amounts per unit of liquidity.
    let sqrt_price = sqrt(price);
    let unit_a = 1.0 / sqrt_price - 1.0 / sqrt(range.upper);
    let unit_b = sqrt_price - sqrt(range.lower);

    let share_a = unit_a * price / (unit_a * price + unit_b);
    EntryComposition::new(price, value * share_a / price, value * (1.0 - share_a))
}

/// Impermanent loss of a full range position after the price moved by `price_ratio`.
///
/// # Returns
/// - `2 * sqrt(price_ratio) / (1 + price_ratio) - 1`, zero or negative
pub fn impermanent_loss_for_price_ratio(price_ratio: f64) -> f64 {
    2.0 * sqrt(price_ratio) / (1.0 + price_ratio) - 1.0
}

/// Annualize the fees earned in a day relative to the position value.
pub fn estimate_fee_apr(daily_fees_value: f64, position_value: f64) -> f64 {
    if position_value <= 0.0 {
        return 0.0;
    }
    daily_fees_value / position_value * DAYS_PER_YEAR
}
