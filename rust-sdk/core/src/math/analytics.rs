//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{
    amount_to_ui_amount, get_amounts_from_liquidity, is_range_warning, is_tick_index_in_bounds, order_tick_indexes, position_metrics,
    position_status, range_warning_message, tick_index_to_sqrt_price_x96, tick_index_to_ui_price, ui_price_to_sqrt_price_x96,
    validate_range_distance, AnalyticsPolicy, CoreError, PositionAnalytics, PositionSnapshot, PositionStatus, PriceRange, INVALID_RANGE,
    INVALID_RECOVERY_BUFFER, TICK_INDEX_OUT_OF_BOUNDS,
};

/// Recompute everything derived from a position snapshot.
///
/// # Parameters
/// - `snapshot` - The position, the current price and the entry composition
/// - `policy` - Range guards, recovery buffer and display settings
///
/// # Returns
/// - The PositionAnalytics. A range far from the current price is reported in `range_warning`.
/// - `INVALID_RANGE` if both ticks are equal
/// - `TICK_INDEX_OUT_OF_BOUNDS` if a tick is outside of the valid range
/// - `INVALID_RECOVERY_BUFFER` if the recovery buffer is not a positive number
/// - `INVALID_CURRENT_PRICE` if the current price is not a positive number
pub fn analyze_position(snapshot: &PositionSnapshot, policy: &AnalyticsPolicy) -> Result<PositionAnalytics, CoreError> {
    if snapshot.tick_lower_index == snapshot.tick_upper_index {
        return Err(INVALID_RANGE);
    }
    if !is_tick_index_in_bounds(snapshot.tick_lower_index) || !is_tick_index_in_bounds(snapshot.tick_upper_index) {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    if !policy.recovery_buffer.is_finite() || policy.recovery_buffer <= 0.0 {
        return Err(INVALID_RECOVERY_BUFFER);
    }

    let tick_range = order_tick_indexes(snapshot.tick_lower_index, snapshot.tick_upper_index);
    let price_range = PriceRange::new(
        tick_index_to_ui_price(tick_range.tick_lower_index, snapshot.decimals_a, snapshot.decimals_b),
        tick_index_to_ui_price(tick_range.tick_upper_index, snapshot.decimals_a, snapshot.decimals_b),
    );

    let range_warning = match validate_range_distance(price_range.lower, price_range.upper, snapshot.current_price, &policy.range) {
        Ok(()) => None,
        Err(err) if is_range_warning(err) => {
            range_warning_message(err, &price_range, snapshot.current_price, &policy.range, policy.display_decimals)
        }
        Err(err) => return Err(err),
    };

    let current_sqrt_price = ui_price_to_sqrt_price_x96(snapshot.current_price, snapshot.decimals_a, snapshot.decimals_b);
    let status = position_status(&current_sqrt_price, tick_range.tick_lower_index, tick_range.tick_upper_index);

    let (amount_a, amount_b) = get_amounts_from_liquidity(
        &snapshot.liquidity,
        &current_sqrt_price,
        &tick_index_to_sqrt_price_x96(tick_range.tick_lower_index),
        &tick_index_to_sqrt_price_x96(tick_range.tick_upper_index),
    );
    let ui_amount_a = amount_to_ui_amount(&amount_a, snapshot.decimals_a);
    let ui_amount_b = amount_to_ui_amount(&amount_b, snapshot.decimals_b);

    let mut metrics = position_metrics(
        &price_range,
        ui_amount_a,
        ui_amount_b,
        snapshot.current_price,
        &snapshot.entry,
        policy.recovery_buffer,
        snapshot.decimals_a,
        snapshot.decimals_b,
    );
    // The exact status also decides the held amounts, so it wins at the range bounds.
    metrics.in_range = status == PositionStatus::PriceInRange;

    Ok(PositionAnalytics {
        status,
        price_range,
        amount_a,
        amount_b,
        ui_amount_a,
        ui_amount_b,
        metrics,
        range_warning,
    })
}
