//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{
    price_to_sqrt_price_x96, CoreError, PresetRange, PriceRange, RangePolicy, RangePreset, FULL_RANGE_PRICE_FACTOR, INVALID_CURRENT_PRICE,
    INVALID_LOWER_PRICE, INVALID_RANGE, INVALID_RANGE_ORDER, INVALID_UPPER_PRICE, LARGE_PRICE_DISPLAY_THRESHOLD, MAX_PRICE, MIN_PRICE,
    PRICE_OUT_OF_BOUNDS, RANGE_TOO_FAR_ABOVE, RANGE_TOO_FAR_BELOW, SMALL_PRICE_DISPLAY_THRESHOLD,
};

/// Build the preset ranges around a price.
///
/// # Parameters
/// - `current_price` - The price the presets are centered on
///
/// # Returns
/// - One PresetRange per RangePreset: ±10%, ±20%, ±50% and the full range
///   `[current_price / 10^6, current_price * 10^6]`
pub fn preset_ranges(current_price: f64) -> Vec<PresetRange> {
    RangePreset::ALL
        .iter()
        .map(|preset| {
            let range = match preset.width() {
                Some(width) => PriceRange::new(current_price * (1.0 - width), current_price * (1.0 + width)),
                None => PriceRange::new(current_price / FULL_RANGE_PRICE_FACTOR, current_price * FULL_RANGE_PRICE_FACTOR),
            };
            PresetRange { preset: *preset, range }
        })
        .collect()
}

/// Validate a user supplied price range against the current price.
///
/// # Parameters
/// - `lower` - The lower bound of the range
/// - `upper` - The upper bound of the range
/// - `current_price` - The current price
/// - `policy` - How far from the current price the range may sit
///
/// # Returns
/// - `Ok(())` if the range is usable
/// - `INVALID_LOWER_PRICE`, `INVALID_UPPER_PRICE`, `INVALID_RANGE_ORDER` or `INVALID_CURRENT_PRICE`
///   for malformed input
/// - `PRICE_OUT_OF_BOUNDS` if a bound is outside of `[MIN_PRICE, MAX_PRICE]`
/// - `INVALID_RANGE` if both bounds encode to the same sqrt price
/// - `RANGE_TOO_FAR_ABOVE` or `RANGE_TOO_FAR_BELOW` if the range is far from the current price
pub fn validate_range(lower: f64, upper: f64, current_price: f64, policy: &RangePolicy) -> Result<(), CoreError> {
    if lower.is_nan() || lower <= 0.0 {
        return Err(INVALID_LOWER_PRICE);
    }
    if !upper.is_finite() {
        return Err(INVALID_UPPER_PRICE);
    }
    if upper <= lower {
        return Err(INVALID_RANGE_ORDER);
    }
    if lower < MIN_PRICE || upper > MAX_PRICE {
        return Err(PRICE_OUT_OF_BOUNDS);
    }
    if price_to_sqrt_price_x96(lower) >= price_to_sqrt_price_x96(upper) {
        return Err(INVALID_RANGE);
    }
    validate_range_distance(lower, upper, current_price, policy)
}

/// Check only how far a well-formed range sits from the current price.
/// Used for ranges built from valid ticks, whose bounds may be UI prices outside of the raw price bounds.
///
/// # Returns
/// - `INVALID_CURRENT_PRICE` if the current price is not a positive number
/// - `RANGE_TOO_FAR_ABOVE` or `RANGE_TOO_FAR_BELOW` if the range is far from the current price
pub fn validate_range_distance(lower: f64, upper: f64, current_price: f64, policy: &RangePolicy) -> Result<(), CoreError> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(INVALID_CURRENT_PRICE);
    }
    if lower > current_price * policy.max_lower_multiple {
        return Err(RANGE_TOO_FAR_ABOVE);
    }
    if upper < current_price * policy.min_upper_multiple {
        return Err(RANGE_TOO_FAR_BELOW);
    }
    Ok(())
}

/// Whether a validation error only flags a range far from the current price.
pub fn is_range_warning(error: CoreError) -> bool {
    error == RANGE_TOO_FAR_ABOVE || error == RANGE_TOO_FAR_BELOW
}

/// Format a price for display.
///
/// # Parameters
/// - `price` - The price
/// - `decimals` - The number of fraction digits
///
/// # Returns
/// - Exponential notation for prices below `1e-6` or at least `1e9`, fixed notation otherwise.
///   `0` is `"0"`, infinity is `"∞"` and NaN is `"-"`.
pub fn format_price(price: f64, decimals: usize) -> String {
    if price.is_nan() {
        return "-".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }
    if price == 0.0 {
        return "0".to_string();
    }

    let magnitude = price.abs();
    if !(SMALL_PRICE_DISPLAY_THRESHOLD..LARGE_PRICE_DISPLAY_THRESHOLD).contains(&magnitude) {
        format!("{:.*e}", decimals, price)
    } else {
        format!("{:.*}", decimals, price)
    }
}

pub fn format_range(range: &PriceRange, decimals: usize) -> String {
    format!("{} - {}", format_price(range.lower, decimals), format_price(range.upper, decimals))
}

/// Describe a range warning returned by `validate_range`.
///
/// # Returns
/// - A human readable message, `None` if `error` is not a range warning
pub fn range_warning_message(error: CoreError, range: &PriceRange, current_price: f64, policy: &RangePolicy, decimals: usize) -> Option<String> {
    let current = format_price(current_price, decimals);
    match error {
        RANGE_TOO_FAR_ABOVE => Some(format!(
            "{}: lower price {} is more than {}x the current price {}",
            RANGE_TOO_FAR_ABOVE,
            format_price(range.lower, decimals),
            policy.max_lower_multiple,
            current
        )),
        RANGE_TOO_FAR_BELOW => Some(format!(
            "{}: upper price {} is less than {}x the current price {}",
            RANGE_TOO_FAR_BELOW,
            format_price(range.upper, decimals),
            policy.min_upper_multiple,
            current
        )),
        _ => None,
    }
}
