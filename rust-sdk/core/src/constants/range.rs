//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// Overshoot applied on top of the breakeven price when suggesting a recovery price.
pub const DEFAULT_RECOVERY_BUFFER: f64 = 1.10;

/// A range whose lower bound is above `current_price * DEFAULT_MAX_LOWER_MULTIPLE` is too far away.
pub const DEFAULT_MAX_LOWER_MULTIPLE: f64 = 10.0;

/// A range whose upper bound is below `current_price * DEFAULT_MIN_UPPER_MULTIPLE` is too far away.
pub const DEFAULT_MIN_UPPER_MULTIPLE: f64 = 0.1;

/// The "full range" preset spans `[current / FULL_RANGE_PRICE_FACTOR, current * FULL_RANGE_PRICE_FACTOR]`.
pub const FULL_RANGE_PRICE_FACTOR: f64 = 1_000_000.0;

/// Prices below this magnitude are displayed in exponential notation.
pub const SMALL_PRICE_DISPLAY_THRESHOLD: f64 = 1e-6;

/// Prices at or above this magnitude are displayed in exponential notation.
pub const LARGE_PRICE_DISPLAY_THRESHOLD: f64 = 1e9;

pub const DEFAULT_DISPLAY_DECIMALS: usize = 4;
