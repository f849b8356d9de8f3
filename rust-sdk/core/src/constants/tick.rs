//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -887272;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 887272;

/// The base of the tick scale: `price = TICK_BASE^tick`.
pub const TICK_BASE: f64 = 1.0001;

/// The exact sqrt price (X96) at `MIN_TICK_INDEX`.
pub const MIN_SQRT_PRICE_X96: u128 = 4295128739;

/// The exact sqrt price (X96) at `MAX_TICK_INDEX`, 1461446703485210103287273052203988822378723970342.
pub const MAX_SQRT_PRICE_X96: U256 = U256::from_words(0xfffd8963, 0xefd1fc6a506488495d951d5263988d26);

/// The raw price at `MIN_TICK_INDEX`. Lower prices have no sqrt price (X96) encoding.
pub const MIN_PRICE: f64 = 2.938956807585585e-39;

/// The raw price at `MAX_TICK_INDEX`.
pub const MAX_PRICE: f64 = 3.402567868363881e38;

/// Pools with tick spacing above this threshold are considered full range only.
pub const FULL_RANGE_ONLY_TICK_SPACING_THRESHOLD: u16 = 32768; // 2^15
