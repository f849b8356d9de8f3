//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

pub type CoreError = &'static str;

pub const TICK_INDEX_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";

pub const INVALID_TICK_SPACING: CoreError = "Invalid tick spacing";

pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

pub const INVALID_RANGE: CoreError = "Invalid range: lower and upper bounds are equal";

pub const INVALID_LOWER_PRICE: CoreError = "Lower price must be a positive number";

pub const INVALID_UPPER_PRICE: CoreError = "Upper price must be a finite number";

pub const INVALID_RANGE_ORDER: CoreError = "Upper price must be greater than lower price";

pub const PRICE_OUT_OF_BOUNDS: CoreError = "Price is outside of the supported price range";

pub const INVALID_CURRENT_PRICE: CoreError = "Current price must be a positive number";

pub const RANGE_TOO_FAR_ABOVE: CoreError = "Range is too far above the current price";

pub const RANGE_TOO_FAR_BELOW: CoreError = "Range is too far below the current price";

pub const INVALID_SLIPPAGE_TOLERANCE: CoreError = "Invalid slippage tolerance";

pub const INVALID_RECOVERY_BUFFER: CoreError = "Recovery buffer must be a positive number";
