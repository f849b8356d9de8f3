//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// Number of fractional bits of a sqrt price in X96 fixed point.
pub const Q96_RESOLUTION: usize = 96;

/// Number of fractional bits of a position ratio.
pub const Q64_RESOLUTION: usize = 64;

/// Slippage tolerances are expressed in basis points of this value.
pub const SLIPPAGE_TOLERANCE_MUL_VALUE: u16 = 10_000;
