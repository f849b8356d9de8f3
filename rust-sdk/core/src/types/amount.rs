//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use num_bigint::BigUint;

// Exact quantities are arbitrary-precision integers, floats only appear in UI prices and metrics.

/// `sqrt(price) * 2^96`.
pub type SqrtPriceX96 = BigUint;

/// Liquidity units of a position. Only meaningful together with the range it was computed for.
pub type Liquidity = BigUint;

/// Token amount in base units (not scaled by decimals).
pub type TokenAmount = BigUint;
