//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{Liquidity, TokenAmount};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecreaseLiquidityQuote {
    pub liquidity_delta: Liquidity,
    pub token_est_a: TokenAmount,
    pub token_est_b: TokenAmount,
    pub token_min_a: TokenAmount,
    pub token_min_b: TokenAmount,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncreaseLiquidityQuote {
    pub liquidity_delta: Liquidity,
    pub token_est_a: TokenAmount,
    pub token_est_b: TokenAmount,
    pub token_max_a: TokenAmount,
    pub token_max_b: TokenAmount,
}
