//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{
    get_amounts_from_liquidity, get_liquidity_from_amount_a, get_liquidity_from_amount_b, get_liquidity_from_amounts, is_tick_index_in_bounds,
    order_tick_indexes, tick_index_to_sqrt_price_x96, try_get_max_amount_with_slippage_tolerance, try_get_min_amount_with_slippage_tolerance,
    CoreError, DecreaseLiquidityQuote, IncreaseLiquidityQuote, Liquidity, SqrtPriceX96, TickRange, TokenAmount, INVALID_RANGE,
    TICK_INDEX_OUT_OF_BOUNDS,
};
use num_bigint::BigUint;

fn try_get_tick_range(tick_index_1: i32, tick_index_2: i32) -> Result<TickRange, CoreError> {
    if tick_index_1 == tick_index_2 {
        return Err(INVALID_RANGE);
    }
    if !is_tick_index_in_bounds(tick_index_1) || !is_tick_index_in_bounds(tick_index_2) {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    Ok(order_tick_indexes(tick_index_1, tick_index_2))
}

/// Calculate the quote for decreasing liquidity
///
/// # Arguments
/// - `liquidity_delta`: The amount of liquidity to withdraw
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points
/// - `current_sqrt_price`: The current sqrt price of the pool (X96)
/// - `tick_index_1`: The first tick index of the position
/// - `tick_index_2`: The second tick index of the position
///
/// # Returns
/// - A DecreaseLiquidityQuote struct containing the estimated and minimum token amounts
pub fn decrease_liquidity_quote(
    liquidity_delta: &Liquidity,
    slippage_tolerance_bps: u16,
    current_sqrt_price: &SqrtPriceX96,
    tick_index_1: i32,
    tick_index_2: i32,
) -> Result<DecreaseLiquidityQuote, CoreError> {
    let tick_range = try_get_tick_range(tick_index_1, tick_index_2)?;

    let (token_est_a, token_est_b) = get_amounts_from_liquidity(
        liquidity_delta,
        current_sqrt_price,
        &tick_index_to_sqrt_price_x96(tick_range.tick_lower_index),
        &tick_index_to_sqrt_price_x96(tick_range.tick_upper_index),
    );

    let token_min_a = try_get_min_amount_with_slippage_tolerance(&token_est_a, slippage_tolerance_bps)?;
    let token_min_b = try_get_min_amount_with_slippage_tolerance(&token_est_b, slippage_tolerance_bps)?;

    Ok(DecreaseLiquidityQuote {
        liquidity_delta: liquidity_delta.clone(),
        token_est_a,
        token_est_b,
        token_min_a,
        token_min_b,
    })
}

fn increase_liquidity_quote_for_liquidity(
    liquidity_delta: Liquidity,
    slippage_tolerance_bps: u16,
    current_sqrt_price: &SqrtPriceX96,
    sqrt_price_lower: &SqrtPriceX96,
    sqrt_price_upper: &SqrtPriceX96,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    let (token_est_a, token_est_b) = get_amounts_from_liquidity(&liquidity_delta, current_sqrt_price, sqrt_price_lower, sqrt_price_upper);

    let token_max_a = try_get_max_amount_with_slippage_tolerance(&token_est_a, slippage_tolerance_bps)?;
    let token_max_b = try_get_max_amount_with_slippage_tolerance(&token_est_b, slippage_tolerance_bps)?;

    Ok(IncreaseLiquidityQuote {
        liquidity_delta,
        token_est_a,
        token_est_b,
        token_max_a,
        token_max_b,
    })
}

/// Calculate the quote for increasing liquidity with both tokens
///
/// # Arguments
/// - `token_amount_a`: The available amount of token A
/// - `token_amount_b`: The available amount of token B
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points
/// - `current_sqrt_price`: The current sqrt price of the pool (X96)
/// - `tick_index_1`: The first tick index of the position
/// - `tick_index_2`: The second tick index of the position
///
/// # Returns
/// - An IncreaseLiquidityQuote struct containing the estimated and maximum token amounts
pub fn increase_liquidity_quote(
    token_amount_a: &TokenAmount,
    token_amount_b: &TokenAmount,
    slippage_tolerance_bps: u16,
    current_sqrt_price: &SqrtPriceX96,
    tick_index_1: i32,
    tick_index_2: i32,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    let tick_range = try_get_tick_range(tick_index_1, tick_index_2)?;
    let sqrt_price_lower = tick_index_to_sqrt_price_x96(tick_range.tick_lower_index);
    let sqrt_price_upper = tick_index_to_sqrt_price_x96(tick_range.tick_upper_index);

    let liquidity_delta = get_liquidity_from_amounts(current_sqrt_price, &sqrt_price_lower, &sqrt_price_upper, token_amount_a, token_amount_b);

    increase_liquidity_quote_for_liquidity(liquidity_delta, slippage_tolerance_bps, current_sqrt_price, &sqrt_price_lower, &sqrt_price_upper)
}

/// Calculate the quote for increasing liquidity given an amount of token A only
///
/// # Arguments
/// - `token_amount_a`: The amount of token A to deposit
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points
/// - `current_sqrt_price`: The current sqrt price of the pool (X96)
/// - `tick_index_1`: The first tick index of the position
/// - `tick_index_2`: The second tick index of the position
///
/// # Returns
/// - An IncreaseLiquidityQuote struct. The liquidity is zero when the price is above the range.
pub fn increase_liquidity_quote_a(
    token_amount_a: &TokenAmount,
    slippage_tolerance_bps: u16,
    current_sqrt_price: &SqrtPriceX96,
    tick_index_1: i32,
    tick_index_2: i32,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    let tick_range = try_get_tick_range(tick_index_1, tick_index_2)?;
    let sqrt_price_lower = tick_index_to_sqrt_price_x96(tick_range.tick_lower_index);
    let sqrt_price_upper = tick_index_to_sqrt_price_x96(tick_range.tick_upper_index);

    let liquidity_delta = if *current_sqrt_price >= sqrt_price_upper {
        BigUint::default()
    } else {
        let sqrt_price_start = current_sqrt_price.max(&sqrt_price_lower);
        get_liquidity_from_amount_a(sqrt_price_start, &sqrt_price_upper, token_amount_a)
    };

    increase_liquidity_quote_for_liquidity(liquidity_delta, slippage_tolerance_bps, current_sqrt_price, &sqrt_price_lower, &sqrt_price_upper)
}

/// Calculate the quote for increasing liquidity given an amount of token B only
///
/// # Arguments
/// - `token_amount_b`: The amount of token B to deposit
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points
/// - `current_sqrt_price`: The current sqrt price of the pool (X96)
/// - `tick_index_1`: The first tick index of the position
/// - `tick_index_2`: The second tick index of the position
///
/// # Returns
/// - An IncreaseLiquidityQuote struct. The liquidity is zero when the price is below the range.
pub fn increase_liquidity_quote_b(
    token_amount_b: &TokenAmount,
    slippage_tolerance_bps: u16,
    current_sqrt_price: &SqrtPriceX96,
    tick_index_1: i32,
    tick_index_2: i32,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    let tick_range = try_get_tick_range(tick_index_1, tick_index_2)?;
    let sqrt_price_lower = tick_index_to_sqrt_price_x96(tick_range.tick_lower_index);
    let sqrt_price_upper = tick_index_to_sqrt_price_x96(tick_range.tick_upper_index);

    let liquidity_delta = if *current_sqrt_price <= sqrt_price_lower {
        BigUint::default()
    } else {
        let sqrt_price_end = current_sqrt_price.min(&sqrt_price_upper);
        get_liquidity_from_amount_b(&sqrt_price_lower, sqrt_price_end, token_amount_b)
    };

    increase_liquidity_quote_for_liquidity(liquidity_delta, slippage_tolerance_bps, current_sqrt_price, &sqrt_price_lower, &sqrt_price_upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{INVALID_SLIPPAGE_TOLERANCE, MAX_TICK_INDEX};
    use std::str::FromStr;

    fn big(value: &str) -> BigUint {
        BigUint::from_str(value).unwrap()
    }

    fn one_token() -> BigUint {
        BigUint::from(1_000_000_000_000_000_000u64)
    }

    #[test]
    fn test_decrease_liquidity_quote() {
        let liquidity = BigUint::from(10u8).pow(20);

        let quote = decrease_liquidity_quote(&liquidity, 100, &tick_index_to_sqrt_price_x96(-200), -100, 100).unwrap();
        assert_eq!(quote.liquidity_delta, liquidity);
        assert_eq!(quote.token_est_a, big("999954169380029963"));
        assert_eq!(quote.token_est_b, BigUint::default());
        assert_eq!(quote.token_min_a, big("989954627686229663"));
        assert_eq!(quote.token_min_b, BigUint::default());

        let quote = decrease_liquidity_quote(&liquidity, 100, &tick_index_to_sqrt_price_x96(0), 100, -100).unwrap();
        assert_eq!(quote.token_est_a, big("498727207074909613"));
        assert_eq!(quote.token_est_b, big("498727207074909613"));
        assert_eq!(quote.token_min_a, big("493739935004160516"));
        assert_eq!(quote.token_min_b, big("493739935004160516"));
    }

    #[test]
    fn test_increase_liquidity_quote() {
        let quote = increase_liquidity_quote(&one_token(), &one_token(), 100, &tick_index_to_sqrt_price_x96(0), -100, 100).unwrap();
        assert_eq!(quote.liquidity_delta, big("200510416479002803287"));
        assert_eq!(quote.token_est_a, big("999999999999999999"));
        assert_eq!(quote.token_est_b, big("999999999999999999"));
        assert_eq!(quote.token_max_a, big("1009999999999999999"));
        assert_eq!(quote.token_max_b, big("1009999999999999999"));
    }

    #[test]
    fn test_increase_liquidity_quote_single_token() {
        let current = tick_index_to_sqrt_price_x96(0);

        let quote_a = increase_liquidity_quote_a(&one_token(), 0, &current, -100, 100).unwrap();
        assert_eq!(quote_a.liquidity_delta, big("200510416479002803287"));
        assert_eq!(quote_a.token_est_a, big("999999999999999999"));
        assert_eq!(quote_a.token_max_a, quote_a.token_est_a);

        let quote_b = increase_liquidity_quote_b(&one_token(), 0, &current, -100, 100).unwrap();
        assert_eq!(quote_b.liquidity_delta, big("200510416479002803287"));
        assert_eq!(quote_b.token_est_b, big("999999999999999999"));

        let above = tick_index_to_sqrt_price_x96(200);
        let quote_a = increase_liquidity_quote_a(&one_token(), 0, &above, -100, 100).unwrap();
        assert_eq!(quote_a.liquidity_delta, BigUint::default());
        assert_eq!(quote_a.token_est_a, BigUint::default());
        assert_eq!(quote_a.token_est_b, BigUint::default());

        let below = tick_index_to_sqrt_price_x96(-200);
        let quote_b = increase_liquidity_quote_b(&one_token(), 0, &below, -100, 100).unwrap();
        assert_eq!(quote_b.liquidity_delta, BigUint::default());
    }

    #[test]
    fn test_liquidity_quote_errors() {
        let current = tick_index_to_sqrt_price_x96(0);
        assert_eq!(
            increase_liquidity_quote(&one_token(), &one_token(), 100, &current, 10, 10).unwrap_err(),
            INVALID_RANGE
        );
        assert_eq!(
            increase_liquidity_quote_a(&one_token(), 100, &current, -100, MAX_TICK_INDEX + 1).unwrap_err(),
            TICK_INDEX_OUT_OF_BOUNDS
        );
        assert_eq!(
            increase_liquidity_quote_b(&one_token(), 10_001, &current, -100, 100).unwrap_err(),
            INVALID_SLIPPAGE_TOLERANCE
        );
        assert_eq!(
            decrease_liquidity_quote(&one_token(), 10_001, &current, -100, 100).unwrap_err(),
            INVALID_SLIPPAGE_TOLERANCE
        );
    }
}
