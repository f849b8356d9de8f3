//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{Liquidity, SqrtPriceX96, TokenAmount, Q96_RESOLUTION};
use num_bigint::BigUint;

fn order_sqrt_prices<'a>(sqrt_price_1: &'a SqrtPriceX96, sqrt_price_2: &'a SqrtPriceX96) -> (&'a SqrtPriceX96, &'a SqrtPriceX96) {
    let (lower, upper) = if sqrt_price_1 <= sqrt_price_2 {
        (sqrt_price_1, sqrt_price_2)
    } else {
        (sqrt_price_2, sqrt_price_1)
    };
    assert!(lower != upper, "zero-width price range");
    (lower, upper)
}

/// Calculate the liquidity provided by an amount of token A over a price range.
///
/// # Parameters
/// - `sqrt_price_1` - One bound of the range as a sqrt price (X96)
/// - `sqrt_price_2` - The other bound of the range as a sqrt price (X96)
/// - `amount_a` - The amount of token A
///
/// # Returns
/// - `amount_a * floor(lower * upper / 2^96) / (upper - lower)`
///
/// # Panics
/// - If both bounds are equal
pub fn get_liquidity_from_amount_a(sqrt_price_1: &SqrtPriceX96, sqrt_price_2: &SqrtPriceX96, amount_a: &TokenAmount) -> Liquidity {
    let (lower, upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    let intermediate = (lower * upper) >> Q96_RESOLUTION;
    amount_a * intermediate / (upper - lower)
}

/// Calculate the liquidity provided by an amount of token B over a price range.
///
/// # Returns
/// - `amount_b * 2^96 / (upper - lower)`
///
/// # Panics
/// - If both bounds are equal
pub fn get_liquidity_from_amount_b(sqrt_price_1: &SqrtPriceX96, sqrt_price_2: &SqrtPriceX96, amount_b: &TokenAmount) -> Liquidity {
    let (lower, upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    (amount_b << Q96_RESOLUTION) / (upper - lower)
}

/// Calculate the maximum liquidity that the given token amounts can back.
///
/// # Parameters
/// - `current_sqrt_price` - The current sqrt price of the pool (X96)
/// - `sqrt_price_1` - One bound of the position as a sqrt price (X96)
/// - `sqrt_price_2` - The other bound of the position as a sqrt price (X96)
/// - `amount_a` - The available amount of token A
/// - `amount_b` - The available amount of token B
///
/// # Returns
/// - The liquidity. Below the range only token A counts, above it only token B,
///   inside it the smaller of the two sides.
///
/// # Panics
/// - If both bounds are equal
pub fn get_liquidity_from_amounts(
    current_sqrt_price: &SqrtPriceX96,
    sqrt_price_1: &SqrtPriceX96,
    sqrt_price_2: &SqrtPriceX96,
    amount_a: &TokenAmount,
    amount_b: &TokenAmount,
) -> Liquidity {
    let (lower, upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);

    if current_sqrt_price <= lower {
        get_liquidity_from_amount_a(lower, upper, amount_a)
    } else if current_sqrt_price >= upper {
        get_liquidity_from_amount_b(lower, upper, amount_b)
    } else {
        let liquidity_a = get_liquidity_from_amount_a(current_sqrt_price, upper, amount_a);
        let liquidity_b = get_liquidity_from_amount_b(lower, current_sqrt_price, amount_b);
        liquidity_a.min(liquidity_b)
    }
}

/// Calculate the amount of token A backing a liquidity over a price range.
///
/// # Returns
/// - `liquidity * 2^96 * (upper - lower) / (upper * lower)`
///
/// # Panics
/// - If both bounds are equal
pub fn get_amount_a_from_liquidity(liquidity: &Liquidity, sqrt_price_1: &SqrtPriceX96, sqrt_price_2: &SqrtPriceX96) -> TokenAmount {
    let (lower, upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    (liquidity << Q96_RESOLUTION) * (upper - lower) / (upper * lower)
}

/// Calculate the amount of token B backing a liquidity over a price range.
///
/// # Returns
/// - `liquidity * (upper - lower) / 2^96`
///
/// # Panics
/// - If both bounds are equal
pub fn get_amount_b_from_liquidity(liquidity: &Liquidity, sqrt_price_1: &SqrtPriceX96, sqrt_price_2: &SqrtPriceX96) -> TokenAmount {
    let (lower, upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);
    (liquidity * (upper - lower)) >> Q96_RESOLUTION
}

/// Calculate the token amounts held by a liquidity at the current price.
///
/// # Parameters
/// - `liquidity` - The liquidity of the position
/// - `current_sqrt_price` - The current sqrt price of the pool (X96)
/// - `sqrt_price_1` - One bound of the position as a sqrt price (X96)
/// - `sqrt_price_2` - The other bound of the position as a sqrt price (X96)
///
/// # Returns
/// - The amounts of token A and token B. Below the range the B amount is zero,
///   above it the A amount is zero.
///
/// # Panics
/// - If both bounds are equal
pub fn get_amounts_from_liquidity(
    liquidity: &Liquidity,
    current_sqrt_price: &SqrtPriceX96,
    sqrt_price_1: &SqrtPriceX96,
    sqrt_price_2: &SqrtPriceX96,
) -> (TokenAmount, TokenAmount) {
    let (lower, upper) = order_sqrt_prices(sqrt_price_1, sqrt_price_2);

    if current_sqrt_price <= lower {
        (get_amount_a_from_liquidity(liquidity, lower, upper), BigUint::default())
    } else if current_sqrt_price >= upper {
        (BigUint::default(), get_amount_b_from_liquidity(liquidity, lower, upper))
    } else {
        (
            get_amount_a_from_liquidity(liquidity, current_sqrt_price, upper),
            get_amount_b_from_liquidity(liquidity, lower, current_sqrt_price),
        )
    }
}
