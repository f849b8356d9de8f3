//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use liqrange_core::*;
use num_bigint::BigUint;
use proptest::prelude::*;

fn big(value: u128) -> BigUint {
    BigUint::from(value)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_tick_price_round_trip(tick_index in MIN_TICK_INDEX..=MAX_TICK_INDEX) {
        prop_assert_eq!(price_to_tick_index(tick_index_to_price(tick_index)), tick_index);
    }

    #[test]
    fn prop_exact_tick_round_trip(tick_index in MIN_TICK_INDEX..=MAX_TICK_INDEX) {
        let sqrt_price = tick_index_to_sqrt_price_x96(tick_index);
        prop_assert_eq!(sqrt_price_x96_to_tick_index(&sqrt_price), tick_index);
    }

    #[test]
    fn prop_exact_codec_is_monotonic(tick_index in MIN_TICK_INDEX..MAX_TICK_INDEX, step in 1i32..1000) {
        let next = (tick_index + step).min(MAX_TICK_INDEX);
        prop_assert!(tick_index_to_sqrt_price_x96(tick_index) < tick_index_to_sqrt_price_x96(next));
    }

    #[test]
    fn prop_float_codec_is_monotonic(price in 1e-30f64..1e30, factor in 1.0f64..10.0) {
        prop_assert!(price_to_tick_index(price) <= price_to_tick_index(price * factor));
        prop_assert!(price_to_sqrt_price_x96(price) <= price_to_sqrt_price_x96(price * factor));
    }

    #[test]
    fn prop_tick_price_is_strictly_increasing(tick_index in MIN_TICK_INDEX..MAX_TICK_INDEX - 1000, step in 1i32..=1000) {
        prop_assert!(tick_index_to_price(tick_index) < tick_index_to_price(tick_index + step));
        prop_assert!(tick_index_to_sqrt_price_x96(tick_index) < tick_index_to_sqrt_price_x96(tick_index + step));
    }

    #[test]
    fn prop_validated_range_has_nonzero_width(lower_exponent in -70.0f64..40.0, factor in 1.0f64..1.001) {
        let lower = 10f64.powf(lower_exponent);
        let upper = lower * factor;
        if validate_range(lower, upper, lower, &RangePolicy::default()).is_ok() {
            let sqrt_price_lower = price_to_sqrt_price_x96(lower);
            prop_assert!(sqrt_price_lower > BigUint::default());
            prop_assert!(sqrt_price_lower < price_to_sqrt_price_x96(upper));
        }
    }

    #[test]
    fn prop_amounts_never_exceed_deposit(
        tick_lower_index in -400_000i32..400_000,
        width in 1i32..50_000,
        current_tick_index in -450_000i32..450_000,
        amount_a in 0u128..1_000_000_000_000_000_000_000_000u128,
        amount_b in 0u128..1_000_000_000_000_000_000_000_000u128,
    ) {
        let lower = tick_index_to_sqrt_price_x96(tick_lower_index);
        let upper = tick_index_to_sqrt_price_x96(tick_lower_index + width);
        let current = tick_index_to_sqrt_price_x96(current_tick_index);

        let liquidity = get_liquidity_from_amounts(&current, &lower, &upper, &big(amount_a), &big(amount_b));
        let (owned_a, owned_b) = get_amounts_from_liquidity(&liquidity, &current, &lower, &upper);

        prop_assert!(owned_a <= big(amount_a));
        prop_assert!(owned_b <= big(amount_b));
    }

    #[test]
    fn prop_no_loss_at_entry(price in 1e-6f64..1e6, value in 1.0f64..1e9) {
        let entry = EntryComposition::balanced(price, value);
        let range = PriceRange::new(price * 0.9, price * 1.1);
        let metrics = position_metrics(&range, entry.amount_a, entry.amount_b, price, &entry, DEFAULT_RECOVERY_BUFFER, 6, 6);
        prop_assert!(metrics.impermanent_loss.abs() < 1e-12);
        prop_assert!((metrics.current_value - metrics.value_at_entry).abs() <= metrics.value_at_entry * 1e-12);
    }
}

#[test]
fn test_boundary_split() {
    let lower = price_to_sqrt_price_x96(100.0);
    let upper = price_to_sqrt_price_x96(200.0);
    let liquidity = BigUint::from(10u8).pow(18);

    let (below_a, below_b) = get_amounts_from_liquidity(&liquidity, &price_to_sqrt_price_x96(90.0), &lower, &upper);
    assert!(below_a > BigUint::default());
    assert_eq!(below_b, BigUint::default());

    let (above_a, above_b) = get_amounts_from_liquidity(&liquidity, &price_to_sqrt_price_x96(250.0), &lower, &upper);
    assert_eq!(above_a, BigUint::default());
    assert!(above_b > BigUint::default());

    let (inside_a, inside_b) = get_amounts_from_liquidity(&liquidity, &price_to_sqrt_price_x96(150.0), &lower, &upper);
    assert!(inside_a > BigUint::default());
    assert!(inside_b > BigUint::default());

    let tick_lower_index = price_to_tick_index(100.0);
    let tick_upper_index = price_to_tick_index(200.0);
    let status = |price: f64| position_status(&price_to_sqrt_price_x96(price), tick_lower_index, tick_upper_index);
    assert_eq!(status(90.0), PositionStatus::PriceBelowRange);
    assert_eq!(status(250.0), PositionStatus::PriceAboveRange);
    assert_eq!(status(150.0), PositionStatus::PriceInRange);
}

#[test]
fn test_invalid_ranges_are_rejected() {
    let policy = RangePolicy::default();
    assert!(validate_range(100.0, 100.0, 150.0, &policy).is_err());
    assert!(validate_range(-5.0, 200.0, 150.0, &policy).is_err());
}

#[test]
fn test_eth_usd_position() {
    let (decimals_a, decimals_b) = (18, 6);
    let current = ui_price_to_sqrt_price_x96(3000.0, decimals_a, decimals_b);
    let lower = ui_price_to_sqrt_price_x96(2700.0, decimals_a, decimals_b);
    let upper = ui_price_to_sqrt_price_x96(3300.0, decimals_a, decimals_b);

    let one_eth = BigUint::from(10u8).pow(18);
    let plenty_of_usd = BigUint::from(10u8).pow(30);

    let liquidity = get_liquidity_from_amounts(&current, &lower, &upper, &one_eth, &plenty_of_usd);
    let (amount_a, amount_b) = get_amounts_from_liquidity(&liquidity, &current, &lower, &upper);

    assert!(amount_a <= one_eth);
    assert!(amount_a >= BigUint::from(999_999_999_999_000_000u64));
    assert!(amount_b > BigUint::default());

    let ui_amount_a = amount_to_ui_amount(&amount_a, decimals_a);
    let ui_amount_b = amount_to_ui_amount(&amount_b, decimals_b);
    assert!((ui_amount_a - 1.0).abs() < 1e-9);
    // The B side of a symmetric-ish range around 3000 is worth roughly as much as the A side.
    assert!(ui_amount_b > 1000.0 && ui_amount_b < 5000.0);

    let entry = EntryComposition::new(3000.0, ui_amount_a, ui_amount_b);
    let metrics = position_metrics(
        &PriceRange::new(2700.0, 3300.0),
        ui_amount_a,
        ui_amount_b,
        3000.0,
        &entry,
        DEFAULT_RECOVERY_BUFFER,
        decimals_a,
        decimals_b,
    );
    assert!(metrics.in_range);
    assert!(metrics.impermanent_loss.abs() < 1e-12);
}
