//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{AnalyticsConfig, PoolSnapshot, PositionAnalyzer, StaticMarketData, StaticPositionSource, StoredPosition};
use liqrange_core::{
    amount_to_ui_amount, get_amounts_from_liquidity, get_liquidity_from_amounts, tick_index_to_sqrt_price_x96, ui_price_to_sqrt_price_x96,
    ui_price_to_tick_index, EntryComposition,
};
use num_bigint::BigUint;

pub const ETH_USDC_POOL: &str = "eth-usdc";
pub const OWNER: &str = "owner-1";

pub fn eth_usdc_pool() -> PoolSnapshot {
    PoolSnapshot {
        current_price: 3000.0,
        decimals_a: 18,
        decimals_b: 6,
        tick_spacing: 10,
    }
}

/// 1 ETH deposited at 3000 into the [2700, 3300] range.
pub fn eth_usdc_position() -> StoredPosition {
    let pool = eth_usdc_pool();
    let tick_lower_index = ui_price_to_tick_index(2700.0, pool.decimals_a, pool.decimals_b);
    let tick_upper_index = ui_price_to_tick_index(3300.0, pool.decimals_a, pool.decimals_b);

    let current_sqrt_price = ui_price_to_sqrt_price_x96(pool.current_price, pool.decimals_a, pool.decimals_b);
    let sqrt_price_lower = tick_index_to_sqrt_price_x96(tick_lower_index);
    let sqrt_price_upper = tick_index_to_sqrt_price_x96(tick_upper_index);

    let liquidity = get_liquidity_from_amounts(
        &current_sqrt_price,
        &sqrt_price_lower,
        &sqrt_price_upper,
        &BigUint::from(10u8).pow(18),
        &BigUint::from(10u8).pow(15),
    );
    let (amount_a, amount_b) = get_amounts_from_liquidity(&liquidity, &current_sqrt_price, &sqrt_price_lower, &sqrt_price_upper);
    let entry = EntryComposition::new(
        pool.current_price,
        amount_to_ui_amount(&amount_a, pool.decimals_a),
        amount_to_ui_amount(&amount_b, pool.decimals_b),
    );

    StoredPosition {
        position_id: "eth-usdc-1".to_string(),
        pool_id: ETH_USDC_POOL.to_string(),
        liquidity,
        tick_lower_index,
        tick_upper_index,
        entry,
    }
}

pub fn test_analyzer(current_price: f64) -> PositionAnalyzer<StaticMarketData, StaticPositionSource> {
    let pool = PoolSnapshot {
        current_price,
        ..eth_usdc_pool()
    };
    PositionAnalyzer::new(
        StaticMarketData::new().with_pool(ETH_USDC_POOL, pool),
        StaticPositionSource::new().with_position(OWNER, eth_usdc_position()),
        AnalyticsConfig::default(),
    )
}
