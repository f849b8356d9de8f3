//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{EntryComposition, Liquidity, PositionMetrics, PositionStatus, PriceRange, RangePolicy, TokenAmount, DEFAULT_DISPLAY_DECIMALS, DEFAULT_RECOVERY_BUFFER};

/// Everything needed to recompute a position from scratch.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSnapshot {
    pub liquidity: Liquidity,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    /// Current pool price in UI units (token B per token A).
    pub current_price: f64,
    pub decimals_a: u8,
    pub decimals_b: u8,
    pub entry: EntryComposition,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalyticsPolicy {
    pub range: RangePolicy,
    pub recovery_buffer: f64,
    /// Number of decimals used when formatting prices in warnings.
    pub display_decimals: usize,
}

impl Default for AnalyticsPolicy {
    fn default() -> Self {
        Self {
            range: RangePolicy::default(),
            recovery_buffer: DEFAULT_RECOVERY_BUFFER,
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionAnalytics {
    pub status: PositionStatus,
    /// The position range in UI prices.
    pub price_range: PriceRange,
    pub amount_a: TokenAmount,
    pub amount_b: TokenAmount,
    pub ui_amount_a: f64,
    pub ui_amount_b: f64,
    pub metrics: PositionMetrics,
    /// Set when the range passes validation only partially (e.g. it is far from the current price).
    pub range_warning: Option<String>,
}
