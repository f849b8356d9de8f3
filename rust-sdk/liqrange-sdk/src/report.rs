//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{SdkError, StoredPosition};
use liqrange_core::{format_price, format_range, IncreaseLiquidityQuote, PositionAnalytics, PositionMetrics, PositionStatus, PriceRange, TickRange};
use serde::{Deserialize, Serialize};

/// Presentation-ready view of a position.
/// Raw amounts are decimal strings so that they survive JSON consumers without precision loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionReport {
    pub position_id: String,
    pub pool_id: String,
    pub status: PositionStatus,
    pub current_price: f64,
    pub price_range: PriceRange,
    pub formatted_range: String,
    pub amount_a: String,
    pub amount_b: String,
    pub ui_amount_a: f64,
    pub ui_amount_b: f64,
    pub metrics: PositionMetrics,
    pub formatted_recovery_price: String,
    pub range_warning: Option<String>,
}

impl PositionReport {
    pub fn new(position: &StoredPosition, current_price: f64, analytics: PositionAnalytics, display_decimals: usize) -> Self {
        Self {
            position_id: position.position_id.clone(),
            pool_id: position.pool_id.clone(),
            status: analytics.status,
            current_price,
            formatted_range: format_range(&analytics.price_range, display_decimals),
            price_range: analytics.price_range,
            amount_a: analytics.amount_a.to_string(),
            amount_b: analytics.amount_b.to_string(),
            ui_amount_a: analytics.ui_amount_a,
            ui_amount_b: analytics.ui_amount_b,
            formatted_recovery_price: format_price(analytics.metrics.recovery_price, display_decimals),
            metrics: analytics.metrics,
            range_warning: analytics.range_warning,
        }
    }

    pub fn to_json(&self) -> Result<String, SdkError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A deposit quote for a price range, together with the ticks it was rounded to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepositQuote {
    pub tick_range: TickRange,
    pub quote: IncreaseLiquidityQuote,
    pub range_warning: Option<String>,
}
