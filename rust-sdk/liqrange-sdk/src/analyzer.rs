//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{AnalyticsConfig, DepositQuote, MarketDataProvider, PositionReport, PositionSource, SdkError, StoredPosition};
use liqrange_core::{
    analyze_position, increase_liquidity_quote, is_range_warning, preset_ranges, price_range_to_tick_range, range_warning_message,
    ui_amount_to_amount, ui_price_to_raw_price, ui_price_to_sqrt_price_x96, validate_range, PositionSnapshot, PositionStatus, PresetRange,
    PriceRange,
};
use log::{debug, error, warn};

/// Fetches market data and positions through the injected providers and runs the core analytics on them.
/// Every call recomputes from a fresh snapshot, nothing is cached between calls.
pub struct PositionAnalyzer<M: MarketDataProvider, P: PositionSource> {
    market_data: M,
    positions: P,
    config: AnalyticsConfig,
}

impl<M: MarketDataProvider, P: PositionSource> PositionAnalyzer<M, P> {
    pub fn new(market_data: M, positions: P, config: AnalyticsConfig) -> Self {
        Self {
            market_data,
            positions,
            config,
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn market_data(&self) -> &M {
        &self.market_data
    }

    pub fn market_data_mut(&mut self) -> &mut M {
        &mut self.market_data
    }

    /// Analyzes a single position at the current pool price.
    ///
    /// # Arguments
    ///
    /// * `position` - The stored position to analyze.
    ///
    /// # Returns
    ///
    /// A `PositionReport` with the status, amounts, metrics and an optional range warning.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The pool of the position cannot be fetched.
    /// - The position has an invalid tick range or the pool price is not usable.
    pub async fn analyze_position(&self, position: &StoredPosition) -> Result<PositionReport, SdkError> {
        let pool = self.market_data.fetch_pool_snapshot(&position.pool_id).await.inspect_err(|err| {
            error!(target: "log", "Failed to fetch pool {} for position {}: {}", position.pool_id, position.position_id, err);
        })?;

        let snapshot = PositionSnapshot {
            liquidity: position.liquidity.clone(),
            tick_lower_index: position.tick_lower_index,
            tick_upper_index: position.tick_upper_index,
            current_price: pool.current_price,
            decimals_a: pool.decimals_a,
            decimals_b: pool.decimals_b,
            entry: position.entry,
        };

        let analytics = analyze_position(&snapshot, &self.config.analytics_policy())?;
        debug!(
            target: "log",
            "Position {} recomputed at price {}: status {:?}, impermanent loss {}",
            position.position_id, pool.current_price, analytics.status, analytics.metrics.impermanent_loss
        );

        if analytics.status != PositionStatus::PriceInRange {
            warn!(target: "log", "Position {} is out of range ({:?})", position.position_id, analytics.status);
        }
        if let Some(range_warning) = &analytics.range_warning {
            warn!(target: "log", "Position {}: {}", position.position_id, range_warning);
        }

        Ok(PositionReport::new(position, pool.current_price, analytics, self.config.display_decimals))
    }

    /// Analyzes every position of an owner. Fails on the first position that cannot be analyzed.
    pub async fn analyze_owner_positions(&self, owner: &str) -> Result<Vec<PositionReport>, SdkError> {
        let positions = self.positions.fetch_positions(owner).await.inspect_err(|err| {
            error!(target: "log", "Failed to fetch positions of {}: {}", owner, err);
        })?;
        debug!(target: "log", "Analyzing {} positions of {}", positions.len(), owner);

        let mut reports = Vec::with_capacity(positions.len());
        for position in &positions {
            reports.push(self.analyze_position(position).await?);
        }
        Ok(reports)
    }

    /// Quotes a deposit of whole token amounts into a price range of a pool.
    ///
    /// # Arguments
    ///
    /// * `pool_id` - The pool to deposit into.
    /// * `range` - The price range of the new position, in whole tokens.
    /// * `ui_amount_a` - The available amount of token A, in whole tokens.
    /// * `ui_amount_b` - The available amount of token B, in whole tokens.
    ///
    /// # Returns
    ///
    /// A `DepositQuote` with the tick range the prices were rounded to and the liquidity quote.
    /// A range far from the current price is quoted anyway and reported in `range_warning`.
    pub async fn quote_deposit(&self, pool_id: &str, range: PriceRange, ui_amount_a: f64, ui_amount_b: f64) -> Result<DepositQuote, SdkError> {
        let pool = self.market_data.fetch_pool_snapshot(pool_id).await.inspect_err(|err| {
            error!(target: "log", "Failed to fetch pool {}: {}", pool_id, err);
        })?;

        let policy = self.config.range_policy();
        let raw_price = |price: f64| ui_price_to_raw_price(price, pool.decimals_a, pool.decimals_b);
        let range_warning = match validate_range(raw_price(range.lower), raw_price(range.upper), raw_price(pool.current_price), &policy) {
            Ok(()) => None,
            Err(err) if is_range_warning(err) => {
                let message = range_warning_message(err, &range, pool.current_price, &policy, self.config.display_decimals);
                if let Some(message) = &message {
                    warn!(target: "log", "Deposit into {}: {}", pool_id, message);
                }
                message
            }
            Err(err) => return Err(err.into()),
        };

        let tick_range = price_range_to_tick_range(&range, pool.decimals_a, pool.decimals_b, pool.tick_spacing)?;
        let current_sqrt_price = ui_price_to_sqrt_price_x96(pool.current_price, pool.decimals_a, pool.decimals_b);

        let quote = increase_liquidity_quote(
            &ui_amount_to_amount(ui_amount_a, pool.decimals_a)?,
            &ui_amount_to_amount(ui_amount_b, pool.decimals_b)?,
            self.config.slippage_tolerance_bps,
            &current_sqrt_price,
            tick_range.tick_lower_index,
            tick_range.tick_upper_index,
        )?;
        debug!(
            target: "log",
            "Deposit quote for {} in ticks [{}, {}]: liquidity {}",
            pool_id, tick_range.tick_lower_index, tick_range.tick_upper_index, quote.liquidity_delta
        );

        Ok(DepositQuote {
            tick_range,
            quote,
            range_warning,
        })
    }

    /// Preset ranges around the current price of a pool.
    pub async fn preset_ranges(&self, pool_id: &str) -> Result<Vec<PresetRange>, SdkError> {
        let pool = self.market_data.fetch_pool_snapshot(pool_id).await.inspect_err(|err| {
            error!(target: "log", "Failed to fetch pool {}: {}", pool_id, err);
        })?;
        Ok(preset_ranges(pool.current_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{eth_usdc_pool, eth_usdc_position, test_analyzer, ETH_USDC_POOL, OWNER};
    use crate::{StaticMarketData, StaticPositionSource};
    use liqrange_core::{RangePreset, INVALID_RANGE, INVALID_RANGE_ORDER, PRICE_OUT_OF_BOUNDS, RANGE_TOO_FAR_ABOVE};
    use num_bigint::BigUint;
    use rstest::rstest;

    #[tokio::test]
    async fn test_analyze_position_in_range() {
        let analyzer = test_analyzer(3000.0);
        let report = analyzer.analyze_position(&eth_usdc_position()).await.unwrap();

        assert_eq!(report.position_id, "eth-usdc-1");
        assert_eq!(report.status, PositionStatus::PriceInRange);
        assert!(report.metrics.in_range);
        assert!(report.ui_amount_a > 0.0 && report.ui_amount_a <= 1.0);
        assert!(report.ui_amount_b > 0.0);
        assert!(report.range_warning.is_none());
        assert!(report.formatted_range.contains(" - "));
    }

    #[rstest]
    #[case(2500.0, PositionStatus::PriceBelowRange)]
    #[case(3000.0, PositionStatus::PriceInRange)]
    #[case(3500.0, PositionStatus::PriceAboveRange)]
    #[tokio::test]
    async fn test_analyze_position_status(#[case] current_price: f64, #[case] expected: PositionStatus) {
        let analyzer = test_analyzer(current_price);
        let report = analyzer.analyze_position(&eth_usdc_position()).await.unwrap();
        assert_eq!(report.status, expected);
        match expected {
            PositionStatus::PriceBelowRange => assert_eq!(report.amount_b, "0"),
            PositionStatus::PriceAboveRange => assert_eq!(report.amount_a, "0"),
            _ => assert!(report.amount_a != "0" && report.amount_b != "0"),
        }
    }

    #[tokio::test]
    async fn test_analyze_position_after_price_update() {
        let mut analyzer = test_analyzer(3000.0);
        let at_entry = analyzer.analyze_position(&eth_usdc_position()).await.unwrap();
        assert!(at_entry.metrics.impermanent_loss.abs() < 1e-6);

        analyzer.market_data_mut().set_price(ETH_USDC_POOL, 2800.0).unwrap();
        let after_drop = analyzer.analyze_position(&eth_usdc_position()).await.unwrap();
        assert!(after_drop.metrics.impermanent_loss < 0.0);
        assert!(after_drop.metrics.recovery_price > 2800.0);
    }

    #[tokio::test]
    async fn test_analyze_position_errors() {
        let analyzer = test_analyzer(3000.0);

        let mut position = eth_usdc_position();
        position.tick_upper_index = position.tick_lower_index;
        assert!(matches!(analyzer.analyze_position(&position).await, Err(SdkError::CoreError(INVALID_RANGE))));

        let mut position = eth_usdc_position();
        position.pool_id = "unknown".to_string();
        assert!(matches!(analyzer.analyze_position(&position).await, Err(SdkError::PoolNotFound(_))));
    }

    #[tokio::test]
    async fn test_analyze_owner_positions() {
        let mut far_position = eth_usdc_position();
        far_position.position_id = "eth-usdc-2".to_string();
        far_position.liquidity = BigUint::from(1_000_000_000u64);

        let positions = StaticPositionSource::new()
            .with_position(OWNER, eth_usdc_position())
            .with_position(OWNER, far_position);
        let analyzer = PositionAnalyzer::new(
            StaticMarketData::new().with_pool(ETH_USDC_POOL, eth_usdc_pool()),
            positions,
            AnalyticsConfig::default(),
        );

        let reports = analyzer.analyze_owner_positions(OWNER).await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].position_id, "eth-usdc-2");
        assert!(analyzer.analyze_owner_positions("nobody").await.unwrap().is_empty());

        let json = reports[0].to_json().unwrap();
        assert!(json.contains("\"position_id\":\"eth-usdc-1\""));
        assert!(json.contains("\"status\":\"PriceInRange\""));
    }

    #[tokio::test]
    async fn test_quote_deposit() {
        let analyzer = test_analyzer(3000.0);
        let deposit = analyzer.quote_deposit(ETH_USDC_POOL, PriceRange::new(2700.0, 3300.0), 1.0, 1_000_000.0).await.unwrap();

        assert_eq!(deposit.tick_range.tick_lower_index % 10, 0);
        assert_eq!(deposit.tick_range.tick_upper_index % 10, 0);
        assert!(deposit.quote.liquidity_delta > BigUint::default());
        assert!(deposit.quote.token_est_a <= BigUint::from(10u8).pow(18));
        assert!(deposit.quote.token_max_a >= deposit.quote.token_est_a);
        assert!(deposit.range_warning.is_none());
    }

    #[tokio::test]
    async fn test_quote_deposit_range_checks() {
        let analyzer = test_analyzer(3000.0);

        let far = analyzer.quote_deposit(ETH_USDC_POOL, PriceRange::new(40_000.0, 50_000.0), 1.0, 0.0).await.unwrap();
        assert!(far.range_warning.unwrap().starts_with(RANGE_TOO_FAR_ABOVE));

        let empty = PriceRange { lower: 3000.0, upper: 3000.0 };
        assert!(matches!(
            analyzer.quote_deposit(ETH_USDC_POOL, empty, 1.0, 1.0).await,
            Err(SdkError::CoreError(INVALID_RANGE_ORDER))
        ));

        let too_small = PriceRange::new(1e-60, 2e-60);
        assert!(matches!(
            analyzer.quote_deposit(ETH_USDC_POOL, too_small, 1.0, 1.0).await,
            Err(SdkError::CoreError(PRICE_OUT_OF_BOUNDS))
        ));
    }

    #[tokio::test]
    async fn test_preset_ranges() {
        let analyzer = test_analyzer(3000.0);
        let presets = analyzer.preset_ranges(ETH_USDC_POOL).await.unwrap();
        assert_eq!(presets.len(), 4);
        assert_eq!(presets[0].preset, RangePreset::Narrow);
        assert!(presets[0].range.contains(3000.0));
        assert_eq!(presets[3].preset, RangePreset::FullRange);
    }
}
