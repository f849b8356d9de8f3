//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::SdkError;
use async_trait::async_trait;
use liqrange_core::{EntryComposition, Liquidity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Market state of a pool at the time it was fetched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// The current price of token A in token B, in whole tokens.
    pub current_price: f64,
    pub decimals_a: u8,
    pub decimals_b: u8,
    pub tick_spacing: u16,
}

/// A position as persisted by the application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredPosition {
    pub position_id: String,
    pub pool_id: String,
    pub liquidity: Liquidity,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub entry: EntryComposition,
}

/// Source of the current pool state.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_pool_snapshot(&self, pool_id: &str) -> Result<PoolSnapshot, SdkError>;
}

/// Source of the positions held by an owner.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn fetch_positions(&self, owner: &str) -> Result<Vec<StoredPosition>, SdkError>;
}

/// In-memory market data, e.g. for tests or prices pushed by another component.
#[derive(Clone, Debug, Default)]
pub struct StaticMarketData {
    pools: HashMap<String, PoolSnapshot>,
}

impl StaticMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pool(mut self, pool_id: impl Into<String>, snapshot: PoolSnapshot) -> Self {
        self.pools.insert(pool_id.into(), snapshot);
        self
    }

    /// Updates the price of a known pool.
    pub fn set_price(&mut self, pool_id: &str, current_price: f64) -> Result<(), SdkError> {
        let snapshot = self.pools.get_mut(pool_id).ok_or_else(|| SdkError::PoolNotFound(pool_id.to_string()))?;
        snapshot.current_price = current_price;
        Ok(())
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketData {
    async fn fetch_pool_snapshot(&self, pool_id: &str) -> Result<PoolSnapshot, SdkError> {
        self.pools.get(pool_id).copied().ok_or_else(|| SdkError::PoolNotFound(pool_id.to_string()))
    }
}

/// In-memory positions keyed by owner.
#[derive(Clone, Debug, Default)]
pub struct StaticPositionSource {
    positions: HashMap<String, Vec<StoredPosition>>,
}

impl StaticPositionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, owner: impl Into<String>, position: StoredPosition) -> Self {
        self.positions.entry(owner.into()).or_default().push(position);
        self
    }

    /// Loads positions from a JSON object mapping owners to position lists.
    pub fn from_json_str(source: &str) -> Result<Self, SdkError> {
        Ok(Self {
            positions: serde_json::from_str(source)?,
        })
    }
}

#[async_trait]
impl PositionSource for StaticPositionSource {
    async fn fetch_positions(&self, owner: &str) -> Result<Vec<StoredPosition>, SdkError> {
        Ok(self.positions.get(owner).cloned().unwrap_or_default())
    }
}
