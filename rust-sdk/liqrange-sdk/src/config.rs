//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::SdkError;
use liqrange_core::{
    AnalyticsPolicy, RangePolicy, DEFAULT_DISPLAY_DECIMALS, DEFAULT_MAX_LOWER_MULTIPLE, DEFAULT_MIN_UPPER_MULTIPLE, DEFAULT_RECOVERY_BUFFER,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The default slippage tolerance, expressed in basis points. Value of 100 is equivalent to 1%.
pub const DEFAULT_SLIPPAGE_TOLERANCE_BPS: u16 = 100;

/// Settings of a `PositionAnalyzer`. Every field falls back to its default when missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Margin applied on top of the break-even price when computing the recovery price.
    pub recovery_buffer: f64,
    /// A range whose lower price exceeds `current_price * max_lower_multiple` is flagged.
    pub max_lower_multiple: f64,
    /// A range whose upper price is below `current_price * min_upper_multiple` is flagged.
    pub min_upper_multiple: f64,
    pub display_decimals: usize,
    pub slippage_tolerance_bps: u16,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            recovery_buffer: DEFAULT_RECOVERY_BUFFER,
            max_lower_multiple: DEFAULT_MAX_LOWER_MULTIPLE,
            min_upper_multiple: DEFAULT_MIN_UPPER_MULTIPLE,
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            slippage_tolerance_bps: DEFAULT_SLIPPAGE_TOLERANCE_BPS,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, SdkError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, SdkError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads the configuration from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("toml") => Self::from_toml_str(&source),
            Some("json") => Self::from_json_str(&source),
            _ => Err(SdkError::UnsupportedConfigFormat(path.display().to_string())),
        }
    }

    pub fn range_policy(&self) -> RangePolicy {
        RangePolicy {
            max_lower_multiple: self.max_lower_multiple,
            min_upper_multiple: self.min_upper_multiple,
        }
    }

    pub fn analytics_policy(&self) -> AnalyticsPolicy {
        AnalyticsPolicy {
            range: self.range_policy(),
            recovery_buffer: self.recovery_buffer,
            display_decimals: self.display_decimals,
        }
    }
}
