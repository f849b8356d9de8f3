//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::{DEFAULT_MAX_LOWER_MULTIPLE, DEFAULT_MIN_UPPER_MULTIPLE};

/// A price range in token B per token A. The bounds are always stored in order.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceRange {
    pub lower: f64,
    pub upper: f64,
}

impl PriceRange {
    /// Creates a range from two bounds given in any order.
    pub fn new(price_1: f64, price_2: f64) -> Self {
        if price_1 <= price_2 {
            Self {
                lower: price_1,
                upper: price_2,
            }
        } else {
            Self {
                lower: price_2,
                upper: price_1,
            }
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: f64) -> bool {
        self.lower <= price && price <= self.upper
    }
}

/// Usability thresholds applied by `validate_range`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangePolicy {
    /// The lower bound may not exceed `current_price * max_lower_multiple`.
    pub max_lower_multiple: f64,
    /// The upper bound may not be below `current_price * min_upper_multiple`.
    pub min_upper_multiple: f64,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            max_lower_multiple: DEFAULT_MAX_LOWER_MULTIPLE,
            min_upper_multiple: DEFAULT_MIN_UPPER_MULTIPLE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangePreset {
    Narrow,
    Medium,
    Wide,
    FullRange,
}

impl RangePreset {
    pub const ALL: [RangePreset; 4] = [RangePreset::Narrow, RangePreset::Medium, RangePreset::Wide, RangePreset::FullRange];

    /// Half-width of the preset relative to the current price, `None` for the full range.
    pub fn width(&self) -> Option<f64> {
        match self {
            RangePreset::Narrow => Some(0.10),
            RangePreset::Medium => Some(0.20),
            RangePreset::Wide => Some(0.50),
            RangePreset::FullRange => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangePreset::Narrow => "±10%",
            RangePreset::Medium => "±20%",
            RangePreset::Wide => "±50%",
            RangePreset::FullRange => "Full range",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetRange {
    pub preset: RangePreset,
    pub range: PriceRange,
}
