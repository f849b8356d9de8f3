//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
/// The composition of the original deposit, in UI units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryComposition {
    /// Price (token B per token A) at which the position was opened.
    pub price: f64,
    pub amount_a: f64,
    pub amount_b: f64,
}

impl EntryComposition {
    pub fn new(price: f64, amount_a: f64, amount_b: f64) -> Self {
        Self { price, amount_a, amount_b }
    }

    /// A deposit of `value` (in token B) split evenly between both tokens at `price`.
    pub fn balanced(price: f64, value: f64) -> Self {
        Self {
            price,
            amount_a: value / 2.0 / price,
            amount_b: value / 2.0,
        }
    }

    /// Value of the deposit at the entry price, denominated in token B.
    pub fn value(&self) -> f64 {
        self.amount_a * self.price + self.amount_b
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionMetrics {
    pub in_range: bool,
    /// Value of the original deposit at the entry price.
    pub value_at_entry: f64,
    /// Value of the owned amounts at the current price.
    pub current_value: f64,
    /// Value of the original deposit at the current price had it been held.
    pub value_if_held: f64,
    /// `current_value / value_if_held - 1`. Negative when the position underperforms holding.
    pub impermanent_loss: f64,
    /// `+∞` when no price recovers the loss. Serialized as `null` in that case.
    #[cfg_attr(feature = "serde", serde(with = "unbounded_price"))]
    pub recovery_price: f64,
    pub recovery_tick: i32,
}

#[cfg(feature = "serde")]
mod unbounded_price {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if price.is_finite() {
            serializer.serialize_some(price)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
