//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
mod liquidity;
mod position;
mod tick;
mod token;

#[cfg(feature = "floats")]
mod analytics;
#[cfg(feature = "floats")]
mod metrics;
#[cfg(feature = "floats")]
mod price;
#[cfg(feature = "floats")]
mod range;

pub use liquidity::*;
pub use position::*;
pub use tick::*;
pub use token::*;

#[cfg(feature = "floats")]
pub use analytics::*;
#[cfg(feature = "floats")]
pub use metrics::*;
#[cfg(feature = "floats")]
pub use price::*;
#[cfg(feature = "floats")]
pub use range::*;
