//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
mod amount;
mod analytics;
mod liquidity;
mod metrics;
mod position;
mod range;
mod tick;

pub use amount::*;
pub use analytics::*;
pub use liquidity::*;
pub use metrics::*;
pub use position::*;
pub use range::*;
pub use tick::*;
