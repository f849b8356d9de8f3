//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod error;
mod liquidity;
mod range;
mod tick;

pub use error::*;
pub use liquidity::*;
pub use range::*;
pub use tick::*;
