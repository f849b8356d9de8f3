//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod analyzer;
mod config;
mod error;
mod provider;
mod report;

#[cfg(test)]
mod tests;

pub use analyzer::*;
pub use config::*;
pub use error::*;
pub use provider::*;
pub use report::*;
