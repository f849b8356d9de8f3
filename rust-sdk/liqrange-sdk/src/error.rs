//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use liqrange_core::CoreError;

#[derive(thiserror::Error, Debug)]
pub enum SdkError {
    #[error("{0}")]
    CoreError(CoreError),
    #[error("Pool not found: {0}")]
    PoolNotFound(String),
    #[error("ProviderError: {0}")]
    ProviderError(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedConfigFormat(String),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    TomlError(#[from] toml::de::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl From<CoreError> for SdkError {
    fn from(err: CoreError) -> Self {
        SdkError::CoreError(err)
    }
}
