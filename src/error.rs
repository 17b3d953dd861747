// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Crate-level error type.

use crate::services::RegistryError;
use crate::store::StoreError;

/// Errors surfaced to the hosting application.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
