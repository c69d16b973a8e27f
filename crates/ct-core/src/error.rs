//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers the
//! failures that can happen in this crate (configuration and id parsing).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid courier id: {0}")]
    InvalidId(#[from] uuid::Error),
}

/// Shorthand result type for `ct-core`.
pub type CoreResult<T> = Result<T, CoreError>;
