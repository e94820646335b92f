//! Shared error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `PdError` or wrap it as one variant, whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `pd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PdError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pd-*` crates.
pub type PdResult<T> = Result<T, PdError>;
