//! Shared base error type.
//!
//! Sub-crates define their own error enums and either convert into `FrError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The base error type for `fr-core` and a common denominator for sub-crates.
#[derive(Debug, Error)]
pub enum FrError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `fr-*` crates.
pub type FrResult<T> = Result<T, FrError>;
