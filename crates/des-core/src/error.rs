//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `DesError` as one
//! variant via `#[from]` when they need to surface configuration failures.

use thiserror::Error;

/// The top-level error type for `des-core`.
#[derive(Debug, Error)]
pub enum DesError {
    #[error("invalid {distribution} parameters: {reason}")]
    InvalidDistribution {
        distribution: &'static str,
        reason:       String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `des-*` crates.
pub type DesResult<T> = Result<T, DesError>;
