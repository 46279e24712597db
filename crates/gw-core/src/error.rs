//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CoreError` via `From` impls, or keep them separate and wrap `CoreError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::Position;

/// The top-level error type for `gw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("position {0} out of range")]
    OutOfRange(Position),

    #[error("random choice over an empty collection")]
    EmptyChoice,
}

/// Shorthand result type for all `gw-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
