//! Core error type.

use thiserror::Error;

/// Errors produced by `sp-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown strategy {0:?}: expected \"distance\" or \"time\"")]
    UnknownStrategy(String),
}

/// Shorthand result type for `sp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
