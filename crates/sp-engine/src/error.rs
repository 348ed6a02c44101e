//! Engine error type.

use thiserror::Error;

use sp_loader::LoadError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("load failed: {0}")]
    Load(#[from] LoadError),

    #[error("path finder bound to graph generation {bound}, current is {current}")]
    StaleFinder { bound: u64, current: u64 },
}

pub type EngineResult<T> = Result<T, EngineError>;
