use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed record at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
