use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid scan limits: {0}")]
    InvalidLimits(String),

    #[error("{0}")]
    AssertionFailed(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
