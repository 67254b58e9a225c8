use thiserror::Error;

#[derive(Debug, Error)]
pub enum CareerMagicError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Auth(String),
}
