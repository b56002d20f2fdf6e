use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("packet queue is empty")]
    EmptyQueue,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StreamError>;
