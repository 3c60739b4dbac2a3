use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
    #[error("unknown SQL version: {0}")]
    UnknownSqlVersion(String),
    #[error("unknown SQL edition: {0}")]
    UnknownEdition(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
