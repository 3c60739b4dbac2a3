#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported catalog format for {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("blank AMM code in catalog {path}")]
    BlankAmmCode { path: PathBuf },

    #[error("unknown environment {environment} for {amm_code} in catalog {path}")]
    InvalidEnvironment {
        path: PathBuf,
        amm_code: String,
        environment: String,
    },

    #[error("environment {environment} listed twice for {amm_code} in catalog {path}")]
    DuplicateEnvironment {
        path: PathBuf,
        amm_code: String,
        environment: String,
    },

    #[error("blank server name for {amm_code}/{environment} in catalog {path}")]
    BlankServerName {
        path: PathBuf,
        amm_code: String,
        environment: String,
    },

    #[error("duplicate server {server} for {amm_code}/{environment} in catalog {path}")]
    DuplicateServer {
        path: PathBuf,
        amm_code: String,
        environment: String,
        server: String,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
