#![deny(unsafe_code)]

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use sqlprov_model::Environment;
use sqlprov_rules::StaticCatalog;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::file::CatalogFile;
use crate::paths::resolve_catalog_path;

/// Where the active catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Fixture,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Fixture => write!(f, "built-in fixture"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads the catalog named by `explicit` or `SQLPROV_CATALOG`, falling back
/// to the built-in fixture.
pub fn load_catalog(explicit: Option<&Path>) -> Result<(StaticCatalog, CatalogSource)> {
    match resolve_catalog_path(explicit) {
        Some(path) => {
            let catalog = load_catalog_file(&path)?;
            Ok((catalog, CatalogSource::File(path)))
        }
        None => {
            debug!("no catalog file configured, using fixture");
            Ok((StaticCatalog::fixture(), CatalogSource::Fixture))
        }
    }
}

/// Reads and validates a `.toml` or `.json` catalog file.
pub fn load_catalog_file(path: &Path) -> Result<StaticCatalog> {
    let format = CatalogFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let file = format.parse(path, &contents)?;
    let catalog = build_catalog(path, file)?;
    info!(
        path = %path.display(),
        amm_codes = catalog.len(),
        "server catalog loaded"
    );
    Ok(catalog)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn parse(self, path: &Path, contents: &str) -> Result<CatalogFile> {
        match self {
            CatalogFormat::Toml => toml::from_str(contents).map_err(|e| CatalogError::Toml {
                path: path.to_path_buf(),
                source: e,
            }),
            CatalogFormat::Json => serde_json::from_str(contents).map_err(|e| CatalogError::Json {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

/// Validates a parsed file and converts it into a lookup catalog.
pub fn build_catalog(path: &Path, file: CatalogFile) -> Result<StaticCatalog> {
    let mut catalog = StaticCatalog::new();
    for (amm_code, by_env) in file.servers {
        if amm_code.trim().is_empty() {
            return Err(CatalogError::BlankAmmCode {
                path: path.to_path_buf(),
            });
        }
        // Keys differing only in case name the same environment.
        let mut environments = HashSet::new();
        for (raw_environment, servers) in by_env {
            let environment: Environment =
                raw_environment
                    .parse()
                    .map_err(|_| CatalogError::InvalidEnvironment {
                        path: path.to_path_buf(),
                        amm_code: amm_code.clone(),
                        environment: raw_environment.clone(),
                    })?;
            if !environments.insert(environment.clone()) {
                return Err(CatalogError::DuplicateEnvironment {
                    path: path.to_path_buf(),
                    amm_code: amm_code.clone(),
                    environment: environment.to_string(),
                });
            }
            validate_servers(path, &amm_code, &raw_environment, &servers)?;
            catalog.insert(&amm_code, &environment, servers);
        }
    }
    Ok(catalog)
}

fn validate_servers(path: &Path, amm_code: &str, environment: &str, servers: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for server in servers {
        if server.trim().is_empty() {
            return Err(CatalogError::BlankServerName {
                path: path.to_path_buf(),
                amm_code: amm_code.to_string(),
                environment: environment.to_string(),
            });
        }
        if !seen.insert(server.as_str()) {
            return Err(CatalogError::DuplicateServer {
                path: path.to_path_buf(),
                amm_code: amm_code.to_string(),
                environment: environment.to_string(),
                server: server.clone(),
            });
        }
    }
    Ok(())
}
