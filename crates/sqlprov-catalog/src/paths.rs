//! Catalog path resolution.

use std::path::{Path, PathBuf};

/// Environment variable pointing at a catalog file.
pub const CATALOG_ENV_VAR: &str = "SQLPROV_CATALOG";

/// Resolve which catalog file to load, if any.
///
/// Resolution order:
/// 1. an explicit path (the `--catalog` flag)
/// 2. the `SQLPROV_CATALOG` environment variable, when non-empty
///
/// `None` means the built-in fixture.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
