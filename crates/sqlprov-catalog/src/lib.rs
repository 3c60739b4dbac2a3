#![deny(unsafe_code)]

pub mod error;
pub mod file;
pub mod loader;
pub mod paths;

pub use crate::error::CatalogError;
pub use crate::file::CatalogFile;
pub use crate::loader::{CatalogSource, build_catalog, load_catalog, load_catalog_file};
pub use crate::paths::{CATALOG_ENV_VAR, resolve_catalog_path};
