#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlprov_rules::StaticCatalog;

/// On-disk catalog layout, shared by the TOML and JSON formats.
///
/// ```toml
/// [servers.AMM01]
/// DEV = ["DEV-SQL-01", "DEV-SQL-02"]
/// PROD = ["PROD-SQL-01"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// AMM code -> environment code -> server names, in offer order.
    #[serde(default)]
    pub servers: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl From<&StaticCatalog> for CatalogFile {
    fn from(catalog: &StaticCatalog) -> Self {
        let mut servers: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();
        for (amm_code, environment, names) in catalog.entries() {
            servers
                .entry(amm_code.to_string())
                .or_default()
                .insert(environment.to_string(), names.to_vec());
        }
        Self { servers }
    }
}
