//! Server catalog collaborator.
//!
//! The rules never own reference data. A host resolves a catalog snapshot
//! (static fixture, file, or an inventory service queried ahead of time) and
//! hands it in through [`ServerCatalog`].

use std::collections::BTreeMap;
use std::sync::Arc;

use sqlprov_model::Environment;

/// Read-only lookup of host servers by AMM code and environment.
pub trait ServerCatalog: Send + Sync {
    /// Servers registered for the pair, in catalog order. Empty when unknown.
    fn lookup_servers(&self, amm_code: &str, environment: &Environment) -> Vec<String>;
}

impl<T: ServerCatalog + ?Sized> ServerCatalog for &T {
    fn lookup_servers(&self, amm_code: &str, environment: &Environment) -> Vec<String> {
        (**self).lookup_servers(amm_code, environment)
    }
}

impl<T: ServerCatalog + ?Sized> ServerCatalog for Box<T> {
    fn lookup_servers(&self, amm_code: &str, environment: &Environment) -> Vec<String> {
        (**self).lookup_servers(amm_code, environment)
    }
}

impl<T: ServerCatalog + ?Sized> ServerCatalog for Arc<T> {
    fn lookup_servers(&self, amm_code: &str, environment: &Environment) -> Vec<String> {
        (**self).lookup_servers(amm_code, environment)
    }
}

/// In-memory catalog keyed by AMM code, then environment code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    servers: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference data used when no catalog file is configured.
    pub fn fixture() -> Self {
        Self::new()
            .with_servers("AMM01", Environment::Dev, ["DEV-SQL-01", "DEV-SQL-02", "DEV-SQL-03"])
            .with_servers("AMM01", Environment::It, ["IT-SQL-01", "IT-SQL-02"])
            .with_servers("AMM01", Environment::Qa, ["QA-SQL-01", "QA-SQL-02"])
            .with_servers("AMM01", Environment::Prod, ["PROD-SQL-01", "PROD-SQL-02", "PROD-SQL-03"])
            .with_servers("AMM02", Environment::Dev, ["DEV-APP-01", "DEV-APP-02"])
            .with_servers("AMM02", Environment::It, ["IT-APP-01"])
            .with_servers("AMM02", Environment::Qa, ["QA-APP-01", "QA-APP-02"])
            .with_servers("AMM02", Environment::Prod, ["PROD-APP-01", "PROD-APP-02"])
            .with_servers("AMM03", Environment::Dev, ["DEV-WEB-01"])
            .with_servers("AMM03", Environment::It, ["IT-WEB-01"])
            .with_servers("AMM03", Environment::Qa, ["QA-WEB-01"])
            .with_servers("AMM03", Environment::Prod, ["PROD-WEB-01", "PROD-WEB-02"])
    }

    /// Builder form of [`StaticCatalog::insert`].
    pub fn with_servers<I, S>(mut self, amm_code: &str, environment: Environment, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(amm_code, &environment, servers);
        self
    }

    /// Replaces the server list for one AMM code and environment.
    pub fn insert<I, S>(&mut self, amm_code: &str, environment: &Environment, servers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.servers
            .entry(amm_code.to_string())
            .or_default()
            .insert(
                environment.as_str().to_string(),
                servers.into_iter().map(Into::into).collect(),
            );
    }

    /// Every `(amm_code, environment, servers)` entry, sorted by AMM code then environment code.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &[String])> {
        self.servers.iter().flat_map(|(amm_code, by_env)| {
            by_env
                .iter()
                .map(move |(env, servers)| (amm_code.as_str(), env.as_str(), servers.as_slice()))
        })
    }

    /// Number of AMM codes.
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl ServerCatalog for StaticCatalog {
    fn lookup_servers(&self, amm_code: &str, environment: &Environment) -> Vec<String> {
        self.servers
            .get(amm_code)
            .and_then(|by_env| by_env.get(environment.as_str()))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_lookup() {
        let catalog = StaticCatalog::fixture();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.lookup_servers("AMM02", &Environment::Prod),
            vec!["PROD-APP-01", "PROD-APP-02"]
        );
    }

    #[test]
    fn lookup_is_case_sensitive_on_amm_code() {
        let catalog = StaticCatalog::fixture();
        assert!(catalog.lookup_servers("amm01", &Environment::Dev).is_empty());
    }

    #[test]
    fn unknown_environment_misses() {
        let catalog = StaticCatalog::fixture();
        assert!(
            catalog
                .lookup_servers("AMM01", &Environment::parse("UAT"))
                .is_empty()
        );
    }

    #[test]
    fn entries_are_sorted() {
        let catalog = StaticCatalog::new()
            .with_servers("B", Environment::Qa, ["b-qa"])
            .with_servers("A", Environment::Prod, ["a-prod"])
            .with_servers("A", Environment::Dev, ["a-dev"]);
        let keys: Vec<(&str, &str)> = catalog.entries().map(|(amm, env, _)| (amm, env)).collect();
        assert_eq!(keys, vec![("A", "DEV"), ("A", "PROD"), ("B", "QA")]);
    }

    #[test]
    fn shared_catalog_delegates() {
        let shared: Arc<dyn ServerCatalog> = Arc::new(StaticCatalog::fixture());
        assert_eq!(shared.lookup_servers("AMM03", &Environment::It), vec!["IT-WEB-01"]);
    }
}
