//! In-progress wizard answers that the dependent fields are computed from.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::enums::{Environment, SqlVersion};

/// Upstream answers that dependent fields react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextKey {
    AmmCode,
    Environment,
    SqlVersion,
}

impl ContextKey {
    /// Returns the form property name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKey::AmmCode => "ammCode",
            ContextKey::Environment => "environment",
            ContextKey::SqlVersion => "sqlVersion",
        }
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of the wizard answers.
///
/// Rules only ever read this. A blank answer is the same as no answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardContext {
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub amm_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub environment: Option<Environment>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub sql_version: Option<SqlVersion>,
}

/// Reads an optional answer, treating an empty or whitespace-only string as absent.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|value| !value.trim().is_empty())
        .map(T::from))
}

impl WizardContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from raw form answers.
    pub fn from_answers(
        amm_code: Option<&str>,
        environment: Option<&str>,
        sql_version: Option<&str>,
    ) -> Self {
        let mut context = Self::default();
        context.set_answer(ContextKey::AmmCode, amm_code);
        context.set_answer(ContextKey::Environment, environment);
        context.set_answer(ContextKey::SqlVersion, sql_version);
        context
    }

    pub fn with_amm_code(mut self, amm_code: impl Into<String>) -> Self {
        let amm_code: String = amm_code.into();
        self.set_answer(ContextKey::AmmCode, Some(amm_code.as_str()));
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_sql_version(mut self, sql_version: SqlVersion) -> Self {
        self.sql_version = Some(sql_version);
        self
    }

    /// Replaces one answer. Used by form hosts; rules never call it.
    ///
    /// The AMM code is kept verbatim; environment and version go through the
    /// lenient parsers.
    pub fn set_answer(&mut self, key: ContextKey, raw: Option<&str>) {
        let raw = raw.filter(|value| !value.trim().is_empty());
        match key {
            ContextKey::AmmCode => self.amm_code = raw.map(str::to_string),
            ContextKey::Environment => self.environment = raw.map(Environment::parse),
            ContextKey::SqlVersion => self.sql_version = raw.map(SqlVersion::parse),
        }
    }

    // The fields are public, so the accessors re-check blankness.

    pub fn amm_code(&self) -> Option<&str> {
        self.amm_code
            .as_deref()
            .filter(|amm_code| !amm_code.trim().is_empty())
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment
            .as_ref()
            .filter(|environment| !environment.is_blank())
    }

    pub fn sql_version(&self) -> Option<&SqlVersion> {
        self.sql_version
            .as_ref()
            .filter(|sql_version| !sql_version.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_answers_are_unset() {
        let context = WizardContext::from_answers(Some("  "), Some(""), None);
        assert_eq!(context, WizardContext::default());
    }

    #[test]
    fn amm_code_is_verbatim() {
        let context = WizardContext::from_answers(Some("amm01"), Some("qa"), Some("2022"));
        assert_eq!(context.amm_code(), Some("amm01"));
        assert_eq!(context.environment(), Some(&Environment::Qa));
        assert_eq!(context.sql_version(), Some(&SqlVersion::V2022));
    }

    #[test]
    fn blank_fields_read_as_unset() {
        let context = WizardContext {
            amm_code: Some(" ".to_string()),
            environment: Some(Environment::parse("")),
            sql_version: Some(SqlVersion::parse("  ")),
        };
        assert_eq!(context.amm_code(), None);
        assert_eq!(context.environment(), None);
        assert_eq!(context.sql_version(), None);
    }

    #[test]
    fn set_answer_clears_on_none() {
        let mut context = WizardContext::new()
            .with_amm_code("AMM01")
            .with_environment(Environment::Dev);
        context.set_answer(ContextKey::Environment, None);
        assert_eq!(context.environment(), None);
        assert_eq!(context.amm_code(), Some("AMM01"));
    }
}
