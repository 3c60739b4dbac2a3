//! Type-safe enumerations for wizard answers.
//!
//! Environments and SQL versions arrive from the form as raw strings. The
//! lenient `parse` constructors never fail: values outside the known set are
//! carried in an `Other` variant so the rules can degrade to their fallback
//! cases. The strict `FromStr` implementations reject them instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Deployment tier of the instance being provisioned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    /// Development.
    Dev,
    /// Integration/test.
    It,
    /// Quality assurance.
    Qa,
    /// Production.
    Prod,
    /// Any value outside the closed set, kept as supplied (upper-cased).
    Other(String),
}

impl Environment {
    /// The four recognized tiers, in promotion order.
    pub const KNOWN: [Environment; 4] = [
        Environment::Dev,
        Environment::It,
        Environment::Qa,
        Environment::Prod,
    ];

    /// Lenient parse: trims and upper-cases, never fails.
    ///
    /// Matching is case-insensitive, so `prod` is PROD rather than an
    /// unrecognized tier. A blank input yields `Other("")`, which
    /// [`WizardContext`](crate::WizardContext) treats as no answer.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase();
        match normalized.as_str() {
            "DEV" => Environment::Dev,
            "IT" => Environment::It,
            "QA" => Environment::Qa,
            "PROD" => Environment::Prod,
            _ => Environment::Other(normalized),
        }
    }

    /// Returns the code as it appears in form answers and catalog keys.
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Dev => "DEV",
            Environment::It => "IT",
            Environment::Qa => "QA",
            Environment::Prod => "PROD",
            Environment::Other(code) => code.as_str(),
        }
    }

    /// Returns true for DEV, IT, QA and PROD.
    pub fn is_known(&self) -> bool {
        !matches!(self, Environment::Other(_))
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match Environment::parse(s) {
            Environment::Other(_) => Err(ModelError::UnknownEnvironment(s.to_string())),
            known => Ok(known),
        }
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        Environment::parse(&value)
    }
}

impl From<Environment> for String {
    fn from(value: Environment) -> Self {
        match value {
            Environment::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

/// SQL Server release selected in the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SqlVersion {
    V2016,
    V2019,
    V2022,
    V2025,
    /// Any value outside the supported releases, kept as supplied (trimmed).
    Other(String),
}

impl SqlVersion {
    pub const KNOWN: [SqlVersion; 4] = [
        SqlVersion::V2016,
        SqlVersion::V2019,
        SqlVersion::V2022,
        SqlVersion::V2025,
    ];

    /// Lenient parse: trims, never fails.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "2016" => SqlVersion::V2016,
            "2019" => SqlVersion::V2019,
            "2022" => SqlVersion::V2022,
            "2025" => SqlVersion::V2025,
            _ => SqlVersion::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SqlVersion::V2016 => "2016",
            SqlVersion::V2019 => "2019",
            SqlVersion::V2022 => "2022",
            SqlVersion::V2025 => "2025",
            SqlVersion::Other(raw) => raw.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SqlVersion::Other(_))
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Display for SqlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SqlVersion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match SqlVersion::parse(s) {
            SqlVersion::Other(_) => Err(ModelError::UnknownSqlVersion(s.to_string())),
            known => Ok(known),
        }
    }
}

impl From<String> for SqlVersion {
    fn from(value: String) -> Self {
        SqlVersion::parse(&value)
    }
}

impl From<SqlVersion> for String {
    fn from(value: SqlVersion) -> Self {
        match value {
            SqlVersion::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Licensing tier of the database engine.
///
/// Display names are the exact strings offered in the edition picker, which is
/// what the environment filters match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlEdition {
    #[serde(rename = "Developer")]
    Developer,
    #[serde(rename = "Developer Standard")]
    DeveloperStandard,
    #[serde(rename = "Developer Enterprise")]
    DeveloperEnterprise,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Enterprise")]
    Enterprise,
}

impl SqlEdition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlEdition::Developer => "Developer",
            SqlEdition::DeveloperStandard => "Developer Standard",
            SqlEdition::DeveloperEnterprise => "Developer Enterprise",
            SqlEdition::Standard => "Standard",
            SqlEdition::Enterprise => "Enterprise",
        }
    }

    /// Returns true for the non-production-licensed editions.
    pub fn is_developer(&self) -> bool {
        self.as_str().starts_with("Developer")
    }
}

impl fmt::Display for SqlEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SqlEdition {
    type Err = ModelError;

    /// Case-insensitive on the display name.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "DEVELOPER" => Ok(SqlEdition::Developer),
            "DEVELOPER STANDARD" => Ok(SqlEdition::DeveloperStandard),
            "DEVELOPER ENTERPRISE" => Ok(SqlEdition::DeveloperEnterprise),
            "STANDARD" => Ok(SqlEdition::Standard),
            "ENTERPRISE" => Ok(SqlEdition::Enterprise),
            _ => Err(ModelError::UnknownEdition(s.to_string())),
        }
    }
}
