//! SQL edition availability by version and environment.
//!
//! # Rules
//!
//! - 2016, 2019 and 2022 offer Developer, Standard and Enterprise.
//! - 2025 splits the developer tier into Developer Standard and Developer
//!   Enterprise, followed by Standard and Enterprise.
//! - PROD drops every developer edition.
//! - DEV keeps developer editions and Standard; plain Enterprise is dropped.
//! - IT and QA see the full list for the version.
//!
//! DEV preselects the richest developer edition and PROD preselects
//! Enterprise, but only for an empty field.

use sqlprov_model::{Environment, FieldResult, SqlEdition, SqlVersion, WizardContext};
use tracing::debug;

use crate::reconcile::reconcile;

const CLASSIC_EDITIONS: &[SqlEdition] = &[
    SqlEdition::Developer,
    SqlEdition::Standard,
    SqlEdition::Enterprise,
];

const SPLIT_DEVELOPER_EDITIONS: &[SqlEdition] = &[
    SqlEdition::DeveloperStandard,
    SqlEdition::DeveloperEnterprise,
    SqlEdition::Standard,
    SqlEdition::Enterprise,
];

/// Editions published for a version, before environment filtering.
pub fn base_editions(sql_version: &SqlVersion) -> &'static [SqlEdition] {
    match sql_version {
        SqlVersion::V2016 | SqlVersion::V2019 | SqlVersion::V2022 => CLASSIC_EDITIONS,
        SqlVersion::V2025 => SPLIT_DEVELOPER_EDITIONS,
        SqlVersion::Other(_) => &[],
    }
}

/// Ordered editions selectable for the given answers.
///
/// Empty until both answers are present, and for unsupported versions.
pub fn derive_editions(
    sql_version: Option<&SqlVersion>,
    environment: Option<&Environment>,
) -> Vec<SqlEdition> {
    let (Some(sql_version), Some(environment)) = (sql_version, environment) else {
        return Vec::new();
    };
    base_editions(sql_version)
        .iter()
        .copied()
        .filter(|edition| allowed_in(*edition, environment))
        .collect()
}

fn allowed_in(edition: SqlEdition, environment: &Environment) -> bool {
    match environment {
        Environment::Prod => !edition.is_developer(),
        Environment::Dev => edition.is_developer() || edition == SqlEdition::Standard,
        Environment::It | Environment::Qa | Environment::Other(_) => true,
    }
}

/// Edition to preselect for an empty field, before checking availability.
pub fn default_edition(
    sql_version: Option<&SqlVersion>,
    environment: Option<&Environment>,
) -> Option<SqlEdition> {
    match environment? {
        Environment::Dev => match sql_version? {
            SqlVersion::V2025 => Some(SqlEdition::DeveloperEnterprise),
            _ => Some(SqlEdition::Developer),
        },
        Environment::Prod => Some(SqlEdition::Enterprise),
        _ => None,
    }
}

/// Recomputes the edition select for the current answers.
pub fn evaluate_edition_field(context: &WizardContext, current: Option<&str>) -> FieldResult {
    let sql_version = context.sql_version();
    let environment = context.environment();
    let options: Vec<String> = derive_editions(sql_version, environment)
        .into_iter()
        .map(|edition| edition.as_str().to_string())
        .collect();
    let default = default_edition(sql_version, environment);
    let result = reconcile(options, current, default.map(|edition| edition.as_str()));
    debug!(
        sql_version = sql_version.map(SqlVersion::as_str),
        environment = environment.map(Environment::as_str),
        options = result.options.len(),
        value = result.value.as_deref(),
        must_clear = result.must_clear,
        "edition field evaluated"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(editions: &[SqlEdition]) -> Vec<&'static str> {
        editions.iter().map(SqlEdition::as_str).collect()
    }

    #[test]
    fn classic_versions_in_qa() {
        for version in [SqlVersion::V2016, SqlVersion::V2019, SqlVersion::V2022] {
            let editions = derive_editions(Some(&version), Some(&Environment::Qa));
            assert_eq!(names(&editions), vec!["Developer", "Standard", "Enterprise"]);
        }
    }

    #[test]
    fn dev_drops_plain_enterprise() {
        let editions = derive_editions(Some(&SqlVersion::V2019), Some(&Environment::Dev));
        assert_eq!(names(&editions), vec!["Developer", "Standard"]);
    }

    #[test]
    fn v2025_in_it_is_unfiltered() {
        let editions = derive_editions(Some(&SqlVersion::V2025), Some(&Environment::It));
        assert_eq!(
            names(&editions),
            vec!["Developer Standard", "Developer Enterprise", "Standard", "Enterprise"]
        );
    }

    #[test]
    fn missing_answers_give_nothing() {
        assert!(derive_editions(None, Some(&Environment::Dev)).is_empty());
        assert!(derive_editions(Some(&SqlVersion::V2022), None).is_empty());
    }

    #[test]
    fn unknown_environment_passes_through() {
        let environment = Environment::parse("uat");
        let editions = derive_editions(Some(&SqlVersion::V2022), Some(&environment));
        assert_eq!(editions.len(), 3);
        assert_eq!(default_edition(Some(&SqlVersion::V2022), Some(&environment)), None);
    }

    #[test]
    fn defaults_by_environment() {
        assert_eq!(
            default_edition(Some(&SqlVersion::V2016), Some(&Environment::Dev)),
            Some(SqlEdition::Developer)
        );
        assert_eq!(
            default_edition(Some(&SqlVersion::V2025), Some(&Environment::Dev)),
            Some(SqlEdition::DeveloperEnterprise)
        );
        assert_eq!(
            default_edition(Some(&SqlVersion::V2025), Some(&Environment::Prod)),
            Some(SqlEdition::Enterprise)
        );
        assert_eq!(default_edition(Some(&SqlVersion::V2025), Some(&Environment::Qa)), None);
    }

    #[test]
    fn missing_answers_clear_a_stale_value() {
        let context = WizardContext::new().with_environment(Environment::Dev);
        let result = evaluate_edition_field(&context, Some("Developer"));
        assert!(result.options.is_empty());
        assert!(result.must_clear);

        let result = evaluate_edition_field(&context, None);
        assert!(!result.must_clear);
        assert_eq!(result.value, None);
    }
}
