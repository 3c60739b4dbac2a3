//! Reconciling a field's current value against freshly computed options.

use sqlprov_model::FieldResult;

/// Builds the field result for a select whose options were just recomputed.
///
/// A current value outside `options` is always cleared, even when a default
/// exists. The default only applies to an empty field and only when it is
/// itself one of the options.
pub fn reconcile(options: Vec<String>, current: Option<&str>, default: Option<&str>) -> FieldResult {
    let current = current.filter(|value| !value.is_empty());
    match current {
        Some(value) if contains(&options, value) => {
            let value = value.to_string();
            FieldResult::new(options, Some(value), false)
        }
        Some(_) => FieldResult::new(options, None, true),
        None => {
            let value = default
                .filter(|candidate| contains(&options, candidate))
                .map(str::to_string);
            FieldResult::new(options, value, false)
        }
    }
}

fn contains(options: &[String], value: &str) -> bool {
    options.iter().any(|option| option == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn keeps_valid_current_value() {
        let result = reconcile(options(&["Standard", "Enterprise"]), Some("Standard"), Some("Enterprise"));
        assert_eq!(result.value.as_deref(), Some("Standard"));
        assert!(!result.must_clear);
    }

    #[test]
    fn invalid_current_value_beats_default() {
        let result = reconcile(options(&["Standard", "Enterprise"]), Some("Developer"), Some("Enterprise"));
        assert_eq!(result.value, None);
        assert!(result.must_clear);
    }

    #[test]
    fn default_must_be_an_option() {
        let result = reconcile(options(&["Standard"]), None, Some("Enterprise"));
        assert_eq!(result.value, None);
        assert!(!result.must_clear);
    }

    #[test]
    fn empty_string_counts_as_no_value() {
        let result = reconcile(Vec::new(), Some(""), None);
        assert!(!result.must_clear);
        let result = reconcile(Vec::new(), Some("QA-SQL-01"), None);
        assert!(result.must_clear);
    }
}
