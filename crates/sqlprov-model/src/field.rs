//! Output contract shared by every dependent field.

use serde::{Deserialize, Serialize};

/// Result of recomputing one dependent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldResult {
    /// Valid choices, in display order. Empty for free-form or generated fields.
    pub options: Vec<String>,
    /// Recommended value after recomputation.
    pub value: Option<String>,
    /// The current value was invalidated by an upstream change.
    pub must_clear: bool,
}

impl FieldResult {
    pub fn new(options: Vec<String>, value: Option<String>, must_clear: bool) -> Self {
        Self {
            options,
            value,
            must_clear,
        }
    }

    /// A field with a single generated value and no choices.
    pub fn generated(value: impl Into<String>) -> Self {
        Self {
            options: Vec::new(),
            value: Some(value.into()),
            must_clear: false,
        }
    }

    /// Returns true when the host can offer a selection.
    pub fn is_selectable(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }

    /// The update the host must push through its change callback, if any.
    ///
    /// An empty string and a missing value are the same "unset" state, so a
    /// generated empty value only produces a change when something was set.
    pub fn change_from(&self, current: Option<&str>) -> Option<FieldChange> {
        let current = current.filter(|value| !value.is_empty());
        if self.must_clear {
            return Some(FieldChange::Clear);
        }
        match self.value.as_deref() {
            Some("") if current.is_none() => None,
            Some(value) if Some(value) != current => Some(FieldChange::Set(value.to_string())),
            _ => None,
        }
    }
}

/// A value change delivered to the host's change callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    Set(String),
    Clear,
}

impl FieldChange {
    /// Applies the change to a stored field value. Setting an empty string unsets it.
    pub fn apply(&self, slot: &mut Option<String>) {
        *slot = match self {
            FieldChange::Set(value) if !value.is_empty() => Some(value.clone()),
            FieldChange::Set(_) | FieldChange::Clear => None,
        };
    }
}

/// State of the server-name select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerField {
    /// Prerequisite answers are missing.
    pub disabled: bool,
    #[serde(flatten)]
    pub result: FieldResult,
}

impl ServerField {
    pub fn options(&self) -> &[String] {
        &self.result.options
    }
}
