//! Command results, independent of how they are printed.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlprov_model::{FieldChange, FieldResult, ServerField, WizardContext};
use sqlprov_rules::{
    FieldValues, FixedSequence, INSTANCE_NAME_FIELD, SERVER_NAME_FIELD, SQL_EDITION_FIELD,
    ServerCatalog, WizardForm, evaluate_edition_field, evaluate_server_field,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionsReport {
    pub context: WizardContext,
    pub current: Option<String>,
    pub result: FieldResult,
}

impl EditionsReport {
    pub fn change(&self) -> Option<FieldChange> {
        self.result.change_from(self.current.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServersReport {
    pub context: WizardContext,
    pub current: Option<String>,
    pub field: ServerField,
}

impl ServersReport {
    pub fn change(&self) -> Option<FieldChange> {
        self.field.result.change_from(self.current.as_deref())
    }
}

/// One dependent field after the form host settled it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub field: String,
    pub value: Option<String>,
    pub options: Vec<String>,
    pub disabled: bool,
    /// Changes pushed through the change callback, in order.
    pub changes: Vec<FieldChange>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub context: WizardContext,
    pub fields: Vec<FieldReport>,
}

pub fn editions_report(context: WizardContext, current: Option<String>) -> EditionsReport {
    let result = evaluate_edition_field(&context, current.as_deref());
    EditionsReport {
        context,
        current,
        result,
    }
}

pub fn servers_report<C>(context: WizardContext, current: Option<String>, catalog: &C) -> ServersReport
where
    C: ServerCatalog + ?Sized,
{
    let field = evaluate_server_field(&context, current.as_deref(), catalog);
    ServersReport {
        context,
        current,
        field,
    }
}

/// Runs the answers through a provisioning form and reports every field.
pub fn evaluation_report<C>(context: WizardContext, values: &FieldValues, catalog: C) -> EvaluationReport
where
    C: ServerCatalog + 'static,
{
    let mut form = WizardForm::provisioning(catalog, FixedSequence::default())
        .with_context(context.clone());
    form.set_value(SQL_EDITION_FIELD, values.sql_edition.as_deref());
    form.set_value(SERVER_NAME_FIELD, values.server_name.as_deref());
    form.set_value(INSTANCE_NAME_FIELD, values.instance_name.as_deref());

    let mut changes: BTreeMap<String, Vec<FieldChange>> = BTreeMap::new();
    form.refresh(|field, change| {
        changes
            .entry(field.to_string())
            .or_default()
            .push(change.clone());
    });

    let prerequisites_missing = context.amm_code().is_none() || context.environment().is_none();
    let fields = [SQL_EDITION_FIELD, SERVER_NAME_FIELD, INSTANCE_NAME_FIELD]
        .into_iter()
        .map(|field_id| {
            let result = form.field(field_id).unwrap_or_default();
            let disabled = match field_id {
                SQL_EDITION_FIELD => !result.is_selectable(),
                SERVER_NAME_FIELD => prerequisites_missing,
                _ => true,
            };
            FieldReport {
                field: field_id.to_string(),
                value: form.value(field_id).map(str::to_string),
                options: result.options,
                disabled,
                changes: changes.remove(field_id).unwrap_or_default(),
            }
        })
        .collect();

    EvaluationReport { context, fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlprov_rules::StaticCatalog;

    #[test]
    fn evaluation_settles_defaults() {
        let context = WizardContext::from_answers(Some("AMM01"), Some("PROD"), Some("2022"));
        let values = FieldValues {
            sql_edition: Some("Developer".to_string()),
            server_name: None,
            instance_name: None,
        };
        let report = evaluation_report(context, &values, StaticCatalog::fixture());
        let edition = &report.fields[0];
        assert_eq!(edition.value.as_deref(), Some("Enterprise"));
        assert_eq!(
            edition.changes,
            vec![
                FieldChange::Clear,
                FieldChange::Set("Enterprise".to_string())
            ]
        );
        let instance = &report.fields[2];
        assert_eq!(instance.value.as_deref(), Some("SQLAMM01PD1"));
        assert!(instance.disabled);
    }
}
