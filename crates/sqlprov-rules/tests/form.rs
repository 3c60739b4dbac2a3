//! End-to-end behavior of the reactive form host.

use std::sync::Arc;

use sqlprov_model::{ContextKey, Environment, FieldChange};
use sqlprov_rules::{
    FixedSequence, INSTANCE_NAME_FIELD, SERVER_NAME_FIELD, SQL_EDITION_FIELD, SequenceAllocator,
    ServerCatalog, StaticCatalog, WizardForm,
};

fn record(changes: &mut Vec<(String, FieldChange)>) -> impl FnMut(&str, &FieldChange) + '_ {
    move |field, change| changes.push((field.to_string(), change.clone()))
}

#[test]
fn full_wizard_walkthrough() {
    let mut form = WizardForm::provisioning(StaticCatalog::fixture(), FixedSequence::default());
    let mut changes = Vec::new();

    form.set_answer(ContextKey::AmmCode, Some("AMM01"), record(&mut changes));
    assert!(changes.is_empty());

    form.set_answer(ContextKey::Environment, Some("DEV"), record(&mut changes));
    assert_eq!(
        changes,
        vec![(
            INSTANCE_NAME_FIELD.to_string(),
            FieldChange::Set("SQLAMM01DD1".to_string())
        )]
    );
    changes.clear();

    form.set_answer(ContextKey::SqlVersion, Some("2025"), record(&mut changes));
    assert_eq!(
        changes,
        vec![(
            SQL_EDITION_FIELD.to_string(),
            FieldChange::Set("Developer Enterprise".to_string())
        )]
    );
    changes.clear();

    form.set_value(SERVER_NAME_FIELD, Some("DEV-SQL-02"));
    form.set_answer(ContextKey::Environment, Some("PROD"), record(&mut changes));
    assert_eq!(
        changes,
        vec![
            (SQL_EDITION_FIELD.to_string(), FieldChange::Clear),
            (
                SQL_EDITION_FIELD.to_string(),
                FieldChange::Set("Enterprise".to_string())
            ),
            (SERVER_NAME_FIELD.to_string(), FieldChange::Clear),
            (
                INSTANCE_NAME_FIELD.to_string(),
                FieldChange::Set("SQLAMM01PD1".to_string())
            ),
        ]
    );
    assert_eq!(form.value(SQL_EDITION_FIELD), Some("Enterprise"));
    assert_eq!(form.value(SERVER_NAME_FIELD), None);
    assert_eq!(form.value(INSTANCE_NAME_FIELD), Some("SQLAMM01PD1"));

    changes.clear();
    form.refresh(record(&mut changes));
    assert!(changes.is_empty());
}

#[test]
fn clearing_amm_code_resets_instance_name() {
    let mut form = WizardForm::provisioning(StaticCatalog::fixture(), FixedSequence::default());
    form.set_answer(ContextKey::AmmCode, Some("AMM03"), |_, _| {});
    form.set_answer(ContextKey::Environment, Some("QA"), |_, _| {});
    assert_eq!(form.value(INSTANCE_NAME_FIELD), Some("SQLAMM03QD1"));

    let mut changes = Vec::new();
    form.set_answer(ContextKey::AmmCode, None, record(&mut changes));
    assert_eq!(
        changes,
        vec![(INSTANCE_NAME_FIELD.to_string(), FieldChange::Set(String::new()))]
    );
    assert_eq!(form.value(INSTANCE_NAME_FIELD), None);
}

#[test]
fn field_reports_current_options() {
    let mut form = WizardForm::provisioning(StaticCatalog::fixture(), FixedSequence::default());
    form.set_answer(ContextKey::AmmCode, Some("AMM02"), |_, _| {});
    form.set_answer(ContextKey::Environment, Some("QA"), |_, _| {});
    let servers = form.field(SERVER_NAME_FIELD).expect("server field");
    assert_eq!(servers.options, vec!["QA-APP-01", "QA-APP-02"]);
    assert!(form.field("missing").is_none());
    assert_eq!(form.context().environment(), Some(&Environment::Qa));
}

struct CountingAllocator;

impl SequenceAllocator for CountingAllocator {
    fn next_sequence(&self, amm_code: &str, _environment: &Environment, type_letter: char) -> u32 {
        assert_eq!(type_letter, 'D');
        u32::try_from(amm_code.len()).unwrap_or(u32::MAX)
    }
}

struct InventoryService;

impl ServerCatalog for InventoryService {
    fn lookup_servers(&self, amm_code: &str, environment: &Environment) -> Vec<String> {
        vec![format!("{environment}-{amm_code}-01")]
    }
}

#[test]
fn injected_collaborators_are_used() {
    let catalog: Arc<dyn ServerCatalog> = Arc::new(InventoryService);
    let mut form = WizardForm::provisioning(catalog, CountingAllocator);
    form.set_answer(ContextKey::AmmCode, Some("FIN7"), |_, _| {});
    form.set_answer(ContextKey::Environment, Some("IT"), |_, _| {});
    assert_eq!(form.value(INSTANCE_NAME_FIELD), Some("SQLFIN7RD4"));
    let servers = form.field(SERVER_NAME_FIELD).expect("server field");
    assert_eq!(servers.options, vec!["IT-FIN7-01"]);
}
