//! Rendering of command results.

use sqlprov_catalog::CatalogSource;
use sqlprov_cli::report::{editions_report, evaluation_report, servers_report};
use sqlprov_cli::summary::{
    EDITION_PLACEHOLDER, NO_SERVERS, SERVER_PREREQUISITES, catalog_table, describe_change,
    render_catalog, render_editions, render_evaluation, render_instance_name, render_servers,
};
use sqlprov_model::{Environment, FieldChange, WizardContext};
use sqlprov_rules::{FieldValues, StaticCatalog};

#[test]
fn editions_with_dev_default() {
    let context = WizardContext::from_answers(None, Some("DEV"), Some("2025"));
    let report = editions_report(context, None);
    insta::assert_snapshot!(render_editions(&report), @r#"
    Environment: DEV
    SQL version: 2025
    Editions: Developer Standard, Developer Enterprise, Standard
    Value: Developer Enterprise
    Change: set to "Developer Enterprise"
    "#);
}

#[test]
fn editions_placeholder_until_answered() {
    let context = WizardContext::from_answers(None, None, Some("2022"));
    let report = editions_report(context, None);
    insta::assert_snapshot!(render_editions(&report), @r"
    Environment: -
    SQL version: 2022
    Editions: Select version and environment first
    Value: -
    ");
}

#[test]
fn editions_invalidated_selection() {
    let context = WizardContext::from_answers(None, Some("PROD"), Some("2019"));
    let report = editions_report(context, Some("Developer".to_string()));
    let rendered = render_editions(&report);
    assert!(rendered.contains("Editions: Standard, Enterprise"));
    assert!(rendered.contains("Change: clear current value"));
}

#[test]
fn server_messages() {
    let catalog = StaticCatalog::fixture().with_servers("AMM09", Environment::Dev, Vec::<String>::new());

    let missing = servers_report(WizardContext::from_answers(Some("AMM01"), None, None), None, &catalog);
    assert!(render_servers(&missing).contains(SERVER_PREREQUISITES));

    let empty = servers_report(
        WizardContext::from_answers(Some("AMM09"), Some("DEV"), None),
        None,
        &catalog,
    );
    assert!(render_servers(&empty).contains(NO_SERVERS));

    let listed = servers_report(
        WizardContext::from_answers(Some("AMM02"), Some("QA"), None),
        Some("QA-APP-02".to_string()),
        &catalog,
    );
    insta::assert_snapshot!(render_servers(&listed), @r"
    AMM code: AMM02
    Environment: QA
    Servers: QA-APP-01, QA-APP-02
    Value: QA-APP-02
    ");
}

#[test]
fn instance_name_lines() {
    let context = WizardContext::from_answers(Some("AMM03"), Some("IT"), None);
    insta::assert_snapshot!(render_instance_name(&context, "SQLAMM03RD1"), @r"
    AMM code: AMM03
    Environment: IT
    Instance name: SQLAMM03RD1
    ");

    let partial = WizardContext::from_answers(Some("AMM03"), None, None);
    assert!(render_instance_name(&partial, "").ends_with("Instance name: -"));
}

#[test]
fn change_descriptions() {
    assert_eq!(describe_change(&FieldChange::Clear), "clear current value");
    assert_eq!(describe_change(&FieldChange::Set(String::new())), "reset");
    assert_eq!(
        describe_change(&FieldChange::Set("Enterprise".to_string())),
        "set to \"Enterprise\""
    );
}

#[test]
fn evaluation_report_json() {
    let context = WizardContext::from_answers(Some("AMM02"), Some("QA"), Some("2019"));
    let values = FieldValues {
        sql_edition: Some("Enterprise".to_string()),
        server_name: Some("DEV-APP-01".to_string()),
        instance_name: None,
    };
    let report = evaluation_report(context, &values, StaticCatalog::fixture());
    let json = serde_json::to_value(&report).expect("serialize report");

    assert_eq!(json["context"]["environment"], "QA");
    let fields = json["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 3);

    assert_eq!(fields[0]["field"], "sqlEdition");
    assert_eq!(fields[0]["value"], "Enterprise");
    assert_eq!(fields[0]["changes"].as_array().map(Vec::len), Some(0));

    assert_eq!(fields[1]["field"], "serverName");
    assert!(fields[1]["value"].is_null());
    assert_eq!(fields[1]["changes"][0]["kind"], "clear");
    assert_eq!(fields[1]["disabled"], false);

    assert_eq!(fields[2]["value"], "SQLAMM02QD1");
    assert_eq!(fields[2]["changes"][0]["kind"], "set");
    assert_eq!(fields[2]["changes"][0]["value"], "SQLAMM02QD1");
}

#[test]
fn evaluation_table_shows_placeholders() {
    let context = WizardContext::from_answers(None, None, Some("2025"));
    let report = evaluation_report(context, &FieldValues::default(), StaticCatalog::fixture());
    let rendered = render_evaluation(&report);
    assert!(rendered.starts_with("AMM code: -\nEnvironment: -\nSQL version: 2025"));
    assert!(rendered.contains(EDITION_PLACEHOLDER));
    assert!(rendered.contains(SERVER_PREREQUISITES));
}

#[test]
fn catalog_listing() {
    let catalog = StaticCatalog::fixture();
    let table = catalog_table(&catalog);
    assert_eq!(table.row_count(), 12);

    let rendered = render_catalog(&catalog, &CatalogSource::Fixture);
    assert!(rendered.starts_with("Catalog: built-in fixture"));
    assert!(rendered.contains("PROD-WEB-02"));
}
