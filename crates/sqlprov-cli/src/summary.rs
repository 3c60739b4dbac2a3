use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sqlprov_catalog::CatalogSource;
use sqlprov_model::{FieldChange, FieldResult, ServerField, WizardContext};
use sqlprov_rules::{SERVER_NAME_FIELD, SQL_EDITION_FIELD, StaticCatalog};

use crate::report::{EditionsReport, EvaluationReport, ServersReport};

/// Shown in place of the edition list while version or environment is missing.
pub const EDITION_PLACEHOLDER: &str = "Select version and environment first";
/// Shown in place of the server list while AMM code or environment is missing.
pub const SERVER_PREREQUISITES: &str = "Select AMM Code and Environment first";
pub const NO_SERVERS: &str = "No servers available";

const MISSING: &str = "-";

pub fn render_editions(report: &EditionsReport) -> String {
    let context = &report.context;
    let mut lines = answer_lines(context, false, true, true);
    lines.push(format!("Editions: {}", edition_list(&report.result)));
    lines.push(format!("Value: {}", show(report.result.value.as_deref())));
    if let Some(change) = report.change() {
        lines.push(format!("Change: {}", describe_change(&change)));
    }
    lines.join("\n")
}

pub fn render_servers(report: &ServersReport) -> String {
    let mut lines = answer_lines(&report.context, true, true, false);
    lines.push(format!("Servers: {}", server_list(&report.field)));
    lines.push(format!("Value: {}", show(report.field.result.value.as_deref())));
    if let Some(change) = report.change() {
        lines.push(format!("Change: {}", describe_change(&change)));
    }
    lines.join("\n")
}

pub fn render_instance_name(context: &WizardContext, instance_name: &str) -> String {
    let mut lines = answer_lines(context, true, true, false);
    let name = if instance_name.is_empty() {
        MISSING
    } else {
        instance_name
    };
    lines.push(format!("Instance name: {name}"));
    lines.join("\n")
}

/// Editions line text: the placeholder, or the offered names in order.
pub fn edition_list(result: &FieldResult) -> String {
    if result.is_selectable() {
        result.options.join(", ")
    } else {
        EDITION_PLACEHOLDER.to_string()
    }
}

/// Servers line text: prerequisites missing, empty catalog entry, or the list.
pub fn server_list(field: &ServerField) -> String {
    if field.disabled {
        SERVER_PREREQUISITES.to_string()
    } else if field.options().is_empty() {
        NO_SERVERS.to_string()
    } else {
        field.options().join(", ")
    }
}

pub fn describe_change(change: &FieldChange) -> String {
    match change {
        FieldChange::Clear => "clear current value".to_string(),
        FieldChange::Set(value) if value.is_empty() => "reset".to_string(),
        FieldChange::Set(value) => format!("set to \"{value}\""),
    }
}

pub fn evaluation_table(report: &EvaluationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Options"),
        header_cell("Changes"),
    ]);
    apply_table_style(&mut table);
    for field in &report.fields {
        let options = if field.field == SQL_EDITION_FIELD && field.disabled {
            dim_cell(EDITION_PLACEHOLDER)
        } else if field.field == SERVER_NAME_FIELD && field.disabled {
            dim_cell(SERVER_PREREQUISITES)
        } else if field.field == SERVER_NAME_FIELD && field.options.is_empty() {
            dim_cell(NO_SERVERS)
        } else if field.options.is_empty() {
            dim_cell(MISSING)
        } else {
            Cell::new(field.options.join("\n"))
        };
        let changes = if field.changes.is_empty() {
            dim_cell(MISSING)
        } else {
            Cell::new(
                field
                    .changes
                    .iter()
                    .map(describe_change)
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
        };
        table.add_row(vec![
            Cell::new(&field.field).add_attribute(Attribute::Bold),
            value_cell(field.value.as_deref()),
            options,
            changes,
        ]);
    }
    table
}

pub fn render_evaluation(report: &EvaluationReport) -> String {
    let mut lines = answer_lines(&report.context, true, true, true);
    lines.push(evaluation_table(report).to_string());
    lines.join("\n")
}

pub fn catalog_table(catalog: &StaticCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("AMM Code"),
        header_cell("Environment"),
        header_cell("Servers"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (amm_code, environment, servers) in catalog.entries() {
        let server_cell = if servers.is_empty() {
            dim_cell(NO_SERVERS)
        } else {
            Cell::new(servers.join("\n"))
        };
        table.add_row(vec![
            Cell::new(amm_code).fg(Color::Cyan),
            Cell::new(environment),
            server_cell,
            Cell::new(servers.len()),
        ]);
    }
    table
}

pub fn render_catalog(catalog: &StaticCatalog, source: &CatalogSource) -> String {
    format!("Catalog: {source}\n{}", catalog_table(catalog))
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn answer_lines(
    context: &WizardContext,
    amm_code: bool,
    environment: bool,
    sql_version: bool,
) -> Vec<String> {
    let mut lines = Vec::new();
    if amm_code {
        lines.push(format!("AMM code: {}", show(context.amm_code())));
    }
    if environment {
        lines.push(format!(
            "Environment: {}",
            show(context.environment().map(|environment| environment.as_str()))
        ));
    }
    if sql_version {
        lines.push(format!(
            "SQL version: {}",
            show(context.sql_version().map(|version| version.as_str()))
        ));
    }
    lines
}

fn show(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value).fg(Color::Green),
        None => dim_cell(MISSING),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
