use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use sqlprov_catalog::{CatalogFile, load_catalog};
use sqlprov_cli::report::{editions_report, evaluation_report, servers_report};
use sqlprov_cli::summary::{
    render_catalog, render_editions, render_evaluation, render_instance_name, render_servers,
};
use sqlprov_model::WizardContext;
use sqlprov_rules::{FieldValues, FixedSequence, StaticCatalog, generate_instance_name};

use crate::cli::{CatalogArgs, EditionsArgs, EvaluateArgs, InstanceNameArgs, ServersArgs};

pub fn run_editions(args: &EditionsArgs) -> Result<()> {
    let context = WizardContext::from_answers(
        None,
        args.environment.as_deref(),
        args.sql_version.as_deref(),
    );
    let report = editions_report(context, args.current.clone());
    println!("{}", render_editions(&report));
    Ok(())
}

pub fn run_servers(args: &ServersArgs, catalog_path: Option<&Path>) -> Result<()> {
    let catalog = active_catalog(catalog_path)?;
    let context = WizardContext::from_answers(
        args.amm_code.as_deref(),
        args.environment.as_deref(),
        None,
    );
    let report = servers_report(context, args.current.clone(), &catalog);
    println!("{}", render_servers(&report));
    Ok(())
}

pub fn run_instance_name(args: &InstanceNameArgs) -> Result<()> {
    let context = WizardContext::from_answers(
        args.amm_code.as_deref(),
        args.environment.as_deref(),
        None,
    );
    let allocator = args.sequence.map(FixedSequence).unwrap_or_default();
    let name = generate_instance_name(&context, &allocator);
    debug!(instance_name = %name, "instance name generated");
    println!("{}", render_instance_name(&context, &name));
    Ok(())
}

pub fn run_evaluate(args: &EvaluateArgs, catalog_path: Option<&Path>) -> Result<()> {
    let catalog = active_catalog(catalog_path)?;
    let context = WizardContext::from_answers(
        args.amm_code.as_deref(),
        args.environment.as_deref(),
        args.sql_version.as_deref(),
    );
    let values = FieldValues {
        sql_edition: args.edition.clone(),
        server_name: args.server.clone(),
        instance_name: None,
    };
    let report = evaluation_report(context, &values, catalog);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize evaluation")?;
        println!("{json}");
    } else {
        println!("{}", render_evaluation(&report));
    }
    Ok(())
}

pub fn run_catalog(args: &CatalogArgs, catalog_path: Option<&Path>) -> Result<()> {
    let (catalog, source) = load_catalog(catalog_path).context("load server catalog")?;
    if args.json {
        let file = CatalogFile::from(&catalog);
        let json = serde_json::to_string_pretty(&file).context("serialize catalog")?;
        println!("{json}");
    } else {
        println!("{}", render_catalog(&catalog, &source));
    }
    Ok(())
}

fn active_catalog(catalog_path: Option<&Path>) -> Result<StaticCatalog> {
    let (catalog, source) = load_catalog(catalog_path).context("load server catalog")?;
    info!(source = %source, amm_codes = catalog.len(), "server catalog ready");
    Ok(catalog)
}
