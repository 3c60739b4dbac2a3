//! CLI argument definitions for the provisioning rules front end.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sqlprov",
    version,
    about = "SQL provisioning wizard rules - editions, servers and instance names",
    long_about = "Evaluate the SQL provisioning wizard's dependent fields.\n\n\
                  Computes which SQL editions a version/environment pair offers,\n\
                  which servers the catalog lists for an AMM code, and the\n\
                  generated instance name."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Server catalog file (.toml or .json). Defaults to $SQLPROV_CATALOG,
    /// then the built-in fixture.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the SQL editions offered for a version and environment.
    Editions(EditionsArgs),

    /// Show the servers offered for an AMM code and environment.
    Servers(ServersArgs),

    /// Generate the instance name for an AMM code and environment.
    InstanceName(InstanceNameArgs),

    /// Recompute every dependent field for a set of wizard answers.
    Evaluate(EvaluateArgs),

    /// List the active server catalog.
    Catalog(CatalogArgs),
}

#[derive(Args)]
pub struct EditionsArgs {
    /// SQL Server version (2016, 2019, 2022, 2025).
    #[arg(long = "sql-version", value_name = "VERSION")]
    pub sql_version: Option<String>,

    /// Target environment (DEV, IT, QA, PROD).
    #[arg(long = "env", value_name = "ENV")]
    pub environment: Option<String>,

    /// Edition currently selected in the form.
    #[arg(long = "current", value_name = "EDITION")]
    pub current: Option<String>,
}

#[derive(Args)]
pub struct ServersArgs {
    /// AMM code of the owning application.
    #[arg(long = "amm", value_name = "CODE")]
    pub amm_code: Option<String>,

    /// Target environment (DEV, IT, QA, PROD).
    #[arg(long = "env", value_name = "ENV")]
    pub environment: Option<String>,

    /// Server currently selected in the form.
    #[arg(long = "current", value_name = "SERVER")]
    pub current: Option<String>,
}

#[derive(Args)]
pub struct InstanceNameArgs {
    /// AMM code of the owning application.
    #[arg(long = "amm", value_name = "CODE")]
    pub amm_code: Option<String>,

    /// Target environment (DEV, IT, QA, PROD).
    #[arg(long = "env", value_name = "ENV")]
    pub environment: Option<String>,

    /// Sequence number to use instead of the default allocator.
    #[arg(long = "sequence", value_name = "N")]
    pub sequence: Option<u32>,
}

#[derive(Args)]
pub struct EvaluateArgs {
    /// AMM code of the owning application.
    #[arg(long = "amm", value_name = "CODE")]
    pub amm_code: Option<String>,

    /// Target environment (DEV, IT, QA, PROD).
    #[arg(long = "env", value_name = "ENV")]
    pub environment: Option<String>,

    /// SQL Server version (2016, 2019, 2022, 2025).
    #[arg(long = "sql-version", value_name = "VERSION")]
    pub sql_version: Option<String>,

    /// Edition currently selected in the form.
    #[arg(long = "edition", value_name = "EDITION")]
    pub edition: Option<String>,

    /// Server currently selected in the form.
    #[arg(long = "server", value_name = "SERVER")]
    pub server: Option<String>,

    /// Print the evaluation as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Print the catalog in the JSON file format.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
