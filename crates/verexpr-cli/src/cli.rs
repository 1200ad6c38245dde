//! Command dispatch for the `verexpr` entrypoint.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use tracing::debug;
use verexpr::{
    VersionCatalog, explain_expression, get_diff, parse_version_expression,
};

use crate::catalog_file::load_catalog;
use crate::config::{CliConfig, LogLevel};
use crate::error::CliError;
use crate::output::{write_actions, write_diff, write_json, write_reports, write_versions};

/// Resolve version-range expressions against a catalog of known versions.
#[derive(Parser, Debug)]
#[command(name = "verexpr", author, version, about)]
pub(crate) struct Cli {
    /// Catalog file: a JSON array or one version per line, newest first.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print the include/exclude decision for every version an expression mentions.
    Resolve(ResolveArgs),
    /// Print the additions and removals needed to bring a list in line with an expression.
    Diff(DiffArgs),
    /// Print a list updated to match an expression.
    Apply(CurrentArgs),
    /// Explain how each unit of an expression was understood.
    Explain(ExplainArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Expression such as `>=1.20, !1.20.2`.
    pub expr: String,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CurrentArgs {
    /// Expression such as `>=1.20, !1.20.2`.
    pub expr: String,
    /// Currently stored versions, comma separated or repeated.
    #[arg(long, value_delimiter = ',')]
    pub current: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct DiffArgs {
    #[command(flatten)]
    pub target: CurrentArgs,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExplainArgs {
    /// Expression to explain.
    pub expr: String,
}

impl CurrentArgs {
    fn current(&self) -> Vec<String> {
        self.current
            .iter()
            .map(|version| version.trim())
            .filter(|version| !version.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Merge environment configuration with command line overrides.
pub(crate) fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level, cli.catalog.clone()))
}

pub(crate) fn run(command: &Commands, config: &CliConfig) -> Result<()> {
    let path = config.catalog.as_deref().ok_or(CliError::MissingCatalog)?;
    let catalog = load_catalog(path)?;
    let mut stdout = io::stdout().lock();
    dispatch(command, &catalog, &mut stdout)?;
    stdout.flush().wrap_err("failed to flush output to stdout")
}

fn dispatch(command: &Commands, catalog: &VersionCatalog, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Resolve(args) => {
            let actions = parse_version_expression(&args.expr, catalog);
            debug!(expr = %args.expr, decisions = actions.len(), "resolved expression");
            if args.json {
                write_json(out, &actions)
            } else {
                write_actions(out, &actions)
            }
        }
        Commands::Diff(args) => {
            let actions = parse_version_expression(&args.target.expr, catalog);
            let diff = get_diff(&args.target.current(), &actions);
            if args.json {
                write_json(out, &diff)
            } else {
                write_diff(out, &diff)
            }
        }
        Commands::Apply(args) => {
            let current = args.current();
            let actions = parse_version_expression(&args.expr, catalog);
            let updated = get_diff(&current, &actions).apply(&current);
            write_versions(out, &updated)
        }
        Commands::Explain(args) => write_reports(out, &explain_expression(&args.expr, catalog)),
    }
}
