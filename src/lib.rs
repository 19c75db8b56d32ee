//! wmt15: dataset descriptors for the WMT15 translation task.
//!
//! This crate declares every buildable variant of the WMT15 news
//! translation corpus (five `xx-en` language pairs, each as plain text and
//! with an 8k subword vocabulary) and the raw sub-corpora composing its
//! train, validation and test splits. A generic builder resolves those
//! sub-corpora for a given language pair.
//!
//! # Modules
//!
//! - [`descriptor`]: Descriptor types (configs, splits, families) and the WMT15 family
//! - [`subcorpus`]: Registry of resolvable sub-corpora
//! - [`builder`]: Generic translation builder and build plans
//! - [`validation`]: Descriptor consistency checks
//! - [`manifest`]: JSON/YAML export
//! - [`error`]: Error types for wmt15 operations

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod subcorpus;
pub mod validation;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

pub use error::Wmt15Error;

use builder::TranslateBuilder;
use descriptor::wmt15::{self, WMT15};
use descriptor::{DatasetConfig, SplitName};
use subcorpus::SubCorpusRegistry;

/// The wmt15 CLI application.
#[derive(Parser)]
#[command(name = "wmt15")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List every dataset config.
    List(ListArgs),
    /// Show one config in detail.
    Show(ShowArgs),
    /// Show the sub-corpora composing a config's splits.
    Splits(SplitsArgs),
    /// Validate the descriptor against the sub-corpus registry.
    Validate(ValidateArgs),
    /// Print the BibTeX citation.
    Citation,
    /// Write the descriptor manifest as JSON.
    Export(ExportArgs),
}

/// Arguments for the list subcommand.
#[derive(clap::Args)]
struct ListArgs {
    /// Only list configs with this encoding ('plain' or 'subwords').
    #[arg(long)]
    encoding: Option<String>,

    /// Output format ('text' or 'json').
    #[arg(long, env = "WMT15_OUTPUT", default_value = "text")]
    output: String,
}

/// Arguments for the show subcommand.
#[derive(clap::Args)]
struct ShowArgs {
    /// Config name, e.g. 'de-en' or 'de-en.subwords8k'.
    config: String,

    /// Output format ('text', 'json', or 'yaml').
    #[arg(long, env = "WMT15_OUTPUT", default_value = "text")]
    output: String,
}

/// Arguments for the splits subcommand.
#[derive(clap::Args)]
struct SplitsArgs {
    /// Config name, e.g. 'de-en' or 'de-en.subwords8k'.
    config: String,

    /// Only show one split ('train', 'validation', or 'test').
    #[arg(long)]
    split: Option<String>,

    /// Filter sub-corpora down to those providing the config's language pair.
    #[arg(long)]
    resolved: bool,

    /// Output format ('text' or 'json').
    #[arg(long, env = "WMT15_OUTPUT", default_value = "text")]
    output: String,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, env = "WMT15_OUTPUT", default_value = "text")]
    output: String,
}

/// Arguments for the export subcommand.
#[derive(clap::Args)]
struct ExportArgs {
    /// Output path for the JSON manifest.
    output: PathBuf,
}

/// Run the wmt15 CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), Wmt15Error> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List(args)) => run_list(args),
        Some(Commands::Show(args)) => run_show(args),
        Some(Commands::Splits(args)) => run_splits(args),
        Some(Commands::Validate(args)) => run_validate(args),
        Some(Commands::Citation) => {
            print!("{}", WMT15.citation.trim_start());
            Ok(())
        }
        Some(Commands::Export(args)) => manifest::write_manifest_json(&args.output, &WMT15),
        None => {
            println!("wmt15 {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Dataset descriptors for the WMT15 translation task.");
            println!();
            println!("Run 'wmt15 --help' for usage information.");
            Ok(())
        }
    }
}

fn lookup_config(name: &str) -> Result<&'static DatasetConfig, Wmt15Error> {
    wmt15::find_config(name).ok_or_else(|| Wmt15Error::UnknownConfig {
        name: name.to_string(),
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, Wmt15Error> {
    serde_json::to_string_pretty(value).map_err(|e| Wmt15Error::Serialize(e.to_string()))
}

/// Execute the list subcommand.
fn run_list(args: ListArgs) -> Result<(), Wmt15Error> {
    let filter = match args.encoding.as_deref() {
        None => None,
        Some(kind @ ("plain" | "subwords")) => Some(kind),
        Some(other) => {
            return Err(Wmt15Error::UnsupportedFormat(format!(
                "encoding '{}' (supported: plain, subwords)",
                other
            )));
        }
    };

    let configs: Vec<&DatasetConfig> = wmt15::list_configs()
        .iter()
        .filter(|cfg| filter.map_or(true, |kind| cfg.encoding.kind_label() == kind))
        .collect();
    debug!("listing {} config(s)", configs.len());

    match args.output.as_str() {
        "json" => {
            let names: Vec<String> = configs.iter().map(|cfg| cfg.name()).collect();
            println!("{}", to_json(&names)?);
        }
        "text" => {
            for cfg in configs {
                println!("{:<20} {}", cfg.name(), cfg.description);
            }
        }
        other => return Err(unsupported_output(other, "text, json")),
    }
    Ok(())
}

/// Execute the show subcommand.
fn run_show(args: ShowArgs) -> Result<(), Wmt15Error> {
    let config = lookup_config(&args.config)?;

    match args.output.as_str() {
        "json" => println!("{}", to_json(config)?),
        "yaml" => {
            let yaml =
                serde_yaml::to_string(config).map_err(|e| Wmt15Error::Serialize(e.to_string()))?;
            print!("{}", yaml);
        }
        "text" => {
            println!("Config:      {}", config.name());
            println!("Description: {}", config.description);
            println!("Languages:   {}", config.language_pair);
            println!("Encoding:    {}", config.encoding);
            println!("Version:     {}", config.version);
            println!("URL:         {}", config.source_url);
            for (split, ids) in wmt15::splits_for(config).iter() {
                println!("{:<12} {} sub-corpora", format!("{}:", split), ids.len());
            }
        }
        other => return Err(unsupported_output(other, "text, json, yaml")),
    }
    Ok(())
}

/// Execute the splits subcommand.
fn run_splits(args: SplitsArgs) -> Result<(), Wmt15Error> {
    let config = lookup_config(&args.config)?;
    let only = args
        .split
        .as_deref()
        .map(str::parse::<SplitName>)
        .transpose()?;
    let wanted = |split: SplitName| only.map_or(true, |s| s == split);

    let rows: Vec<(SplitName, Vec<&'static str>)> = if args.resolved {
        let builder = TranslateBuilder::new(&WMT15, config.clone(), SubCorpusRegistry::builtin())?;
        let plan = builder.plan()?;
        plan.splits
            .iter()
            .filter(|p| wanted(p.split))
            .map(|p| (p.split, p.names()))
            .collect()
    } else {
        wmt15::splits_for(config)
            .iter()
            .filter(|(split, _)| wanted(*split))
            .map(|(split, ids)| (split, ids.to_vec()))
            .collect()
    };

    match args.output.as_str() {
        "json" => {
            let map: serde_json::Map<String, serde_json::Value> = rows
                .into_iter()
                .map(|(split, ids)| (split.to_string(), serde_json::Value::from(ids)))
                .collect();
            println!("{}", to_json(&map)?);
        }
        "text" => {
            for (split, ids) in rows {
                println!("{}:", split);
                for id in ids {
                    println!("  {}", id);
                }
            }
        }
        other => return Err(unsupported_output(other, "text, json")),
    }
    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), Wmt15Error> {
    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_family(&WMT15, &SubCorpusRegistry::builtin(), &opts);

    match args.output.as_str() {
        "json" => {
            let value = serde_json::json!({
                "error_count": report.error_count(),
                "warning_count": report.warning_count(),
                "issues": report.issues,
            });
            println!("{}", to_json(&value)?);
        }
        "text" => print!("{}", report),
        other => return Err(unsupported_output(other, "text, json")),
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(Wmt15Error::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}

fn unsupported_output(requested: &str, supported: &str) -> Wmt15Error {
    Wmt15Error::UnsupportedFormat(format!(
        "output '{}' (supported: {})",
        requested, supported
    ))
}
