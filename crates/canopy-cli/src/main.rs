//! Canopy CLI
//!
//! Command-line front end for the grammar pack.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `canopy languages` | List the languages bound into this build |
//! | `canopy check [LANGUAGE]` | Health-check one grammar, or all of them |
//! | `canopy detect <PATH>` | Map a file path to a bound language |
//!
//! Language availability is decided at compile time by the `lang-*` feature
//! flags of `canopy-grammars`; the only runtime knobs are the flags below
//! and the `CANOPY_LOG` filter.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use canopy_grammars::{Error, Language, load_check, load_check_all, registry};

/// Command line interface for the Canopy grammar pack
#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Canopy - tree-sitter grammar pack")]
#[command(version)]
struct Cli {
    /// Log at debug level (CANOPY_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the languages bound into this build
    Languages {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Health-check one grammar, or every compiled-in grammar
    Check {
        /// Language id, alias, or file extension
        language: Option<String>,
    },
    /// Map a file path to a bound language via its extension
    Detect {
        /// File whose extension should be resolved
        path: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("canopy: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("CANOPY_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Languages { json } => {
            print_languages(json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { language } => {
            let all_ok = check(language.as_deref())?;
            Ok(if all_ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Detect { path } => {
            let language = detect(&path)?;
            println!("{language}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_languages(json: bool) -> Result<()> {
    let supported = registry::supported();

    if json {
        let entries: Vec<serde_json::Value> = supported
            .iter()
            .map(|lang| {
                serde_json::json!({
                    "id": lang.to_string(),
                    "name": lang.name(),
                    "entry_point": lang.entry_point(),
                    "extensions": lang.extensions(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:<12} {:<12} {:<28} extensions", "id", "name", "entry point");
    for lang in supported {
        println!(
            "{:<12} {:<12} {:<28} {}",
            lang.to_string(),
            lang.name(),
            lang.entry_point(),
            lang.extensions().join(", ")
        );
    }
    Ok(())
}

fn check(language: Option<&str>) -> Result<bool> {
    let results = match language {
        Some(arg) => {
            let lang = resolve_language(arg)?;
            vec![(lang, load_check(lang))]
        }
        None => load_check_all(),
    };
    tracing::debug!(count = results.len(), "load checks complete");

    let mut failed = false;
    for (lang, result) in results {
        match result {
            Ok(report) => println!(
                "ok     {} (abi {}, {} node kinds)",
                lang, report.abi_version, report.node_kind_count
            ),
            Err(err) => {
                failed = true;
                println!("failed {lang}: {err}");
            }
        }
    }

    Ok(!failed)
}

fn detect(path: &Path) -> Result<Language, Error> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::UnknownExtension {
            extension: path.display().to_string(),
        })?;

    Language::from_extension(extension).ok_or_else(|| Error::UnknownExtension {
        extension: extension.to_string(),
    })
}

/// Accept a language id, an alias, or a bare file extension
fn resolve_language(arg: &str) -> Result<Language, Error> {
    arg.parse::<Language>()
        .or_else(|parse_err| Language::from_extension(arg).ok_or(parse_err))
}
