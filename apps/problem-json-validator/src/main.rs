//! Problem Details document validator
//!
//! Checks that JSON documents are well-formed `application/problem+json` payloads:
//! `status` is a valid HTTP status code and `type`/`instance`, when present, are
//! absolute URIs. Optional policy checks require `type` and `title`.
//!
//! # Usage
//!
//! ```bash
//! # Validate every .json file under a directory
//! problem-json-validator fixtures/problems
//!
//! # Validate a captured response body from stdin, as JSON report
//! curl -s https://api.example.com/orders/123 | problem-json-validator --json -
//!
//! # Layered configuration
//! PROBLEM_VALIDATOR_REQUIRE_TITLE=true problem-json-validator --config validator.yaml docs
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

mod config;
mod error;
mod scanner;
mod validator;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::config::ValidatorConfig;
use crate::error::{ValidatorError, Violation};
use crate::scanner::{STDIN_PATH, find_files, read_source};
use crate::validator::validate_document;

/// Problem Details document validator
///
/// Validates `application/problem+json` documents: one problem object or an
/// array of problem objects per file.
#[derive(Parser, Debug)]
#[command(name = "problem-json-validator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to scan; `-` reads a single document from stdin
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exclude patterns (can be specified multiple times)
    /// Supports glob patterns. Example: --exclude "target/*" --exclude "*.schema.json"
    #[arg(long, short = 'e', action = clap::ArgAction::Append)]
    exclude: Vec<String>,

    /// Report problems without a `type` URI (`--require-type=false` turns it off)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    require_type: Option<bool>,

    /// Report problems without a `title` (`--require-title=false` turns it off)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    require_title: Option<bool>,

    /// Output results as JSON (`--json=false` turns it off)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    json: Option<bool>,

    /// Maximum file size in bytes
    #[arg(long)]
    max_file_size: Option<u64>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// CLI flags take precedence over every configuration layer.
    fn apply_overrides(&self, config: &mut ValidatorConfig) {
        if let Some(require_type) = self.require_type {
            config.require_type = require_type;
        }
        if let Some(require_title) = self.require_title {
            config.require_title = require_title;
        }
        if let Some(json) = self.json {
            config.json = json;
        }
        if let Some(limit) = self.max_file_size {
            config.max_file_size = limit;
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Warning: logging not initialized: {e}");
    }
}

/// Totals for one run.
struct Summary {
    files: usize,
    problems: usize,
    violations: Vec<Violation>,
}

fn run(cli: &Cli) -> Result<Summary> {
    let mut config = ValidatorConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    tracing::info!(?config, "effective configuration");

    for path in &cli.paths {
        if path.as_os_str() != STDIN_PATH && !path.exists() {
            return Err(ValidatorError::MissingPath(path.clone()).into());
        }
    }

    let files = find_files(&cli.paths, &cli.exclude);
    if files.is_empty() {
        return Err(ValidatorError::NothingToScan.into());
    }
    tracing::info!(count = files.len(), "files to scan");

    let mut summary = Summary {
        files: files.len(),
        problems: 0,
        violations: Vec::new(),
    };
    for file in &files {
        tracing::debug!(file = %file.display(), "scanning");
        match read_source(file, config.max_file_size) {
            Ok(content) => {
                let report = validate_document(file, &content, &config);
                summary.problems += report.problems;
                summary.violations.extend(report.violations);
            }
            Err(violation) => summary.violations.push(violation),
        }
    }

    if config.json {
        print_json_results(&summary)?;
    } else {
        print_results(&summary);
    }
    Ok(summary)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(summary) if summary.violations.is_empty() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn print_json_results(summary: &Summary) -> Result<()> {
    let output = serde_json::json!({
        "files_scanned": summary.files,
        "problems_checked": summary.problems,
        "violations_count": summary.violations.len(),
        "ok": summary.violations.is_empty(),
        "violations": summary.violations,
    });
    let json = serde_json::to_string_pretty(&output).context("serializing report")?;
    println!("{json}");
    Ok(())
}

fn print_results(summary: &Summary) {
    println!();
    println!("{}", "=".repeat(80));
    println!("  {}", "PROBLEM DETAILS VALIDATOR".bold());
    println!("{}", "=".repeat(80));
    println!();
    println!("  Files scanned:    {}", summary.files);
    println!("  Problems checked: {}", summary.problems);
    println!("  Violations found: {}", summary.violations.len());
    println!();

    if !summary.violations.is_empty() {
        println!("{}", "-".repeat(80));
        println!("  {}", "VIOLATIONS".red().bold());
        println!("{}", "-".repeat(80));
        for violation in &summary.violations {
            println!("{}", violation.format_human_readable().red());
        }
        println!();
    }

    println!("{}", "=".repeat(80));
    if summary.violations.is_empty() {
        println!(
            "{}",
            format!("All {} problem documents passed validation", summary.problems).green()
        );
    } else {
        println!(
            "{}",
            format!("{} violations found", summary.violations.len()).red()
        );
        println!();
        println!("  To fix:");
        println!("    - `status` must be an integer HTTP status code (100-999)");
        println!("    - `type` and `instance` must be absolute URIs (e.g. https://example.com/probs/x)");
        println!("    - Leave `type` out (or empty) for about:blank problems");
    }
    println!("{}", "=".repeat(80));
}
