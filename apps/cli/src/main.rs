//! Compare two values from the command line
//!
//! Usage:
//!   equate <EXPECTED> <ACTUAL> [--ignore-case] [--delta <f64>] [--canonicalize] [--config <path>] [--json]
//!
//! Exit status is 0 when the values are equal, 1 when they are not, and 2 on
//! any other error.

mod config;
mod input;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use equate_comparator::{AssertionError, ComparisonFailure, ComparisonOptions, Registry};
use equate_value::Exporter;
use serde_json::json;

use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "equate", version)]
#[command(about = "Check whether two values are equal under loose comparison rules")]
struct Args {
    /// Expected value (JSON, or a bare string)
    expected: String,

    /// Actual value (JSON, or a bare string)
    actual: String,

    /// Compare strings case-insensitively
    #[arg(long)]
    ignore_case: bool,

    /// Numeric tolerance for comparators that use one
    #[arg(long)]
    delta: Option<f64>,

    /// Ignore element order for comparators that support it
    #[arg(long)]
    canonicalize: bool,

    /// Configuration file (defaults to ./equate.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Flags given on the command line win over configured options.
    fn options(&self, configured: ComparisonOptions) -> ComparisonOptions {
        let mut options = configured;
        if self.ignore_case {
            options.ignore_case = true;
        }
        if self.canonicalize {
            options.canonicalize = true;
        }
        if let Some(delta) = self.delta {
            options.delta = delta;
        }
        options
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the two values are equal.
fn run(args: &Args) -> Result<bool> {
    let settings = Settings::load(args.config.as_deref()).context("Failed to load configuration")?;
    logging::init_logging(&settings.logging);

    let options = args.options(settings.options);
    tracing::debug!(?options, "Comparison options");

    let expected = input::parse_value(&args.expected);
    let actual = input::parse_value(&args.actual);

    let registry = Registry::global();
    match registry.assert_equals(&expected, &actual, &options) {
        Ok(()) => {
            if args.json {
                println!("{}", json!({ "equal": true }));
            } else {
                println!("OK");
            }
            Ok(true)
        }
        Err(AssertionError::Failure(failure)) => {
            if args.json {
                let report = failure_report(&failure, registry.exporter());
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("Failed to encode report")?
                );
            } else {
                println!("{failure}");
            }
            Ok(false)
        }
        Err(AssertionError::Registry(e)) => Err(e.into()),
    }
}

fn failure_report(failure: &ComparisonFailure, exporter: &dyn Exporter) -> serde_json::Value {
    json!({
        "equal": false,
        "message": failure.message(),
        "expected": exporter.export(failure.expected()),
        "actual": exporter.export(failure.actual()),
        "expected_as_string": failure.expected_as_string(),
        "actual_as_string": failure.actual_as_string(),
        "identical": failure.identical(),
        "diff": failure.diff(),
    })
}
