//! Layered settings: built-in defaults, an optional TOML file, then
//! `EQUATE__*` environment variables.

use std::path::Path;

use anyhow::Context;
use config::{Config, Environment, File};
use equate_comparator::ComparisonOptions;
use serde::Deserialize;

const DEFAULT_FILE: &str = "equate";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub options: ComparisonOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for the equate crates when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Load settings. An explicit `path` must exist; otherwise `equate.toml`
    /// in the working directory is read if present.
    ///
    /// Environment variables take precedence over the file, for example
    /// `EQUATE__LOGGING__LEVEL=debug` or `EQUATE__OPTIONS__IGNORE_CASE=true`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with(path, environment())
    }

    fn load_with(path: Option<&Path>, environment: Environment) -> anyhow::Result<Self> {
        let defaults = Settings::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .set_default("options.delta", defaults.options.delta)?
            .set_default("options.canonicalize", defaults.options.canonicalize)?
            .set_default("options.ignore_case", defaults.options.ignore_case)?
            .add_source(file)
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("EQUATE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
