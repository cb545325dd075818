//! Layered configuration for the demo binary.
//!
//! Precedence (later wins): defaults -> YAML file -> env (`CALCULATOR__*`) -> CLI overrides.

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, nested keys are separated by `__`.
/// Example: `CALCULATOR__DEMO__GREETING_NAME=Ferris`.
pub const ENV_PREFIX: &str = "CALCULATOR__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
        }
    }
}

/// Inputs of the `demo` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub greeting_name: String,
    pub numbers: Vec<f64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            greeting_name: "World".to_owned(),
            numbers: vec![1.0, 2.0, 3.0, 4.0, 5.0],
        }
    }
}

impl AppConfig {
    /// Load the configuration from defaults, an optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is given but is not a file, or if any layer
    /// fails to parse or contains unknown keys.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// Apply `-v` count on top of the loaded level (-v info, -vv debug, -vvv trace).
    pub fn apply_cli_overrides(&mut self, verbose: u8) {
        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.logging.level);
    }

    /// Render the effective configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}
