//! Optional TOML configuration for the `payroll` binary.
//!
//! Every section and key may be omitted; missing values fall back to
//! [`AppConfig::default`]. Unknown keys are rejected so that typos surface
//! instead of being silently ignored.
//!
//! ```toml
//! [logging]
//! level = "info"          # any EnvFilter directive
//! file = "payroll.log"    # optional, appended to
//!
//! [salary]
//! total_days_in_cycle = 30
//!
//! [tax]
//! age_bracket = "U60"     # U60, 60-80 or 80+
//! income_includes_salary = true
//!
//! [output]
//! format = "text"         # or "json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use payroll_core::{AgeBracket, DEFAULT_DAYS_IN_CYCLE};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use crate::report::OutputFormat;

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "PAYROLL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub salary: SalaryConfig,
    pub tax: TaxConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalaryConfig {
    #[serde(default = "defaults::total_days_in_cycle")]
    pub total_days_in_cycle: i32,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            total_days_in_cycle: defaults::total_days_in_cycle(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaxConfig {
    #[serde(deserialize_with = "age_bracket_code")]
    pub age_bracket: AgeBracket,
    pub income_includes_salary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

mod defaults {
    pub fn log_level() -> String {
        "info".to_string()
    }

    pub fn total_days_in_cycle() -> i32 {
        super::DEFAULT_DAYS_IN_CYCLE
    }
}

/// Accepts the same codes as the command line (`U60`, `60-80`, `80+`).
fn age_bracket_code<'de, D>(deserializer: D) -> Result<AgeBracket, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    AgeBracket::parse(&code).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "unrecognised age bracket '{code}' (expected U60, 60-80 or 80+)"
        ))
    })
}

impl AppConfig {
    /// Loads the config at `path`, or returns the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}
