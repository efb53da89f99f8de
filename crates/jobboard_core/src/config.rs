//! Admin panel configuration.
//!
//! # Responsibility
//! - Collect the knobs that shape a panel: id policy, company reference
//!   checks, sample data and logging.
//! - Load them from JSON or from `JOBBOARD_*` environment variables.
//!
//! # Invariants
//! - Every field has a default, so an empty source is a valid config.
//! - Unknown enum values are rejected, never silently mapped.

use crate::logging::default_log_level;
use crate::store::IdPolicy;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prefix of the environment variables read by `PanelConfig::from_env`.
pub const ENV_PREFIX: &str = "JOBBOARD";

/// How job writes treat `company_id` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    /// Store `company_id` verbatim without looking at companies.
    #[default]
    Unchecked,
    /// Reject job add/edit whose `company_id` is not a stored company.
    Enforce,
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// JSON source could not be parsed.
    Json(serde_json::Error),
    /// Environment source could not be read or deserialized.
    Source(config::ConfigError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid panel config: {err}"),
            Self::Source(err) => write!(f, "invalid panel environment: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Source(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(value: config::ConfigError) -> Self {
        Self::Source(value)
    }
}

/// Settings for building an `AdminPanel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub id_policy: IdPolicy,
    pub reference_policy: ReferencePolicy,
    /// Start with the sample companies and jobs.
    pub seed_sample_data: bool,
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` keeps logging off.
    pub log_dir: Option<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            reference_policy: ReferencePolicy::default(),
            seed_sample_data: true,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl PanelConfig {
    /// Parses a JSON object; missing keys take defaults.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str::<Self>(source)?.normalized())
    }

    /// Reads `JOBBOARD_*` variables (`JOBBOARD_ID_POLICY`, ...) over the
    /// defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Reads settings from an explicit environment source.
    ///
    /// Keys are the variable names without the prefix, matched case-insensitively.
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.log_level = self.log_level.trim().to_string();
        self.log_dir = self
            .log_dir
            .as_deref()
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(str::to_string);
        self
    }
}
