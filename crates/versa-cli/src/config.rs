//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use versa_domain::{MaterializeConfig, Materialization, DEFAULT_MAX_HYPOTHESES};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Learner settings
    #[serde(default)]
    pub learner: LearnerSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Version space settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerSettings {
    /// Materialization strategy
    #[serde(default)]
    pub materialization: MaterializationMode,

    /// Upper bound on materialized hypotheses
    #[serde(default = "default_max_hypotheses")]
    pub max_hypotheses: usize,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Materialization strategy as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterializationMode {
    /// Boundaries plus single-position hybrids
    #[default]
    Hybrid,
    /// Every hypothesis between the boundaries
    Exact,
}

impl From<MaterializationMode> for Materialization {
    fn from(mode: MaterializationMode) -> Self {
        match mode {
            MaterializationMode::Hybrid => Materialization::Hybrid,
            MaterializationMode::Exact => Materialization::Exact,
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".versa").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    ///
    /// Values are not validated here; see [`Config::apply_overrides`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Apply command-line overrides, then validate the result.
    pub fn apply_overrides(
        &mut self,
        materialization: Option<MaterializationMode>,
        max_hypotheses: Option<usize>,
    ) -> Result<()> {
        if let Some(materialization) = materialization {
            self.learner.materialization = materialization;
        }
        if let Some(max_hypotheses) = max_hypotheses {
            self.learner.max_hypotheses = max_hypotheses;
        }
        self.validate()
    }

    /// Check values that deserialize cleanly but make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.learner.max_hypotheses == 0 {
            return Err(CliError::Config(
                "learner.max_hypotheses must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Materialization settings for the learning core.
    pub fn materialize_config(&self) -> MaterializeConfig {
        MaterializeConfig {
            materialization: self.learner.materialization.into(),
            max_hypotheses: self.learner.max_hypotheses,
        }
    }
}

impl Default for LearnerSettings {
    fn default() -> Self {
        Self {
            materialization: MaterializationMode::Hybrid,
            max_hypotheses: DEFAULT_MAX_HYPOTHESES,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_max_hypotheses() -> usize {
    DEFAULT_MAX_HYPOTHESES
}
