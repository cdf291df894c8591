use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::env::{self, EnvReader};
use crate::format::OutputType;
use crate::level::MinLevel;
use crate::timestamp::TimeStyle;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse options file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Full logger configuration. Fields are independent; no invariant ties
/// them together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub output: OutputType,
    pub level: MinLevel,
    pub colorize: bool,
    pub separator: String,
    pub time: TimeStyle,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            output: OutputType::Simple,
            level: MinLevel::Info,
            colorize: true,
            separator: "|".to_string(),
            time: TimeStyle::Iso,
        }
    }
}

impl LoggerConfig {
    /// Defaults, with the minimum level picked from the environment:
    /// debug in development mode, info otherwise.
    pub fn from_env(env: &dyn EnvReader) -> Self {
        let level = if env::is_development(env) {
            MinLevel::Debug
        } else {
            MinLevel::Info
        };

        Self {
            level,
            ..Self::default()
        }
    }
}

/// Partial configuration for the bulk setter and the options file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub output: Option<OutputType>,
    pub level: Option<MinLevel>,
    pub colorize: Option<bool>,
    pub separator: Option<String>,
    pub time: Option<TimeStyle>,
}

impl Options {
    /// Merge into an existing configuration. Omitted fields keep their
    /// previous value, and so do `Some(false)` for colorize and `Some("")`
    /// for separator: the merge only applies truthy-provided fields.
    pub fn apply(&self, config: &mut LoggerConfig) {
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(level) = self.level {
            config.level = level;
        }
        if self.colorize == Some(true) {
            config.colorize = true;
        }
        if let Some(separator) = &self.separator {
            if !separator.is_empty() {
                config.separator = separator.clone();
            }
        }
        if let Some(time) = self.time {
            config.time = time;
        }
    }

    /// Load options from the file named by `LINELOG_CONFIG`, if any.
    /// No variable or no file yields empty options.
    pub fn load(env: &dyn EnvReader) -> Result<Options, ConfigError> {
        match env.var(env::ENV_CONFIG) {
            Some(path) if Path::new(&path).exists() => Self::load_from(Path::new(&path)),
            _ => Ok(Options::default()),
        }
    }

    /// Load options from a YAML file.
    pub fn load_from(path: &Path) -> Result<Options, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}
