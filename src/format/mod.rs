pub mod colors;
pub mod json;
pub mod simple;

pub use colors::ColorScheme;

use serde::{Deserialize, Serialize};

use crate::config::LoggerConfig;
use crate::level::Severity;
use crate::message::{Message, Params};

/// Output format of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Simple,
    Json,
}

impl Default for OutputType {
    fn default() -> Self {
        OutputType::Simple
    }
}

/// Render one line according to the configured output type.
pub fn render(
    config: &LoggerConfig,
    timestamp: &str,
    severity: Severity,
    message: &Message,
    params: &Params,
) -> String {
    match config.output {
        OutputType::Json => json::render(timestamp, severity, message, params),
        OutputType::Simple => simple::render(
            timestamp,
            severity,
            message,
            params,
            &config.separator,
            config.colorize,
        ),
    }
}
