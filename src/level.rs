use serde::{Deserialize, Serialize};

use crate::sink::Channel;

/// Severity attached to a single logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Plain lowercase label used in both output formats.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Which console channel lines of this severity go to.
    pub fn channel(&self) -> Channel {
        match self {
            Severity::Debug | Severity::Info => Channel::Standard,
            Severity::Warn | Severity::Error => Channel::Error,
        }
    }
}

/// Configured floor for emission. `Silent` suppresses everything,
/// `Debug` allows everything, `Info` allows everything except Debug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinLevel {
    Debug,
    Info,
    Silent,
}

impl MinLevel {
    /// Decide whether a call of the given severity is emitted.
    ///
    /// Only Debug participates in the Debug/Info distinction; Warn and
    /// Error pass whenever the logger is not silent.
    pub fn allows(&self, severity: Severity) -> bool {
        if *self == MinLevel::Silent {
            return false;
        }

        if severity == Severity::Debug && *self != MinLevel::Debug {
            return false;
        }

        true
    }
}

impl Default for MinLevel {
    fn default() -> Self {
        MinLevel::Info
    }
}
