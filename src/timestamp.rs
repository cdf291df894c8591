use chrono::{Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStyle {
    /// UTC RFC 3339 with millisecond precision, e.g. `2026-08-04T09:15:02.731Z`.
    Iso,
    /// Local wall-clock time, e.g. `2026-08-04 11:15:02`.
    Local,
}

impl Default for TimeStyle {
    fn default() -> Self {
        TimeStyle::Iso
    }
}

/// Capture the current time as a string. Called once per emitted line.
pub fn now(style: TimeStyle) -> String {
    match style {
        TimeStyle::Iso => Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        TimeStyle::Local => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}
