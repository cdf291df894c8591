use crate::level::Severity;

/// ANSI foreground codes for the bracketed level segment.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub debug: &'static str,
    pub info: &'static str,
    pub warn: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

impl ColorScheme {
    /// Escape codes when colorizing, empty strings otherwise.
    pub fn for_mode(colorize: bool) -> Self {
        if colorize {
            Self {
                debug: "\x1b[34m", // Blue
                info: "\x1b[32m",  // Green
                warn: "\x1b[33m",  // Yellow
                error: "\x1b[31m", // Red
                reset: "\x1b[0m",
            }
        } else {
            Self {
                debug: "",
                info: "",
                warn: "",
                error: "",
                reset: "",
            }
        }
    }

    /// Wrap the plain level label in this scheme's codes.
    pub fn paint(&self, severity: Severity) -> String {
        let code = match severity {
            Severity::Debug => self.debug,
            Severity::Info => self.info,
            Severity::Warn => self.warn,
            Severity::Error => self.error,
        };

        format!("{}{}{}", code, severity.label(), self.reset)
    }
}
