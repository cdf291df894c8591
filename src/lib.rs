//! Leveled console logger with two output formats: a human-readable line
//! or a single-line JSON object, routed to stdout or stderr by severity.
//!
//! ```no_run
//! let mut logger = linelog::Logger::new();
//! logger.set_level(linelog::MinLevel::Debug);
//! logger.info_with("server started", linelog::params! { "port" => 8080 });
//! ```

pub mod config;
pub mod env;
pub mod format;
pub mod level;
pub mod logger;
pub mod message;
pub mod sink;
pub mod timestamp;

pub use config::{ConfigError, LoggerConfig, Options};
pub use env::{EnvReader, MapEnv, SystemEnv};
pub use format::OutputType;
pub use level::{MinLevel, Severity};
pub use logger::Logger;
pub use message::{Message, Params};
pub use sink::{Channel, ConsoleSink, MemorySink, StdStreams};
pub use timestamp::TimeStyle;

use once_cell::sync::Lazy;
use std::sync::RwLock;

// Shared process-wide instance behind the free functions below
static GLOBAL: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(Logger::new()));

/// Reconfigure the shared logger. Expected to be called once at startup.
pub fn configure(options: &Options) {
    if let Ok(mut logger) = GLOBAL.write() {
        logger.set_options(options);
    }
}

/// Replace the shared logger wholesale.
pub fn init(logger: Logger) {
    if let Ok(mut shared) = GLOBAL.write() {
        *shared = logger;
    }
}

pub fn debug(message: impl Into<Message>) {
    if let Ok(logger) = GLOBAL.read() {
        logger.debug(message);
    }
}

pub fn debug_with(message: impl Into<Message>, params: Params) {
    if let Ok(logger) = GLOBAL.read() {
        logger.debug_with(message, params);
    }
}

pub fn info(message: impl Into<Message>) {
    if let Ok(logger) = GLOBAL.read() {
        logger.info(message);
    }
}

pub fn info_with(message: impl Into<Message>, params: Params) {
    if let Ok(logger) = GLOBAL.read() {
        logger.info_with(message, params);
    }
}

pub fn warn(message: impl Into<Message>) {
    if let Ok(logger) = GLOBAL.read() {
        logger.warn(message);
    }
}

pub fn warn_with(message: impl Into<Message>, params: Params) {
    if let Ok(logger) = GLOBAL.read() {
        logger.warn_with(message, params);
    }
}

pub fn error(message: impl Into<Message>) {
    if let Ok(logger) = GLOBAL.read() {
        logger.error(message);
    }
}

pub fn error_with(message: impl Into<Message>, params: Params) {
    if let Ok(logger) = GLOBAL.read() {
        logger.error_with(message, params);
    }
}
