use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{LoggerConfig, Options};
use crate::env::{EnvReader, SystemEnv};
use crate::format::{self, OutputType};
use crate::level::{MinLevel, Severity};
use crate::message::{Message, Params};
use crate::sink::{ConsoleSink, StdStreams};
use crate::timestamp::{self, TimeStyle};

/// The level-aware formatter: holds the mutable configuration and funnels
/// every severity entry point through one emit pipeline
/// (gate → timestamp → render → route).
///
/// Logging never fails observably; a failed write is dropped. Setters take
/// `&mut self`, so configure before sharing — typically once at startup.
pub struct Logger {
    config: LoggerConfig,
    sink: Box<dyn ConsoleSink>,
}

impl Logger {
    /// Logger with defaults, reading the process environment for the
    /// development flag.
    pub fn new() -> Self {
        Self::with_env(&SystemEnv)
    }

    /// Logger with defaults derived from an injected environment.
    pub fn with_env(env: &dyn EnvReader) -> Self {
        Self {
            config: LoggerConfig::from_env(env),
            sink: Box::new(StdStreams),
        }
    }

    /// Logger with the given partial options applied over the defaults.
    pub fn from_options(options: &Options) -> Self {
        let mut logger = Self::new();
        options.apply(&mut logger.config);
        logger
    }

    /// Replace the output sink. Mainly a test seam.
    pub fn with_sink(mut self, sink: impl ConsoleSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn set_output(&mut self, output: OutputType) -> &mut Self {
        self.config.output = output;
        self
    }

    pub fn set_level(&mut self, level: MinLevel) -> &mut Self {
        self.config.level = level;
        self
    }

    pub fn set_colorize(&mut self, colorize: bool) -> &mut Self {
        self.config.colorize = colorize;
        self
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.config.separator = separator.into();
        self
    }

    pub fn set_time(&mut self, time: TimeStyle) -> &mut Self {
        self.config.time = time;
        self
    }

    /// Bulk setter; see [`Options::apply`] for the merge rule.
    pub fn set_options(&mut self, options: &Options) -> &mut Self {
        options.apply(&mut self.config);
        self
    }

    pub fn debug(&self, message: impl Into<Message>) {
        self.emit(Severity::Debug, message.into(), &Params::new());
    }

    pub fn debug_with(&self, message: impl Into<Message>, params: Params) {
        self.emit(Severity::Debug, message.into(), &params);
    }

    pub fn info(&self, message: impl Into<Message>) {
        self.emit(Severity::Info, message.into(), &Params::new());
    }

    pub fn info_with(&self, message: impl Into<Message>, params: Params) {
        self.emit(Severity::Info, message.into(), &params);
    }

    pub fn warn(&self, message: impl Into<Message>) {
        self.emit(Severity::Warn, message.into(), &Params::new());
    }

    pub fn warn_with(&self, message: impl Into<Message>, params: Params) {
        self.emit(Severity::Warn, message.into(), &params);
    }

    pub fn error(&self, message: impl Into<Message>) {
        self.emit(Severity::Error, message.into(), &Params::new());
    }

    pub fn error_with(&self, message: impl Into<Message>, params: Params) {
        self.emit(Severity::Error, message.into(), &params);
    }

    fn emit(&self, severity: Severity, message: Message, params: &Params) {
        if !self.config.level.allows(severity) {
            return;
        }

        let stamp = timestamp::now(self.config.time);
        let line = format::render(&self.config, &stamp, severity, &message, params);
        let _ = self.sink.write_line(severity.channel(), &line);
    }

    /// Install this logger as the global backend for the `log` crate
    /// macros. Records arrive without params; trace records are treated
    /// as debug.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let max = level_filter(self.config.level);
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn severity_of(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warn,
        log::Level::Info => Severity::Info,
        log::Level::Debug | log::Level::Trace => Severity::Debug,
    }
}

fn level_filter(level: MinLevel) -> LevelFilter {
    match level {
        MinLevel::Debug => LevelFilter::Debug,
        MinLevel::Info => LevelFilter::Info,
        MinLevel::Silent => LevelFilter::Off,
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.config.level.allows(severity_of(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        self.emit(
            severity_of(record.level()),
            Message::from(record.args().to_string()),
            &Params::new(),
        );
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapEnv, ENV_MODE};
    use crate::params;
    use crate::sink::{Channel, MemorySink};

    fn capture() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::with_env(&MapEnv::new()).with_sink(sink.clone());
        (logger, sink)
    }

    #[test]
    fn test_construction_honors_environment() {
        let dev = Logger::with_env(&MapEnv::new().set(ENV_MODE, "development"));
        assert_eq!(dev.config().level, MinLevel::Debug);

        let prod = Logger::with_env(&MapEnv::new());
        assert_eq!(prod.config().level, MinLevel::Info);
    }

    #[test]
    fn test_chainable_setters() {
        let (mut logger, _sink) = capture();
        logger
            .set_output(OutputType::Json)
            .set_level(MinLevel::Debug)
            .set_colorize(false)
            .set_separator(";")
            .set_time(TimeStyle::Local);

        let config = logger.config();
        assert_eq!(config.output, OutputType::Json);
        assert_eq!(config.level, MinLevel::Debug);
        assert!(!config.colorize);
        assert_eq!(config.separator, ";");
        assert_eq!(config.time, TimeStyle::Local);
    }

    #[test]
    fn test_silent_emits_nothing() {
        for output in [OutputType::Simple, OutputType::Json] {
            for colorize in [false, true] {
                let (mut logger, sink) = capture();
                logger
                    .set_level(MinLevel::Silent)
                    .set_output(output)
                    .set_colorize(colorize);

                logger.debug("d");
                logger.info("i");
                logger.warn("w");
                logger.error("e");

                assert!(sink.is_empty());
            }
        }
    }

    #[test]
    fn test_info_floor_gates_only_debug() {
        let (logger, sink) = capture();

        logger.debug("hidden");
        assert!(sink.is_empty());

        logger.info("a");
        logger.warn("b");
        logger.error("c");
        assert_eq!(sink.lines(Channel::Standard).len(), 1);
        assert_eq!(sink.lines(Channel::Error).len(), 2);
    }

    #[test]
    fn test_debug_floor_allows_everything() {
        let (mut logger, sink) = capture();
        logger.set_level(MinLevel::Debug);

        logger.debug("a");
        logger.info("b");
        logger.warn("c");
        logger.error("d");

        assert_eq!(sink.lines(Channel::Standard).len(), 2);
        assert_eq!(sink.lines(Channel::Error).len(), 2);
    }

    #[test]
    fn test_channel_routing() {
        let (mut logger, sink) = capture();
        logger.set_level(MinLevel::Debug);

        logger.debug("out");
        logger.info("out");
        assert!(sink.lines(Channel::Error).is_empty());

        sink.clear();
        logger.warn("err");
        logger.error("err");
        assert!(sink.lines(Channel::Standard).is_empty());
        assert_eq!(sink.lines(Channel::Error).len(), 2);
    }

    #[test]
    fn test_lines_end_with_platform_eol() {
        let (logger, sink) = capture();
        logger.info("done");

        let lines = sink.lines(Channel::Standard);
        assert!(lines[0].ends_with(crate::sink::EOL));
    }

    #[test]
    fn test_simple_line_shape() {
        let (mut logger, sink) = capture();
        logger.set_colorize(false);

        logger.info_with("ready", params! { "port" => 8080 });

        let line = sink.lines(Channel::Standard).remove(0);
        let body = line.trim_end_matches(crate::sink::EOL);
        // <iso timestamp> [info]   ready\tport -> 8080
        let pattern =
            regex::Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z \[info\]   ready\tport -> 8080$")
                .unwrap();
        assert!(pattern.is_match(body), "unexpected line: {}", body);
    }

    #[test]
    fn test_json_line_parses_and_round_trips() {
        let (mut logger, sink) = capture();
        logger.set_output(OutputType::Json).set_colorize(true);

        logger.error_with("boom", params! { "code" => 7 });

        let line = sink.lines(Channel::Error).remove(0);
        let body = line.trim_end_matches(crate::sink::EOL);
        assert!(!body.contains('\x1b'));

        let object: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(object["level"], "error");
        assert_eq!(object["message"], "boom");
        assert_eq!(object["params"], serde_json::json!({"code": 7}));
    }

    #[test]
    fn test_colorize_toggle_changes_only_level_segment() {
        let (mut logger, sink) = capture();
        logger.set_time(TimeStyle::Local).set_colorize(true);
        logger.warn("look");
        logger.set_colorize(false);
        logger.warn("look");

        let lines = sink.lines(Channel::Error);
        let stripped = lines[0].replace("\x1b[33m", "").replace("\x1b[0m", "");
        // Timestamps differ at second granularity only rarely; compare tails
        let tail = |line: &str| line.split(" [").nth(1).map(|t| t.to_string());
        assert_eq!(tail(&stripped), tail(&lines[1]));
        assert!(lines[0].contains("\x1b[33m"));
        assert!(!lines[1].contains('\x1b'));
    }

    #[test]
    fn test_from_options_applies_over_defaults() {
        let options = Options {
            output: Some(OutputType::Json),
            level: Some(MinLevel::Debug),
            ..Options::default()
        };

        let logger = Logger::from_options(&options);
        assert_eq!(logger.config().output, OutputType::Json);
        assert_eq!(logger.config().level, MinLevel::Debug);
        assert_eq!(logger.config().separator, "|");
    }

    #[test]
    fn test_log_facade_routes_through_logger() {
        let sink = MemorySink::new();
        let mut logger = Logger::with_env(&MapEnv::new());
        logger.set_colorize(false);

        let installed = logger.with_sink(sink.clone()).install();
        // A second install in the same test process would fail; either way
        // the facade state is usable below only when this one won.
        if installed.is_ok() {
            log::info!("via facade");
            log::trace!("gated like debug");

            let lines = sink.lines(Channel::Standard);
            assert_eq!(lines.len(), 1);
            assert!(lines[0].contains("[info]"));
            assert!(lines[0].contains("via facade"));
            assert!(sink.lines(Channel::Error).is_empty());
        }
    }
}
