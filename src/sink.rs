use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Console channel a rendered line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Standard,
    Error,
}

#[cfg(windows)]
pub const EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const EOL: &str = "\n";

/// Destination for rendered lines. The logger appends the platform EOL and
/// ignores write failures; sinks do not retry or report back.
pub trait ConsoleSink: Send + Sync {
    fn write_line(&self, channel: Channel, line: &str) -> io::Result<()>;
}

/// The process streams: `Standard` goes to stdout, `Error` to stderr.
pub struct StdStreams;

impl ConsoleSink for StdStreams {
    fn write_line(&self, channel: Channel, line: &str) -> io::Result<()> {
        match channel {
            Channel::Standard => {
                let mut stream = io::stdout().lock();
                stream.write_all(line.as_bytes())?;
                stream.write_all(EOL.as_bytes())
            }
            Channel::Error => {
                let mut stream = io::stderr().lock();
                stream.write_all(line.as_bytes())?;
                stream.write_all(EOL.as_bytes())
            }
        }
    }
}

/// In-memory sink that records written lines per channel. Cloning shares
/// the underlying buffer, so tests can keep a handle while the logger owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written to the given channel, EOL included.
    pub fn lines(&self, channel: Channel) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| {
                lines
                    .iter()
                    .filter(|(written, _)| *written == channel)
                    .map(|(_, line)| line.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().map(|lines| lines.is_empty()).unwrap_or(true)
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl ConsoleSink for MemorySink {
    fn write_line(&self, channel: Channel, line: &str) -> io::Result<()> {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((channel, format!("{}{}", line, EOL)));
        }
        Ok(())
    }
}
