//! Script log output, forwarded to the engine's log sink.

use crate::host::{EngineHost, LogLevel};

/// Writes script messages through the `Log` boundary call.
#[derive(Clone, Copy)]
pub struct Log<'h> {
    host: &'h dyn EngineHost,
}

impl<'h> Log<'h> {
    #[must_use]
    pub fn new(host: &'h dyn EngineHost) -> Self {
        Self { host }
    }

    /// Log at info level.
    pub fn log(&self, message: &str) {
        self.host.log(LogLevel::Info, message);
    }

    pub fn info(&self, message: &str) {
        self.log(message);
    }

    pub fn warning(&self, message: &str) {
        self.host.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.host.log(LogLevel::Error, message);
    }
}
