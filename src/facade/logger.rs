//! `LogFacade`: gate, tag composition and forwarding.

use std::sync::Arc;

use crate::config::FacadeConfig;
use crate::facade::cause::Cause;
use crate::facade::flag::EnableFlag;
use crate::sink::{Console, Level, LogRecord, LogSink, StdoutConsole, TracingSink};

/// Gated logger forwarding to a sink and a console.
pub struct LogFacade {
    prefix: String,
    flag: EnableFlag,
    sink: Arc<dyn LogSink>,
    console: Arc<dyn Console>,
}

impl LogFacade {
    /// Create a facade writing to `tracing` and stdout.
    pub fn new(config: &FacadeConfig) -> Self {
        Self::with_parts(config, Arc::new(TracingSink::new()), Arc::new(StdoutConsole))
    }

    /// Create a facade with explicit sink and console.
    pub fn with_parts(
        config: &FacadeConfig,
        sink: Arc<dyn LogSink>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            prefix: config.prefix.clone(),
            flag: EnableFlag::new(config.initial_enabled()),
            sink,
            console,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_enabled(&self) -> bool {
        self.flag.is_enabled()
    }

    /// Flip the switch and announce the new state.
    ///
    /// The announcement goes to the console whether logging ends up on or off.
    pub fn toggle(&self) -> bool {
        let enabled = self.flag.toggle();
        self.console.print_line(&format!("enableLog:{}", enabled));
        enabled
    }

    pub fn debug(&self, tag: Option<&str>, message: &str) {
        self.emit(Level::Debug, tag, message);
    }

    pub fn error(&self, tag: Option<&str>, message: &str) {
        self.emit(Level::Error, tag, message);
    }

    /// Log an error record labelled after the cause's kind, carrying the cause.
    pub fn error_cause(&self, tag: Option<&str>, cause: &Cause) {
        if !self.is_enabled() {
            return;
        }
        let record = LogRecord::new(Level::Error, self.compose_tag(tag), cause.label().to_string())
            .with_cause(cause.clone());
        self.sink.emit(&record);
    }

    /// Write `message` to the console as-is.
    pub fn console_print(&self, message: &str) {
        if self.is_enabled() {
            self.console.print_line(message);
        }
    }

    fn emit(&self, level: Level, tag: Option<&str>, message: &str) {
        if !self.is_enabled() {
            return;
        }
        let record = LogRecord::new(level, self.compose_tag(tag), message.to_string());
        self.sink.emit(&record);
    }

    fn compose_tag(&self, tag: Option<&str>) -> String {
        let tag = tag.unwrap_or("");
        let mut out = String::with_capacity(self.prefix.len() + tag.len());
        out.push_str(&self.prefix);
        out.push_str(tag);
        out
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::new(&FacadeConfig::default())
    }
}

impl std::fmt::Debug for LogFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogFacade")
            .field("prefix", &self.prefix)
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}
