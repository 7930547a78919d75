//! Console stream used by `console_print` and the toggle announcement.

use std::io::{self, Write};

/// Line-oriented console output.
pub trait Console: Send + Sync {
    /// Write `line` followed by a line terminator.
    fn print_line(&self, line: &str);
}

/// Console backed by the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        // Broken pipes and closed stdout are ignored.
        let _ = writeln!(out, "{}", line);
    }
}
