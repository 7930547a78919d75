//! Error causes attached to error records.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Category of a cause. Decides the label used as the record message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CauseKind {
    /// Recoverable failure, labelled "Exception".
    Exception,
    /// Fatal condition the program is not expected to handle, labelled "Error".
    Error,
}

impl CauseKind {
    pub fn label(self) -> &'static str {
        match self {
            CauseKind::Exception => "Exception",
            CauseKind::Error => "Error",
        }
    }
}

/// An error value plus the trace captured where it was wrapped.
///
/// Cloning is cheap and keeps pointing at the same error object.
#[derive(Debug, Clone)]
pub struct Cause {
    kind: CauseKind,
    error: Arc<dyn Error + Send + Sync + 'static>,
    backtrace: Arc<Backtrace>,
}

impl Cause {
    /// Wrap a shared error with an explicit category.
    ///
    /// The backtrace follows `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`.
    pub fn new(kind: CauseKind, error: Arc<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            kind,
            error,
            backtrace: Arc::new(Backtrace::capture()),
        }
    }

    /// A recoverable failure.
    pub fn exception<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(CauseKind::Exception, Arc::new(error))
    }

    /// A fatal condition.
    pub fn fatal<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(CauseKind::Error, Arc::new(error))
    }

    pub fn kind(&self) -> CauseKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// The wrapped error, shared with whoever created the cause.
    pub fn error(&self) -> &Arc<dyn Error + Send + Sync + 'static> {
        &self.error
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Display strings of the error and each of its sources, outermost first.
    pub fn chain(&self) -> Vec<String> {
        let mut out = vec![self.error.to_string()];
        let mut source = self.error.source();
        while let Some(err) = source {
            out.push(err.to_string());
            source = err.source();
        }
        out
    }

    /// Multi-line diagnostic: source chain, then backtrace when captured.
    pub fn render_trace(&self) -> String {
        let chain = self.chain();
        let mut out = String::new();
        if let Some((first, rest)) = chain.split_first() {
            out.push_str(first);
            for err in rest {
                out.push_str("\nCaused by: ");
                out.push_str(err);
            }
        }
        if self.backtrace.status() == BacktraceStatus::Captured {
            out.push_str("\nStack backtrace:\n");
            out.push_str(&self.backtrace.to_string());
        }
        out
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.error)
    }
}
