//! Where the lenient parse entry point reports the errors it swallows.
//!
//! [`crate::parse_or_default`] never fails: on malformed input it hands the
//! [`ParseError`] to a [`DiagnosticSink`] and returns `Null`. The default sink
//! logs through `tracing`; callers that want to inspect or count diagnostics
//! pass their own to [`crate::parse_or_default_with`].

use crate::error::ParseError;

/// Receives one report per failed lenient parse.
pub trait DiagnosticSink {
    fn report(&mut self, error: &ParseError);
}

/// Emits each diagnostic as a `warn`-level tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, error: &ParseError) {
        tracing::warn!(
            line = error.line,
            column = error.column,
            "JSON parse failed: {}",
            error.message
        );
    }
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<ParseError> {
    fn report(&mut self, error: &ParseError) {
        self.push(error.clone());
    }
}
