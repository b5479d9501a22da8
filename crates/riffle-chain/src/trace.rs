//! Trace bracket — a tracing span around each record's processing.

use riffle_api::{ProcessError, Processor, Record};
use tracing::{debug_span, warn};

use crate::stack::DecoratorLayer;

/// Wraps the inner handler in a per-record span and logs failures.
///
/// Failures are re-propagated verbatim after logging; this bracket never
/// retries or swallows. Sits inside the request-scope bracket so the span
/// covers exactly the work done within the scoped window.
pub struct TraceBracket {
    inner: Box<dyn Processor>,
}

impl TraceBracket {
    pub fn new(inner: Box<dyn Processor>) -> Self {
        Self { inner }
    }
}

impl Processor for TraceBracket {
    fn process(&self, record: &Record) -> Result<(), ProcessError> {
        let span = debug_span!(
            "process_record",
            handler = self.inner.name(),
            timestamp_ms = record.timestamp_ms,
            key_len = record.key.as_ref().map(Vec::len),
            value_len = record.value.len(),
        );
        let _enter = span.enter();

        self.inner.process(record).inspect_err(|e| {
            warn!(error = %e, handler = self.inner.name(), "record processing failed");
        })
    }

    fn name(&self) -> &str {
        "trace"
    }
}

/// Assembles a [`TraceBracket`] into a chain.
pub struct TraceLayer;

impl DecoratorLayer for TraceLayer {
    fn wrap(&self, inner: Box<dyn Processor>) -> Box<dyn Processor> {
        Box::new(TraceBracket::new(inner))
    }

    fn name(&self) -> &str {
        "trace"
    }
}
