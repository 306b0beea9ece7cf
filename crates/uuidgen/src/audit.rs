//! Audit records emitted once per successful generation call.
//!
//! The service hands each [`GenerationEvent`] to an [`AuditSink`]. A failing
//! sink never fails the request: the service logs the error locally and
//! returns the identifiers anyway.

use crate::Result;

/// What a single generation call produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationEvent<'a> {
    /// Name of the service instance that handled the call.
    pub origin: &'a str,
    pub count: usize,
    /// First identifier returned, if any.
    pub first: Option<&'a str>,
    pub debug: bool,
}

/// Destination for audit records.
pub trait AuditSink: Send + Sync {
    /// Records one event.
    ///
    /// # Errors
    /// Returns [`Error::LoggingFailure`] when the event could not be stored.
    ///
    /// [`Error::LoggingFailure`]: crate::Error::LoggingFailure
    fn record(&self, event: &GenerationEvent<'_>) -> Result<()>;
}

/// Writes audit records as `info` events on the `audit` tracing target.
#[derive(Default, Clone, Copy, Debug)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: &GenerationEvent<'_>) -> Result<()> {
        tracing::info!(
            target: "audit",
            origin = event.origin,
            count = event.count,
            first = event.first.unwrap_or_default(),
            debug = event.debug,
            "generated {} identifier(s)",
            event.count,
        );
        Ok(())
    }
}
