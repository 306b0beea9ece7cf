//! Error types for identifier generation.
//!
//! Every error here is permanent for the call that produced it. Validation
//! failures are reported before any counter is touched, so a failed call never
//! leaves partial state behind.
//!
//! ## Error Cases
//! - `InvalidArgument`: a parameter could not be parsed, or a prefix was
//!   supplied while debug mode is off.
//! - `OutOfRange`: the requested count is outside `0..=255`.
//! - `LoggingFailure`: an [`AuditSink`] failed to record an event. The service
//!   logs it locally and still returns the generated identifiers.
//!
//! [`AuditSink`]: crate::AuditSink

use crate::params::MAX_COUNT;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors the generation service can report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A parameter was malformed or not allowed in the current mode.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The requested count is outside the accepted range.
    #[error("count out of range: {count} (expected 0..={max})", max = MAX_COUNT)]
    OutOfRange { count: i64 },

    /// The audit sink could not record an event.
    #[error("audit logging failed: {reason}")]
    LoggingFailure { reason: String },
}

impl Error {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::OutOfRange { .. })
    }
}
