//! The identifier generation service.
//!
//! [`UuidService`] validates a request, mints the identifiers and records the
//! call in its [`CounterState`]. In normal mode identifiers are random version
//! 4 UUIDs produced outside any lock. In debug mode they are `prefix + n`,
//! where the range of `n` is reserved atomically so concurrent callers never
//! see the same number twice.
//!
//! ## Responsibilities
//!
//! - Parse and range-check the raw `count`, `debug` and `prefix` parameters.
//! - Reject a prefix unless debug mode is in effect.
//! - Update the counters exactly once per successful call.
//! - Emit one audit record per successful call.

use crate::{
    AdminSettings, AdminStats, AuditSink, CounterState, Error, GenerateParams, GenerationEvent,
    RandSource, Result, ThreadRandom, TracingAuditSink, params::validate_count, rand::random_uuid,
};
use std::sync::Arc;
use tracing::instrument;

#[cfg(test)]
mod tests;

/// Generates identifiers and tracks service statistics.
///
/// The service is cheap to share behind an [`Arc`]; all mutable state lives in
/// the [`CounterState`] it holds.
pub struct UuidService<R = ThreadRandom>
where
    R: RandSource<u128>,
{
    state: Arc<CounterState>,
    rng: R,
    sink: Arc<dyn AuditSink>,
    origin: String,
}

impl UuidService<ThreadRandom> {
    /// Creates a service with fresh counters, the thread-local RNG and a
    /// tracing-backed audit sink.
    ///
    /// # Example
    /// ```
    /// use uuidgen::UuidService;
    ///
    /// let service = UuidService::new("pz-uuidgen");
    /// let ids = service.generate_identifiers(Some(3), None).unwrap();
    /// assert_eq!(ids.len(), 3);
    /// assert_eq!(service.stats().num_identifiers_issued, 3);
    /// ```
    pub fn new(origin: impl Into<String>) -> Self {
        Self::from_components(
            Arc::new(CounterState::default()),
            ThreadRandom,
            Arc::new(TracingAuditSink),
            origin,
        )
    }
}

impl<R> UuidService<R>
where
    R: RandSource<u128>,
{
    /// Creates a service from explicit collaborators.
    ///
    /// Useful for starting in debug mode, substituting a deterministic random
    /// source, or routing audit records elsewhere.
    pub fn from_components(
        state: Arc<CounterState>,
        rng: R,
        sink: Arc<dyn AuditSink>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            state,
            rng,
            sink,
            origin: origin.into(),
        }
    }

    /// Name reported in audit records and error responses.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Generates identifiers from raw, textual parameters.
    ///
    /// A `debug` value of `true` forces debug mode for this call even when the
    /// runtime setting is off.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `count` is not an integer, `debug` is
    ///   not a boolean, or a prefix is given outside debug mode.
    /// - [`Error::OutOfRange`] if `count` is outside `0..=255`.
    #[instrument(level = "debug", skip(self))]
    pub fn generate(&self, params: &GenerateParams) -> Result<Vec<String>> {
        let count = params.parse_count()?;
        let force_debug = params.parse_debug()?;
        self.generate_checked(count, force_debug, params.prefix())
    }

    /// Generates `requested_count` identifiers (default 1).
    ///
    /// In debug mode each identifier is `prefix` followed by the next sequence
    /// number. An empty prefix is always allowed.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] if the count is outside `0..=255`.
    /// - [`Error::InvalidArgument`] if a non-empty prefix is given while debug
    ///   mode is off.
    pub fn generate_identifiers(
        &self,
        requested_count: Option<i64>,
        prefix: Option<&str>,
    ) -> Result<Vec<String>> {
        self.generate_checked(requested_count, false, prefix.unwrap_or_default())
    }

    fn generate_checked(
        &self,
        requested_count: Option<i64>,
        force_debug: bool,
        prefix: &str,
    ) -> Result<Vec<String>> {
        let count = validate_count(requested_count)?;
        let debug = force_debug || self.state.settings().debug;
        if !debug && !prefix.is_empty() {
            return Err(Error::invalid_argument("prefix only valid in debug mode"));
        }

        let ids: Vec<String> = if debug {
            let start = self.state.apply_generation(count as u64, true);
            (start..start + count as u64)
                .map(|n| format!("{prefix}{n}"))
                .collect()
        } else {
            let ids = (0..count)
                .map(|_| random_uuid(&self.rng).to_string())
                .collect();
            self.state.apply_generation(count as u64, false);
            ids
        };

        self.audit(&ids, debug);
        Ok(ids)
    }

    fn audit(&self, ids: &[String], debug: bool) {
        let event = GenerationEvent {
            origin: &self.origin,
            count: ids.len(),
            first: ids.first().map(String::as_str),
            debug,
        };
        if let Err(e) = self.sink.record(&event) {
            tracing::warn!("error writing to audit log: {e}");
        }
    }

    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> AdminStats {
        self.state.snapshot_stats()
    }

    /// Returns the current runtime settings.
    pub fn settings(&self) -> AdminSettings {
        self.state.settings()
    }

    /// Replaces the runtime settings. Counters are not affected.
    pub fn update_settings(&self, settings: AdminSettings) {
        tracing::info!(debug = settings.debug, "admin settings updated");
        self.state.set_settings(settings);
    }
}
