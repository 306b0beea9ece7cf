//! HTTP wiring around the [`uuidgen`] core.
//!
//! ## Structure
//!
//! - [`config`] - CLI/env configuration.
//! - [`error`] - Mapping of core errors to HTTP responses.
//! - [`router`] - Route table and middleware.
//! - [`service`] - Shared state and request handlers.
//! - [`telemetry`] - Logging and optional OpenTelemetry export.

pub mod config;
pub mod error;
pub mod router;
pub mod service;
pub mod telemetry;
