//! Shared request state and HTTP handlers.
//!
//! ## Structure
//!
//! - [`handler`] - one async function per route.

pub mod handler;

use crate::server::config::ServerConfig;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuidgen::{AdminSettings, CounterState, ThreadRandom, TracingAuditSink, UuidService};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<UuidService>,
    /// Cancelled to begin a graceful shutdown.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: &ServerConfig, shutdown: CancellationToken) -> Self {
        let state = CounterState::new(AdminSettings {
            debug: config.debug,
        });
        let service = UuidService::from_components(
            Arc::new(state),
            ThreadRandom,
            Arc::new(TracingAuditSink),
            config.service_name.clone(),
        );

        Self {
            service: Arc::new(service),
            shutdown,
        }
    }

    pub fn origin(&self) -> &str {
        self.service.origin()
    }
}
