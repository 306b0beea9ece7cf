//! In-process stand-in for a uuidgen server.

use crate::{IdClient, Result};
use async_trait::async_trait;
use std::sync::Arc;
use uuidgen::{AdminSettings, AdminStats, GenerateParams, UuidService};

/// Serves requests from a local [`UuidService`] instead of over HTTP.
///
/// Validation, counters and debug numbering behave exactly as they do on a
/// server, because the same service handles the call.
#[derive(Clone)]
pub struct MockClient {
    service: Arc<UuidService>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::from_service(Arc::new(UuidService::new("uuidgen-mock")))
    }

    /// Wraps an existing service, e.g. one shared with other test fixtures.
    pub fn from_service(service: Arc<UuidService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &Arc<UuidService> {
        &self.service
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdClient for MockClient {
    async fn generate(&self, params: &GenerateParams) -> Result<Vec<String>> {
        Ok(self.service.generate(params)?)
    }

    async fn stats(&self) -> Result<AdminStats> {
        Ok(self.service.stats())
    }

    async fn settings(&self) -> Result<AdminSettings> {
        Ok(self.service.settings())
    }

    async fn update_settings(&self, settings: AdminSettings) -> Result<()> {
        self.service.update_settings(settings);
        Ok(())
    }
}
