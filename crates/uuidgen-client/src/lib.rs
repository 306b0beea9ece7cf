#![doc = include_str!("../README.md")]

mod error;
mod http;
mod mock;

pub use error::*;
pub use http::*;
pub use mock::*;

use async_trait::async_trait;
use uuidgen::{AdminSettings, AdminStats, GenerateParams};

/// Operations offered by a uuidgen service, local or remote.
#[async_trait]
pub trait IdClient: Send + Sync {
    /// Generates identifiers from raw parameters.
    async fn generate(&self, params: &GenerateParams) -> Result<Vec<String>>;

    /// Requests `count` identifiers using the service's current mode.
    async fn post_uuids(&self, count: i64) -> Result<Vec<String>> {
        self.generate(&GenerateParams::with_count(count)).await
    }

    /// Requests a single identifier.
    async fn get_uuid(&self) -> Result<String> {
        self.post_uuids(1).await?.into_iter().next().ok_or(Error::Empty)
    }

    async fn stats(&self) -> Result<AdminStats>;

    async fn settings(&self) -> Result<AdminSettings>;

    async fn update_settings(&self, settings: AdminSettings) -> Result<()>;
}
