//! Client for a running `uuidgen-server`.

use crate::{Error, IdClient, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use uuidgen::{AdminSettings, AdminStats, GenerateParams};

#[derive(Deserialize)]
struct UuidsBody {
    data: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Talks to the `/v1` API of a uuidgen server.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for `base_url`, e.g. `http://127.0.0.1:12340`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Creates a client for a plain `host:port` address.
    pub fn from_address(address: &str) -> Self {
        Self::new(format!("http://{address}"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1{path}", self.base_url)
    }
}

/// Turns a non-success response into [`Error::Status`].
///
/// The message comes from the server's JSON error body when there is one and
/// falls back to the raw text otherwise.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    Err(Error::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl IdClient for HttpClient {
    async fn generate(&self, params: &GenerateParams) -> Result<Vec<String>> {
        let response = self
            .client
            .post(self.url("/uuids"))
            .query(params)
            .send()
            .await?;
        let body: UuidsBody = check(response).await?.json().await?;
        Ok(body.data)
    }

    async fn stats(&self) -> Result<AdminStats> {
        let response = self.client.get(self.url("/admin/stats")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn settings(&self) -> Result<AdminSettings> {
        let response = self.client.get(self.url("/admin/settings")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update_settings(&self, settings: AdminSettings) -> Result<()> {
        let response = self
            .client
            .post(self.url("/admin/settings"))
            .json(&settings)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
