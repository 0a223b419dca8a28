use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::descriptor::ServiceDescriptor;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport-level failure talking to the discovery directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("directory returned {0}")]
    Status(StatusCode),
}

/// HTTP handle to the discovery directory.
///
/// Constructed once from the configured discovery address and handed to the
/// `Registrar`, which owns it for the life of the process.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Every directory call is bounded by `timeout`; a hung directory must
    /// not stall startup or shutdown.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed building HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { base_url, client }
    }

    /// Create-or-replace registration for one descriptor.
    pub async fn register(&self, descriptor: &ServiceDescriptor) -> Result<(), DirectoryError> {
        let url = format!("{}/service/register", self.base_url);
        debug!("PUT {}", url);

        let response = self.client.put(&url).json(descriptor).send().await?;
        if !response.status().is_success() {
            return Err(DirectoryError::Status(response.status()));
        }
        Ok(())
    }

    /// Removes the entry for `id`. A directory that has never heard of the
    /// id answers 404, which counts as success.
    pub async fn deregister(&self, id: &str) -> Result<(), DirectoryError> {
        let url = format!("{}/service/deregister/{}", self.base_url, id);
        debug!("PUT {}", url);

        let response = self.client.put(&url).send().await?;
        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }
        Err(DirectoryError::Status(status))
    }
}
