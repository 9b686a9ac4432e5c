//! Transport seam for the login request.
//!
//! The flow only needs "GET this URL, give me the body as text", so that is
//! the whole trait. The production implementation wraps reqwest; tests
//! substitute an in-memory double.

use crate::error::BootstrapError;
use async_trait::async_trait;
use rootcause::prelude::Report;

/// Transport used to reach the login endpoint.
#[async_trait]
pub trait AuthTransport: Send + Sync {
    /// Issues one GET request and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns a typed error if the request cannot be sent, the server
    /// answers with a non-success status, or the body cannot be read.
    async fn get_text(&self, url: &str) -> Result<String, Report<BootstrapError>>;
}

/// reqwest-backed transport.
///
/// The client is built with library defaults: no retry and no overall
/// timeout, matching the wire contract of the login endpoint. Cheap to
/// clone; the underlying connection pool is shared.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a fresh client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport from an existing client, sharing its pool.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthTransport for HttpTransport {
    async fn get_text(&self, url: &str) -> Result<String, Report<BootstrapError>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BootstrapError::Transport {
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BootstrapError::ServerStatus {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| BootstrapError::Transport {
                details: e.to_string(),
            })?;

        Ok(body)
    }
}
