//! The run-once session bootstrap flow.

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::navigator::Navigator;
use crate::record::{AttemptRecord, BootstrapOutcome};
use crate::transport::AuthTransport;
use chrono::Utc;
use rootcause::prelude::Report;
use std::time::Instant;
use tma_shell_core::{AttemptId, InitPayload};
use tma_shell_platform::PlatformContext;
use tracing::{debug, error, instrument};

/// Response body the server uses to reject an authentication attempt.
///
/// The comparison is exact and case-sensitive: the sentinel is an
/// out-of-band marker in an otherwise unstructured text response, and any
/// other body, including an empty one, means the session was established.
pub const REJECTION_SENTINEL: &str = "ERROR";

/// The session bootstrapper.
///
/// One instance performs at most one attempt: [`run`](Self::run) consumes
/// the bootstrapper, mirroring the one-request-per-page-load contract of
/// the login endpoint.
pub struct Bootstrapper<P, T, N> {
    platform: P,
    transport: T,
    navigator: N,
    config: BootstrapConfig,
}

impl<P, T, N> Bootstrapper<P, T, N>
where
    P: PlatformContext,
    T: AuthTransport,
    N: Navigator,
{
    /// Creates a bootstrapper over the injected capabilities.
    #[must_use]
    pub fn new(platform: P, transport: T, navigator: N, config: BootstrapConfig) -> Self {
        Self {
            platform,
            transport,
            navigator,
            config,
        }
    }

    /// Runs the bootstrap flow to its terminal state.
    ///
    /// Reads the init payload from the platform context, issues exactly one
    /// GET to the login endpoint with the payload appended verbatim, and
    /// acts on the body: the rejection sentinel leaves the page in place
    /// and emits one diagnostic; any other body navigates to the
    /// authenticated area exactly once.
    ///
    /// # Errors
    ///
    /// [`BootstrapError::MissingInitData`] if the platform supplied no init
    /// data (no request is sent); transport variants if the request failed.
    /// No navigation happens on any error path.
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<AttemptRecord, Report<BootstrapError>> {
        let payload = InitPayload::new(self.platform.init_data())
            .map_err(|_| BootstrapError::MissingInitData)?;

        let attempt = AttemptId::new();
        let url = self.config.login_url(&payload);
        debug!(%attempt, %payload, "sending login request");

        let started_at = Utc::now();
        let clock = Instant::now();
        let body = self.transport.get_text(&url).await?;
        let latency_ms = clock.elapsed().as_millis() as u64;

        let outcome = if body == REJECTION_SENTINEL {
            error!(%attempt, "failed to authenticate");
            BootstrapOutcome::Rejected
        } else {
            self.navigator.replace_location(self.config.webapp_path());
            debug!(%attempt, path = self.config.webapp_path(), "session established");
            BootstrapOutcome::Authenticated
        };

        Ok(AttemptRecord {
            attempt,
            outcome,
            started_at,
            latency_ms,
        })
    }
}
