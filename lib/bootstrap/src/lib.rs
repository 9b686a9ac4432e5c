//! Session bootstrap flow for tma-shell.
//!
//! The bootstrapper runs once per page load: it reads the opaque init
//! payload from the injected platform context, sends it verbatim to the
//! login endpoint in a single GET request, and acts on the textual reply.
//! The server answers with the literal body `ERROR` to reject the
//! authentication; any other body (including an empty one) establishes the
//! session, and the page is replaced with the authenticated area.
//!
//! The flow is deliberately typed at every exit:
//! - [`BootstrapOutcome::Authenticated`]: navigation performed, exactly once
//! - [`BootstrapOutcome::Rejected`]: no navigation, one diagnostic emitted
//! - `Err(Report<BootstrapError>)`: transport failed or no init data was
//!   present; no request reaches the server in the latter case
//!
//! There is no retry and no timeout at this layer; the [`AuthTransport`]
//! seam is where such a policy would attach.
//!
//! # Example
//!
//! ```no_run
//! use tma_shell_bootstrap::{BootstrapConfig, Bootstrapper, HttpTransport, Navigator};
//! use tma_shell_platform::StaticPlatform;
//!
//! struct PageNavigator;
//!
//! impl Navigator for PageNavigator {
//!     fn replace_location(&self, path: &str) {
//!         println!("navigating to {path}");
//!     }
//! }
//!
//! # async fn run() -> tma_shell_core::Result<(), tma_shell_bootstrap::BootstrapError> {
//! let config = BootstrapConfig::new("https://app.example.com");
//! let bootstrapper = Bootstrapper::new(
//!     StaticPlatform::new("user=123&hash=abc"),
//!     HttpTransport::new(),
//!     PageNavigator,
//!     config,
//! );
//! let record = bootstrapper.run().await?;
//! println!("bootstrap finished: {}", record.outcome);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod navigator;
pub mod record;
pub mod transport;

pub use config::BootstrapConfig;
pub use error::BootstrapError;
pub use flow::{Bootstrapper, REJECTION_SENTINEL};
pub use navigator::{Navigator, RecordingNavigator};
pub use record::{AttemptRecord, BootstrapOutcome};
pub use transport::{AuthTransport, HttpTransport};
