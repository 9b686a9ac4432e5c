//! Bootstrap flow configuration.
//!
//! Paths default to the wire contract the server exposes; only the base
//! URL varies between deployments. Fields with defaults can be omitted
//! when loading from environment variables.

use serde::{Deserialize, Serialize};
use tma_shell_core::InitPayload;

/// Configuration for the session bootstrap flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Base URL of the application server (e.g., "https://app.example.com").
    /// Empty means relative URLs, for hosts that resolve against the page
    /// origin.
    #[serde(default)]
    base_url: String,
    /// Path of the login endpoint.
    /// Default: "/log_in/via_webapp"
    #[serde(default = "default_login_path")]
    login_path: String,
    /// Path of the authenticated area navigated to on success.
    /// Default: "/webapp"
    #[serde(default = "default_webapp_path")]
    webapp_path: String,
}

fn default_login_path() -> String {
    "/log_in/via_webapp".to_string()
}

fn default_webapp_path() -> String {
    "/webapp".to_string()
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl BootstrapConfig {
    /// Creates a configuration with default paths.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            login_path: default_login_path(),
            webapp_path: default_webapp_path(),
        }
    }

    /// Returns the base URL, without its trailing slash if one was given.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Returns the login endpoint path.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Returns the authenticated-area path.
    #[must_use]
    pub fn webapp_path(&self) -> &str {
        &self.webapp_path
    }

    /// Builds the login URL for a payload.
    ///
    /// The payload is appended verbatim after the `?`: it is already
    /// query-string encoded by the platform and must not be re-encoded,
    /// or the server-side signature check would fail.
    #[must_use]
    pub fn login_url(&self, payload: &InitPayload) -> String {
        format!(
            "{}{}?{}",
            self.base_url(),
            self.login_path,
            payload.as_str()
        )
    }
}
