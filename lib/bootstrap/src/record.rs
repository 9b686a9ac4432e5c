//! Bootstrap attempt records.
//!
//! One record is produced per attempt, for diagnostics and audit logging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tma_shell_core::AttemptId;

/// Terminal outcome of a bootstrap attempt that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// The server accepted the payload; the page navigated to the
    /// authenticated area.
    Authenticated,
    /// The server answered with the rejection sentinel; the page stayed
    /// where it was.
    Rejected,
}

impl fmt::Display for BootstrapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated => write!(f, "authenticated"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Record of one completed bootstrap attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Unique identifier for this attempt.
    pub attempt: AttemptId,
    /// The terminal outcome.
    pub outcome: BootstrapOutcome,
    /// When the login request was sent.
    pub started_at: DateTime<Utc>,
    /// Round-trip latency in milliseconds.
    pub latency_ms: u64,
}
