//! Error types for the bootstrap crate.

use std::fmt;

/// Errors from the session bootstrap flow.
///
/// An authentication rejection by the server is not an error; it is the
/// [`BootstrapOutcome::Rejected`](crate::BootstrapOutcome::Rejected)
/// outcome. Errors cover the cases where no outcome was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// The platform context supplied no init data; the page is running
    /// outside the hosting platform and no request was sent.
    MissingInitData,
    /// The request could not be sent or no textual body was received.
    Transport { details: String },
    /// The server answered with a non-success status.
    ServerStatus { status: u16 },
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInitData => {
                write!(f, "no init data supplied by the hosting platform")
            }
            Self::Transport { details } => {
                write!(f, "login request failed: {details}")
            }
            Self::ServerStatus { status } => {
                write!(f, "login endpoint answered with status {status}")
            }
        }
    }
}

impl std::error::Error for BootstrapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_init_data_display() {
        let err = BootstrapError::MissingInitData;
        assert!(err.to_string().contains("no init data"));
    }

    #[test]
    fn transport_display_includes_details() {
        let err = BootstrapError::Transport {
            details: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn server_status_display_includes_status() {
        let err = BootstrapError::ServerStatus { status: 503 };
        assert!(err.to_string().contains("503"));
    }
}
