//! The opaque init payload supplied by the hosting platform.
//!
//! The payload is a signed identity token handed to the embedded page at
//! load time. It is treated as a black box: read once, never parsed, and
//! passed to the server verbatim. The server owns signature validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when constructing an [`InitPayload`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitPayloadError {
    /// The hosting platform supplied no init data.
    Empty,
}

impl fmt::Display for InitPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "platform supplied empty init data"),
        }
    }
}

impl std::error::Error for InitPayloadError {}

/// Opaque identity token supplied by the hosting platform at page load.
///
/// The token is already query-string encoded by the platform and carries a
/// signed hash; it must reach the server byte-for-byte, with no re-encoding.
/// `Display` and `Debug` redact the token body so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitPayload(String);

impl InitPayload {
    /// Creates a payload from the raw platform-supplied string.
    ///
    /// # Errors
    ///
    /// Returns [`InitPayloadError::Empty`] if the string is empty, which
    /// means the page is not running inside the hosting platform.
    pub fn new(raw: impl Into<String>) -> Result<Self, InitPayloadError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InitPayloadError::Empty);
        }
        Ok(Self(raw))
    }

    /// Returns the raw token, exactly as supplied by the platform.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the token is empty. Always false for a constructed
    /// payload; present for API completeness alongside `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for InitPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "init_data({} bytes)", self.0.len())
    }
}

impl fmt::Debug for InitPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InitPayload({} bytes)", self.0.len())
    }
}

impl TryFrom<&str> for InitPayload {
    type Error = InitPayloadError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
