//! The injected platform context.
//!
//! Instead of reaching for an ambient global the way a raw SDK binding
//! would, consumers take a [`PlatformContext`] as an explicit parameter.
//! That keeps the shape of the host object in one place and lets tests
//! substitute a double with the same surface.

use crate::back_button::{BackButton, NoopBackButton};
use std::sync::Arc;

/// The host-injected platform capability object.
///
/// One context exists per page load. `init_data` is read once by the
/// session bootstrapper; the back button is shared with whatever view
/// component drives it.
pub trait PlatformContext: Send + Sync {
    /// Returns the raw init data string supplied by the host.
    ///
    /// Empty means the page is running outside the hosting platform; the
    /// bootstrapper rejects that case explicitly rather than sending an
    /// unauthenticatable request.
    fn init_data(&self) -> String;

    /// Returns the shared handle to the native back button.
    fn back_button(&self) -> Arc<dyn BackButton>;
}

/// A platform context with a fixed init-data string.
///
/// Backs hosts without a real platform object: the doctor binary feeds it
/// the init data under test, and unit tests use it as a straightforward
/// double. The back button defaults to [`NoopBackButton`] and can be
/// replaced to observe visibility traffic.
pub struct StaticPlatform {
    init_data: String,
    back_button: Arc<dyn BackButton>,
}

impl StaticPlatform {
    /// Creates a context with the given init data and a no-op back button.
    #[must_use]
    pub fn new(init_data: impl Into<String>) -> Self {
        Self {
            init_data: init_data.into(),
            back_button: Arc::new(NoopBackButton),
        }
    }

    /// Replaces the back-button handle.
    #[must_use]
    pub fn with_back_button(mut self, back_button: Arc<dyn BackButton>) -> Self {
        self.back_button = back_button;
        self
    }
}

impl PlatformContext for StaticPlatform {
    fn init_data(&self) -> String {
        self.init_data.clone()
    }

    fn back_button(&self) -> Arc<dyn BackButton> {
        self.back_button.clone()
    }
}
