//! Navigation seam for the authenticated-area transition.

use std::sync::Mutex;

/// Performs the full-page transition after a successful bootstrap.
///
/// The real implementation belongs to the host environment (a WASM host
/// replaces the window location; the doctor binary just logs). Replacing
/// the location discards the current page state on purpose: the bootstrap
/// page has nothing worth keeping once the session exists.
pub trait Navigator: Send + Sync {
    /// Replaces the current page with the given path.
    fn replace_location(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
    fn replace_location(&self, path: &str) {
        (**self).replace_location(path);
    }
}

/// A navigator that records requested transitions, for tests.
#[derive(Default)]
pub struct RecordingNavigator {
    locations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates a navigator that has gone nowhere.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the paths navigated to, in order.
    #[must_use]
    pub fn locations(&self) -> Vec<String> {
        self.locations
            .lock()
            .expect("navigator state poisoned")
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace_location(&self, path: &str) {
        self.locations
            .lock()
            .expect("navigator state poisoned")
            .push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_navigator_preserves_order() {
        let navigator = RecordingNavigator::new();
        navigator.replace_location("/webapp");
        navigator.replace_location("/elsewhere");
        assert_eq!(navigator.locations(), vec!["/webapp", "/elsewhere"]);
    }
}
