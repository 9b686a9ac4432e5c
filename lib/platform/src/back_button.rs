//! The native back-button capability.
//!
//! The host platform renders a back button in its own chrome, outside the
//! page. The page controls visibility and receives click notifications
//! through the handle modeled here.

use std::sync::Mutex;

/// Callback invoked when the native back button is clicked.
pub type ClickHandler = Box<dyn Fn() + Send + Sync>;

/// Handle to the host platform's native back button.
///
/// Registering a click handler replaces any previously registered one; the
/// platform delivers clicks to at most one handler at a time.
pub trait BackButton: Send + Sync {
    /// Makes the back button visible in the host chrome.
    fn show(&self);

    /// Hides the back button.
    fn hide(&self);

    /// Registers the click handler, replacing any previous one.
    fn set_on_click(&self, handler: ClickHandler);

    /// Removes the registered click handler, if any.
    fn clear_on_click(&self);
}

/// A back button that ignores everything.
///
/// Used by hosts that have no native back button (for example the doctor
/// binary, which exercises the bootstrap flow outside any platform chrome).
#[derive(Debug, Default)]
pub struct NoopBackButton;

impl BackButton for NoopBackButton {
    fn show(&self) {}

    fn hide(&self) {}

    fn set_on_click(&self, _handler: ClickHandler) {}

    fn clear_on_click(&self) {}
}

/// An in-memory back button that records interactions.
///
/// Shared by tests across the workspace; clicks are delivered to the
/// registered handler via [`RecordingBackButton::click`].
#[derive(Default)]
pub struct RecordingBackButton {
    state: Mutex<RecordingState>,
}

#[derive(Default)]
struct RecordingState {
    shows: usize,
    hides: usize,
    handler: Option<ClickHandler>,
}

impl RecordingBackButton {
    /// Creates a recording back button with no handler registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates a click from the host chrome.
    ///
    /// Returns true if a handler was registered and invoked.
    pub fn click(&self) -> bool {
        let state = self.state.lock().expect("back button state poisoned");
        match state.handler.as_ref() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Number of `show` calls observed.
    #[must_use]
    pub fn shows(&self) -> usize {
        self.state.lock().expect("back button state poisoned").shows
    }

    /// Number of `hide` calls observed.
    #[must_use]
    pub fn hides(&self) -> usize {
        self.state.lock().expect("back button state poisoned").hides
    }

    /// Returns true if a click handler is currently registered.
    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.state
            .lock()
            .expect("back button state poisoned")
            .handler
            .is_some()
    }
}

impl BackButton for RecordingBackButton {
    fn show(&self) {
        self.state.lock().expect("back button state poisoned").shows += 1;
    }

    fn hide(&self) {
        self.state.lock().expect("back button state poisoned").hides += 1;
    }

    fn set_on_click(&self, handler: ClickHandler) {
        self.state
            .lock()
            .expect("back button state poisoned")
            .handler = Some(handler);
    }

    fn clear_on_click(&self) {
        self.state
            .lock()
            .expect("back button state poisoned")
            .handler = None;
    }
}
