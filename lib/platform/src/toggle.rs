//! Two-state back-button toggle driven by a declarative flag.
//!
//! The server-rendered view layer annotates its markup with a declarative
//! on/off flag; this component translates that flag into imperative calls
//! on the native back button. When the flag is on, a click handler pushing
//! the [`BACK_EVENT`] is registered and the button is shown; for any other
//! flag value the button is hidden and no handler is registered. Unmount is
//! symmetric with mount.

use crate::back_button::BackButton;
use crate::event::{BACK_EVENT, EventSink};
use std::sync::Arc;
use tracing::debug;

/// Declarative state for the back-button toggle.
///
/// Only the exact flag value `"on"` enables the toggle; any other value,
/// including `"ON"` or a missing attribute rendered as an empty string,
/// disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// Back button visible, clicks forwarded to the view layer.
    On,
    /// Back button hidden, no click handler registered.
    Off,
}

impl ToggleState {
    /// Parses the declarative flag from the view layer.
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        if flag == "on" { Self::On } else { Self::Off }
    }
}

/// A mounted back-button toggle.
///
/// Holds the state it was mounted with so teardown mirrors setup exactly.
pub struct BackButtonToggle {
    button: Arc<dyn BackButton>,
    state: ToggleState,
}

impl BackButtonToggle {
    /// Mounts the toggle against the native back button.
    ///
    /// With flag `"on"`: registers a click handler that pushes exactly one
    /// `"back"` event per click, then shows the button. With any other
    /// flag: hides the button and registers nothing.
    pub fn mount(
        button: Arc<dyn BackButton>,
        sink: Arc<dyn EventSink>,
        flag: &str,
    ) -> Self {
        let state = ToggleState::from_flag(flag);
        match state {
            ToggleState::On => {
                button.set_on_click(Box::new(move || sink.push_event(BACK_EVENT)));
                button.show();
            }
            ToggleState::Off => {
                button.hide();
            }
        }
        debug!(?state, "mounted back-button toggle");
        Self { button, state }
    }

    /// Returns the state the toggle was mounted with.
    #[must_use]
    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Unmounts the toggle.
    ///
    /// If mounted on, the click handler is cleared and the button hidden;
    /// if mounted off, nothing was registered and nothing is torn down.
    pub fn unmount(self) {
        if self.state == ToggleState::On {
            self.button.clear_on_click();
            self.button.hide();
        }
        debug!(state = ?self.state, "unmounted back-button toggle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::back_button::RecordingBackButton;
    use crate::event::RecordingSink;

    fn fixtures() -> (Arc<RecordingBackButton>, Arc<RecordingSink>) {
        (
            Arc::new(RecordingBackButton::new()),
            Arc::new(RecordingSink::new()),
        )
    }

    #[test]
    fn flag_on_is_exact() {
        assert_eq!(ToggleState::from_flag("on"), ToggleState::On);
        assert_eq!(ToggleState::from_flag("ON"), ToggleState::Off);
        assert_eq!(ToggleState::from_flag("off"), ToggleState::Off);
        assert_eq!(ToggleState::from_flag(""), ToggleState::Off);
        assert_eq!(ToggleState::from_flag("on "), ToggleState::Off);
    }

    #[test]
    fn mount_on_shows_button_and_registers_handler() {
        let (button, sink) = fixtures();
        let toggle = BackButtonToggle::mount(button.clone(), sink, "on");

        assert_eq!(toggle.state(), ToggleState::On);
        assert_eq!(button.shows(), 1);
        assert_eq!(button.hides(), 0);
        assert!(button.has_handler());
    }

    #[test]
    fn click_pushes_exactly_one_back_event() {
        let (button, sink) = fixtures();
        let _toggle = BackButtonToggle::mount(button.clone(), sink.clone(), "on");

        assert!(button.click());
        assert_eq!(sink.events(), vec![BACK_EVENT]);

        assert!(button.click());
        assert_eq!(sink.events(), vec![BACK_EVENT, BACK_EVENT]);
    }

    #[test]
    fn mount_off_hides_button_and_registers_nothing() {
        let (button, sink) = fixtures();
        let toggle = BackButtonToggle::mount(button.clone(), sink.clone(), "off");

        assert_eq!(toggle.state(), ToggleState::Off);
        assert_eq!(button.hides(), 1);
        assert_eq!(button.shows(), 0);
        assert!(!button.has_handler());
        assert!(!button.click());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn unmount_on_clears_handler_and_hides() {
        let (button, sink) = fixtures();
        let toggle = BackButtonToggle::mount(button.clone(), sink, "on");

        toggle.unmount();
        assert!(!button.has_handler());
        assert_eq!(button.hides(), 1);
    }

    #[test]
    fn unmount_off_is_noop() {
        let (button, sink) = fixtures();
        let toggle = BackButtonToggle::mount(button.clone(), sink, "off");

        toggle.unmount();
        // One hide from mount, none from unmount.
        assert_eq!(button.hides(), 1);
    }
}
