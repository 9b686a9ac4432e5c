//! Outbound events to the server-rendered view layer.

use std::sync::Mutex;

/// Event name pushed when the native back button is clicked.
pub const BACK_EVENT: &str = "back";

/// Sink for named events flowing from page components back to the
/// server-rendered view layer.
pub trait EventSink: Send + Sync {
    /// Pushes one named event to the view layer.
    fn push_event(&self, name: &str);
}

/// An event sink that records pushed events in memory, for tests.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events pushed so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("sink state poisoned").clone()
    }
}

impl EventSink for RecordingSink {
    fn push_event(&self, name: &str) {
        self.events
            .lock()
            .expect("sink state poisoned")
            .push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_preserves_order() {
        let sink = RecordingSink::new();
        sink.push_event("back");
        sink.push_event("forward");
        assert_eq!(sink.events(), vec!["back", "forward"]);
    }
}
