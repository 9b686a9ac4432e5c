//! Host-platform capability seams for tma-shell.
//!
//! The embedded page receives everything it knows about its host through a
//! platform context object injected by the host SDK: the signed init data
//! and the native back-button affordance. This crate models that surface as
//! capability traits so the rest of the workspace (and tests) can substitute
//! doubles for the real SDK bindings:
//!
//! - [`PlatformContext`]: init data plus access to the back button
//! - [`BackButton`]: show/hide and click-callback registration
//! - [`EventSink`]: outbound named events to the server-rendered view layer
//! - [`BackButtonToggle`]: a two-state component binding the back button to
//!   a declarative on/off flag from the view
//!
//! The traits are synchronous because the host SDK surface they model is
//! synchronous.

pub mod back_button;
pub mod context;
pub mod event;
pub mod toggle;

pub use back_button::{BackButton, ClickHandler, NoopBackButton, RecordingBackButton};
pub use context::{PlatformContext, StaticPlatform};
pub use event::{BACK_EVENT, EventSink, RecordingSink};
pub use toggle::{BackButtonToggle, ToggleState};
