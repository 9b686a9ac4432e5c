//! Build-time stylesheet generation for tma-shell.
//!
//! A deterministic, pure function from a content directory to a stylesheet
//! string, run at build time. No runtime behavior: the embedded page ships
//! the generated CSS as a static asset. Three concerns:
//!
//! - [`theme`]: platform theme color and safe-area spacing tokens mapped to
//!   CSS custom properties under the `tg-` naming convention
//! - [`variants`]: conditional style rules keyed to the three
//!   loading-state classes applied by the server-rendered view layer
//! - [`icons`]: icon files from four size/style variant directories,
//!   inlined as data-URI mask backgrounds
//!
//! Output ordering is fixed, so repeated builds over the same content
//! directory are byte-identical.

pub mod error;
pub mod icons;
pub mod stylesheet;
pub mod theme;
pub mod variants;

pub use error::StyleError;
pub use icons::{Icon, IconEncoding, scan_icons};
pub use stylesheet::generate_stylesheet;
pub use theme::{SAFE_AREA_TOKENS, THEME_COLOR_TOKENS};
pub use variants::{LOADING_VARIANTS, variant_selectors};
