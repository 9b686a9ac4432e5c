//! Loading-state style variants.
//!
//! The server-rendered view layer applies a loading class to an element
//! while its click, submit, or change round-trip is in flight. Each variant
//! matches both the annotated element itself and its descendants, so a
//! rule can target either the busy element or content inside it.

/// The loading-state classes applied by the view layer.
pub const LOADING_VARIANTS: [&str; 3] = [
    "phx-click-loading",
    "phx-submit-loading",
    "phx-change-loading",
];

/// Returns the selector pair for a variant: self-and-target, then
/// target-under-variant.
#[must_use]
pub fn variant_selectors(variant: &str, target: &str) -> [String; 2] {
    [format!(".{variant}{target}"), format!(".{variant} {target}")]
}

/// Renders the loading-state rules.
///
/// Elements carrying `while-<variant>` are hidden at rest and shown while
/// the corresponding loading class is applied.
#[must_use]
pub fn render_loading_rules() -> String {
    let mut css = String::new();
    for variant in LOADING_VARIANTS {
        let target = format!(".while-{variant}");
        let [on_self, on_descendant] = variant_selectors(variant, &target);
        css.push_str(&format!("{target} {{\n  display: none;\n}}\n"));
        css.push_str(&format!(
            "{on_self},\n{on_descendant} {{\n  display: initial;\n}}\n"
        ));
    }
    css
}
