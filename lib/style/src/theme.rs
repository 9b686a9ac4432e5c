//! Platform theme tokens.
//!
//! The hosting platform publishes its theme as CSS custom properties on the
//! page; these tables alias them under the shorter `tg-` utility naming
//! convention the app's styles use. The lists are fixed: they mirror the
//! theme surface the platform documents.

/// Theme color tokens: `(token, platform custom property)`.
pub const THEME_COLOR_TOKENS: [(&str, &str); 15] = [
    ("tg-bg", "--tg-theme-bg-color"),
    ("tg-text", "--tg-theme-text-color"),
    ("tg-hint", "--tg-theme-hint-color"),
    ("tg-link", "--tg-theme-link-color"),
    ("tg-button", "--tg-theme-button-color"),
    ("tg-button-text", "--tg-theme-button-text-color"),
    ("tg-secondary-bg", "--tg-theme-secondary-bg-color"),
    ("tg-header-bg", "--tg-theme-header-bg-color"),
    ("tg-bottom-bar-bg", "--tg-theme-bottom-bar-bg-color"),
    ("tg-accent-text", "--tg-theme-accent-text-color"),
    ("tg-section-bg", "--tg-theme-section-bg-color"),
    ("tg-section-header-text", "--tg-theme-section-header-text-color"),
    ("tg-section-separator", "--tg-theme-section-separator-color"),
    ("tg-subtitle-text", "--tg-theme-subtitle-text-color"),
    ("tg-destructive-text", "--tg-theme-destructive-text-color"),
];

/// Safe-area spacing tokens: `(token, platform custom property)`.
pub const SAFE_AREA_TOKENS: [(&str, &str); 4] = [
    ("tg-safe-top", "--tg-safe-area-inset-top"),
    ("tg-safe-bottom", "--tg-safe-area-inset-bottom"),
    ("tg-safe-left", "--tg-safe-area-inset-left"),
    ("tg-safe-right", "--tg-safe-area-inset-right"),
];

/// Renders the `:root` block aliasing platform properties to `tg-` tokens.
#[must_use]
pub fn render_root_block() -> String {
    let mut css = String::from(":root {\n");
    for (token, property) in THEME_COLOR_TOKENS {
        css.push_str(&format!("  --{token}: var({property});\n"));
    }
    for (token, property) in SAFE_AREA_TOKENS {
        css.push_str(&format!("  --{token}: var({property});\n"));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_block_aliases_all_tokens() {
        let css = render_root_block();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--tg-bg: var(--tg-theme-bg-color);"));
        assert!(css.contains("--tg-destructive-text: var(--tg-theme-destructive-text-color);"));
        assert!(css.contains("--tg-safe-top: var(--tg-safe-area-inset-top);"));
        assert!(css.contains("--tg-safe-right: var(--tg-safe-area-inset-right);"));
    }

    #[test]
    fn token_count_matches_platform_surface() {
        assert_eq!(THEME_COLOR_TOKENS.len(), 15);
        assert_eq!(SAFE_AREA_TOKENS.len(), 4);
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render_root_block(), render_root_block());
    }
}
