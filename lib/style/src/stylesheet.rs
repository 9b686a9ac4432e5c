//! Stylesheet assembly.

use crate::error::StyleError;
use crate::icons::{IconEncoding, scan_icons};
use crate::theme::render_root_block;
use crate::variants::render_loading_rules;
use rootcause::prelude::Report;
use std::fs;
use std::path::Path;

/// Generates the full stylesheet from a content directory.
///
/// Sections appear in a fixed order (theme tokens, loading-state rules,
/// icon rules sorted by name), so the output is a pure function of the
/// directory content.
///
/// # Errors
///
/// Returns an error if the icon variant directories cannot be scanned.
pub fn generate_stylesheet(
    content_dir: &Path,
    encoding: IconEncoding,
) -> Result<String, Report<StyleError>> {
    let icons = scan_icons(content_dir)?;

    let mut css = String::from("/* Generated stylesheet. Do not edit. */\n\n");
    css.push_str(&render_root_block());
    css.push('\n');
    css.push_str(&render_loading_rules());
    css.push('\n');
    for icon in &icons {
        css.push_str(&icon.render_rule(encoding));
    }

    Ok(css)
}

/// Generates the stylesheet and writes it to a file.
///
/// # Errors
///
/// Returns an error if generation fails or the output cannot be written.
pub fn write_stylesheet(
    content_dir: &Path,
    encoding: IconEncoding,
    out_path: &Path,
) -> Result<(), Report<StyleError>> {
    let css = generate_stylesheet(content_dir, encoding)?;
    fs::write(out_path, css).map_err(|e| StyleError::Output {
        path: out_path.display().to_string(),
        details: e.to_string(),
    })?;
    Ok(())
}
