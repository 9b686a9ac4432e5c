//! Icon inlining.
//!
//! Icons ship as SVG files in four size/style variant directories of the
//! content directory. Each file becomes one CSS rule with the SVG inlined
//! as a data-URI mask background, keyed `hero-<name><suffix>`. The mask
//! size comes from three buckets selected by name suffix.

use crate::error::StyleError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rootcause::prelude::Report;
use std::fs;
use std::path::Path;

/// Variant subdirectories and the name suffix each contributes:
/// `(suffix, subdirectory)`.
const ICON_VARIANTS: [(&str, &str); 4] = [
    ("", "24/outline"),
    ("-solid", "24/solid"),
    ("-mini", "20/solid"),
    ("-micro", "16/solid"),
];

/// How SVG content is embedded in the data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconEncoding {
    /// Raw UTF-8 SVG text, newlines stripped. The historical format.
    #[default]
    Utf8,
    /// Base64, for pipelines that cannot carry raw markup in URLs.
    Base64,
}

/// One icon ready for inlining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// Full icon name including the variant suffix (e.g. "arrow-left-mini").
    pub name: String,
    /// SVG file content.
    pub svg: String,
}

impl Icon {
    /// Mask size for this icon, bucketed by name suffix.
    #[must_use]
    pub fn mask_size(&self) -> &'static str {
        if self.name.ends_with("-micro") {
            "1rem"
        } else if self.name.ends_with("-mini") {
            "1.25rem"
        } else {
            "1.5rem"
        }
    }

    /// Renders the data URI for this icon.
    #[must_use]
    pub fn data_uri(&self, encoding: IconEncoding) -> String {
        match encoding {
            IconEncoding::Utf8 => {
                let content: String = self
                    .svg
                    .chars()
                    .filter(|c| *c != '\n' && *c != '\r')
                    .collect();
                format!("data:image/svg+xml;utf8,{content}")
            }
            IconEncoding::Base64 => {
                format!(
                    "data:image/svg+xml;base64,{}",
                    BASE64.encode(self.svg.as_bytes())
                )
            }
        }
    }

    /// Renders the CSS rule for this icon.
    #[must_use]
    pub fn render_rule(&self, encoding: IconEncoding) -> String {
        let name = &self.name;
        let uri = self.data_uri(encoding);
        let size = self.mask_size();
        format!(
            ".hero-{name} {{\n  \
             --hero-{name}: url('{uri}');\n  \
             -webkit-mask: var(--hero-{name});\n  \
             mask: var(--hero-{name});\n  \
             mask-repeat: no-repeat;\n  \
             background-color: currentColor;\n  \
             vertical-align: middle;\n  \
             display: inline-block;\n  \
             width: {size};\n  \
             height: {size};\n}}\n"
        )
    }
}

/// Scans the content directory for icons across all four variants.
///
/// Non-SVG entries are skipped. The result is sorted by icon name so the
/// generated stylesheet is reproducible regardless of directory order.
///
/// # Errors
///
/// Returns an error if a variant directory or an icon file cannot be read;
/// all four variant directories must exist.
pub fn scan_icons(content_dir: &Path) -> Result<Vec<Icon>, Report<StyleError>> {
    let mut icons = Vec::new();

    for (suffix, subdir) in ICON_VARIANTS {
        let dir = content_dir.join(subdir);
        let entries = fs::read_dir(&dir).map_err(|e| StyleError::VariantDir {
            path: dir.display().to_string(),
            details: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| StyleError::VariantDir {
                path: dir.display().to_string(),
                details: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "svg") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let svg = fs::read_to_string(&path).map_err(|e| StyleError::IconFile {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;

            icons.push(Icon {
                name: format!("{stem}{suffix}"),
                svg,
            });
        }
    }

    icons.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n<path d=\"M0 0\"/>\n</svg>";

    fn icon(name: &str) -> Icon {
        Icon {
            name: name.to_string(),
            svg: SVG.to_string(),
        }
    }

    fn content_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        for (_, subdir) in ICON_VARIANTS {
            fs::create_dir_all(dir.path().join(subdir)).expect("create variant dir");
        }
        dir
    }

    #[test]
    fn mask_size_buckets_by_suffix() {
        assert_eq!(icon("arrow-left").mask_size(), "1.5rem");
        assert_eq!(icon("arrow-left-solid").mask_size(), "1.5rem");
        assert_eq!(icon("arrow-left-mini").mask_size(), "1.25rem");
        assert_eq!(icon("arrow-left-micro").mask_size(), "1rem");
    }

    #[test]
    fn utf8_data_uri_strips_newlines() {
        let uri = icon("x").data_uri(IconEncoding::Utf8);
        assert!(uri.starts_with("data:image/svg+xml;utf8,<svg"));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn base64_data_uri_encodes_content() {
        let uri = icon("x").data_uri(IconEncoding::Base64);
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        assert!(!uri.contains("<svg"));
    }

    #[test]
    fn rule_masks_and_sizes_icon() {
        let css = icon("arrow-left-mini").render_rule(IconEncoding::Utf8);
        assert!(css.starts_with(".hero-arrow-left-mini {"));
        assert!(css.contains("--hero-arrow-left-mini: url('data:image/svg+xml;utf8,"));
        assert!(css.contains("mask: var(--hero-arrow-left-mini);"));
        assert!(css.contains("background-color: currentColor;"));
        assert!(css.contains("width: 1.25rem;"));
        assert!(css.contains("height: 1.25rem;"));
    }

    #[test]
    fn scan_suffixes_icons_by_variant() {
        let dir = content_dir();
        for (_, subdir) in ICON_VARIANTS {
            fs::write(dir.path().join(subdir).join("arrow-left.svg"), SVG).expect("write icon");
        }

        let icons = scan_icons(dir.path()).expect("scan");
        let names: Vec<&str> = icons.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "arrow-left",
                "arrow-left-micro",
                "arrow-left-mini",
                "arrow-left-solid",
            ]
        );
    }

    #[test]
    fn scan_skips_non_svg_files() {
        let dir = content_dir();
        fs::write(dir.path().join("24/outline/arrow-left.svg"), SVG).expect("write icon");
        fs::write(dir.path().join("24/outline/README.md"), "notes").expect("write readme");

        let icons = scan_icons(dir.path()).expect("scan");
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].name, "arrow-left");
    }

    #[test]
    fn scan_requires_all_variant_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("24/outline")).expect("create dir");

        let result = scan_icons(dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn scan_is_sorted_and_deterministic() {
        let dir = content_dir();
        for name in ["zebra", "anchor", "m-icon"] {
            fs::write(dir.path().join("24/outline").join(format!("{name}.svg")), SVG)
                .expect("write icon");
        }

        let icons = scan_icons(dir.path()).expect("scan");
        let names: Vec<&str> = icons.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["anchor", "m-icon", "zebra"]);
    }
}
