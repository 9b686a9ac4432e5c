//! Error types for the style crate.

use std::fmt;

/// Errors from stylesheet generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A required icon variant directory could not be read.
    VariantDir { path: String, details: String },
    /// An icon file could not be read.
    IconFile { path: String, details: String },
    /// The generated stylesheet could not be written.
    Output { path: String, details: String },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VariantDir { path, details } => {
                write!(f, "cannot read icon variant directory {path}: {details}")
            }
            Self::IconFile { path, details } => {
                write!(f, "cannot read icon file {path}: {details}")
            }
            Self::Output { path, details } => {
                write!(f, "cannot write stylesheet {path}: {details}")
            }
        }
    }
}

impl std::error::Error for StyleError {}
