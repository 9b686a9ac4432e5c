//! Core domain types and utilities for the tma-shell workspace.
//!
//! This crate provides the foundational types shared by the platform,
//! bootstrap, and style crates: the `Result` alias used for error handling
//! throughout the workspace, the opaque [`InitPayload`] identity token, and
//! the [`AttemptId`] used to correlate bootstrap attempts in logs.

pub mod error;
pub mod id;
pub mod payload;

pub use error::Result;
pub use id::AttemptId;
pub use payload::{InitPayload, InitPayloadError};
