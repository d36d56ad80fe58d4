//! Error types for Chanviz operations.
//!
//! This module provides the main error type [`ChanvizError`] which wraps
//! every condition that aborts a run before a diagram is written.

use std::{io, path::PathBuf};

use thiserror::Error;

use chanviz_core::channel::ChannelError;

/// The main error type for Chanviz operations.
///
/// # Diagnostic Variants
///
/// The `InputMalformed` variant keeps the document source so that the YAML
/// error location can be shown in context. Variants wrapping another error
/// expose it through `source()` only, never in their own message.
#[derive(Debug, Error)]
pub enum ChanvizError {
    #[error("Cannot read channel file {}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed channel document: {err}")]
    InputMalformed { err: serde_yaml::Error, src: String },

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot write diagram")]
    Output(#[source] io::Error),
}

impl ChanvizError {
    /// Create a new `InputMalformed` error with the associated source text.
    pub fn new_malformed_error(err: serde_yaml::Error, src: impl Into<String>) -> Self {
        Self::InputMalformed {
            err,
            src: src.into(),
        }
    }

    /// Create a new `InputUnreadable` error for `path`.
    pub fn new_unreadable_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputUnreadable {
            path: path.into(),
            source,
        }
    }
}
