//! Error types for dxf-hatch

use std::io;
use thiserror::Error;

use crate::types::Handle;

/// Main error type for codec operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while writing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unrecoverable stream failure: I/O while reading, premature end of
    /// input, a malformed code line or a count-prefixed structure that does
    /// not match the records that follow it.
    #[error("Stream error at line {line}: {cause}")]
    Stream { line: usize, cause: String },

    /// An entity failed validation before encoding. Only that entity is
    /// affected.
    #[error("Invalid {entity} (id {}): {field}: {reason}", display_handle(.handle))]
    Validation {
        entity: &'static str,
        handle: Option<Handle>,
        field: &'static str,
        reason: String,
    },

    /// Invalid entity type
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

fn display_handle(handle: &Option<Handle>) -> String {
    match handle {
        Some(h) => format!("{:X}", h),
        None => "unassigned".to_string(),
    }
}

impl DxfError {
    /// Build a stream error at the given line
    pub fn stream(line: usize, cause: impl Into<String>) -> Self {
        DxfError::Stream {
            line,
            cause: cause.into(),
        }
    }

    /// Build a validation error
    pub fn validation(
        entity: &'static str,
        handle: Option<Handle>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        DxfError::Validation {
            entity,
            handle,
            field,
            reason: reason.into(),
        }
    }

    /// True for errors that abort the whole document
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DxfError::Validation { .. })
    }
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}
