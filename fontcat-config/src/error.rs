//! Typed error variants for the fontcat-config crate.
//!
//! Provides structured error types for descriptor I/O and validation so
//! callers can match on specific failure modes instead of opaque strings.
//! Every variant here is fatal for a generation run: nothing has been
//! written yet when a descriptor fails to load.

use std::fmt;

/// Errors that can occur when loading a catalog descriptor.
#[derive(Debug)]
pub enum DescriptorError {
    /// An I/O error occurred reading the descriptor file.
    Io(std::io::Error),

    /// The descriptor file contained invalid JSON that could not be parsed.
    Parse(serde_json::Error),

    /// The descriptor's `fontsDir` could not be resolved to an existing
    /// directory.
    ///
    /// The inner string includes the offending path.
    FontsDir(String),
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::Io(e) => write!(f, "I/O error reading descriptor: {e}"),
            DescriptorError::Parse(e) => write!(f, "JSON parse error in descriptor: {e}"),
            DescriptorError::FontsDir(msg) => write!(f, "Invalid fontsDir: {msg}"),
        }
    }
}

impl std::error::Error for DescriptorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DescriptorError::Io(e) => Some(e),
            DescriptorError::Parse(e) => Some(e),
            DescriptorError::FontsDir(_) => None,
        }
    }
}

impl From<std::io::Error> for DescriptorError {
    fn from(e: std::io::Error) -> Self {
        DescriptorError::Io(e)
    }
}

impl From<serde_json::Error> for DescriptorError {
    fn from(e: serde_json::Error) -> Self {
        DescriptorError::Parse(e)
    }
}
