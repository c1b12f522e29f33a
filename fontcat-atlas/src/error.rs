//! Typed error types for fontcat-atlas.
//!
//! One enum covers the rasterization pipeline end to end so the caller can
//! log a single underlying message and skip the affected block.

use thiserror::Error;

/// Errors produced while rasterizing or persisting a block atlas.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// The font bytes could not be parsed into a face.
    #[error("font face parse failed: {0}")]
    FaceParse(String),

    /// A glyph could not be turned into a distance field.
    #[error("glyph rasterization failed for '{ch}' (U+{code:04X}): {details}")]
    Glyph {
        /// The character being rasterized.
        ch: char,
        /// Its code point.
        code: u32,
        /// Human-readable failure details.
        details: String,
    },

    /// A texture page could not be encoded or decoded.
    #[error("atlas image error: {0}")]
    Image(#[from] image::ImageError),

    /// The layout document could not be serialized.
    #[error("layout serialization failed: {0}")]
    Layout(#[from] serde_json::Error),

    /// An atlas file could not be written.
    #[error("I/O error writing atlas: {0}")]
    Io(#[from] std::io::Error),
}

impl AtlasError {
    pub(crate) fn glyph(ch: char, details: impl Into<String>) -> Self {
        AtlasError::Glyph {
            ch,
            code: ch as u32,
            details: details.into(),
        }
    }
}
