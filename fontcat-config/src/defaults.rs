//! Default values for omitted catalog descriptor fields.

/// Catalog name when the descriptor omits `name`.
pub fn name() -> String {
    "Default".to_string()
}

/// Nominal glyph size in pixels.
pub fn size() -> f64 {
    32.0
}

/// Distance-field range in pixels.
pub fn distance() -> f64 {
    8.0
}
