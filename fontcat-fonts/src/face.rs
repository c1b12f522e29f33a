//! Font file loading and metric/charset queries.

use std::path::Path;
use std::sync::Arc;

use swash::FontRef;

use crate::blocks::UnicodeBlock;

/// An owned font file with a swash view over it.
///
/// The struct owns the raw bytes and carries a `FontRef` used for metric and
/// character-map queries. The `FontRef` is guaranteed to be valid for the
/// lifetime of this struct.
#[derive(Clone)]
pub struct FontFile {
    /// Raw font data bytes (TTF/OTF).
    pub data: Arc<Vec<u8>>,
    /// Swash font reference for metric and charmap operations.
    font_ref: FontRef<'static>,
}

impl std::fmt::Debug for FontFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFile")
            .field("data_len", &self.data.len())
            .finish()
    }
}

/// Metrics derived from a face, scaled from font units to output pixels.
///
/// Values are rounded to whole pixels; faces missing a cap-height or
/// x-height record report zero for that field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledMetrics {
    /// Extra vertical space between lines, in pixels.
    pub line_gap: f64,
    /// Height of flat capital letters above the baseline, in pixels.
    pub cap_height: f64,
    /// Height of the lowercase 'x' above the baseline, in pixels.
    pub x_height: f64,
}

impl FontFile {
    /// Create a `FontFile` from raw bytes using face index 0.
    ///
    /// Returns `None` if the bytes are not a parseable font.
    pub fn from_bytes(data: Vec<u8>) -> Option<Self> {
        let data_arc = Arc::new(data);

        // SAFETY: the data outlives the FontRef because both are stored in
        // this struct and dropped together; the Arc keeps the allocation
        // stable across clones.
        let font_ref = unsafe {
            let bytes = data_arc.as_slice();
            let static_bytes: &'static [u8] = std::mem::transmute(bytes);
            FontRef::from_index(static_bytes, 0)?
        };

        Some(FontFile {
            data: data_arc,
            font_ref,
        })
    }

    /// Read and parse a font file from disk.
    pub fn open(path: &Path) -> std::io::Result<Option<Self>> {
        let data = std::fs::read(path)?;
        let len = data.len();
        let face = Self::from_bytes(data);
        if face.is_some() {
            log::debug!("loaded font file {} ({} bytes)", path.display(), len);
        }
        Ok(face)
    }

    /// Derive pixel metrics for a nominal output size.
    ///
    /// Font-unit values are scaled by `size / units_per_em` and rounded,
    /// matching the pixel units the atlas layout documents use.
    pub fn scaled_metrics(&self, size: f64) -> ScaledMetrics {
        let metrics = self.font_ref.metrics(&[]);
        let scale = size / metrics.units_per_em as f64;
        ScaledMetrics {
            line_gap: (metrics.leading as f64 * scale).round(),
            cap_height: (metrics.cap_height as f64 * scale).round(),
            x_height: (metrics.x_height as f64 * scale).round(),
        }
    }

    /// All code points this face has a glyph for, in character-map order.
    ///
    /// The cmap subtables are segment-sorted, so the result is ascending;
    /// downstream charset strings preserve this order.
    pub fn code_points(&self) -> Vec<u32> {
        let mut points = Vec::new();
        self.font_ref.charmap().enumerate(|code_point, _glyph_id| {
            points.push(code_point);
        });
        points
    }

    /// The ordered charset of this face restricted to a Unicode block.
    pub fn charset_in_block(&self, block: &UnicodeBlock) -> String {
        charset_in_range(&self.code_points(), block.min(), block.max())
    }
}

/// The ordered subsequence of `code_points` inside `[min, max]`, as a
/// string of literal characters.
///
/// Order is preserved from the input sequence, never re-sorted. Code points
/// that are not valid scalar values (surrogates) are dropped.
pub fn charset_in_range(code_points: &[u32], min: u32, max: u32) -> String {
    code_points
        .iter()
        .filter(|&&cp| cp >= min && cp <= max)
        .filter_map(|&cp| char::from_u32(cp))
        .collect()
}
