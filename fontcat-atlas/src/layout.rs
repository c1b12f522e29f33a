//! BMFont-style layout documents.
//!
//! Each generated block atlas is described by one JSON document listing the
//! texture pages, the per-glyph boxes, and the shared line metrics. The
//! field names follow the BMFont JSON dialect text engines already parse.

use serde::{Deserialize, Serialize};

/// One glyph box within a texture page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphBox {
    /// Unicode code point.
    pub id: u32,
    /// The character itself.
    #[serde(rename = "char")]
    pub character: String,
    /// Box width in pixels (zero for outline-less glyphs such as spaces).
    pub width: u32,
    /// Box height in pixels.
    pub height: u32,
    /// Horizontal offset from the pen position to the box, in pixels.
    pub xoffset: i32,
    /// Vertical offset from the top of the line to the box, in pixels.
    pub yoffset: i32,
    /// Horizontal pen advance, in pixels.
    pub xadvance: i32,
    /// Channel mask (all channels for distance fields).
    pub chnl: u32,
    /// Box X position within its page.
    pub x: u32,
    /// Box Y position within its page.
    pub y: u32,
    /// Index of the page holding the box.
    pub page: u32,
}

/// Face-level information block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInfo {
    /// Face name the atlas was generated from.
    pub face: String,
    /// Nominal glyph size in pixels.
    pub size: f64,
    /// Padding applied around each glyph (up/right/down/left).
    pub padding: [u32; 4],
}

/// Metrics shared by every glyph of the atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutCommon {
    /// Distance between consecutive baselines, in pixels.
    pub line_height: f64,
    /// Distance from the top of the line to the baseline, in pixels.
    pub base: f64,
    /// Width of the texture pages.
    pub scale_w: u32,
    /// Height of the tallest texture page.
    pub scale_h: u32,
    /// Number of texture pages.
    pub pages: u32,
}

/// Distance-field parameters of the atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceField {
    /// Field flavour ("sdf" or "msdf").
    pub field_type: String,
    /// Field range in pixels.
    pub distance_range: f64,
}

/// The complete layout document for one block atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Texture page file names, in page order.
    pub pages: Vec<String>,
    /// Glyph boxes, in charset order.
    pub chars: Vec<GlyphBox>,
    /// Face-level information.
    pub info: LayoutInfo,
    /// Shared line metrics.
    pub common: LayoutCommon,
    /// Distance-field parameters.
    #[serde(rename = "distanceField")]
    pub distance_field: DistanceField,
}
