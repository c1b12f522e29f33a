//! The FontCatalog data model and the accumulator that assembles it.
//!
//! A generation run mutates exactly one `CatalogBuilder`; every mutation is
//! append-only or max-only, so the catalog can be reasoned about as a
//! monotone merge of per-block recordings.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use fontcat_config::FieldType;
use fontcat_fonts::UnicodeBlock;

/// Pixel metrics of one font entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontMetrics {
    /// Nominal glyph size the atlases were generated at.
    pub size: f64,
    /// Distance-field range in pixels.
    pub distance_range: f64,
    /// Distance from the top of the line to the baseline.
    pub base: f64,
    /// Distance between consecutive baselines.
    pub line_height: f64,
    /// Extra vertical space between lines.
    pub line_gap: f64,
    /// Height of flat capital letters above the baseline.
    pub cap_height: f64,
    /// Height of the lowercase 'x' above the baseline.
    pub x_height: f64,
}

/// An order-preserving, de-duplicated accumulation of characters.
///
/// Serialized as a plain string: the characters in first-seen order. A code
/// point recorded by several style variants appears once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Charset {
    text: String,
    seen: HashSet<char>,
}

impl Charset {
    pub fn new() -> Self {
        Charset::default()
    }

    /// Append every not-yet-seen character of `chars`, preserving order.
    pub fn extend_from(&mut self, chars: &str) {
        for ch in chars.chars() {
            if self.seen.insert(ch) {
                self.text.push(ch);
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of distinct characters accumulated.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.seen.contains(&ch)
    }
}

impl From<&str> for Charset {
    fn from(chars: &str) -> Self {
        let mut charset = Charset::new();
        charset.extend_from(chars);
        charset
    }
}

impl Serialize for Charset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Charset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Charset::from(text.as_str()))
    }
}

/// One font of the catalog: metrics, accumulated charset, variant names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontEntry {
    /// Font name (the regular-style file stem).
    pub name: String,
    /// Canonical pixel metrics (from the regular style).
    pub metrics: FontMetrics,
    /// Union of every charset successfully generated for this font.
    #[serde(default)]
    pub charset: Charset,
    /// Bold variant file stem, when generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<String>,
    /// Italic variant file stem, when generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<String>,
    /// Bold-italic variant file stem, when generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold_italic: Option<String>,
}

impl FontEntry {
    pub fn new(name: &str, metrics: FontMetrics) -> Self {
        FontEntry {
            name: name.to_string(),
            metrics,
            charset: Charset::new(),
            bold: None,
            italic: None,
            bold_italic: None,
        }
    }
}

/// One Unicode block with the fonts that supply regular-style glyphs for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedBlockEntry {
    /// Block name.
    pub name: String,
    /// First code point (inclusive).
    pub min: u32,
    /// Last code point (inclusive).
    pub max: u32,
    /// Fonts providing glyphs for the block, in registration order.
    pub fonts: Vec<String>,
}

/// The manifest describing one generated asset set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontCatalog {
    /// Catalog name (output path prefix).
    pub name: String,
    /// Distance-field flavour of every atlas.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Nominal glyph size in pixels.
    pub size: f64,
    /// Widest glyph box generated across all fonts, styles and blocks.
    pub max_width: f64,
    /// Tallest glyph box generated across all fonts, styles and blocks.
    pub max_height: f64,
    /// Distance-field range in pixels.
    pub distance_range: f64,
    /// Fonts, in descriptor order (plus the trailing "Extra" entry).
    pub fonts: Vec<FontEntry>,
    /// Blocks with at least one successful generation.
    pub supported_blocks: Vec<SupportedBlockEntry>,
}

impl FontCatalog {
    /// Serialize the manifest to its JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The single mutable ledger of a generation run.
///
/// Blocks are looked up by name through an index map kept beside the ordered
/// block list, so registration stays O(1) while the manifest preserves
/// first-generation order.
pub struct CatalogBuilder {
    catalog: FontCatalog,
    block_index: HashMap<String, usize>,
}

impl CatalogBuilder {
    pub fn new(name: &str, field_type: FieldType, size: f64, distance_range: f64) -> Self {
        CatalogBuilder {
            catalog: FontCatalog {
                name: name.to_string(),
                field_type,
                size,
                max_width: 0.0,
                max_height: 0.0,
                distance_range,
                fonts: Vec::new(),
                supported_blocks: Vec::new(),
            },
            block_index: HashMap::new(),
        }
    }

    /// Record one successful (font, block, style) generation.
    ///
    /// Appends the charset delta to the entry (de-duplicated), refreshes the
    /// entry's line metrics for the base regular style, max-merges the
    /// global glyph box, and registers the block: the first success creates
    /// its entry seeded with this font, later regular-style successes append
    /// fonts not yet listed. Non-regular styles never extend an existing
    /// block's font list.
    #[allow(clippy::too_many_arguments)]
    pub fn record_block_generation(
        &mut self,
        entry: &mut FontEntry,
        block: &UnicodeBlock,
        regular_style: bool,
        charset_delta: &str,
        line_height: f64,
        base: f64,
        max_glyph_width: u32,
        max_glyph_height: u32,
    ) {
        entry.charset.extend_from(charset_delta);
        if regular_style {
            entry.metrics.line_height = line_height;
            entry.metrics.base = base;
        }

        self.catalog.max_width = self.catalog.max_width.max(max_glyph_width as f64);
        self.catalog.max_height = self.catalog.max_height.max(max_glyph_height as f64);

        match self.block_index.get(&block.name) {
            None => {
                self.block_index
                    .insert(block.name.clone(), self.catalog.supported_blocks.len());
                self.catalog.supported_blocks.push(SupportedBlockEntry {
                    name: block.name.clone(),
                    min: block.min(),
                    max: block.max(),
                    fonts: vec![entry.name.clone()],
                });
            }
            Some(&index) => {
                let block_entry = &mut self.catalog.supported_blocks[index];
                if regular_style && !block_entry.fonts.iter().any(|f| *f == entry.name) {
                    block_entry.fonts.push(entry.name.clone());
                }
            }
        }
    }

    /// Append a completed font entry. Called once per font, after every
    /// style variant and block has been attempted.
    pub fn finalize_font(&mut self, entry: FontEntry) {
        self.catalog.fonts.push(entry);
    }

    /// Running maximum glyph box width, in pixels.
    pub fn max_width(&self) -> f64 {
        self.catalog.max_width
    }

    /// Running maximum glyph box height, in pixels.
    pub fn max_height(&self) -> f64 {
        self.catalog.max_height
    }

    /// Finish the run and hand back the assembled catalog.
    pub fn into_catalog(self) -> FontCatalog {
        self.catalog
    }
}
