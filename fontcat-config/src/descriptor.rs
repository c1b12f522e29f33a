//! Catalog descriptor types and loading.
//!
//! The descriptor is the JSON document a generation run is driven by: the
//! catalog name, the nominal glyph size, the distance-field flavour and
//! range, the directory holding the font files, and one entry per typeface
//! with optional style variants and an optional Unicode block allowlist.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DescriptorError;

/// Distance-field flavour of the generated atlases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-channel signed distance field.
    #[default]
    Sdf,
    /// Multi-channel signed distance field.
    Msdf,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Sdf => write!(f, "sdf"),
            FieldType::Msdf => write!(f, "msdf"),
        }
    }
}

/// Lenient deserializer for `FieldType`.
///
/// Accepts any string: exactly `"msdf"` selects the multi-channel field,
/// everything else falls back to plain sdf. Descriptors in the wild carry
/// free-form values here, so this mirrors the permissive reading rather
/// than rejecting the document.
fn deserialize_field_type<'de, D>(deserializer: D) -> Result<FieldType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(if value == "msdf" {
        FieldType::Msdf
    } else {
        FieldType::Sdf
    })
}

/// One typeface entry in the descriptor.
///
/// `name` is the file stem of the regular-style font file; the optional
/// variants name sibling files for the bold/italic/bold-italic styles. When
/// `blocks` is present and non-empty, only the named Unicode blocks are
/// attempted for this font; otherwise every block in the bundled table is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    /// Regular-style font file stem (`<fontsDir>/<name>.ttf`).
    pub name: String,

    /// Bold variant file stem (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<String>,

    /// Italic variant file stem (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<String>,

    /// Bold-italic variant file stem (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold_italic: Option<String>,

    /// Unicode block allowlist (optional; empty means "all known blocks").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<String>>,
}

impl FontSpec {
    /// Block names to attempt for this font, or `None` for the full table.
    pub fn block_allowlist(&self) -> Option<&[String]> {
        match &self.blocks {
            Some(blocks) if !blocks.is_empty() => Some(blocks),
            _ => None,
        }
    }
}

/// The catalog descriptor document.
///
/// Immutable once loaded; all omitted fields receive the defaults from
/// [`crate::defaults`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDescriptor {
    /// Catalog name, used as the prefix of every output path.
    #[serde(default = "crate::defaults::name")]
    pub name: String,

    /// Nominal glyph size in output pixels.
    #[serde(default = "crate::defaults::size")]
    pub size: f64,

    /// Distance-field flavour.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_field_type"
    )]
    pub field_type: FieldType,

    /// Distance-field range in output pixels.
    #[serde(default = "crate::defaults::distance")]
    pub distance: f64,

    /// Directory holding the font files, relative to the descriptor file.
    pub fonts_dir: String,

    /// Typefaces to process, in declaration order.
    #[serde(default)]
    pub fonts: Vec<FontSpec>,
}

impl CatalogDescriptor {
    /// Load a descriptor from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DescriptorError> {
        let contents = fs::read_to_string(path)?;
        let descriptor: CatalogDescriptor = serde_json::from_str(&contents)?;
        Ok(descriptor)
    }

    /// Resolve the descriptor's `fontsDir` against the descriptor file.
    ///
    /// The directory is taken relative to the descriptor file's parent
    /// directory; an absolute `fontsDir` is used as-is. The resolved path
    /// must exist and be a directory.
    pub fn resolve_fonts_dir(&self, descriptor_path: &Path) -> Result<PathBuf, DescriptorError> {
        let base = descriptor_path.parent().unwrap_or_else(|| Path::new("."));
        let dir = base.join(&self.fonts_dir);
        if !dir.is_dir() {
            return Err(DescriptorError::FontsDir(format!(
                "'{}' (from {}) is not a directory",
                dir.display(),
                descriptor_path.display()
            )));
        }
        Ok(dir)
    }
}
