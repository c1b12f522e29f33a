//! The generation run: fonts → style variants → Unicode blocks.
//!
//! One rasterization is in flight at a time and every per-block failure is
//! converted into a logged skip, so a partial catalog is still written. Only
//! descriptor-level problems abort the run.

use std::path::{Path, PathBuf};

use anyhow::Result;

use fontcat_atlas::{AtlasOptions, TEXTURE_PADDING, render_block};
use fontcat_config::{CatalogDescriptor, DescriptorError, FontSpec};
use fontcat_fonts::{BlockTable, FontFile, UnicodeBlock};

use crate::catalog::{CatalogBuilder, FontCatalog, FontEntry, FontMetrics};

/// Name of the synthetic font entry backing the replacement-character
/// assets, generated from the bundled face rather than any user font.
const EXTRA_FONT_NAME: &str = "Extra";

/// The replacement-character block appended after all user fonts.
fn specials_block() -> UnicodeBlock {
    UnicodeBlock {
        name: "Specials".to_string(),
        range: [0xFFF0, 0xFFFF],
    }
}

/// A style variant of a font, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl Style {
    /// All styles, in the fixed processing order.
    pub const ALL: [Style; 4] = [Style::Regular, Style::Bold, Style::Italic, Style::BoldItalic];

    /// True for the base (non-bold, non-italic) style.
    pub fn is_regular(self) -> bool {
        self == Style::Regular
    }

    /// Suffix of the asset directory for this style.
    pub fn asset_suffix(self) -> &'static str {
        match self {
            Style::Regular => "_Assets",
            Style::Bold => "_BoldAssets",
            Style::Italic => "_ItalicAssets",
            Style::BoldItalic => "_BoldItalicAssets",
        }
    }

    /// Log label for this style.
    pub fn label(self) -> &'static str {
        match self {
            Style::Regular => "REGULAR",
            Style::Bold => "BOLD",
            Style::Italic => "ITALIC",
            Style::BoldItalic => "BOLD ITALIC",
        }
    }

    /// The font file stem a spec names for this style, if any.
    pub fn variant_stem(self, spec: &FontSpec) -> Option<&str> {
        match self {
            Style::Regular => Some(&spec.name),
            Style::Bold => spec.bold.as_deref(),
            Style::Italic => spec.italic.as_deref(),
            Style::BoldItalic => spec.bold_italic.as_deref(),
        }
    }
}

/// Drives one generation run over a loaded descriptor.
pub struct Generator<'a> {
    descriptor: &'a CatalogDescriptor,
    descriptor_path: PathBuf,
    fonts_dir: PathBuf,
    output_dir: &'a Path,
    blocks: BlockTable,
}

impl<'a> Generator<'a> {
    /// Resolve the descriptor's fonts directory and load the block table.
    pub fn new(
        descriptor: &'a CatalogDescriptor,
        descriptor_path: &Path,
        output_dir: &'a Path,
    ) -> Result<Self, DescriptorError> {
        let fonts_dir = descriptor.resolve_fonts_dir(descriptor_path)?;
        Ok(Generator {
            descriptor,
            descriptor_path: descriptor_path.to_path_buf(),
            fonts_dir,
            output_dir,
            blocks: BlockTable::bundled(),
        })
    }

    /// Walk every font, style and block, then write the catalog manifest.
    ///
    /// Returns the assembled catalog; partial results (skipped fonts,
    /// styles or blocks) are still considered a successful run.
    pub fn run(&self) -> Result<FontCatalog> {
        log::info!("=== FontCatalog Generation ===");
        log::info!("Input: {}", self.descriptor_path.display());
        log::info!("Output: {}", self.output_dir.display());
        log::info!("Name: {}", self.descriptor.name);
        log::info!("Size: {}", self.descriptor.size);
        log::info!("Distance: {}", self.descriptor.distance);
        log::info!("Type: {}", self.descriptor.field_type);

        let mut builder = CatalogBuilder::new(
            &self.descriptor.name,
            self.descriptor.field_type,
            self.descriptor.size,
            self.descriptor.distance,
        );

        for spec in &self.descriptor.fonts {
            self.generate_font(&mut builder, spec);
        }
        self.generate_replacement_assets(&mut builder);

        let catalog = builder.into_catalog();
        std::fs::create_dir_all(self.output_dir)?;
        let manifest_path = self
            .output_dir
            .join(format!("{}_FontCatalog.json", catalog.name));
        std::fs::write(&manifest_path, catalog.to_json()?)?;
        log::info!("Wrote catalog manifest to {}", manifest_path.display());

        Ok(catalog)
    }

    /// Process one font spec: every style variant over every block in scope.
    fn generate_font(&self, builder: &mut CatalogBuilder, spec: &FontSpec) {
        let Some(regular) = self.open_font(&spec.name) else {
            log::warn!("skipping font '{}': regular face unavailable", spec.name);
            return;
        };
        let mut entry = self.new_entry(&spec.name, &regular);

        for style in Style::ALL {
            let Some(stem) = style.variant_stem(spec) else {
                continue;
            };
            let face = if style.is_regular() {
                regular.clone()
            } else {
                match self.open_font(stem) {
                    Some(face) => face,
                    None => {
                        log::warn!(
                            "skipping {} style of font '{}': face '{}' unavailable",
                            style.label(),
                            spec.name,
                            stem
                        );
                        continue;
                    }
                }
            };

            match style {
                Style::Regular => {}
                Style::Bold => entry.bold = Some(stem.to_string()),
                Style::Italic => entry.italic = Some(stem.to_string()),
                Style::BoldItalic => entry.bold_italic = Some(stem.to_string()),
            }

            self.generate_style_assets(builder, &mut entry, spec, &face, stem, style);
        }

        builder.finalize_font(entry);
    }

    /// Process every block in scope for one style variant of a font.
    fn generate_style_assets(
        &self,
        builder: &mut CatalogBuilder,
        entry: &mut FontEntry,
        spec: &FontSpec,
        face: &FontFile,
        stem: &str,
        style: Style,
    ) {
        log::info!("Generating assets for font: {stem}");

        let block_names: Vec<&str> = match spec.block_allowlist() {
            Some(names) => names.iter().map(String::as_str).collect(),
            None => self.blocks.names(),
        };

        for name in block_names {
            let Some(block) = self.blocks.find(name) else {
                log::warn!("'{name}' is not a valid Unicode block");
                continue;
            };

            let charset = face.charset_in_block(block);
            if charset.is_empty() {
                log::warn!(
                    "no characters in '{}' are supported by font '{}'",
                    block.name,
                    stem
                );
                continue;
            }

            let count = charset.chars().count();
            log::info!(
                "Generating {} assets for block: {}",
                style.label(),
                block.name
            );
            log::info!(
                "Code point support {:.3}% ({}/{})",
                count as f64 / block.len() as f64 * 100.0,
                count,
                block.len()
            );

            let block_stem = block.name.replace(' ', "_");
            let atlas = match render_block(
                &face.data,
                &charset,
                stem,
                &block_stem,
                &self.atlas_options(),
            ) {
                Ok(atlas) => atlas,
                Err(e) => {
                    log::warn!(
                        "failed to generate '{}' for font '{}': {}",
                        block.name,
                        stem,
                        e
                    );
                    continue;
                }
            };

            let dir = self
                .output_dir
                .join(format!("{}{}", self.descriptor.name, style.asset_suffix()))
                .join(&spec.name);
            if let Err(e) = atlas.write(&dir) {
                log::warn!(
                    "failed to write '{}' assets for font '{}': {}",
                    block.name,
                    stem,
                    e
                );
                continue;
            }

            builder.record_block_generation(
                entry,
                block,
                style.is_regular(),
                &charset,
                atlas.line_height,
                atlas.base,
                atlas.max_glyph_width,
                atlas.max_glyph_height,
            );
        }
    }

    /// Generate the replacement-character assets from the bundled face and
    /// register them as the trailing "Extra" font over the Specials block.
    fn generate_replacement_assets(&self, builder: &mut CatalogBuilder) {
        let Some(face) = FontFile::from_bytes(notosans::REGULAR_TTF.to_vec()) else {
            log::warn!("skipping replacement-character assets: bundled face failed to parse");
            return;
        };
        let mut entry = self.new_entry(EXTRA_FONT_NAME, &face);
        let block = specials_block();
        let charset = "\u{FFFD}";

        let atlas = match render_block(
            &face.data,
            charset,
            EXTRA_FONT_NAME,
            "Specials",
            &self.atlas_options(),
        ) {
            Ok(atlas) => atlas,
            Err(e) => {
                log::warn!("failed to generate replacement-character assets: {e}");
                return;
            }
        };

        let dir = self
            .output_dir
            .join(format!("{}_Assets", self.descriptor.name))
            .join(EXTRA_FONT_NAME);
        if let Err(e) = atlas.write(&dir) {
            log::warn!("failed to write replacement-character assets: {e}");
            return;
        }

        builder.record_block_generation(
            &mut entry,
            &block,
            true,
            charset,
            atlas.line_height,
            atlas.base,
            atlas.max_glyph_width,
            atlas.max_glyph_height,
        );
        builder.finalize_font(entry);
    }

    /// Open `<fontsDir>/<stem>.ttf`, logging any failure.
    fn open_font(&self, stem: &str) -> Option<FontFile> {
        let path = self.fonts_dir.join(format!("{stem}.ttf"));
        match FontFile::open(&path) {
            Ok(Some(face)) => Some(face),
            Ok(None) => {
                log::warn!("'{}' is not a parseable font file", path.display());
                None
            }
            Err(e) => {
                log::warn!("could not read '{}': {}", path.display(), e);
                None
            }
        }
    }

    /// A fresh font entry with static metrics derived from the face.
    ///
    /// `base` and `line_height` start at zero; the first regular-style block
    /// recording fills them in.
    fn new_entry(&self, name: &str, face: &FontFile) -> FontEntry {
        let scaled = face.scaled_metrics(self.descriptor.size);
        FontEntry::new(
            name,
            FontMetrics {
                size: self.descriptor.size,
                distance_range: self.descriptor.distance,
                base: 0.0,
                line_height: 0.0,
                line_gap: scaled.line_gap,
                cap_height: scaled.cap_height,
                x_height: scaled.x_height,
            },
        )
    }

    fn atlas_options(&self) -> AtlasOptions {
        AtlasOptions {
            font_size: self.descriptor.size,
            distance_range: self.descriptor.distance,
            field_type: self.descriptor.field_type,
            texture_padding: TEXTURE_PADDING,
        }
    }
}
