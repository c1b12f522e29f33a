//! SDF/MSDF glyph atlas rasterization for fontcat.
//!
//! This crate turns (font bytes, charset string, options) into one or more
//! shelf-packed texture pages plus a BMFont-style layout document:
//!
//! - Glyph outlines are extracted with `ttf-parser` and rendered to signed
//!   distance fields with `msdfgen`
//! - Pages are composed with `image` and saved as PNG
//! - The layout document carries the line metrics and per-glyph boxes a
//!   text engine needs to sample the atlas

use msdfgen_lib as _; // forces linking with msdfgen library

mod error;
mod layout;
mod packer;

use std::path::Path;

use image::RgbaImage;
use image::imageops;
use msdfgen::{Bitmap, FontExt, GeneratorConfig, MsdfGeneratorConfig, Range, Shape};
use ttf_parser::Face;

use fontcat_config::FieldType;

pub use error::AtlasError;
pub use layout::{DistanceField, GlyphBox, LayoutCommon, LayoutDocument, LayoutInfo};

use packer::{ShelfPacker, Slot};

/// Fixed padding between glyph boxes on a page, in pixels.
pub const TEXTURE_PADDING: u32 = 2;

/// Shelf width of a texture page.
const PAGE_WIDTH: u32 = 1024;

/// Hard cap on page height; taller content overflows to the next page.
const MAX_PAGE_HEIGHT: u32 = 2048;

/// Rendering options for one block atlas.
#[derive(Debug, Clone)]
pub struct AtlasOptions {
    /// Nominal glyph size in output pixels.
    pub font_size: f64,
    /// Distance-field range in output pixels.
    pub distance_range: f64,
    /// Distance-field flavour.
    pub field_type: FieldType,
    /// Padding between glyph boxes on a page.
    pub texture_padding: u32,
}

impl Default for AtlasOptions {
    fn default() -> Self {
        AtlasOptions {
            font_size: 32.0,
            distance_range: 8.0,
            field_type: FieldType::Sdf,
            texture_padding: TEXTURE_PADDING,
        }
    }
}

/// One composed texture page, ready to be saved.
pub struct AtlasPage {
    /// File name of the page within the block's asset directory.
    pub file_name: String,
    /// Page pixels.
    pub image: RgbaImage,
}

/// The rendered atlas for one (font, block, style) triple.
pub struct BlockAtlas {
    stem: String,
    /// Texture pages, in page order.
    pub pages: Vec<AtlasPage>,
    /// Layout document describing the pages.
    pub layout: LayoutDocument,
    /// Distance between consecutive baselines, in pixels.
    pub line_height: f64,
    /// Distance from the top of the line to the baseline, in pixels.
    pub base: f64,
    /// Widest glyph box of the atlas, in pixels.
    pub max_glyph_width: u32,
    /// Tallest glyph box of the atlas, in pixels.
    pub max_glyph_height: u32,
}

impl BlockAtlas {
    /// File name of the layout document within the asset directory.
    pub fn layout_file_name(&self) -> String {
        format!("{}.json", self.stem)
    }

    /// Persist all pages and the layout document into `dir`.
    pub fn write(&self, dir: &Path) -> Result<(), AtlasError> {
        std::fs::create_dir_all(dir)?;
        for page in &self.pages {
            page.image.save(dir.join(&page.file_name))?;
        }
        let json = serde_json::to_string(&self.layout)?;
        std::fs::write(dir.join(self.layout_file_name()), json)?;
        Ok(())
    }
}

struct RenderedGlyph {
    ch: char,
    width: u32,
    height: u32,
    xoffset: i32,
    yoffset: i32,
    xadvance: i32,
    image: Option<RgbaImage>,
}

/// Render a charset into a block atlas.
///
/// `face_name` labels the layout document; `stem` names the output files
/// (`<stem>.png` pages and `<stem>.json`). Every character of `charset` the
/// face maps to a glyph produces a box; outline-less glyphs (spaces) get a
/// zero-sized box with a real advance.
pub fn render_block(
    font_data: &[u8],
    charset: &str,
    face_name: &str,
    stem: &str,
    options: &AtlasOptions,
) -> Result<BlockAtlas, AtlasError> {
    let face = Face::parse(font_data, 0).map_err(|e| AtlasError::FaceParse(e.to_string()))?;
    let scale = options.font_size / face.units_per_em() as f64;
    let base = (face.ascender() as f64 * scale).round();
    let line_span = face.ascender() as i32 - face.descender() as i32 + face.line_gap() as i32;
    let line_height = (line_span as f64 * scale).round();

    // Room for the distance field to bleed past the outline.
    let spread = options.distance_range.ceil() as u32;

    let mut glyphs: Vec<RenderedGlyph> = Vec::new();
    let mut max_glyph_width = 0u32;
    let mut max_glyph_height = 0u32;

    for ch in charset.chars() {
        let Some(glyph_id) = face.glyph_index(ch) else {
            log::debug!("no glyph for '{}' (U+{:04X})", ch, ch as u32);
            continue;
        };
        let xadvance =
            (face.glyph_hor_advance(glyph_id).unwrap_or(0) as f64 * scale).round() as i32;

        let outline = face
            .glyph_bounding_box(glyph_id)
            .and_then(|bbox| face.glyph_shape(glyph_id).map(|shape| (bbox, shape)));
        let Some((bbox, mut shape)) = outline else {
            // Outline-less glyph: keep the advance, render nothing.
            glyphs.push(RenderedGlyph {
                ch,
                width: 0,
                height: 0,
                xoffset: 0,
                yoffset: 0,
                xadvance,
                image: None,
            });
            continue;
        };

        if !shape.validate() {
            log::warn!("skipping '{}' (U+{:04X}): invalid glyph shape", ch, ch as u32);
            continue;
        }
        shape.normalize();

        let width = ((bbox.width() as f64 * scale).ceil() as u32 + spread).max(1);
        let height = ((bbox.height() as f64 * scale).ceil() as u32 + spread).max(1);
        let image = rasterize_distance_field(&mut shape, width, height, options, ch)?;

        // Box offsets relative to the pen position / top of line, with the
        // field spread split evenly around the outline.
        let half_range = options.distance_range / 2.0;
        let xoffset = (bbox.x_min as f64 * scale - half_range).round() as i32;
        let yoffset = (base - bbox.y_max as f64 * scale - half_range).round() as i32;

        max_glyph_width = max_glyph_width.max(width);
        max_glyph_height = max_glyph_height.max(height);
        glyphs.push(RenderedGlyph {
            ch,
            width,
            height,
            xoffset,
            yoffset,
            xadvance,
            image: Some(image),
        });
    }

    let padding = options.texture_padding;
    let page_width = PAGE_WIDTH.max(max_glyph_width + 2 * padding);
    let max_page_height = MAX_PAGE_HEIGHT.max(max_glyph_height + 2 * padding);
    let mut packer = ShelfPacker::new(page_width, max_page_height, padding);

    let slots: Vec<Option<Slot>> = glyphs
        .iter()
        .map(|glyph| {
            glyph
                .image
                .as_ref()
                .map(|_| packer.place(glyph.width, glyph.height))
        })
        .collect();

    let any_pixels = slots.iter().any(Option::is_some);
    let mut page_images: Vec<RgbaImage> = if any_pixels {
        (0..packer.page_count())
            .map(|page| RgbaImage::new(page_width, packer.used_height(page)))
            .collect()
    } else {
        Vec::new()
    };

    for (glyph, slot) in glyphs.iter().zip(&slots) {
        if let (Some(image), Some(slot)) = (&glyph.image, slot) {
            imageops::replace(
                &mut page_images[slot.page as usize],
                image,
                slot.x as i64,
                slot.y as i64,
            );
        }
    }

    let pages: Vec<AtlasPage> = page_images
        .into_iter()
        .enumerate()
        .map(|(index, image)| AtlasPage {
            file_name: page_file_name(stem, index as u32),
            image,
        })
        .collect();

    let scale_h = pages.iter().map(|p| p.image.height()).max().unwrap_or(0);
    let chars: Vec<GlyphBox> = glyphs
        .iter()
        .zip(&slots)
        .map(|(glyph, slot)| {
            let slot = slot.unwrap_or(Slot { page: 0, x: 0, y: 0 });
            GlyphBox {
                id: glyph.ch as u32,
                character: glyph.ch.to_string(),
                width: glyph.width,
                height: glyph.height,
                xoffset: glyph.xoffset,
                yoffset: glyph.yoffset,
                xadvance: glyph.xadvance,
                chnl: 15,
                x: slot.x,
                y: slot.y,
                page: slot.page,
            }
        })
        .collect();

    let layout = LayoutDocument {
        pages: pages.iter().map(|p| p.file_name.clone()).collect(),
        chars,
        info: LayoutInfo {
            face: face_name.to_string(),
            size: options.font_size,
            padding: [padding; 4],
        },
        common: LayoutCommon {
            line_height,
            base,
            scale_w: page_width,
            scale_h,
            pages: pages.len() as u32,
        },
        distance_field: DistanceField {
            field_type: options.field_type.to_string(),
            distance_range: options.distance_range,
        },
    };

    Ok(BlockAtlas {
        stem: stem.to_string(),
        pages,
        layout,
        line_height,
        base,
        max_glyph_width,
        max_glyph_height,
    })
}

/// Page file names: `<stem>.png`, then `<stem>_1.png`, `<stem>_2.png`, ...
fn page_file_name(stem: &str, page: u32) -> String {
    if page == 0 {
        format!("{stem}.png")
    } else {
        format!("{stem}_{page}.png")
    }
}

/// Render one glyph shape into an RGBA tile of the requested size.
fn rasterize_distance_field(
    shape: &mut Shape,
    width: u32,
    height: u32,
    options: &AtlasOptions,
    ch: char,
) -> Result<RgbaImage, AtlasError> {
    let framing = shape
        .get_bound()
        .autoframe(width, height, Range::Px(options.distance_range), None)
        .ok_or_else(|| AtlasError::glyph(ch, "could not frame glyph shape"))?;

    // msdfgen renders into its own float bitmaps; exchange pixels through an
    // in-memory PNG, the surface the bindings expose.
    let mut png = Vec::new();
    match options.field_type {
        FieldType::Sdf => {
            let mut bitmap = Bitmap::new(width, height);
            shape.generate_sdf(&mut bitmap, &framing, GeneratorConfig::default());
            bitmap.flip_y();
            bitmap
                .write_png(&mut png)
                .map_err(|e| AtlasError::glyph(ch, e.to_string()))?;
        }
        FieldType::Msdf => {
            shape.edge_coloring_simple(3.0, 0);
            let mut bitmap = Bitmap::new(width, height);
            shape.generate_msdf(&mut bitmap, &framing, MsdfGeneratorConfig::default());
            bitmap.flip_y();
            bitmap
                .write_png(&mut png)
                .map_err(|e| AtlasError::glyph(ch, e.to_string()))?;
        }
    }

    Ok(image::load_from_memory(&png)?.to_rgba8())
}
