//! Integration tests for the atlas rasterizer against a real face.

use fontcat_atlas::{AtlasOptions, render_block};
use fontcat_config::FieldType;

/// Embedded Noto Sans regular for testing.
const TEST_FONT: &[u8] = notosans::REGULAR_TTF;

fn sdf_options() -> AtlasOptions {
    AtlasOptions::default()
}

#[test]
fn test_renders_basic_charset() {
    let atlas = render_block(TEST_FONT, "ABC", "Sans", "Basic_Latin", &sdf_options()).unwrap();

    assert_eq!(atlas.pages.len(), 1);
    assert_eq!(atlas.pages[0].file_name, "Basic_Latin.png");
    assert_eq!(atlas.layout.chars.len(), 3);
    assert_eq!(atlas.layout.pages, vec!["Basic_Latin.png".to_string()]);
    assert_eq!(atlas.layout.info.face, "Sans");
    assert_eq!(atlas.layout.common.pages, 1);

    assert!(atlas.line_height > 0.0);
    assert!(atlas.base > 0.0);
    assert!(atlas.max_glyph_width > 0);
    assert!(atlas.max_glyph_height > 0);
}

#[test]
fn test_max_box_matches_glyph_list() {
    let atlas = render_block(TEST_FONT, "iWm.", "Sans", "Sample", &sdf_options()).unwrap();

    let widest = atlas.layout.chars.iter().map(|c| c.width).max().unwrap();
    let tallest = atlas.layout.chars.iter().map(|c| c.height).max().unwrap();
    assert_eq!(atlas.max_glyph_width, widest);
    assert_eq!(atlas.max_glyph_height, tallest);
}

#[test]
fn test_space_has_zero_box_and_real_advance() {
    let atlas = render_block(TEST_FONT, " A", "Sans", "Sample", &sdf_options()).unwrap();

    let space = atlas.layout.chars.iter().find(|c| c.id == 0x20).unwrap();
    assert_eq!(space.width, 0);
    assert_eq!(space.height, 0);
    assert!(space.xadvance > 0);

    let a = atlas.layout.chars.iter().find(|c| c.id == 0x41).unwrap();
    assert!(a.width > 0);
    assert!(a.height > 0);
}

#[test]
fn test_msdf_field_type_is_recorded() {
    let options = AtlasOptions {
        field_type: FieldType::Msdf,
        ..AtlasOptions::default()
    };
    let atlas = render_block(TEST_FONT, "AB", "Sans", "Sample", &options).unwrap();
    assert_eq!(atlas.layout.distance_field.field_type, "msdf");
    assert_eq!(atlas.layout.distance_field.distance_range, 8.0);
}

#[test]
fn test_boxes_do_not_overlap_within_a_page() {
    let charset: String = ('A'..='Z').chain('a'..='z').collect();
    let atlas = render_block(TEST_FONT, &charset, "Sans", "Sample", &sdf_options()).unwrap();

    let boxes: Vec<_> = atlas
        .layout
        .chars
        .iter()
        .filter(|c| c.width > 0)
        .collect();
    for (i, a) in boxes.iter().enumerate() {
        for b in boxes.iter().skip(i + 1) {
            if a.page != b.page {
                continue;
            }
            let separated = a.x + a.width <= b.x
                || b.x + b.width <= a.x
                || a.y + a.height <= b.y
                || b.y + b.height <= a.y;
            assert!(
                separated,
                "boxes for {} and {} overlap",
                a.character, b.character
            );
        }
    }
}

#[test]
fn test_garbage_font_is_rejected() {
    let err = render_block(&[0u8; 32], "A", "Bad", "Sample", &sdf_options()).unwrap_err();
    assert!(err.to_string().contains("parse"), "got {err}");
}

#[test]
fn test_write_persists_pages_and_layout() {
    let dir = tempfile::tempdir().unwrap();
    let atlas = render_block(TEST_FONT, "AB", "Sans", "Basic_Latin", &sdf_options()).unwrap();
    atlas.write(dir.path()).unwrap();

    assert!(dir.path().join("Basic_Latin.png").exists());
    let layout_path = dir.path().join("Basic_Latin.json");
    assert!(layout_path.exists());

    let parsed: fontcat_atlas::LayoutDocument =
        serde_json::from_str(&std::fs::read_to_string(layout_path).unwrap()).unwrap();
    assert_eq!(parsed, atlas.layout);
}
