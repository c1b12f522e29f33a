//! Integration tests for fontcat-fonts against a real face.

use fontcat_fonts::{BlockTable, FontFile};

/// Embedded Noto Sans regular for testing.
const TEST_FONT: &[u8] = notosans::REGULAR_TTF;

fn test_face() -> FontFile {
    FontFile::from_bytes(TEST_FONT.to_vec()).expect("notosans parses")
}

#[test]
fn test_face_loads() {
    let face = test_face();
    assert!(!face.data.is_empty());
}

#[test]
fn test_code_points_are_ascending_and_nonempty() {
    let face = test_face();
    let points = face.code_points();
    assert!(points.len() > 100, "got {} code points", points.len());
    assert!(points.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_basic_latin_charset() {
    let face = test_face();
    let table = BlockTable::bundled();
    let block = table.find("Basic Latin").unwrap();

    let charset = face.charset_in_block(block);
    assert!(charset.contains('A'));
    assert!(charset.contains('z'));
    assert!(charset.chars().all(|c| (c as u32) <= 0x7F));

    // Exactly the intersection of the face's coverage with the block range.
    let expected = face
        .code_points()
        .iter()
        .filter(|&&cp| cp <= 0x7F)
        .count();
    assert_eq!(charset.chars().count(), expected);
}

#[test]
fn test_uncovered_block_yields_empty_charset() {
    let face = test_face();
    let table = BlockTable::bundled();
    // A Latin face has nothing in the Yi Syllables block.
    let block = table.find("Yi Syllables").unwrap();
    assert!(face.charset_in_block(block).is_empty());
}

#[test]
fn test_scaled_metrics_are_plausible() {
    let face = test_face();
    let metrics = face.scaled_metrics(32.0);
    assert!(metrics.cap_height > 0.0);
    assert!(metrics.x_height > 0.0);
    assert!(metrics.x_height < metrics.cap_height);
    assert!(metrics.line_gap >= 0.0);
}

#[test]
fn test_metrics_scale_with_size() {
    let face = test_face();
    let small = face.scaled_metrics(16.0);
    let large = face.scaled_metrics(64.0);
    assert!(large.cap_height > small.cap_height);
}
