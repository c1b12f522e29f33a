//! Integration tests for catalog descriptor loading.

use std::io::Write;

use fontcat_config::{CatalogDescriptor, DescriptorError, FieldType};

fn write_descriptor(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_descriptor_defaults() {
    let descriptor: CatalogDescriptor =
        serde_json::from_str(r#"{ "fontsDir": "fonts" }"#).unwrap();
    assert_eq!(descriptor.name, "Default");
    assert_eq!(descriptor.size, 32.0);
    assert_eq!(descriptor.field_type, FieldType::Sdf);
    assert_eq!(descriptor.distance, 8.0);
    assert!(descriptor.fonts.is_empty());
}

#[test]
fn test_descriptor_full_document() {
    let descriptor: CatalogDescriptor = serde_json::from_str(
        r#"{
            "name": "Map",
            "size": 64,
            "type": "msdf",
            "distance": 4,
            "fontsDir": "fonts",
            "fonts": [
                {
                    "name": "Sans",
                    "bold": "Sans-Bold",
                    "boldItalic": "Sans-BoldItalic",
                    "blocks": ["Basic Latin", "Cyrillic"]
                }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(descriptor.name, "Map");
    assert_eq!(descriptor.size, 64.0);
    assert_eq!(descriptor.field_type, FieldType::Msdf);
    assert_eq!(descriptor.distance, 4.0);
    assert_eq!(descriptor.fonts.len(), 1);

    let font = &descriptor.fonts[0];
    assert_eq!(font.name, "Sans");
    assert_eq!(font.bold.as_deref(), Some("Sans-Bold"));
    assert!(font.italic.is_none());
    assert_eq!(font.bold_italic.as_deref(), Some("Sans-BoldItalic"));
    assert_eq!(
        font.block_allowlist().unwrap(),
        ["Basic Latin".to_string(), "Cyrillic".to_string()]
    );
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogDescriptor::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DescriptorError::Io(_)), "got {err:?}");
}

#[test]
fn test_load_malformed_json_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_descriptor(&dir, "{ not json");
    let err = CatalogDescriptor::load(&path).unwrap_err();
    assert!(matches!(err, DescriptorError::Parse(_)), "got {err:?}");
}

#[test]
fn test_fonts_dir_resolution() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("fonts")).unwrap();
    let path = write_descriptor(&dir, r#"{ "fontsDir": "fonts" }"#);

    let descriptor = CatalogDescriptor::load(&path).unwrap();
    let fonts_dir = descriptor.resolve_fonts_dir(&path).unwrap();
    assert_eq!(fonts_dir, dir.path().join("fonts"));
}

#[test]
fn test_missing_fonts_dir_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_descriptor(&dir, r#"{ "fontsDir": "no-such-dir" }"#);

    let descriptor = CatalogDescriptor::load(&path).unwrap();
    let err = descriptor.resolve_fonts_dir(&path).unwrap_err();
    assert!(matches!(err, DescriptorError::FontsDir(_)), "got {err:?}");
}
