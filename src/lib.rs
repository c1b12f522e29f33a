//! fontcat — build-time generator for SDF/MSDF font atlases and the
//! FontCatalog manifest that describes them.
//!
//! The library side exposes:
//! - `catalog`: the manifest data model and the run's single accumulator
//! - `generator`: the font → style → block walk driving rasterization
//! - `cli`: argument parsing for the `fontcat` binary

pub mod catalog;
pub mod cli;
pub mod generator;

// Re-export main types for convenience
pub use catalog::{
    CatalogBuilder, Charset, FontCatalog, FontEntry, FontMetrics, SupportedBlockEntry,
};
pub use generator::{Generator, Style};
