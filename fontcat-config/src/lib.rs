//! Catalog descriptor loading for the fontcat asset generator.
//!
//! This crate provides the input-configuration side of a generation run:
//!
//! - `CatalogDescriptor` / `FontSpec`: the declarative JSON description of
//!   the typefaces to process
//! - `FieldType`: the distance-field flavour (sdf or msdf)
//! - Defaulting for omitted descriptor fields
//! - Typed errors for descriptor I/O and validation

pub mod defaults;
pub mod descriptor;
pub mod error;

// Re-export main types for convenience
pub use descriptor::{CatalogDescriptor, FieldType, FontSpec};
pub use error::DescriptorError;
