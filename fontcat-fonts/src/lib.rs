//! Font loading, metrics and Unicode block support for fontcat.
//!
//! This crate provides the font-facing half of a generation run:
//!
//! - `FontFile`: an owned font file with a swash view for metric and
//!   character-map queries
//! - `ScaledMetrics`: line gap, cap height and x-height scaled from font
//!   units to output pixels
//! - The block charset filter: the ordered intersection of a font's
//!   supported code points with a Unicode block's range
//! - `BlockTable` / `UnicodeBlock`: the bundled table of named Unicode
//!   code-point ranges

pub mod blocks;
pub mod face;

// Re-export main types for convenience
pub use blocks::{BlockTable, UnicodeBlock};
pub use face::{FontFile, ScaledMetrics, charset_in_range};
