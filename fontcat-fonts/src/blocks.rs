//! The bundled Unicode block table.
//!
//! The table is a static JSON resource in the upstream record format
//! (`category` / `hexrange` / `range` per block) and is refreshed offline by
//! the `unicode-ranges` binary. Blocks are iterated in file order, which
//! follows ascending code points.

use serde::Deserialize;

/// A named, contiguous range of Unicode code points.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnicodeBlock {
    /// Block name, unique within the table (e.g. "Basic Latin").
    #[serde(rename = "category")]
    pub name: String,

    /// Inclusive `[min, max]` code-point range.
    pub range: [u32; 2],
}

impl UnicodeBlock {
    /// First code point of the block (inclusive).
    pub fn min(&self) -> u32 {
        self.range[0]
    }

    /// Last code point of the block (inclusive).
    pub fn max(&self) -> u32 {
        self.range[1]
    }

    /// Number of code points the block spans.
    pub fn len(&self) -> u32 {
        self.max() - self.min() + 1
    }
}

/// The ordered table of known Unicode blocks.
#[derive(Debug, Clone)]
pub struct BlockTable {
    blocks: Vec<UnicodeBlock>,
}

impl BlockTable {
    /// Load the table bundled with this crate.
    pub fn bundled() -> Self {
        let blocks = serde_json::from_str(include_str!("../resources/unicode-ranges.json"))
            .expect("bundled unicode-ranges.json is valid");
        BlockTable { blocks }
    }

    /// Look up a block by name.
    pub fn find(&self, name: &str) -> Option<&UnicodeBlock> {
        self.blocks.iter().find(|block| block.name == name)
    }

    /// Iterate over all blocks in table order.
    pub fn iter(&self) -> impl Iterator<Item = &UnicodeBlock> {
        self.blocks.iter()
    }

    /// All block names, in table order.
    pub fn names(&self) -> Vec<&str> {
        self.blocks.iter().map(|block| block.name.as_str()).collect()
    }

    /// Number of blocks in the table.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when the table holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
