//! On-disc format knowledge: where the tables live and how wide their records are.
//!
//! Addresses and limits can be overridden from a JSON file to port the
//! extractor to another revision of the game. Record widths are part of the
//! format version and stay fixed.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Table header: 4 byte magic followed by the record counts.
pub const TABLE_HEADER_SIZE: usize = 0x8;

/// Card id (u16) and card type (u8) preceding every card body.
pub const ENTRY_HEADER_SIZE: usize = 0x3;
/// Null byte following every card body.
pub const ENTRY_FOOTER_SIZE: usize = 0x1;

pub const DIGIMON_SIZE: usize = 0x138;
pub const ITEM_SIZE: usize = 0xde;
pub const DIGIVOLVE_SIZE: usize = 0x6c;
pub const DECK_SIZE: usize = 0x6e;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    /// Data address of the table header.
    pub address: u64,
    pub magic: String,
    /// Maximum bytes of records following the header.
    pub max_size: u64,
}

impl TableLayout {
    /// Magic as raw bytes, zero padded or truncated to 4 bytes.
    pub fn magic_bytes(&self) -> [u8; 4] {
        let mut out = [0u8; 4];
        for (dst, src) in out.iter_mut().zip(self.magic.bytes()) {
            *dst = src;
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub version: String,
    pub card_table: TableLayout,
    pub deck_table: TableLayout,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            version: String::from("dcb-us-v1"),
            card_table: TableLayout {
                address: 0x216d000,
                magic: String::from("0ACD"),
                max_size: 0x14970,
            },
            deck_table: TableLayout {
                address: 0x21a6800,
                magic: String::from("30KD"),
                max_size: 0x4452,
            },
        }
    }
}

impl Layout {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Unable to open layout file {}", path.display()))?;
        let layout: Layout = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Unable to parse layout file {}", path.display()))?;

        anyhow::ensure!(
            layout.card_table.magic.len() == 4 && layout.deck_table.magic.len() == 4,
            "Layout {} must use 4 byte table magics",
            layout.version
        );
        Ok(layout)
    }

    /// Built-in layout, or the one stored at `path`.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
