use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which table a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Card,
    Deck,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Card => f.write_str("card"),
            TableKind::Deck => f.write_str("deck"),
        }
    }
}

/// Every failure an extraction run can end in.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Game image not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Read of {length:#x} bytes at data address {offset:#x} exceeds image data length {data_len:#x}")]
    OutOfBounds { offset: u64, length: u64, data_len: u64 },

    #[error("Invalid image format")]
    InvalidFormat(#[from] FormatError),

    #[error("Malformed {table} record #{index}")]
    MalformedRecord {
        table: TableKind,
        index: usize,
        #[source]
        source: RecordError,
    },
}

/// Header and signature problems, detected before any record is decoded.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Image is {len} bytes, smaller than a single {sector_size}-byte sector")]
    TooSmall { len: u64, sector_size: u64 },

    #[error("Sector {sector} has a broken sync pattern")]
    SectorSync { sector: u64 },

    #[error("Sector {sector} is mode {mode}, expected mode 2")]
    SectorMode { sector: u64, mode: u8 },

    #[error("{table} table magic mismatch: expected {expected:?}, found {found:?}")]
    Magic { table: TableKind, expected: [u8; 4], found: [u8; 4] },

    #[error("{table} table holds {size:#x} bytes of records, more than the maximum {max:#x}")]
    TooLarge { table: TableKind, size: u64, max: u64 },
}

/// A single record whose bytes fall outside their value domain.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Unknown card type byte {byte:#x}")]
    UnknownCardType { byte: u8 },

    #[error("Entry is a {found} card inside the {expected} section")]
    CardTypeMismatch { expected: &'static str, found: &'static str },

    #[error("Entry carries id {found}, expected {expected}")]
    IdMismatch { expected: usize, found: u16 },

    #[error("Invalid field `{field}`")]
    Field {
        field: &'static str,
        #[source]
        err: FieldError,
    },
}

/// Why a single field could not be decoded.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum FieldError {
    #[error("Text has no null terminator")]
    NoNull,

    #[error("Text has non-ascii byte {byte:#x} at position {pos}")]
    NotAscii { pos: usize, byte: u8 },

    #[error("Unknown value {byte:#x}")]
    UnknownValue { byte: u8 },

    #[error("Unknown byte pattern {bytes:?}")]
    UnknownPattern { bytes: [u8; 3] },
}

impl FieldError {
    /// Attaches the name of the field this error came from.
    pub fn at(self, field: &'static str) -> RecordError {
        RecordError::Field { field, err: self }
    }
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
