//! Format constants and magic tags for CEF/CEB

/// Magic tag of the binary layout, read as a little-endian `u32`
pub const MAGIC_BINARY: u32 = 0x4345_4209;

/// Magic tag of the text layout, read as a little-endian `u32`
pub const MAGIC_TEXT: u32 = 0x4345_4609;

/// Byte-swapped binary tag (a file starting with the bytes `CEB\t`)
pub const MAGIC_BINARY_SWAPPED: u32 = MAGIC_BINARY.swap_bytes();

/// Byte-swapped text tag (a file starting with the bytes `CEF\t`)
pub const MAGIC_TEXT_SWAPPED: u32 = MAGIC_TEXT.swap_bytes();

/// Size of the magic tag in bytes
pub const MAGIC_SIZE: usize = 4;

/// The only major version this crate reads
pub const MAJOR_VERSION: i32 = 0;

/// Minor version written by the encoder
pub const MINOR_VERSION: i32 = 1;

/// Largest accepted length prefix for a string field (64 MiB)
pub const MAX_FIELD_LEN: usize = 64 * 1024 * 1024;

/// Size in bytes of one matrix element on disk
pub const ELEMENT_SIZE: usize = 4;

/// Text layout constants
pub mod text {
    /// Literal tag in the first field of the text header row
    pub const TAG: &str = "CEF";

    /// Field delimiter
    pub const DELIMITER: u8 = b'\t';

    /// Quote character for fields that need escaping
    pub const QUOTE: u8 = b'"';

    /// Minimum number of fields in every text row
    pub const MIN_ROW_WIDTH: usize = 7;
}

/// Document flag bits
pub mod flags {
    /// Bit 0: the document is stored transposed
    pub const TRANSPOSED: i64 = 1 << 0;
}

/// The two layouts selected by the magic tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Compact binary layout ("CEB")
    Binary,
    /// Tab-delimited text layout ("CEF")
    Text,
}

impl FormatKind {
    /// Classify a magic tag, accepting either byte order
    pub const fn from_magic(tag: u32) -> Option<Self> {
        match tag {
            MAGIC_BINARY | MAGIC_BINARY_SWAPPED => Some(FormatKind::Binary),
            MAGIC_TEXT | MAGIC_TEXT_SWAPPED => Some(FormatKind::Text),
            _ => None,
        }
    }
}

impl core::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatKind::Binary => write!(f, "CEB"),
            FormatKind::Text => write!(f, "CEF"),
        }
    }
}
