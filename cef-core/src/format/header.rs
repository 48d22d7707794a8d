//! Fixed binary preamble of CEB files
//!
//! The preamble follows the 4-byte magic tag and precedes the matrix body:
//!
//! ```text
//! [major: i32 LE][minor: i32 LE][ncols: i64 LE][nrows: i64 LE][flags: i64 LE]
//! ```

use super::constants::{ELEMENT_SIZE, MAJOR_VERSION, MINOR_VERSION};
use crate::validation::validate_dimensions;
use crate::{CefError, Result};

/// Fixed-size preamble of a binary file (tag excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryHeader {
    /// Format revision; only [`MAJOR_VERSION`] is readable
    pub major_version: i32,
    /// Informational revision, never validated
    pub minor_version: i32,
    /// Number of columns as stored on disk
    pub num_columns: i64,
    /// Number of rows as stored on disk
    pub num_rows: i64,
    /// Flag bits, stored verbatim
    pub flags: i64,
}

impl BinaryHeader {
    /// Size of the preamble in bytes
    pub const SIZE: usize = 4 + 4 + 8 + 8 + 8;

    /// Create a preamble for the current version
    pub const fn new(num_rows: i64, num_columns: i64, flags: i64) -> Self {
        Self {
            major_version: MAJOR_VERSION,
            minor_version: MINOR_VERSION,
            num_columns,
            num_rows,
            flags,
        }
    }

    /// Check the version gate and the dimension fields
    pub fn validate(&self) -> Result<()> {
        if self.major_version != MAJOR_VERSION {
            return Err(CefError::UnsupportedVersion);
        }
        validate_dimensions(self.num_rows, self.num_columns)?;
        Ok(())
    }

    /// Number of matrix elements described by the preamble
    pub fn element_count(&self) -> Result<usize> {
        validate_dimensions(self.num_rows, self.num_columns)
    }

    /// Size of the matrix body in bytes
    pub fn matrix_size(&self) -> Result<u64> {
        let count = self.element_count()? as u64;
        count
            .checked_mul(ELEMENT_SIZE as u64)
            .ok_or(CefError::MalformedField)
    }

    /// Parse and validate a preamble from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(CefError::UnexpectedEof);
        }

        let header = Self {
            major_version: i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            minor_version: i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            num_columns: i64::from_le_bytes([
                bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14],
                bytes[15],
            ]),
            num_rows: i64::from_le_bytes([
                bytes[16], bytes[17], bytes[18], bytes[19], bytes[20], bytes[21], bytes[22],
                bytes[23],
            ]),
            flags: i64::from_le_bytes([
                bytes[24], bytes[25], bytes[26], bytes[27], bytes[28], bytes[29], bytes[30],
                bytes[31],
            ]),
        };

        header.validate()?;
        Ok(header)
    }

    /// Convert the preamble to its on-disk bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.major_version.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.minor_version.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.num_columns.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.num_rows.to_le_bytes());
        bytes[24..32].copy_from_slice(&self.flags.to_le_bytes());
        bytes
    }
}
