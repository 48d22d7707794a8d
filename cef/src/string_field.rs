//! Length-prefixed string fields
//!
//! Every name and value in the binary layout is framed as:
//!
//! ```text
//! [len: i32 LE][len bytes of UTF-8, no terminator]
//! ```

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use cef_core::format::constants::MAX_FIELD_LEN;
use cef_core::{validate_field_len, CefError};
use std::io::{Read, Write};

use crate::error::{read_err, Result};

/// Read one string field
///
/// A negative or oversized length prefix is [`CefError::MalformedField`], as
/// is a payload that is not valid UTF-8. A short read is
/// [`CefError::UnexpectedEof`].
pub fn read_string<R: Read>(reader: &mut R) -> Result<String> {
    let len = reader.read_i32::<LittleEndian>().map_err(read_err)?;
    let len = validate_field_len(len)?;

    let mut buffer = vec![0u8; len];
    reader.read_exact(&mut buffer).map_err(read_err)?;

    String::from_utf8(buffer).map_err(|_| CefError::MalformedField.into())
}

/// Write one string field
pub fn write_string<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    if value.len() > MAX_FIELD_LEN {
        return Err(CefError::MalformedField.into());
    }
    writer.write_i32::<LittleEndian>(value.len() as i32)?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}
