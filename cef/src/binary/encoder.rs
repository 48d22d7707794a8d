//! Binary encoder, the exact inverse of the decoder

use byteorder::{LittleEndian, WriteBytesExt};
use cef_core::format::constants::{MAGIC_BINARY, MAJOR_VERSION};
use cef_core::{Attribute, BinaryHeader, CefError, MatrixDocument};
use std::io::Write;

use crate::error::Result;
use crate::string_field::write_string;

/// Serialize `doc` to the binary layout, magic tag included
///
/// The document must satisfy [`MatrixDocument::validate`]; a document whose
/// matrix was skipped on load cannot be encoded. The reserved extension
/// slot is always written empty. Write failures are returned verbatim.
pub fn encode_binary<W: Write>(doc: &MatrixDocument, writer: &mut W) -> Result<()> {
    doc.validate()?;

    let header = BinaryHeader {
        major_version: MAJOR_VERSION,
        minor_version: doc.minor_version,
        num_columns: doc.num_columns as i64,
        num_rows: doc.num_rows as i64,
        flags: doc.flags,
    };
    writer.write_u32::<LittleEndian>(MAGIC_BINARY)?;
    writer.write_all(&header.to_bytes())?;

    write_matrix(doc, writer)?;

    // Reserved extension slot
    writer.write_i64::<LittleEndian>(0)?;

    write_count(writer, doc.headers.len())?;
    for header in &doc.headers {
        write_string(writer, &header.name)?;
        write_string(writer, &header.value)?;
    }

    write_attributes(writer, &doc.column_attributes)?;
    write_attributes(writer, &doc.row_attributes)?;

    writer.flush()?;
    Ok(())
}

fn write_count<W: Write>(writer: &mut W, count: usize) -> Result<()> {
    let count = i32::try_from(count).map_err(|_| CefError::MalformedField)?;
    writer.write_i32::<LittleEndian>(count)?;
    Ok(())
}

/// Write the body column by column, each column as `nrows` little-endian floats
fn write_matrix<W: Write>(doc: &MatrixDocument, writer: &mut W) -> Result<()> {
    let mut column = vec![0.0f32; doc.num_rows];
    for col in 0..doc.num_columns {
        for (row, value) in column.iter_mut().enumerate() {
            *value = f32::from_bits(doc.get(col, row).to_bits().to_le());
        }
        writer.write_all(bytemuck::cast_slice(&column))?;
    }
    Ok(())
}

fn write_attributes<W: Write>(writer: &mut W, attributes: &[Attribute]) -> Result<()> {
    write_count(writer, attributes.len())?;
    for attribute in attributes {
        write_string(writer, &attribute.name)?;
    }
    for attribute in attributes {
        for value in &attribute.values {
            write_string(writer, value)?;
        }
    }
    Ok(())
}
