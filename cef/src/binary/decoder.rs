//! Binary decoder

use byteorder::{LittleEndian, ReadBytesExt};
use cef_core::format::constants::MAJOR_VERSION;
use cef_core::{validate_count, Attribute, BinaryHeader, CefError, Header, MatrixDocument};
use std::io::Read;

use super::{skip_bytes, MAX_PREALLOC};
use crate::dispatch::DecodeOptions;
use crate::error::{read_err, Result};
use crate::string_field::read_string;

/// Decode a binary document whose magic tag has already been consumed
///
/// With `options.transpose` the matrix is remapped while it is read and the
/// dimensions and attribute lists are swapped afterwards, so the result is
/// the same as decoding plainly and applying [`crate::transpose`]. With
/// `options.skip_matrix` the body is stepped over and the returned
/// document has an empty `matrix`.
pub fn decode_binary<R: Read>(reader: &mut R, options: DecodeOptions) -> Result<MatrixDocument> {
    let major_version = reader
        .read_i32::<LittleEndian>()
        .map_err(|_| CefError::UnsupportedVersion)?;
    if major_version != MAJOR_VERSION {
        return Err(CefError::UnsupportedVersion.into());
    }
    let minor_version = reader.read_i32::<LittleEndian>().map_err(read_err)?;
    let num_columns = reader.read_i64::<LittleEndian>().map_err(read_err)?;
    let num_rows = reader.read_i64::<LittleEndian>().map_err(read_err)?;
    let flags = reader.read_i64::<LittleEndian>().map_err(read_err)?;

    let header = BinaryHeader {
        major_version,
        minor_version,
        num_columns,
        num_rows,
        flags,
    };
    header.validate()?;
    let nrows = num_rows as usize;
    let ncols = num_columns as usize;

    let matrix = if options.skip_matrix {
        skip_bytes(reader, header.matrix_size()?)?;
        Vec::new()
    } else {
        read_matrix(reader, nrows, ncols, options.transpose)?
    };

    let reserved = reader.read_i64::<LittleEndian>().map_err(read_err)?;
    if reserved > 0 {
        skip_bytes(reader, reserved as u64)?;
    }

    let header_count = read_count(reader)?;
    let mut headers = Vec::with_capacity(header_count.min(MAX_PREALLOC));
    for _ in 0..header_count {
        let name = read_string(reader)?;
        let value = read_string(reader)?;
        headers.push(Header { name, value });
    }

    // Attribute blocks are sized by the on-disk dimensions
    let column_attributes = read_attributes(reader, ncols)?;
    let row_attributes = read_attributes(reader, nrows)?;

    let mut doc = MatrixDocument {
        major_version,
        minor_version,
        num_rows: nrows,
        num_columns: ncols,
        flags,
        headers,
        column_attributes,
        row_attributes,
        matrix,
    };

    if options.transpose {
        std::mem::swap(&mut doc.num_rows, &mut doc.num_columns);
        std::mem::swap(&mut doc.row_attributes, &mut doc.column_attributes);
    }

    Ok(doc)
}

fn read_count<R: Read>(reader: &mut R) -> Result<usize> {
    let count = reader.read_i32::<LittleEndian>().map_err(read_err)?;
    Ok(validate_count(count)?)
}

/// Read the column-major body into a row-major buffer
///
/// Column `i` on disk holds the values of rows `0..nrows`. Without
/// transposition value `(i, j)` lands at `i + j * ncols`; with it, at
/// `i * nrows + j`, which is row `i` of the transposed matrix.
fn read_matrix<R: Read>(
    reader: &mut R,
    nrows: usize,
    ncols: usize,
    transpose: bool,
) -> Result<Vec<f32>> {
    let body = read_f32_vec(reader, nrows * ncols)?;
    if transpose || body.is_empty() {
        return Ok(body);
    }

    let mut matrix = vec![0.0f32; body.len()];
    for (i, column) in body.chunks_exact(nrows).enumerate() {
        for (j, value) in column.iter().enumerate() {
            matrix[i + j * ncols] = *value;
        }
    }
    Ok(matrix)
}

/// Read `count` values, growing the buffer only as bytes arrive
///
/// Header dimensions are untrusted, so a short body fails with an EOF
/// before more than `MAX_PREALLOC` values are reserved past the data.
fn read_f32_vec<R: Read>(reader: &mut R, count: usize) -> Result<Vec<f32>> {
    let mut values = Vec::with_capacity(count.min(MAX_PREALLOC));
    while values.len() < count {
        let start = values.len();
        let step = (count - start).min(MAX_PREALLOC);
        values.resize(start + step, 0.0f32);
        read_f32_slice(reader, &mut values[start..])?;
    }
    Ok(values)
}

/// Fill `out` with little-endian `f32` values
fn read_f32_slice<R: Read>(reader: &mut R, out: &mut [f32]) -> Result<()> {
    reader
        .read_exact(bytemuck::cast_slice_mut(out))
        .map_err(read_err)?;
    for value in out.iter_mut() {
        *value = f32::from_bits(u32::from_le(value.to_bits()));
    }
    Ok(())
}

/// Read an attribute block: count, names, then values attribute by attribute
fn read_attributes<R: Read>(reader: &mut R, len: usize) -> Result<Vec<Attribute>> {
    let count = read_count(reader)?;

    let mut attributes = Vec::with_capacity(count.min(MAX_PREALLOC));
    for _ in 0..count {
        let name = read_string(reader)?;
        attributes.push(Attribute::new(name, Vec::with_capacity(len.min(MAX_PREALLOC))));
    }
    for attribute in attributes.iter_mut() {
        for _ in 0..len {
            attribute.values.push(read_string(reader)?);
        }
    }

    Ok(attributes)
}
