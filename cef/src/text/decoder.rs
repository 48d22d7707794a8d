//! Text decoder, the inverse of the text encoder

use cef_core::format::constants::{MAJOR_VERSION, MINOR_VERSION};
use cef_core::{
    dimension_to_usize, parse_int_field, parse_value_field, validate_dimensions, Attribute,
    CefError, Header, MatrixDocument,
};
use std::io::{BufRead, BufReader, Read};

use super::record::RecordReader;
use crate::error::Result;

/// Decode a text document whose `CEF\t` tag has already been consumed
///
/// The first record therefore starts at the header count. A missing row is
/// [`CefError::UnexpectedEof`]; an attribute or data row with fewer fields
/// than the declared dimensions need is [`CefError::MalformedField`].
pub fn decode_text<R: Read>(reader: &mut R) -> Result<MatrixDocument> {
    let mut records = RecordReader::new(BufReader::new(reader));
    decode_records(&mut records)
}

fn next_record<R: BufRead>(records: &mut RecordReader<R>) -> Result<Vec<String>> {
    records
        .read_record()?
        .ok_or_else(|| CefError::UnexpectedEof.into())
}

fn field(record: &[String], index: usize) -> &str {
    record.get(index).map(String::as_str).unwrap_or("")
}

/// Next record, required to hold at least `width` fields
fn next_row<R: BufRead>(records: &mut RecordReader<R>, width: usize) -> Result<Vec<String>> {
    let record = next_record(records)?;
    if record.len() < width {
        return Err(CefError::MalformedField.into());
    }
    Ok(record)
}

fn count_field(record: &[String], index: usize) -> Result<usize> {
    let value = parse_int_field(field(record, index))?;
    Ok(dimension_to_usize(value)?)
}

fn decode_records<R: BufRead>(records: &mut RecordReader<R>) -> Result<MatrixDocument> {
    let first = next_record(records)?;
    let header_count = count_field(&first, 0)?;
    let ncols = count_field(&first, 1)?;
    let nrows = count_field(&first, 2)?;
    let column_attribute_count = count_field(&first, 3)?;
    let row_attribute_count = count_field(&first, 4)?;
    let flags = parse_int_field(field(&first, 5))?;
    validate_dimensions(nrows as i64, ncols as i64)?;

    let mut headers = Vec::new();
    for _ in 0..header_count {
        let record = next_record(records)?;
        headers.push(Header::new(field(&record, 0), field(&record, 1)));
    }

    let nra = row_attribute_count;
    let width = nra
        .checked_add(ncols)
        .and_then(|w| w.checked_add(1))
        .ok_or(CefError::MalformedField)?;

    let mut column_attributes = Vec::new();
    for _ in 0..column_attribute_count {
        let mut record = next_row(records, width)?;
        record.truncate(width);
        let values = record.split_off(nra + 1);
        column_attributes.push(Attribute::new(std::mem::take(&mut record[nra]), values));
    }

    let names = next_row(records, nra)?;
    let mut row_attributes: Vec<Attribute> = names[..nra]
        .iter()
        .map(|name| Attribute::new(name.as_str(), Vec::new()))
        .collect();

    let mut matrix = Vec::new();
    for _ in 0..nrows {
        let record = next_row(records, width)?;
        for (attribute, value) in row_attributes.iter_mut().zip(&record) {
            attribute.values.push(value.clone());
        }
        for value in &record[nra + 1..width] {
            matrix.push(parse_value_field(value)?);
        }
    }

    Ok(MatrixDocument {
        major_version: MAJOR_VERSION,
        minor_version: MINOR_VERSION,
        num_rows: nrows,
        num_columns: ncols,
        flags,
        headers,
        column_attributes,
        row_attributes,
        matrix,
    })
}
