//! Text encoder

use cef_core::format::constants::text::TAG;
use cef_core::MatrixDocument;
use std::io::Write;

use super::record::write_record;
use super::row_width;
use crate::error::Result;

/// Writes rows from one reusable field buffer, flushing after each row
struct RowWriter<'w, W: Write> {
    writer: &'w mut W,
    row: Vec<String>,
    line: Vec<u8>,
}

impl<W: Write> RowWriter<'_, W> {
    fn write(&mut self) -> Result<()> {
        write_record(&mut *self.writer, &mut self.line, &self.row)?;
        self.writer.flush()?;
        for field in self.row.iter_mut() {
            field.clear();
        }
        Ok(())
    }
}

/// Serialize `doc` to the tab-delimited layout
///
/// Matrix values use the shortest decimal form that reads back to the same
/// `f32`. Only one row is buffered at a time.
pub fn encode_text<W: Write>(doc: &MatrixDocument, writer: &mut W) -> Result<()> {
    doc.validate()?;

    let nra = doc.row_attributes.len();
    let mut out = RowWriter {
        writer,
        row: vec![String::new(); row_width(doc.num_columns, nra)],
        line: Vec::new(),
    };

    out.row[0].push_str(TAG);
    let counts = [
        doc.headers.len() as i64,
        doc.num_columns as i64,
        doc.num_rows as i64,
        doc.column_attributes.len() as i64,
        nra as i64,
        doc.flags,
    ];
    for (field, count) in out.row[1..7].iter_mut().zip(counts) {
        field.push_str(&count.to_string());
    }
    out.write()?;

    for header in &doc.headers {
        out.row[0].push_str(&header.name);
        out.row[1].push_str(&header.value);
        out.write()?;
    }

    for attribute in &doc.column_attributes {
        out.row[nra].push_str(&attribute.name);
        for (field, value) in out.row[nra + 1..].iter_mut().zip(&attribute.values) {
            field.push_str(value);
        }
        out.write()?;
    }

    for (field, attribute) in out.row.iter_mut().zip(&doc.row_attributes) {
        field.push_str(&attribute.name);
    }
    out.write()?;

    for row in 0..doc.num_rows {
        for (field, attribute) in out.row.iter_mut().zip(&doc.row_attributes) {
            field.push_str(&attribute.values[row]);
        }
        for (field, value) in out.row[nra + 1..].iter_mut().zip(doc.row(row)) {
            field.push_str(&value.to_string());
        }
        out.write()?;
    }

    Ok(())
}
