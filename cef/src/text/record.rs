//! Tab-separated record reading and writing
//!
//! Fields containing a tab, quote, CR or LF, or starting with a space, are
//! wrapped in double quotes with inner quotes doubled.

use cef_core::format::constants::text::{DELIMITER, QUOTE};
use cef_core::CefError;
use std::io::{BufRead, Write};

use crate::error::{read_err, CodecError, Result};

fn needs_quotes(field: &str) -> bool {
    field.starts_with(' ')
        || field
            .bytes()
            .any(|b| b == DELIMITER || b == QUOTE || b == b'\r' || b == b'\n')
}

/// Write one record followed by `\n`
pub(crate) fn write_record<W: Write>(writer: &mut W, line: &mut Vec<u8>, fields: &[String]) -> Result<()> {
    line.clear();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        if needs_quotes(field) {
            line.push(QUOTE);
            for &b in field.as_bytes() {
                if b == QUOTE {
                    line.push(QUOTE);
                }
                line.push(b);
            }
            line.push(QUOTE);
        } else {
            line.extend_from_slice(field.as_bytes());
        }
    }
    line.push(b'\n');
    writer.write_all(line)?;
    Ok(())
}

/// Reads tab-separated records, honoring quoted fields that span lines
pub(crate) struct RecordReader<R> {
    inner: R,
    line: Vec<u8>,
}

impl<R: BufRead> RecordReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
        }
    }

    /// Read the next record, or `None` at end of input
    pub(crate) fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        let mut fields: Vec<Vec<u8>> = Vec::new();
        let mut field = Vec::new();
        let mut in_quotes = false;
        let mut quoted = false;
        let mut started = false;

        loop {
            self.line.clear();
            let n = self
                .inner
                .read_until(b'\n', &mut self.line)
                .map_err(read_err)?;
            if n == 0 {
                if in_quotes {
                    return Err(CefError::UnexpectedEof.into());
                }
                if !started {
                    return Ok(None);
                }
                break;
            }
            started = true;

            let line = &self.line;
            let mut i = 0;
            while i < line.len() {
                let b = line[i];
                if in_quotes {
                    if b == QUOTE {
                        if line.get(i + 1) == Some(&QUOTE) {
                            field.push(QUOTE);
                            i += 1;
                        } else {
                            in_quotes = false;
                        }
                    } else {
                        field.push(b);
                    }
                } else {
                    match b {
                        QUOTE if field.is_empty() && !quoted => {
                            in_quotes = true;
                            quoted = true;
                        }
                        DELIMITER => {
                            fields.push(std::mem::take(&mut field));
                            quoted = false;
                        }
                        b'\n' => break,
                        b'\r' if line.get(i + 1) == Some(&b'\n') => {}
                        _ => field.push(b),
                    }
                }
                i += 1;
            }

            if !in_quotes {
                break;
            }
        }

        fields.push(field);
        fields
            .into_iter()
            .map(|bytes| String::from_utf8(bytes).map_err(|_| CodecError::from(CefError::MalformedField)))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}
