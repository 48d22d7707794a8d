//! Parsing utilities for CEF string representations
//!
//! Pure parsing functions for the text layout's numeric fields and the
//! column selectors used by the sort helpers.

use crate::{CefError, Result};

/// Parse a column selector of the form `#N` (zero-based matrix column)
///
/// Returns `None` when the string is not a column selector, so callers can
/// fall back to treating it as an attribute name.
pub fn parse_column_selector(selector: &str) -> Option<usize> {
    let digits = selector.strip_prefix('#')?;
    parse_usize(digits).ok()
}

/// Parse a usize from a string with error handling
fn parse_usize(s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(CefError::MalformedField);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(CefError::MalformedField);
        }

        let digit = (byte - b'0') as usize;

        if result > (usize::MAX - digit) / 10 {
            return Err(CefError::MalformedField);
        }

        result = result * 10 + digit;
    }

    Ok(result)
}

/// Parse a signed integer field of the text header row
pub fn parse_int_field(field: &str) -> Result<i64> {
    field.trim().parse::<i64>().map_err(|_| CefError::MalformedField)
}

/// Parse a matrix cell of the text layout
///
/// An empty cell reads as zero.
pub fn parse_value_field(field: &str) -> Result<f32> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(0.0);
    }
    field.parse::<f32>().map_err(|_| CefError::MalformedField)
}

/// Parse an attribute value as a sort key
pub fn parse_numeric_key(value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| CefError::NotNumeric)
}
