//! Dimension, count and length validation for CEF/CEB fields
//!
//! Pure checks on values read from untrusted input. Nothing here touches I/O.

use crate::format::constants::{ELEMENT_SIZE, MAX_FIELD_LEN};
use crate::{CefError, Result};

/// Convert a single signed dimension to `usize`
pub fn dimension_to_usize(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| CefError::MalformedField)
}

/// Validate a `(rows, columns)` pair and return the element count
///
/// Both dimensions must be non-negative and the byte size of the matrix
/// body must be addressable.
pub fn validate_dimensions(num_rows: i64, num_columns: i64) -> Result<usize> {
    let rows = dimension_to_usize(num_rows)?;
    let cols = dimension_to_usize(num_columns)?;

    let count = rows.checked_mul(cols).ok_or(CefError::MalformedField)?;
    count
        .checked_mul(ELEMENT_SIZE)
        .ok_or(CefError::MalformedField)?;

    Ok(count)
}

/// Validate a string field length prefix
pub fn validate_field_len(len: i32) -> Result<usize> {
    let len = usize::try_from(len).map_err(|_| CefError::MalformedField)?;
    if len > MAX_FIELD_LEN {
        return Err(CefError::MalformedField);
    }
    Ok(len)
}

/// Validate a header or attribute count
pub fn validate_count(count: i32) -> Result<usize> {
    usize::try_from(count).map_err(|_| CefError::MalformedField)
}
