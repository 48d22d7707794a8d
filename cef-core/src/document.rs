//! In-memory annotated matrix document
//!
//! A [`MatrixDocument`] is the whole of one CEF/CEB file: dimensions, a dense
//! `f32` matrix, per-row and per-column string attributes, and free-form
//! headers. The matrix is row-major with columns as the fast-varying index,
//! so element `(col, row)` lives at `matrix[col + row * num_columns]`.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::format::constants::{flags, MAJOR_VERSION, MINOR_VERSION};
use crate::validation::validate_dimensions;
use crate::{CefError, Result};

/// A named sequence of per-row or per-column labels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A free-form `name = value` header pair
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Annotated dense matrix with row/column attributes and headers
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixDocument {
    /// Binary format revision the document was read with
    pub major_version: i32,
    /// Informational minor revision
    pub minor_version: i32,
    pub num_rows: usize,
    pub num_columns: usize,
    /// Flag bits; see [`flags`]
    pub flags: i64,
    /// Header pairs in display order, duplicates allowed
    pub headers: Vec<Header>,
    /// Each attribute holds `num_columns` values
    pub column_attributes: Vec<Attribute>,
    /// Each attribute holds `num_rows` values
    pub row_attributes: Vec<Attribute>,
    /// Row-major values; empty when the matrix was skipped on load
    pub matrix: Vec<f32>,
}

impl MatrixDocument {
    /// Create a zero-filled document with no attributes or headers
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        Self {
            major_version: MAJOR_VERSION,
            minor_version: MINOR_VERSION,
            num_rows,
            num_columns,
            flags: 0,
            headers: Vec::new(),
            column_attributes: Vec::new(),
            row_attributes: Vec::new(),
            matrix: vec![0.0; num_rows * num_columns],
        }
    }

    /// Create a document from a row-major value buffer
    pub fn from_rows(num_rows: usize, num_columns: usize, matrix: Vec<f32>) -> Result<Self> {
        if matrix.len() != num_rows * num_columns {
            return Err(CefError::DimensionMismatch);
        }
        let mut doc = Self::new(0, 0);
        doc.num_rows = num_rows;
        doc.num_columns = num_columns;
        doc.matrix = matrix;
        Ok(doc)
    }

    /// Value at `(col, row)`
    ///
    /// Indices are not checked against the declared dimensions; an index
    /// past the end of the buffer panics.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.matrix[col + row * self.num_columns]
    }

    /// Overwrite the value at `(col, row)`
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: f32) {
        let ncols = self.num_columns;
        self.matrix[col + row * ncols] = value;
    }

    /// The values of one row, in column order
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.num_columns;
        &self.matrix[start..start + self.num_columns]
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_columns)
    }

    /// Whether the matrix body is materialized
    pub fn has_matrix(&self) -> bool {
        self.matrix.len() == self.num_rows * self.num_columns
    }

    pub fn is_transposed(&self) -> bool {
        self.flags & flags::TRANSPOSED != 0
    }

    pub fn set_transposed(&mut self, transposed: bool) {
        if transposed {
            self.flags |= flags::TRANSPOSED;
        } else {
            self.flags &= !flags::TRANSPOSED;
        }
    }

    /// First row attribute with the given name
    pub fn row_attribute(&self, name: &str) -> Option<&Attribute> {
        self.row_attributes.iter().find(|attr| attr.name == name)
    }

    /// First column attribute with the given name
    pub fn column_attribute(&self, name: &str) -> Option<&Attribute> {
        self.column_attributes.iter().find(|attr| attr.name == name)
    }

    /// Value of the first header with the given name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.name == name)
            .map(|header| header.value.as_str())
    }

    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push(Header::new(name, value));
    }

    /// Append a row attribute; `values` must hold one entry per row
    pub fn add_row_attribute(&mut self, name: impl Into<String>, values: Vec<String>) -> Result<()> {
        if values.len() != self.num_rows {
            return Err(CefError::DimensionMismatch);
        }
        self.row_attributes.push(Attribute::new(name, values));
        Ok(())
    }

    /// Append a column attribute; `values` must hold one entry per column
    pub fn add_column_attribute(
        &mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<()> {
        if values.len() != self.num_columns {
            return Err(CefError::DimensionMismatch);
        }
        self.column_attributes.push(Attribute::new(name, values));
        Ok(())
    }

    /// Check the structural invariants required before encoding
    ///
    /// The matrix must be materialized and every attribute must be as long
    /// as the dimension it annotates.
    pub fn validate(&self) -> Result<()> {
        let count = validate_dimensions(self.num_rows as i64, self.num_columns as i64)?;
        if self.matrix.len() != count {
            return Err(CefError::DimensionMismatch);
        }
        if self
            .column_attributes
            .iter()
            .any(|attr| attr.values.len() != self.num_columns)
        {
            return Err(CefError::DimensionMismatch);
        }
        if self
            .row_attributes
            .iter()
            .any(|attr| attr.values.len() != self.num_rows)
        {
            return Err(CefError::DimensionMismatch);
        }
        Ok(())
    }
}
