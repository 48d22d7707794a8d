//! Core matrix access traits
//!
//! Read-only interfaces consumed by viewers and by the sort helpers. They
//! provide bounds-checked access on top of the document's raw accessors.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Dense matrix trait for format-agnostic access
pub trait DenseMatrix {
    /// Get the value at the specified position
    ///
    /// Returns `None` if the position is out of bounds or the matrix body
    /// was not loaded.
    fn get_element(&self, row: usize, col: usize) -> Option<f32>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: DenseMatrix {
    /// Get all values in a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<f32>;

    /// Get all values in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<f32>;
}

#[cfg(feature = "alloc")]
impl DenseMatrix for crate::MatrixDocument {
    fn get_element(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.num_rows || col >= self.num_columns {
            return None;
        }
        self.matrix.get(col + row * self.num_columns).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_columns)
    }
}

#[cfg(feature = "alloc")]
impl MatrixOperations for crate::MatrixDocument {
    fn get_row(&self, row_index: usize) -> Vec<f32> {
        (0..self.num_columns)
            .filter_map(|col| self.get_element(row_index, col))
            .collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<f32> {
        (0..self.num_rows)
            .filter_map(|row| self.get_element(row, col_index))
            .collect()
    }
}
