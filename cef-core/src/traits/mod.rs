//! Abstract interfaces for annotated matrices

pub mod matrix;

pub use matrix::DenseMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
