//! CEF - Annotated dense matrix codec
//!
//! This library reads and writes annotated expression matrices in two layouts:
//! a little-endian binary layout (CEB) and a tab-separated text layout (CEF).
//! A document carries a dense `f32` matrix, free-form headers, and named
//! attributes over rows and columns.
//!
//! ## Architecture
//!
//! CEF follows a clean specification/implementation separation:
//!
//! - **cef-core**: Document model, format definitions, traits, and validation (no I/O)
//! - **cef**: Codecs, format dispatch, transforms, and file access
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cef::{CefFile, DecodeOptions};
//!
//! fn example() -> cef::Result<()> {
//!     // Load a matrix with rows and columns exchanged
//!     let file = CefFile::open("matrix.ceb")?;
//!     let doc = file.read(DecodeOptions::default().with_transpose(true))?;
//!
//!     let (rows, columns) = doc.dimensions();
//!     println!("{rows} x {columns}, first value {}", doc.get(0, 0));
//!
//!     // Sort rows by a numeric attribute and save as text
//!     let sorted = cef::sort_numerical(&doc, "Score", false)?;
//!     CefFile::save_text(&sorted, "sorted.cef")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Both layouts**: Auto-detected from the leading magic tag
//! - **Transpose-on-load**: Column-major bodies are read straight into row order
//! - **Skip matrix**: Load only headers and attributes
//! - **Memory-mapped I/O**: Open files without copying them (`mmap` feature)
//! - **Row sorting**: By string attribute, numeric attribute, or matrix column

// Re-export core abstractions and format definitions
pub use cef_core::{
    // Core traits
    DenseMatrix, MatrixOperations,
    // Document model
    Attribute, Header, MatrixDocument,
    // Format definitions
    flags, BinaryHeader, FormatKind,
    // Error handling
    CefError,
};

// Implementation modules
pub mod binary;
pub mod dispatch;
pub mod error;
#[cfg(feature = "mmap")]
pub mod file_io;
mod string_field;
pub mod text;
pub mod transform;

// Public exports
pub use binary::{decode_binary, encode_binary};
pub use dispatch::{decode, decode_with, read_format, DecodeOptions};
pub use error::{CodecError, Result};
pub use text::{decode_text, encode_text};
pub use transform::{sort_by_row_attribute, sort_numerical, transpose};

// Memory mapping features
#[cfg(feature = "mmap")]
pub use file_io::CefFile;
