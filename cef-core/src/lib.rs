#![no_std]

//! CEF Core - Annotated Matrix Format Definitions
//!
//! This crate provides the format definitions, value types and validation
//! helpers for CEF (tab-delimited) and CEB (binary) annotated matrix files.
//! It performs no I/O; the `cef` crate builds the codecs on top of it.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod document;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

#[cfg(feature = "alloc")]
pub use document::{Attribute, Header, MatrixDocument};
pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;
