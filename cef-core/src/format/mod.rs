//! Binary and text format definitions for CEF/CEB files
//!
//! This module contains pure data structure definitions for the wire format.
//! No I/O operations, only layout specifications.

pub mod constants;
pub mod header;

pub use constants::{flags, FormatKind};
pub use header::BinaryHeader;
