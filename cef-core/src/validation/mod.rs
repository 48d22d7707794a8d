//! Validation utilities for CEF/CEB fields
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod dimensions;
pub mod parsing;

pub use dimensions::{dimension_to_usize, validate_count, validate_dimensions, validate_field_len};
pub use parsing::{parse_column_selector, parse_int_field, parse_numeric_key, parse_value_field};
