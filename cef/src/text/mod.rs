//! Tab-delimited (CEF) layout
//!
//! Every row has `max(7, ncols + nrowattrs + 1)` fields:
//!
//! ```text
//! CEF  nheaders  ncols  nrows  ncolattrs  nrowattrs  flags
//! name value                                   (one row per header)
//! .. .. colattr-name v0 v1 ..                  (one row per column attribute)
//! rowattr-names..                              (one row)
//! rowattr-values.. <empty> m0 m1 ..            (one row per matrix row)
//! ```
//!
//! Column attribute names sit at field `nrowattrs`; matrix values start at
//! `nrowattrs + 1`.

mod decoder;
mod encoder;
mod record;

pub use decoder::decode_text;
pub use encoder::encode_text;

/// Number of fields in every row of the text layout
pub(crate) fn row_width(num_columns: usize, num_row_attributes: usize) -> usize {
    cef_core::format::constants::text::MIN_ROW_WIDTH.max(num_columns + num_row_attributes + 1)
}
