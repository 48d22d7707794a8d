//! Binary (CEB) layout
//!
//! After the magic tag, a binary file holds (all integers little-endian):
//!
//! ```text
//! [major: i32][minor: i32][ncols: i64][nrows: i64][flags: i64]
//! [matrix: ncols * nrows f32, column by column]
//! [reserved: i64][reserved bytes]
//! [header count: i32][(name, value) string pairs]
//! [column attribute count: i32][names][values, attribute by attribute]
//! [row attribute count: i32][names][values, attribute by attribute]
//! ```

mod decoder;
mod encoder;

pub use decoder::decode_binary;
pub use encoder::encode_binary;

use crate::error::{read_err, Result};
use cef_core::CefError;
use std::io::{self, Read};

/// Upper bound on speculative pre-allocation driven by counts read from input
pub(crate) const MAX_PREALLOC: usize = 1 << 16;

/// Advance `reader` by exactly `count` bytes
pub(crate) fn skip_bytes<R: Read>(reader: &mut R, count: u64) -> Result<()> {
    let skipped = io::copy(&mut reader.by_ref().take(count), &mut io::sink()).map_err(read_err)?;
    if skipped < count {
        return Err(CefError::UnexpectedEof.into());
    }
    Ok(())
}
