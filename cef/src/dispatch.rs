//! Format dispatch on the leading magic tag

use byteorder::{LittleEndian, ReadBytesExt};
use cef_core::{CefError, FormatKind, MatrixDocument};
use std::io::{self, Read};

use crate::binary::decode_binary;
use crate::error::{CodecError, Result};
use crate::text::decode_text;
use crate::transform::transpose;

/// Options controlling how a document is loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Load the document with rows and columns exchanged
    pub transpose: bool,
    /// Step over the matrix body, leaving `matrix` empty
    pub skip_matrix: bool,
}

impl DecodeOptions {
    pub fn with_transpose(mut self, transpose: bool) -> Self {
        self.transpose = transpose;
        self
    }

    pub fn with_skip_matrix(mut self, skip_matrix: bool) -> Self {
        self.skip_matrix = skip_matrix;
        self
    }
}

/// Read the 4-byte magic tag and classify it
///
/// Consumes exactly four bytes. Input too short to hold a tag is
/// [`CefError::UnknownFormat`].
pub fn read_format<R: Read>(reader: &mut R) -> Result<FormatKind> {
    let tag = match reader.read_u32::<LittleEndian>() {
        Ok(tag) => tag,
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            return Err(CefError::UnknownFormat.into())
        }
        Err(err) => return Err(CodecError::Io(err)),
    };
    FormatKind::from_magic(tag).ok_or_else(|| CefError::UnknownFormat.into())
}

/// Decode a document in either layout
pub fn decode<R: Read>(reader: &mut R, transpose: bool, skip_matrix: bool) -> Result<MatrixDocument> {
    decode_with(
        reader,
        DecodeOptions {
            transpose,
            skip_matrix,
        },
    )
}

/// Decode a document in either layout with explicit options
///
/// The text layout has no load-time transform, so its options are applied
/// to the fully decoded document.
pub fn decode_with<R: Read>(reader: &mut R, options: DecodeOptions) -> Result<MatrixDocument> {
    match read_format(reader)? {
        FormatKind::Binary => decode_binary(reader, options),
        FormatKind::Text => {
            let mut doc = decode_text(reader)?;
            if options.transpose {
                doc = transpose(&doc);
            }
            if options.skip_matrix {
                doc.matrix = Vec::new();
            }
            Ok(doc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_unknown_and_short_tags() {
        let err = decode(&mut Cursor::new(b"PK\x03\x04".to_vec()), false, false).unwrap_err();
        assert_eq!(err.kind(), Some(CefError::UnknownFormat));

        let err = decode(&mut Cursor::new(b"CE".to_vec()), false, false).unwrap_err();
        assert_eq!(err.kind(), Some(CefError::UnknownFormat));
    }

    #[test]
    fn test_tag_consumes_four_bytes() {
        let mut cursor = Cursor::new(b"CEB\tmore".to_vec());
        assert_eq!(read_format(&mut cursor).unwrap(), FormatKind::Binary);
        assert_eq!(cursor.position(), 4);

        let mut cursor = Cursor::new(0x4345_4609u32.to_le_bytes().to_vec());
        assert_eq!(read_format(&mut cursor).unwrap(), FormatKind::Text);
    }

    #[test]
    fn test_options_builder() {
        let options = DecodeOptions::default()
            .with_transpose(true)
            .with_skip_matrix(true);
        assert!(options.transpose && options.skip_matrix);
        assert_eq!(DecodeOptions::default(), DecodeOptions {
            transpose: false,
            skip_matrix: false
        });
    }
}
