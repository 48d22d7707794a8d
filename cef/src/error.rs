//! Error type for the CEF/CEB codecs

use cef_core::CefError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{0}")]
    Format(#[from] CefError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// The format-level error kind, if this is not a raw I/O failure
    pub fn kind(&self) -> Option<CefError> {
        match self {
            CodecError::Format(kind) => Some(*kind),
            CodecError::Io(_) => None,
        }
    }
}

/// Map a read failure, turning short reads into [`CefError::UnexpectedEof`]
pub(crate) fn read_err(err: io::Error) -> CodecError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        CodecError::Format(CefError::UnexpectedEof)
    } else {
        CodecError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_read_maps_to_eof() {
        let err = read_err(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert_eq!(err.kind(), Some(CefError::UnexpectedEof));

        let err = read_err(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, CodecError::Io(_)));
        assert_eq!(err.kind(), None);
    }
}
