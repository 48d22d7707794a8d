//! Error types for CEF/CEB operations

/// Errors that can occur while decoding, encoding or transforming a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CefError {
    /// The leading magic tag names neither the binary nor the text layout
    UnknownFormat,
    /// Major version above the supported baseline
    UnsupportedVersion,
    /// Input ended inside a framing or data field
    UnexpectedEof,
    /// A length, count or dimension field holds an implausible value
    MalformedField,
    /// Matrix or attribute lengths disagree with the declared dimensions
    DimensionMismatch,
    /// No attribute with the requested name
    AttributeNotFound,
    /// A sort key could not be interpreted as a number
    NotNumeric,
}

impl core::fmt::Display for CefError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            CefError::UnknownFormat => "Unknown file format",
            CefError::UnsupportedVersion => "Unsupported CEB format version",
            CefError::UnexpectedEof => "Unexpected end of input",
            CefError::MalformedField => "Malformed field",
            CefError::DimensionMismatch => "Matrix or attribute length does not match dimensions",
            CefError::AttributeNotFound => "Attribute not found",
            CefError::NotNumeric => "Value is not numeric",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for CefError {}

/// Result type for CEF/CEB operations
pub type Result<T> = core::result::Result<T, CefError>;
