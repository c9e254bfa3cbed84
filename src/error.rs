use core::fmt;

/// The coarse class of an error.
///
/// Every kind is fatal to the encode call that produced it: there is no retry and no
/// partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Buffer growth would exceed the addressable size (or the configured output ceiling).
    SizeOverflow,
    /// The input cannot be represented (unsupported kind, over-long length, bad limits).
    InvalidInput,
    /// Nesting or memory headroom ran out.
    ResourceExhausted,
    /// The requested operation does not exist (decoding).
    Unimplemented,
}

/// A structured error code identifying why an operation failed.
///
/// This enum is stable and string-free so it stays usable under `no_std`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Invalid configured limits.
    InvalidLimits,

    /// Doubling the buffer capacity would wrap, or the write passes `max_output_bytes`.
    SizeOverflow,
    /// Memory allocation failed while growing the buffer or the frame stack.
    AllocationFailed,
    /// Nesting depth limit exceeded.
    DepthLimitExceeded,

    /// The value kind has no CBOR encoding.
    InvalidType,
    /// Text byte length does not fit the 32-bit length head.
    TextTooLong,
    /// Byte buffer length does not fit the 32-bit length head.
    BytesTooLong,
    /// Array element count does not fit the 32-bit length head.
    ArrayTooLong,

    /// Decoding is not implemented.
    Unimplemented,
}

impl ErrorCode {
    /// Return the coarse class of this code.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::SizeOverflow => ErrorKind::SizeOverflow,
            Self::AllocationFailed | Self::DepthLimitExceeded => ErrorKind::ResourceExhausted,
            Self::InvalidLimits
            | Self::InvalidType
            | Self::TextTooLong
            | Self::BytesTooLong
            | Self::ArrayTooLong => ErrorKind::InvalidInput,
            Self::Unimplemented => ErrorKind::Unimplemented,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::InvalidLimits => "invalid encode limits",

            Self::SizeOverflow => "too large",
            Self::AllocationFailed => "allocation failed",
            Self::DepthLimitExceeded => "nesting depth limit exceeded",

            Self::InvalidType => "invalid type",
            Self::TextTooLong => "text length exceeds 32-bit length encoding",
            Self::BytesTooLong => "byte buffer length exceeds 32-bit length encoding",
            Self::ArrayTooLong => "array length exceeds 32-bit length encoding",

            Self::Unimplemented => "unimplemented",
        }
    }
}

/// An encoder error with a stable code and the output offset where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CborError {
    /// The error code.
    pub code: ErrorCode,
    /// Number of output bytes written when the error was detected (0 for decode and limits).
    pub offset: usize,
}

impl CborError {
    /// Construct a new error.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }

    /// Return the coarse class of this error.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        self.code.kind()
    }

    /// Returns true iff this error reports exhausted nesting or memory headroom.
    #[inline]
    #[must_use]
    pub const fn is_resource_exhausted(self) -> bool {
        matches!(self.kind(), ErrorKind::ResourceExhausted)
    }
}

impl fmt::Display for CborError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.code.message();
        match self.kind() {
            ErrorKind::Unimplemented => write!(f, "cbor decode failed: {msg}"),
            _ if matches!(self.code, ErrorCode::InvalidLimits) => write!(f, "{msg}"),
            _ => write!(f, "cbor encode failed at {}: {msg}", self.offset),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CborError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn codes_map_to_kinds() {
        assert_eq!(ErrorCode::SizeOverflow.kind(), ErrorKind::SizeOverflow);
        assert_eq!(ErrorCode::AllocationFailed.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(ErrorCode::DepthLimitExceeded.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(ErrorCode::InvalidType.kind(), ErrorKind::InvalidInput);
        assert_eq!(ErrorCode::ArrayTooLong.kind(), ErrorKind::InvalidInput);
        assert_eq!(ErrorCode::Unimplemented.kind(), ErrorKind::Unimplemented);
    }

    #[test]
    fn display_includes_offset_for_encode_errors() {
        let err = CborError::new(ErrorCode::InvalidType, 7);
        assert_eq!(err.to_string(), "cbor encode failed at 7: invalid type");

        let err = CborError::new(ErrorCode::Unimplemented, 0);
        assert_eq!(err.to_string(), "cbor decode failed: unimplemented");
    }
}
