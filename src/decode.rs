use crate::value::Value;
use crate::{CborError, ErrorCode};

/// Decode CBOR bytes into a [`Value`].
///
/// Decoding is not implemented; every call fails.
///
/// # Errors
///
/// Always returns `Unimplemented`.
pub fn decode(bytes: &[u8]) -> Result<Value, CborError> {
    log::debug!("cbor decode requested for {} bytes", bytes.len());
    Err(CborError::new(ErrorCode::Unimplemented, 0))
}
