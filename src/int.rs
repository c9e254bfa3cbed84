//! Integer and length heads (major types 0–5) with 32-bit magnitudes.

use crate::buffer::OutputBuffer;
use crate::{CborError, ErrorCode};

/// Major type 0 base byte.
pub const MAJOR_UNSIGNED: u8 = 0x00;
/// Major type 1 base byte.
pub const MAJOR_NEGATIVE: u8 = 0x20;
/// Major type 2 base byte.
pub const MAJOR_BYTES: u8 = 0x40;
/// Major type 3 base byte.
pub const MAJOR_TEXT: u8 = 0x60;
/// Major type 4 base byte.
pub const MAJOR_ARRAY: u8 = 0x80;
/// Major type 5 base byte.
pub const MAJOR_MAP: u8 = 0xa0;

/// Additional info for an indefinite-length item.
pub const AI_INDEFINITE: u8 = 0x1f;
/// The "break" stop code.
pub const BREAK: u8 = 0xff;

/// Number of bytes the head for `u` occupies.
#[inline]
pub(crate) const fn head_len(u: u32) -> usize {
    if u <= 23 {
        1
    } else if u <= 0xff {
        2
    } else if u <= 0xffff {
        3
    } else {
        5
    }
}

/// Write `base` combined with the shortest encoding of `u`.
pub(crate) fn write_head(out: &mut OutputBuffer, base: u8, u: u32) -> Result<(), CborError> {
    debug_assert_eq!(base & 0x1f, 0);
    let p = out.reserve(head_len(u))?;
    if let Ok(v8) = u8::try_from(u) {
        if v8 <= 23 {
            p[0] = base + v8;
        } else {
            p[0] = base + 0x18;
            p[1] = v8;
        }
    } else if let Ok(v16) = u16::try_from(u) {
        p[0] = base + 0x19;
        p[1..].copy_from_slice(&v16.to_be_bytes());
    } else {
        p[0] = base + 0x1a;
        p[1..].copy_from_slice(&u.to_be_bytes());
    }
    Ok(())
}

/// Narrow a host length to the 32-bit range of a length head.
#[inline]
pub(crate) fn len_u32(len: usize, code: ErrorCode, offset: usize) -> Result<u32, CborError> {
    u32::try_from(len).map_err(|_| CborError::new(code, offset))
}
