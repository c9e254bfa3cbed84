//! Growable output buffer.
//!
//! The buffer tracks a logical capacity that starts at a small constant and doubles
//! whenever a reservation does not fit. Written bytes are always `buf[..len]`; the
//! write offset is `buf.len()`.

use alloc::vec::Vec;

use log::trace;

use crate::alloc_util::try_reserve_exact;
use crate::{CborError, EncodeLimits, ErrorCode};

/// Compute the capacity after doubling `current` until it holds `needed` bytes.
///
/// Fails with `SizeOverflow` when a doubling step does not strictly increase the
/// capacity (the size counter wrapped, or `current` is zero).
pub(crate) fn next_capacity(current: usize, needed: usize) -> Result<usize, ErrorCode> {
    let mut cap = current;
    while needed > cap {
        cap = match cap.checked_mul(2) {
            Some(doubled) if doubled > cap => doubled,
            _ => return Err(ErrorCode::SizeOverflow),
        };
    }
    Ok(cap)
}

pub(crate) struct OutputBuffer {
    buf: Vec<u8>,
    capacity: usize,
    max_output_bytes: usize,
}

impl OutputBuffer {
    pub(crate) fn new() -> Self {
        let limits = EncodeLimits::default();
        Self {
            buf: Vec::with_capacity(limits.initial_capacity),
            capacity: limits.initial_capacity,
            max_output_bytes: limits.max_output_bytes,
        }
    }

    pub(crate) fn with_limits(limits: &EncodeLimits) -> Result<Self, CborError> {
        limits.validate()?;
        let mut buf = Vec::new();
        try_reserve_exact(&mut buf, limits.initial_capacity, 0)?;
        Ok(Self {
            buf,
            capacity: limits.initial_capacity,
            max_output_bytes: limits.max_output_bytes,
        })
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Make sure `additional` more bytes fit, doubling the capacity as needed.
    fn ensure(&mut self, additional: usize) -> Result<(), CborError> {
        let offset = self.buf.len();
        let needed = offset
            .checked_add(additional)
            .ok_or_else(|| CborError::new(ErrorCode::SizeOverflow, offset))?;
        if needed > self.max_output_bytes {
            return Err(CborError::new(ErrorCode::SizeOverflow, offset));
        }
        if needed <= self.capacity {
            return Ok(());
        }
        let new_cap =
            next_capacity(self.capacity, needed).map_err(|code| CborError::new(code, offset))?;
        trace!("resize output buffer {} -> {new_cap}", self.capacity);
        try_reserve_exact(&mut self.buf, new_cap - offset, offset)?;
        self.capacity = new_cap;
        Ok(())
    }

    /// Reserve `n` bytes at the current offset and advance past them.
    ///
    /// The returned region is zeroed; the caller must fill all of it.
    pub(crate) fn reserve(&mut self, n: usize) -> Result<&mut [u8], CborError> {
        self.ensure(n)?;
        let start = self.buf.len();
        self.buf.resize(start + n, 0);
        Ok(&mut self.buf[start..])
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), CborError> {
        self.ensure(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub(crate) fn write_u8(&mut self, byte: u8) -> Result<(), CborError> {
        self.ensure(1)?;
        self.buf.push(byte);
        Ok(())
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Trim to the bytes written and hand them over.
    pub(crate) fn into_vec(mut self) -> Vec<u8> {
        self.buf.shrink_to_fit();
        self.buf
    }
}
