use alloc::vec::Vec;
use core::slice;

use log::debug;

use crate::alloc_util::try_reserve;
use crate::buffer::OutputBuffer;
use crate::float::{float64_item, fold, Number};
use crate::int::{
    len_u32, write_head, AI_INDEFINITE, BREAK, MAJOR_ARRAY, MAJOR_BYTES, MAJOR_MAP,
    MAJOR_NEGATIVE, MAJOR_TEXT, MAJOR_UNSIGNED,
};
use crate::value::Value;
use crate::{CborError, EncodeLimits, ErrorCode};

const SIMPLE_FALSE: u8 = 0xf4;
const SIMPLE_TRUE: u8 = 0xf5;
const SIMPLE_NULL: u8 = 0xf6;
const SIMPLE_UNDEFINED: u8 = 0xf7;

/// An open container and the siblings still to be emitted inside it.
enum Frame<'a> {
    Array(slice::Iter<'a, Value>),
    Map {
        entries: slice::Iter<'a, (Value, Value)>,
        pending: Option<&'a Value>,
    },
}

/// Streaming encoder writing CBOR into a self-growing buffer.
///
/// The buffer starts at [`EncodeLimits::initial_capacity`] bytes and doubles on demand.
/// Use [`Encoder::value`] to emit a whole [`Value`] tree, or the per-kind writers to
/// emit items by hand.
pub struct Encoder {
    out: OutputBuffer,
    limits: EncodeLimits,
}

impl Encoder {
    /// Create an encoder with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: OutputBuffer::new(),
            limits: EncodeLimits::default(),
        }
    }

    /// Create an encoder with caller-provided limits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLimits` if the limits are inconsistent, or `AllocationFailed` if
    /// the starting buffer cannot be allocated.
    pub fn with_limits(limits: EncodeLimits) -> Result<Self, CborError> {
        Ok(Self {
            out: OutputBuffer::with_limits(&limits)?,
            limits,
        })
    }

    /// Return the limits this encoder enforces.
    #[must_use]
    pub const fn limits(&self) -> &EncodeLimits {
        &self.limits
    }

    /// Return the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.out.position()
    }

    /// Returns `true` if no bytes have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.out.position() == 0
    }

    /// Return the current logical buffer capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.out.capacity()
    }

    /// Borrow the bytes emitted so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.out.as_bytes()
    }

    /// Consume the encoder and return exactly the bytes written.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.out.into_vec()
    }

    /// Compute the SHA-256 digest of the bytes written so far.
    #[cfg(feature = "sha2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "sha2")))]
    #[must_use]
    pub fn sha256(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};
        let mut h = Sha256::new();
        h.update(self.out.as_bytes());
        let out = h.finalize();
        let mut digest = [0u8; 32];
        digest.copy_from_slice(out.as_slice());
        digest
    }

    /// Encode CBOR `undefined`.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot grow.
    pub fn undefined(&mut self) -> Result<(), CborError> {
        self.out.write_u8(SIMPLE_UNDEFINED)
    }

    /// Encode CBOR null.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot grow.
    pub fn null(&mut self) -> Result<(), CborError> {
        self.out.write_u8(SIMPLE_NULL)
    }

    /// Encode a CBOR boolean.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot grow.
    pub fn bool(&mut self, v: bool) -> Result<(), CborError> {
        self.out.write_u8(if v { SIMPLE_TRUE } else { SIMPLE_FALSE })
    }

    /// Encode a number, folding whole values in `[-2^32, 2^32 - 1]` into integer heads.
    ///
    /// Other values (fractions, `-0.0`, infinities, NaN, wider integers) are written
    /// as float64 in network byte order.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot grow.
    pub fn number(&mut self, d: f64) -> Result<(), CborError> {
        match fold(d) {
            Number::Unsigned(u) => write_head(&mut self.out, MAJOR_UNSIGNED, u),
            Number::Negative(n) => write_head(&mut self.out, MAJOR_NEGATIVE, n),
            Number::Float(bits) => self.out.write(&float64_item(bits)),
        }
    }

    /// Encode a text string from its raw bytes. The bytes are copied verbatim.
    ///
    /// # Errors
    ///
    /// Returns `TextTooLong` if the length does not fit 32 bits, or an error if the
    /// buffer cannot grow.
    pub fn text(&mut self, b: &[u8]) -> Result<(), CborError> {
        self.string(MAJOR_TEXT, b, ErrorCode::TextTooLong)
    }

    /// Encode a byte string.
    ///
    /// # Errors
    ///
    /// Returns `BytesTooLong` if the length does not fit 32 bits, or an error if the
    /// buffer cannot grow.
    pub fn bytes(&mut self, b: &[u8]) -> Result<(), CborError> {
        self.string(MAJOR_BYTES, b, ErrorCode::BytesTooLong)
    }

    /// Encode a definite-length array head. The caller emits `len` items next.
    ///
    /// # Errors
    ///
    /// Returns `ArrayTooLong` if `len` does not fit 32 bits, or an error if the buffer
    /// cannot grow.
    pub fn array_header(&mut self, len: usize) -> Result<(), CborError> {
        let n = len_u32(len, ErrorCode::ArrayTooLong, self.out.position())?;
        write_head(&mut self.out, MAJOR_ARRAY, n)
    }

    /// Open an indefinite-length map. Close it with [`Encoder::map_break`].
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot grow.
    pub fn map_start(&mut self) -> Result<(), CborError> {
        self.out.write_u8(MAJOR_MAP | AI_INDEFINITE)
    }

    /// Close an indefinite-length map.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot grow.
    pub fn map_break(&mut self) -> Result<(), CborError> {
        self.out.write_u8(BREAK)
    }

    /// Encode a zero-length definite map (`0xa0`).
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot grow.
    pub fn empty_map(&mut self) -> Result<(), CborError> {
        self.out.write_u8(MAJOR_MAP)
    }

    /// Encode one complete value tree.
    ///
    /// On failure the buffer is truncated back to where this value began.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` for [`Value::Unsupported`], a `*TooLong` code for lengths
    /// beyond 32 bits, `DepthLimitExceeded` when nesting passes the limit, and
    /// `SizeOverflow`/`AllocationFailed` when the buffer cannot grow.
    pub fn value(&mut self, value: &Value) -> Result<(), CborError> {
        let start = self.out.position();
        if let Err(err) = self.emit(value) {
            debug!("cbor encode aborted: {err}");
            self.out.truncate(start);
            return Err(err);
        }
        Ok(())
    }

    fn string(&mut self, base: u8, b: &[u8], code: ErrorCode) -> Result<(), CborError> {
        let len = len_u32(b.len(), code, self.out.position())?;
        write_head(&mut self.out, base, len)?;
        self.out.reserve(b.len())?.copy_from_slice(b);
        Ok(())
    }

    /// Depth-first walk over `root` using an explicit frame stack.
    fn emit<'a>(&mut self, root: &'a Value) -> Result<(), CborError> {
        let mut stack: Vec<Frame<'a>> = Vec::new();
        let mut next = Some(root);
        loop {
            if let Some(v) = next.take() {
                if let Some(frame) = self.emit_item(v, stack.len())? {
                    try_reserve(&mut stack, 1, self.out.position())?;
                    stack.push(frame);
                }
            }

            let Some(top) = stack.last_mut() else {
                return Ok(());
            };
            match top {
                Frame::Array(items) => {
                    next = items.next();
                    if next.is_none() {
                        stack.pop();
                    }
                }
                Frame::Map { entries, pending } => {
                    if let Some(v) = pending.take() {
                        next = Some(v);
                    } else if let Some((k, v)) = entries.next() {
                        *pending = Some(v);
                        next = Some(k);
                    } else {
                        self.map_break()?;
                        stack.pop();
                    }
                }
            }
        }
    }

    /// Write the item for `v`; for containers, write the opener and return the frame
    /// that walks their contents.
    fn emit_item<'a>(
        &mut self,
        v: &'a Value,
        depth: usize,
    ) -> Result<Option<Frame<'a>>, CborError> {
        match v {
            Value::Undefined | Value::Pointer(_) => self.undefined()?,
            Value::Null => self.null()?,
            Value::Bool(b) => self.bool(*b)?,
            Value::Number(d) => self.number(*d)?,
            Value::Text(b) => self.text(b)?,
            Value::Buffer(b) => self.bytes(b)?,
            Value::LightFunc(_) => self.empty_map()?,
            Value::Array(items) => {
                self.enter(depth)?;
                self.array_header(items.len())?;
                return Ok(Some(Frame::Array(items.iter())));
            }
            Value::Map(entries) => {
                self.enter(depth)?;
                self.map_start()?;
                return Ok(Some(Frame::Map {
                    entries: entries.iter(),
                    pending: None,
                }));
            }
            Value::Unsupported => {
                return Err(CborError::new(ErrorCode::InvalidType, self.out.position()));
            }
        }
        Ok(None)
    }

    fn enter(&self, depth: usize) -> Result<(), CborError> {
        if depth >= self.limits.max_depth {
            return Err(CborError::new(
                ErrorCode::DepthLimitExceeded,
                self.out.position(),
            ));
        }
        Ok(())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `value` into a new byte vector using default limits.
///
/// # Errors
///
/// See [`Encoder::value`]. No partial output is returned on failure.
pub fn encode(value: &Value) -> Result<Vec<u8>, CborError> {
    encode_with_limits(value, EncodeLimits::default())
}

/// Encode `value` into a new byte vector using `limits`.
///
/// # Errors
///
/// Returns `InvalidLimits` for inconsistent limits, otherwise see [`Encoder::value`].
pub fn encode_with_limits(value: &Value, limits: EncodeLimits) -> Result<Vec<u8>, CborError> {
    let mut enc = Encoder::with_limits(limits)?;
    enc.value(value)?;
    debug!(
        "cbor encoded {} ({} bytes, capacity {})",
        value.type_name(),
        enc.len(),
        enc.capacity()
    );
    Ok(enc.into_vec())
}

/// Encode `value` and return the SHA-256 digest of the encoding.
///
/// # Errors
///
/// See [`encode`].
#[cfg(feature = "sha2")]
#[cfg_attr(docsrs, doc(cfg(feature = "sha2")))]
pub fn encode_sha256(value: &Value) -> Result<[u8; 32], CborError> {
    let mut enc = Encoder::new();
    enc.value(value)?;
    Ok(enc.sha256())
}
