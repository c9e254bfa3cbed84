use crate::{CborError, ErrorCode};

/// Default starting capacity of the output buffer, in bytes.
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Default maximum nesting depth (open arrays and maps).
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Encode-time resource limits.
///
/// Limits are enforced deterministically; exceeding one aborts the whole encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeLimits {
    /// Starting capacity of the output buffer. Must be non-zero: capacity grows by doubling.
    pub initial_capacity: usize,
    /// Maximum number of simultaneously open containers.
    ///
    /// `0` rejects every array and map; `1` allows containers holding only scalars.
    pub max_depth: usize,
    /// Maximum number of bytes the encoder may write.
    pub max_output_bytes: usize,
}

impl EncodeLimits {
    /// Construct limits with the given starting capacity and depth, and no output ceiling.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLimits` if `initial_capacity` is zero.
    pub const fn new(initial_capacity: usize, max_depth: usize) -> Result<Self, CborError> {
        let limits = Self {
            initial_capacity,
            max_depth,
            max_output_bytes: usize::MAX,
        };
        match limits.validate() {
            Ok(()) => Ok(limits),
            Err(err) => Err(err),
        }
    }

    /// Return a copy with a different maximum depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Return a copy with a different starting capacity.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Return a copy with an output ceiling.
    #[must_use]
    pub const fn with_max_output_bytes(mut self, max_output_bytes: usize) -> Self {
        self.max_output_bytes = max_output_bytes;
        self
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLimits` if `initial_capacity` is zero.
    pub const fn validate(&self) -> Result<(), CborError> {
        if self.initial_capacity == 0 {
            return Err(CborError::new(ErrorCode::InvalidLimits, 0));
        }
        Ok(())
    }
}

impl Default for EncodeLimits {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
            max_output_bytes: usize::MAX,
        }
    }
}
