//! # dynval-cbor
//!
//! A depth-safe CBOR (RFC 7049) encoder for the values of a dynamic-language runtime:
//! `undefined`, null, booleans, double-precision numbers, text, byte buffers, arrays and
//! insertion-ordered maps.
//!
//! ## Encoding policy
//!
//! - **Numbers are doubles.** Whole numbers in `[-2^32, 2^32 - 1]` are folded into the
//!   shortest major-0/major-1 integer head. Everything else (fractions, `-0.0`,
//!   infinities, NaN, wider integers) is written as float64 with a big-endian payload.
//!   64-bit integer heads are never produced.
//! - **Lengths are 32-bit.** Text, byte buffers and arrays use definite-length heads;
//!   longer inputs are rejected.
//! - **Maps are indefinite-length.** A map is `0xbf`, then key and value items in
//!   enumeration order, then `0xff`. Keys are arbitrary values, not just text.
//! - **Opaque host kinds are placeholders.** Pointers encode as `undefined` (`0xf7`);
//!   lightweight functions encode as an empty map (`0xa0`). Neither can be recovered.
//!
//! ## Resources
//!
//! Output goes to a buffer that starts at 64 bytes and doubles on demand; the result is
//! trimmed to exactly the bytes written. Nested containers are walked with an explicit
//! frame stack, so deep input never grows the native call stack; nesting beyond
//! [`EncodeLimits::max_depth`] fails with `DepthLimitExceeded`. Any failure aborts the
//! whole encode and no partial output is returned.
//!
//! Decoding is not implemented: [`decode`] always fails with `Unimplemented`.
//!
//! ## Example
//!
//! ```
//! use dynval_cbor::{encode, value};
//!
//! let v = value!({ a: [1, 2, 3] });
//! assert_eq!(
//!     encode(&v).unwrap(),
//!     [0xbf, 0x61, b'a', 0x83, 0x01, 0x02, 0x03, 0xff]
//! );
//! ```
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`CborError`].
//! - `sha2` *(default)*: enables SHA-256 digest helpers over encoded bytes.
//! - `serde`: implements `Serialize`/`Deserialize` for [`Value`].
//! - `simdutf8`: enables SIMD-accelerated UTF-8 validation where supported.
//! - `cli`: builds the `jsoncbor` command-line front end.
//!
//! ## `no_std`
//!
//! Without `std` the crate is `no_std` and needs only `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

extern crate alloc;

mod alloc_util;
mod buffer;
mod decode;
mod encode;
mod error;
mod float;
mod int;
mod limits;
mod macros;
#[cfg(feature = "serde")]
mod serde_impl;
pub(crate) mod utf8;
mod value;

pub use crate::decode::decode;
#[cfg(feature = "sha2")]
pub use crate::encode::encode_sha256;
pub use crate::encode::{encode, encode_with_limits, Encoder};
pub use crate::error::{CborError, ErrorCode, ErrorKind};
pub use crate::float::{fold, Number};
pub use crate::limits::{EncodeLimits, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_DEPTH};
#[doc(hidden)]
pub use crate::macros::__value_macro;
pub use crate::value::Value;
