// src/macros.rs

//! Value construction macro.
//!
//! This module provides [`value!`], a JSON-like literal syntax for building
//! [`crate::Value`] trees.
//!
//! Map key rules (same ergonomics as `serde_json::json!`):
//! - `{ a: 1 }` uses the literal text key `"a"` (identifier stringized)
//! - `{ "a": 1 }` uses the literal string key `"a"`
//! - `{ (k): 1 }` uses the expression `k` as the key; any `Into<Value>` works, so keys
//!   need not be text
//!
//! Elements and values are single token trees: negative numbers and other compound
//! expressions must be parenthesized, e.g. `[(-1), (x + 1)]`.
//!
//! ```
//! use dynval_cbor::{value, Value};
//!
//! let user_key = "dynamic";
//! let v = value!({
//!     a: 1,
//!     (user_key): [true, null, undefined, 1.5, (-2)],
//! });
//! assert_eq!(v.get("a"), Some(&Value::Number(1.0)));
//! ```

/// Construct a [`crate::Value`] using a JSON-like literal syntax.
///
/// Supported forms:
/// - `value!(undefined)` / `value!(null)`
/// - `value!(true)` / `value!(false)`
/// - `value!([ ... ])`
/// - `value!({ key: value, "key": value, (expr_key): value, ... })`
/// - `value!(expr)` for any `expr: Into<Value>` (numbers, strings, byte vectors, options)
#[macro_export]
macro_rules! value {
    (undefined) => {
        $crate::Value::Undefined
    };
    (null) => {
        $crate::Value::Null
    };
    (true) => {
        $crate::Value::Bool(true)
    };
    (false) => {
        $crate::Value::Bool(false)
    };

    // Array literal: value!([ ... ])
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array($crate::__value_macro::Vec::from([
            $($crate::value!($elem)),*
        ]))
    };

    // Map literal: value!({ ... })
    ({ $($key:tt : $val:tt),* $(,)? }) => {
        $crate::Value::Map($crate::__value_macro::Vec::from([
            $(($crate::__value_key!($key), $crate::value!($val))),*
        ]))
    };

    // Fallback: convert an expression into Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Internal helper for map keys.
///
/// - `ident` becomes `"ident"`
/// - `"literal"` is used as-is
/// - `(expr)` uses the runtime expression as key
#[doc(hidden)]
#[macro_export]
macro_rules! __value_key {
    ($key:ident) => {
        $crate::Value::from(::core::stringify!($key))
    };
    (($key:expr)) => {
        $crate::Value::from($key)
    };
    ($key:literal) => {
        $crate::Value::from($key)
    };
}

#[doc(hidden)]
pub mod __value_macro {
    pub use alloc::vec::Vec;
}
