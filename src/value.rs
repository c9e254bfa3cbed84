use alloc::string::String;
use alloc::vec::Vec;

/// A dynamic host value.
///
/// This covers the value kinds of a dynamic-language runtime. Values are read-only
/// input to the encoder: it borrows them for the duration of one call and never
/// mutates or retains them.
///
/// Text is held as raw bytes. The host's own string representation is passed through
/// verbatim; nothing here re-validates or repairs it.
///
/// # Example
/// ```
/// use dynval_cbor::{encode, Value};
///
/// let v = Value::map(vec![(Value::from("a"), Value::from(1))]);
/// assert_eq!(encode(&v).unwrap(), [0xbf, 0x61, b'a', 0x01, 0xff]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// Absent value (`undefined`).
    Undefined,
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Number; all numbers are doubles.
    Number(f64),
    /// Text as its byte encoding (normally UTF-8).
    Text(Vec<u8>),
    /// Fixed-length byte buffer.
    Buffer(Vec<u8>),
    /// Ordered array.
    Array(Vec<Value>),
    /// Key/value pairs in enumeration order. Keys are arbitrary values and are not
    /// required to be unique.
    Map(Vec<(Value, Value)>),
    /// Opaque pointer; encoded as `undefined`.
    Pointer(usize),
    /// Lightweight native function; encoded as an empty map.
    LightFunc(usize),
    /// A host kind with no CBOR encoding. Encoding it fails with `InvalidType`.
    Unsupported,
}

impl Value {
    /// Construct a text value from a string slice.
    #[must_use]
    pub fn text(s: &str) -> Self {
        Self::Text(s.as_bytes().to_vec())
    }

    /// Construct a byte-buffer value.
    #[must_use]
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Buffer(bytes.into())
    }

    /// Construct an array value.
    #[must_use]
    pub const fn array(items: Vec<Self>) -> Self {
        Self::Array(items)
    }

    /// Construct a map value from entries in enumeration order.
    #[must_use]
    pub const fn map(entries: Vec<(Self, Self)>) -> Self {
        Self::Map(entries)
    }

    /// Short name of the value kind, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Buffer(_) => "buffer",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Pointer(_) => "pointer",
            Self::LightFunc(_) => "lightfunc",
            Self::Unsupported => "unsupported",
        }
    }

    /// Returns true if the value is `undefined`.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the value is an array or a map.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Map(_))
    }

    /// Returns the value as a boolean, if it is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as a number, if it is one.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the raw text bytes, if this is text.
    #[must_use]
    pub fn as_text_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Text(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the text as `&str`, if this is text holding valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_text_bytes()
            .and_then(|b| crate::utf8::validate(b).ok())
    }

    /// Returns the buffer bytes, if this is a byte buffer.
    #[must_use]
    pub fn as_buffer(&self) -> Option<&[u8]> {
        match self {
            Self::Buffer(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the entries, if this is a map.
    #[must_use]
    pub fn as_map(&self) -> Option<&[(Self, Self)]> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Look up the first entry whose key is text equal to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map()?
            .iter()
            .find(|(k, _)| k.as_text_bytes() == Some(key.as_bytes()))
            .map(|(_, v)| v)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Buffer(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Buffer(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<K: Into<Self>, V: Into<Self>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
