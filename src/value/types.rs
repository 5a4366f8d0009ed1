//! Dynamic value types

use bytes::Bytes;
use indexmap::IndexMap;

/// Insertion-ordered mapping from string keys to dynamic values.
///
/// Schema fields are emitted in the order keys appear here.
pub type Mapping = IndexMap<String, Value>;

/// A decoded document value whose shape is only known at runtime
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null or absent value
    #[default]
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    /// Platform-native signed integer
    Isize(isize),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    /// Platform-native unsigned integer
    Usize(usize),
    Float32(f32),
    Float64(f64),
    String(String),
    /// Raw byte sequence
    Bytes(Bytes),
    /// Complex number with `f32` parts (no Arrow counterpart)
    Complex64 { re: f32, im: f32 },
    /// Complex number with `f64` parts (no Arrow counterpart)
    Complex128 { re: f64, im: f64 },
    /// Ordered sequence of values
    Sequence(Vec<Value>),
    /// Nested mapping
    Map(Mapping),
}

impl Value {
    /// Short name of the value's kind, for logs and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int8(_) => "int8",
            Value::Int16(_) => "int16",
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Isize(_) => "isize",
            Value::UInt8(_) => "uint8",
            Value::UInt16(_) => "uint16",
            Value::UInt32(_) => "uint32",
            Value::UInt64(_) => "uint64",
            Value::Usize(_) => "usize",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Complex64 { .. } => "complex64",
            Value::Complex128 { .. } => "complex128",
            Value::Sequence(_) => "sequence",
            Value::Map(_) => "mapping",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the mapping, if this is one
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key, if this is a mapping
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(key)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Isize,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    usize => Usize,
    f32 => Float32,
    f64 => Float64,
    String => String,
    Bytes => Bytes,
    Mapping => Map,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(raw: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(raw))
    }
}

impl From<Vec<Value>> for Value {
    fn from(seq: Vec<Value>) -> Self {
        Value::Sequence(seq)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
