//! Extracted values and mappings.
//!
//! The result of an extraction is a [`Mapping`]: member names to [`Value`]s,
//! in enumeration order. Composite members become [`Value::Nested`] mappings
//! rather than opaque references.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::reflect::{Decimal, Scalar};

/// Member name to value, insertion ordered with unique keys.
pub type Mapping = IndexMap<Arc<str>, Value>;

/// A single extracted value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A composite member whose live value is absent.
    Null,
    /// A terminal leaf.
    Terminal(Scalar),
    /// A composite member, introspected recursively.
    Nested(Mapping),
    /// A sequence member, extracted element-wise.
    Sequence(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Terminal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Nested(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key in a nested mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(key))
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Terminal(s)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Nested(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

macro_rules! value_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Terminal(Scalar::from(v))
                }
            }
        )*
    };
}

value_from_scalar!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, Decimal, f32,
    f64, &str, String, &String, Arc<str>,
);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Terminal(s) => write!(f, "{s}"),
            Value::Nested(mapping) => {
                f.write_str("{")?;
                for (i, (key, value)) in mapping.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}
