// Dynamically typed values

use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// A value under validation.
///
/// Numbers keep their concrete width so the identity rule can tell an `i32`
/// from an `i64`; every other rule compares them in a common numeric domain.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value (`None`)
    #[default]
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Text(String),
    /// Shared reference to another value. Clones share storage.
    Ref(Arc<Value>),
    /// Ordered sequence
    Seq(Vec<Value>),
    /// String-keyed mapping
    Map(BTreeMap<String, Value>),
    /// Named-field record
    Record {
        name: String,
        fields: Vec<(String, Value)>,
    },
}

/// Classification driving the comparator's decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Nil,
    Bool,
    Number,
    Text,
    Reference,
    Aggregate,
}

/// Number in the common comparison domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    /// Unsigned values above `i128::MAX`
    BigUint(u128),
    Float(f64),
}

impl Value {
    /// Wrap a value in a fresh shared reference.
    ///
    /// ```
    /// use assay_validation::Value;
    ///
    /// let a = Value::reference(vec![1, 2]);
    /// let b = a.clone();
    /// assert!(a.same_storage(&b));
    /// assert!(!a.same_storage(&Value::reference(vec![1, 2])));
    /// ```
    pub fn reference(value: impl Into<Value>) -> Self {
        Value::Ref(Arc::new(value.into()))
    }

    /// Build a record from named fields.
    pub fn record<N, K, V, I>(name: N, fields: I) -> Self
    where
        N: Into<String>,
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record {
            name: name.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Classify the value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Text(_) => Kind::Text,
            Value::Ref(_) => Kind::Reference,
            Value::Seq(_) | Value::Map(_) | Value::Record { .. } => Kind::Aggregate,
            _ => Kind::Number,
        }
    }

    /// Follow references until a non-reference value is reached.
    pub fn resolved(&self) -> &Value {
        let mut current = self;
        while let Value::Ref(inner) = current {
            current = inner;
        }
        current
    }

    /// True if both values are references to the same storage.
    pub fn same_storage(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Ref(a), Value::Ref(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Numeric view of a number value, without following references.
    pub fn as_number(&self) -> Option<Number> {
        let number = match *self {
            Value::I8(n) => Number::Int(n.into()),
            Value::I16(n) => Number::Int(n.into()),
            Value::I32(n) => Number::Int(n.into()),
            Value::I64(n) => Number::Int(n.into()),
            Value::I128(n) => Number::Int(n),
            Value::Isize(n) => Number::Int(n as i128),
            Value::U8(n) => Number::Int(n.into()),
            Value::U16(n) => Number::Int(n.into()),
            Value::U32(n) => Number::Int(n.into()),
            Value::U64(n) => Number::Int(n.into()),
            Value::Usize(n) => Number::Int(n as i128),
            Value::U128(n) => match i128::try_from(n) {
                Ok(n) => Number::Int(n),
                Err(_) => Number::BigUint(n),
            },
            Value::F32(n) => Number::Float(n.into()),
            Value::F64(n) => Number::Float(n),
            _ => return None,
        };
        Some(number)
    }

    /// Text content, without following references.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Number of elements (characters for text), following references.
    pub fn len(&self) -> Option<usize> {
        match self.resolved() {
            Value::Text(s) => Some(s.chars().count()),
            Value::Seq(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            Value::Record { fields, .. } => Some(fields.len()),
            _ => None,
        }
    }

    /// True for `Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Name of the concrete representation, e.g. `"i32"` or `"text"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::I128(_) => "i128",
            Value::Isize(_) => "isize",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::U128(_) => "u128",
            Value::Usize(_) => "usize",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Text(_) => "text",
            Value::Ref(_) => "reference",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "map",
            Value::Record { .. } => "record",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I8(n) => write!(f, "{}", n),
            Value::I16(n) => write!(f, "{}", n),
            Value::I32(n) => write!(f, "{}", n),
            Value::I64(n) => write!(f, "{}", n),
            Value::I128(n) => write!(f, "{}", n),
            Value::Isize(n) => write!(f, "{}", n),
            Value::U8(n) => write!(f, "{}", n),
            Value::U16(n) => write!(f, "{}", n),
            Value::U32(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}", n),
            Value::U128(n) => write!(f, "{}", n),
            Value::Usize(n) => write!(f, "{}", n),
            Value::F32(n) => write!(f, "{}", n),
            Value::F64(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Ref(inner) => write!(f, "{}", inner),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Record { name, fields } => {
                write!(f, "{}{{", name)?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::F32(n) => serializer.serialize_f32(*n),
            Value::F64(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Ref(inner) => inner.serialize(serializer),
            Value::Seq(items) => items.serialize(serializer),
            Value::Map(entries) => entries.serialize(serializer),
            Value::Record { fields, .. } => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            number => match number.as_number() {
                Some(Number::Int(n)) => match i64::try_from(n) {
                    Ok(n) => serializer.serialize_i64(n),
                    Err(_) => serializer.serialize_i128(n),
                },
                Some(Number::BigUint(n)) => serializer.serialize_u128(n),
                Some(Number::Float(n)) => serializer.serialize_f64(n),
                None => serializer.serialize_none(),
            },
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Text,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Arc<Value>> for Value {
    fn from(value: Arc<Value>) -> Self {
        Value::Ref(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::Seq(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        Value::Map(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(value: HashMap<K, V>) -> Self {
        Value::Map(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::U64(u)
                } else {
                    Value::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => items.into(),
            serde_json::Value::Object(entries) => {
                Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

// ============================================================================
// Typed accessors
// ============================================================================

impl TryFrom<&Value> for i64 {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value.resolved().as_number() {
            Some(Number::Int(n)) => i64::try_from(n).map_err(|_| ()),
            _ => Err(()),
        }
    }
}

impl TryFrom<&Value> for u64 {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value.resolved().as_number() {
            Some(Number::Int(n)) => u64::try_from(n).map_err(|_| ()),
            Some(Number::BigUint(n)) => u64::try_from(n).map_err(|_| ()),
            _ => Err(()),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value.resolved().as_number() {
            Some(Number::Int(n)) => Ok(n as f64),
            Some(Number::BigUint(n)) => Ok(n as f64),
            Some(Number::Float(n)) => Ok(n),
            None => Err(()),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value.resolved() {
            Value::Bool(b) => Ok(*b),
            _ => Err(()),
        }
    }
}

impl TryFrom<&Value> for String {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value.resolved() {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Value::from(1u8).kind(), Kind::Number);
        assert_eq!(Value::from(1.5).kind(), Kind::Number);
        assert_eq!(Value::from("x").kind(), Kind::Text);
        assert_eq!(Value::from(None::<i32>).kind(), Kind::Nil);
        assert_eq!(Value::from(vec![1]).kind(), Kind::Aggregate);
        assert_eq!(Value::reference(1).kind(), Kind::Reference);
    }

    #[test]
    fn test_option_is_transparent() {
        assert!(matches!(Value::from(Some(3i32)), Value::I32(3)));
        assert!(Value::from(None::<String>).is_nil());
    }

    #[test]
    fn test_resolved_follows_chains() {
        let inner = Value::reference(Value::reference("x"));
        assert_eq!(inner.resolved().as_text(), Some("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::from(10.0).to_string(), "10");
        assert_eq!(Value::from(1.1).to_string(), "1.1");
        assert_eq!(Value::reference("a").to_string(), "a");
        assert_eq!(
            Value::record("Point", [("x", 1), ("y", 2)]).to_string(),
            "Point{x: 1, y: 2}"
        );
        assert_eq!(Value::Nil.to_string(), "nil");
    }

    #[test]
    fn test_typed_accessors() {
        let v = Value::reference(42u16);
        assert_eq!(i64::try_from(&v), Ok(42));
        assert_eq!(f64::try_from(&v), Ok(42.0));
        assert!(bool::try_from(&v).is_err());
        assert_eq!(String::try_from(&Value::from("hi")), Ok("hi".to_string()));
        assert!(u64::try_from(&Value::from(-1)).is_err());
    }

    #[test]
    fn test_large_unsigned_number() {
        assert_eq!(Value::from(u128::MAX).as_number(), Some(Number::BigUint(u128::MAX)));
        assert_eq!(Value::from(7u128).as_number(), Some(Number::Int(7)));
    }

    #[test]
    fn test_from_json() {
        let v = Value::from(serde_json::json!({"a": [1, "b", null], "c": 1.5}));
        assert_eq!(v.to_string(), "{a: [1, b, nil], c: 1.5}");
    }

    #[test]
    fn test_len() {
        assert_eq!(Value::from("héllo").len(), Some(5));
        assert_eq!(Value::reference(vec![1, 2, 3]).len(), Some(3));
        assert_eq!(Value::from(3).len(), None);
    }
}
