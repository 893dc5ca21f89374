//! Dynamic value representation for parsed documents.
//!
//! This module provides the [`Value`] enum, the tagged union every parse
//! produces and every write consumes.
//!
//! ## Core Types
//!
//! - [`Value`]: any document fragment (null, boolean, integer, decimal,
//!   string, array, object)
//! - [`Kind`]: the tag alone, used in diagnostics
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jsonic::{jsonic, Value};
//!
//! // From primitives
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the jsonic! macro
//! let obj = jsonic!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Extracting Values
//!
//! Checked accessors return the payload or a [`VariantMismatch`] error that
//! names the requested and actual tags:
//!
//! ```rust
//! use jsonic::{Error, Kind, Value};
//!
//! let value = Value::from(42);
//! assert_eq!(value.as_integer().unwrap(), 42);
//!
//! let err = value.as_string().unwrap_err();
//! assert_eq!(
//!     err,
//!     Error::VariantMismatch { expected: Kind::String, found: Kind::Integer }
//! );
//! ```
//!
//! [`VariantMismatch`]: crate::Error::VariantMismatch

use crate::{Error, JsonMap, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of one document fragment.
///
/// The tag and payload are always consistent by construction; containers own
/// their children, and the grammar cannot express cycles.
///
/// # Examples
///
/// ```rust
/// use jsonic::{Kind, Value};
///
/// let num = Value::Integer(42);
/// let text = Value::String("hello".to_string());
///
/// assert_eq!(num.kind(), Kind::Integer);
/// assert_eq!(text.kind(), Kind::String);
/// assert!(Value::Null.is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Decimal(f64),
    String(String),
    Array(Vec<Value>),
    Object(JsonMap),
}

/// The tag of a [`Value`], without its payload.
///
/// Used by diagnostics such as [`Error::VariantMismatch`] to name the
/// requested and actual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Decimal,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "Null",
            Kind::Boolean => "Boolean",
            Kind::Integer => "Integer",
            Kind::Decimal => "Decimal",
            Kind::String => "String",
            Kind::Array => "Array",
            Kind::Object => "Object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the tag of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Decimal(_) => Kind::Decimal,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if the value is a decimal.
    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Value::Decimal(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean payload, or a wrong-variant error.
    ///
    /// # Errors
    ///
    /// [`Error::VariantMismatch`] naming the requested and actual tags.
    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::variant_mismatch(Kind::Boolean, other.kind())),
        }
    }

    /// Returns the integer payload, or a wrong-variant error.
    ///
    /// # Errors
    ///
    /// [`Error::VariantMismatch`] naming the requested and actual tags.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(Error::variant_mismatch(Kind::Integer, other.kind())),
        }
    }

    /// Returns the decimal payload, or a wrong-variant error.
    ///
    /// # Errors
    ///
    /// [`Error::VariantMismatch`] naming the requested and actual tags.
    pub fn as_decimal(&self) -> Result<f64> {
        match self {
            Value::Decimal(d) => Ok(*d),
            other => Err(Error::variant_mismatch(Kind::Decimal, other.kind())),
        }
    }

    /// Returns the string payload, or a wrong-variant error.
    ///
    /// # Errors
    ///
    /// [`Error::VariantMismatch`] naming the requested and actual tags.
    pub fn as_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(Error::variant_mismatch(Kind::String, other.kind())),
        }
    }

    /// Returns the array payload, or a wrong-variant error.
    ///
    /// # Errors
    ///
    /// [`Error::VariantMismatch`] naming the requested and actual tags.
    pub fn as_array(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(Error::variant_mismatch(Kind::Array, other.kind())),
        }
    }

    /// Returns the array payload mutably, for explicit container mutation.
    ///
    /// # Errors
    ///
    /// [`Error::VariantMismatch`] naming the requested and actual tags.
    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(Error::variant_mismatch(Kind::Array, other.kind())),
        }
    }

    /// Returns the object payload, or a wrong-variant error.
    ///
    /// # Errors
    ///
    /// [`Error::VariantMismatch`] naming the requested and actual tags.
    pub fn as_object(&self) -> Result<&JsonMap> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(Error::variant_mismatch(Kind::Object, other.kind())),
        }
    }

    /// Returns the object payload mutably, for explicit container mutation.
    ///
    /// # Errors
    ///
    /// [`Error::VariantMismatch`] naming the requested and actual tags.
    pub fn as_object_mut(&mut self) -> Result<&mut JsonMap> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(Error::variant_mismatch(Kind::Object, other.kind())),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the compact text form, the exact output of
    /// [`to_string`](crate::to_string).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::write::to_string(self))
    }
}

// Conversions from primitives.

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Decimal(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Decimal(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<JsonMap> for Value {
    fn from(value: JsonMap) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

// Checked extraction, used by mapper field setters.

impl TryFrom<&Value> for i64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_integer()
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        // An integer widens losslessly where a decimal is wanted.
        match value {
            Value::Integer(i) => Ok(*i as f64),
            _ => value.as_decimal(),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_boolean()
    }
}

impl TryFrom<&Value> for String {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value.as_string().map(str::to_string)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Decimal(d) => serializer.serialize_f64(*d),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Integer(value as i64))
                } else {
                    Ok(Value::Decimal(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Decimal(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JsonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_payload() {
        assert_eq!(Value::Bool(true).as_boolean().unwrap(), true);
        assert_eq!(Value::Integer(7).as_integer().unwrap(), 7);
        assert_eq!(Value::Decimal(2.5).as_decimal().unwrap(), 2.5);
        assert_eq!(Value::from("hi").as_string().unwrap(), "hi");
        assert!(Value::Array(vec![]).as_array().unwrap().is_empty());
        assert!(Value::Object(JsonMap::new()).as_object().unwrap().is_empty());
    }

    #[test]
    fn accessors_name_requested_and_actual() {
        let err = Value::Integer(1).as_array().unwrap_err();
        assert_eq!(
            err,
            Error::VariantMismatch {
                expected: Kind::Array,
                found: Kind::Integer
            }
        );
    }

    #[test]
    fn from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(3.5f64), Value::Decimal(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(1i64)), Value::Integer(1));
    }

    #[test]
    fn tryfrom_widens_integer_to_f64() {
        assert_eq!(f64::try_from(&Value::Integer(4)).unwrap(), 4.0);
        assert_eq!(f64::try_from(&Value::Decimal(4.5)).unwrap(), 4.5);
        assert!(f64::try_from(&Value::Null).is_err());
    }

    #[test]
    fn container_mutation() {
        let mut v = Value::Array(vec![Value::Integer(1)]);
        v.as_array_mut().unwrap().push(Value::Integer(2));
        assert_eq!(v.as_array().unwrap().len(), 2);

        let mut o = Value::Object(JsonMap::new());
        o.as_object_mut()
            .unwrap()
            .insert("k".to_string(), Value::Null);
        assert!(o.as_object().unwrap().contains_key("k"));
    }

    #[test]
    fn array_equality_is_ordered() {
        let a = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
        let b = Value::Array(vec![Value::Integer(2), Value::Integer(1)]);
        assert_ne!(a, b);
    }
}
