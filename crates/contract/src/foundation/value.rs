//! Dynamically typed values
//!
//! [`Value`] is the subject of every membership test. It mirrors the data a
//! dynamic host hands across a call boundary: scalars, ordered and unordered
//! collections, callables, and opaque host objects.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::descriptor::Shape;
use crate::foundation::capability;
use crate::foundation::kind::Object;
use crate::signature::Callable;

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed value.
///
/// Equality is structural. Floats compare by their normalized bit pattern so
/// that every value can be a set member or a mapping key; sets and mappings
/// compare without regard to insertion order; callables and host objects
/// compare by identity.
///
/// # Examples
///
/// ```rust,ignore
/// use typeward_contract::foundation::Value;
///
/// let point = Value::tuple([Value::from(1), Value::from(2)]);
/// assert_eq!(point.type_name(), "Tuple");
/// assert_eq!(point.to_string(), "(1, 2)");
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence marker.
    #[default]
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 text.
    Str(String),
    /// Ordered, variable-length sequence.
    List(Vec<Value>),
    /// Ordered sequence; fixed arity when checked against a product.
    Tuple(Vec<Value>),
    /// Unordered collection of distinct values.
    Set(IndexSet<Value>),
    /// Mapping from keys to values.
    Dict(IndexMap<Value, Value>),
    /// A callable, plain or contract-checked.
    Func(Callable),
    /// An opaque host object with a nominal class.
    Object(Arc<dyn Object>),
}

impl Value {
    // ==================== Constructors ====================

    /// Creates a text value.
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Creates a list from anything convertible to values.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Creates a tuple from anything convertible to values.
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Creates a set; duplicates collapse.
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// Creates a mapping from key/value pairs; later keys win.
    pub fn dict<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wraps a host object.
    pub fn object(object: impl Object + 'static) -> Self {
        Self::Object(Arc::new(object))
    }

    // ==================== Type queries ====================

    /// Canonical display name of the runtime type.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Nil => "Nill",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Str(_) => "Str",
            Self::List(_) => "List",
            Self::Tuple(_) => "Tuple",
            Self::Set(_) => "Set",
            Self::Dict(_) => "Dict",
            Self::Func(_) => "Func",
            Self::Object(object) => object.class().name(),
        }
    }

    /// Container kind of the value.
    pub fn shape(&self) -> Shape {
        match self {
            Self::List(_) => Shape::List,
            Self::Tuple(_) => Shape::Tuple,
            Self::Set(_) => Shape::Set,
            Self::Dict(_) => Shape::Dict,
            _ => Shape::Scalar,
        }
    }

    /// Returns `true` when the value exposes the named capability.
    ///
    /// Names are normalized first, so `"__len__"` and `"len"` are the same.
    pub fn has_capability(&self, name: &str) -> bool {
        let name = capability::normalize(name);
        match self {
            Self::Object(object) => object.has_capability(name),
            other => capability::builtin(other).iter().any(|c| *c == name),
        }
    }

    /// Number of entries for text (in chars), collections and sized objects.
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Str(s) => Some(s.chars().count()),
            Self::List(items) | Self::Tuple(items) => Some(items.len()),
            Self::Set(items) => Some(items.len()),
            Self::Dict(entries) => Some(entries.len()),
            Self::Object(object) => object.length(),
            _ => None,
        }
    }

    // ==================== Accessors ====================

    /// Returns the integer, if this is one.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns any numeric value widened to `f64`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the mapping, if this is one.
    pub fn as_dict(&self) -> Option<&IndexMap<Value, Value>> {
        match self {
            Self::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Literal rendering with text quoted: `'a'` rather than `a`.
    pub fn repr(&self) -> String {
        Repr(self).to_string()
    }

    /// Renders the value for diagnostics, cutting it at `limit` chars.
    pub fn render(&self, limit: usize) -> String {
        let full = self.to_string();
        if full.chars().count() <= limit {
            return full;
        }
        let mut cut: String = full.chars().take(limit).collect();
        cut.push_str("...");
        cut
    }
}

// ============================================================================
// EQUALITY AND HASHING
// ============================================================================

/// Bit pattern used for float equality: `-0.0 == 0.0` and all NaNs are one.
fn float_bits(f: f64) -> u64 {
    if f == 0.0 {
        0.0f64.to_bits()
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

fn hash_one(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => float_bits(*a) == float_bits(*b),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Dict(a), Self::Dict(b)) => a == b,
            (Self::Func(a), Self::Func(b)) => a.ptr_eq(b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(f) => float_bits(*f).hash(state),
            Self::Str(s) => s.hash(state),
            Self::List(items) | Self::Tuple(items) => items.hash(state),
            // Order-insensitive to agree with IndexSet / IndexMap equality.
            Self::Set(items) => {
                items.len().hash(state);
                items
                    .iter()
                    .fold(0u64, |acc, item| acc.wrapping_add(hash_one(item)))
                    .hash(state);
            }
            Self::Dict(entries) => {
                entries.len().hash(state);
                entries
                    .iter()
                    .fold(0u64, |acc, entry| acc.wrapping_add(hash_one(&entry)))
                    .hash(state);
            }
            Self::Func(callable) => callable.addr().hash(state),
            Self::Object(object) => (Arc::as_ptr(object).cast::<()>() as usize).hash(state),
        }
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

/// Literal rendering used inside containers: text is quoted.
struct Repr<'a>(&'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Str(s) => write!(f, "'{s}'"),
            other => write!(f, "{other}"),
        }
    }
}

fn write_items<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", Repr(item))?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Self::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::Set(items) if items.is_empty() => f.write_str("set()"),
            Self::Set(items) => {
                f.write_str("{")?;
                write_items(f, items)?;
                f.write_str("}")
            }
            Self::Dict(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", Repr(key), Repr(value))?;
                }
                f.write_str("}")
            }
            Self::Func(callable) => write!(f, "<func {}>", callable.name()),
            Self::Object(object) => write!(f, "<{} object>", object.class().name()),
        }
    }
}

// ============================================================================
// SERIALIZATION
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            Self::List(items) | Self::Tuple(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(&key.to_string(), value)?;
                }
                map.end()
            }
            Self::Func(_) | Self::Object(_) => serializer.collect_str(self),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Self::Func(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_equality_normalizes_zero_and_nan() {
        assert_eq!(Value::Float(0.0), Value::Float(-0.0));
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Float(0.0), Value::Int(0));
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a = Value::set([1, 2, 3]);
        let b = Value::set([3, 2, 1]);
        assert_eq!(a, b);
        assert_eq!(hash_one(&a), hash_one(&b));
    }

    #[test]
    fn test_list_and_tuple_are_distinct() {
        assert_ne!(Value::list([1, 2]), Value::tuple([1, 2]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::list([1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::tuple([Value::from("a")]).to_string(), "('a',)");
        assert_eq!(Value::dict([("k", 1)]).to_string(), "{'k': 1}");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::set(Vec::<Value>::new()).to_string(), "set()");
        assert_eq!(Value::Nil.to_string(), "nil");
    }

    #[test]
    fn test_render_truncates() {
        let value = Value::str("abcdefghij");
        assert_eq!(value.render(4), "abcd...");
        assert_eq!(value.render(10), "abcdefghij");
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(Value::str("héllo").length(), Some(5));
        assert_eq!(Value::list([1, 2, 3]).length(), Some(3));
        assert_eq!(Value::Int(3).length(), None);
    }

    #[test]
    fn test_serialize_dict_keys_as_text() {
        let value = Value::dict([(1, "a")]);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({"1": "a"}));
    }
}
