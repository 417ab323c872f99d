//! Type descriptors
//!
//! A [`Descriptor`] is an immutable, cheaply clonable type specification with
//! a uniform membership test. Composite descriptors share their constituents
//! through `Arc`, so building `Union(A, B)` never copies `A` or `B`.
//!
//! Descriptors are built with the factories in [`crate::combinators`] (which
//! validate their arguments) or from a [`Kind`] directly:
//!
//! ```rust,ignore
//! use typeward_contract::prelude::*;
//!
//! let small = range(0, 100)?;
//! let id = union![Kind::Int, Kind::Str]?;
//!
//! assert!(small.is_member(&Value::from(42)));
//! assert!(id.is_member(&Value::from("a-12")));
//! assert_eq!(id.display_name(), "Union(Int, Str)");
//! ```

mod display;
mod membership;

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::combinators::Field;
use crate::foundation::{Class, Kind, Value};

pub use membership::Membership;

/// Refinement predicate. Must be pure and must not panic.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

// ============================================================================
// SHAPE
// ============================================================================

/// Container kind of a value or descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    List,
    Tuple,
    Set,
    Dict,
}

impl Shape {
    /// `true` for the four container shapes.
    pub const fn is_container(self) -> bool {
        !matches!(self, Self::Scalar)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Scalar => "Scalar",
            Self::List => "List",
            Self::Tuple => "Tuple",
            Self::Set => "Set",
            Self::Dict => "Dict",
        }
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// Inclusive numeric bound of a range descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Reads a numeric value; booleans are not numbers here.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(Self::Int(*i)),
            Value::Float(f) => Some(Self::Float(*f)),
            _ => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{}", Value::Float(*x)),
        }
    }
}

// ============================================================================
// DESCRIPTOR KIND
// ============================================================================

/// The variant data of a descriptor.
#[derive(Clone)]
pub enum DescriptorKind {
    /// Every value is a member.
    Any,
    /// Values of one nominal kind (or class).
    Nominal(Kind),
    /// Member of at least one constituent. Non-empty, ordered, deduplicated.
    Union(Vec<Descriptor>),
    /// Fixed-arity tuple, one descriptor per position.
    Product(Vec<Descriptor>),
    /// Fixed-arity tuple whose elements fill the constituents in any order.
    UProd(Vec<Descriptor>),
    /// Base membership plus a predicate.
    Filter { base: Descriptor, predicate: Predicate },
    /// Text fully matching a pattern.
    Regex { source: String, compiled: regex::Regex },
    /// Numbers within inclusive bounds.
    Range { low: Number, high: Number },
    /// Base membership plus an exact length.
    Len { base: Descriptor, len: usize },
    /// Values exposing every named capability.
    Capability(SmallVec<[String; 4]>),
    /// Parametrized list, set, tuple or dict. No elements means untyped.
    Container {
        shape: Shape,
        elements: Vec<Descriptor>,
        key: Option<Descriptor>,
    },
    /// Member of every constituent.
    Inter(Vec<Descriptor>),
    /// Member of the base and of none of the excluded descriptors.
    Compl {
        base: Descriptor,
        excluded: Vec<Descriptor>,
    },
    /// Mapping schema keyed by field name.
    Model { fields: Vec<Field>, exact: bool },
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

struct Node {
    kind: DescriptorKind,
    label: Option<String>,
}

/// A composable type specification.
#[derive(Clone)]
pub struct Descriptor {
    inner: Arc<Node>,
}

impl Descriptor {
    /// Wraps variant data into a descriptor. Factories validate first.
    pub(crate) fn new(kind: DescriptorKind) -> Self {
        Self {
            inner: Arc::new(Node { kind, label: None }),
        }
    }

    /// The universal wildcard.
    pub fn any() -> Self {
        Self::new(DescriptorKind::Any)
    }

    /// Descriptor for one nominal kind.
    pub fn nominal(kind: Kind) -> Self {
        Self::new(DescriptorKind::Nominal(kind))
    }

    /// Variant data.
    pub fn kind(&self) -> &DescriptorKind {
        &self.inner.kind
    }

    /// Returns a copy carrying an explicit display label.
    pub fn named(&self, label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Node {
                kind: self.inner.kind.clone(),
                label: Some(label.into()),
            }),
        }
    }

    /// Explicit label, if one was attached.
    pub fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }

    /// `true` when both handles point at the same descriptor.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Identity used for union deduplication: same node, same nominal kind,
    /// or both wildcards.
    pub(crate) fn same(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.label() != other.label() {
            return false;
        }
        match (self.kind(), other.kind()) {
            (DescriptorKind::Any, DescriptorKind::Any) => true,
            (DescriptorKind::Nominal(a), DescriptorKind::Nominal(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self.kind(), DescriptorKind::Any)
    }

    /// The nominal kind, for plain nominal descriptors.
    pub fn as_nominal(&self) -> Option<&Kind> {
        match self.kind() {
            DescriptorKind::Nominal(kind) => Some(kind),
            _ => None,
        }
    }

    /// Union constituents, if this is a union.
    pub fn as_union(&self) -> Option<&[Descriptor]> {
        match self.kind() {
            DescriptorKind::Union(constituents) => Some(constituents),
            _ => None,
        }
    }

    /// Container kind that members of this descriptor have.
    pub fn base_shape(&self) -> Shape {
        match self.kind() {
            DescriptorKind::Nominal(kind) => kind.shape(),
            DescriptorKind::Product(_) | DescriptorKind::UProd(_) => Shape::Tuple,
            DescriptorKind::Container { shape, .. } => *shape,
            DescriptorKind::Model { .. } => Shape::Dict,
            DescriptorKind::Filter { base, .. }
            | DescriptorKind::Len { base, .. }
            | DescriptorKind::Compl { base, .. } => base.base_shape(),
            DescriptorKind::Union(constituents) | DescriptorKind::Inter(constituents) => {
                constituents.first().map_or(Shape::Scalar, Self::base_shape)
            }
            DescriptorKind::Any
            | DescriptorKind::Regex { .. }
            | DescriptorKind::Range { .. }
            | DescriptorKind::Capability(_) => Shape::Scalar,
        }
    }

    /// Direct children of a composite descriptor.
    pub fn constituents(&self) -> Vec<&Descriptor> {
        match self.kind() {
            DescriptorKind::Union(items)
            | DescriptorKind::Product(items)
            | DescriptorKind::UProd(items)
            | DescriptorKind::Inter(items) => items.iter().collect(),
            DescriptorKind::Filter { base, .. } | DescriptorKind::Len { base, .. } => vec![base],
            DescriptorKind::Container { elements, key, .. } => {
                key.iter().chain(elements.iter()).collect()
            }
            DescriptorKind::Compl { base, excluded } => {
                std::iter::once(base).chain(excluded.iter()).collect()
            }
            DescriptorKind::Model { fields, .. } => {
                fields.iter().map(Field::descriptor).collect()
            }
            DescriptorKind::Any
            | DescriptorKind::Nominal(_)
            | DescriptorKind::Regex { .. }
            | DescriptorKind::Range { .. }
            | DescriptorKind::Capability(_) => Vec::new(),
        }
    }

    /// Capability names of a structural descriptor.
    pub fn required_capabilities(&self) -> &[String] {
        match self.kind() {
            DescriptorKind::Capability(names) => names,
            _ => &[],
        }
    }

    /// Membership with default options.
    pub fn is_member(&self, value: &Value) -> bool {
        self.classify(value, &crate::CheckOptions::default()) == Membership::Member
    }

    /// Membership honouring per-site options.
    pub fn is_member_with(&self, value: &Value, options: &crate::CheckOptions) -> bool {
        self.classify(value, options) == Membership::Member
    }
}

impl From<Kind> for Descriptor {
    fn from(kind: Kind) -> Self {
        Self::nominal(kind)
    }
}

impl From<&Arc<Class>> for Descriptor {
    fn from(class: &Arc<Class>) -> Self {
        Self::nominal(Kind::from(class))
    }
}

impl From<&Descriptor> for Descriptor {
    fn from(descriptor: &Descriptor) -> Self {
        descriptor.clone()
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Descriptor")
            .field(&self.display_name())
            .finish()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
