//! Nominal kinds, user classes and host objects

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::descriptor::Shape;
use crate::foundation::capability;
use crate::foundation::value::Value;

// ============================================================================
// CLASS
// ============================================================================

/// A nominal user type in a single-inheritance hierarchy.
///
/// Classes are compared by identity: two classes with the same name are still
/// distinct types.
///
/// # Examples
///
/// ```rust,ignore
/// let animal = Class::new("Animal").with_capability("__len__");
/// let dog = Class::new("Dog").extends(&animal);
///
/// assert!(dog.is_subclass_of(&animal));
/// assert!(dog.has_capability("len"));
/// ```
#[derive(Debug)]
pub struct Class {
    name: String,
    parent: Option<Arc<Class>>,
    capabilities: SmallVec<[String; 4]>,
}

impl Class {
    /// Creates a root class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            capabilities: SmallVec::new(),
        }
    }

    /// Sets the parent class.
    pub fn extends(mut self, parent: &Arc<Class>) -> Self {
        self.parent = Some(Arc::clone(parent));
        self
    }

    /// Declares a capability on this class (inherited by subclasses).
    pub fn with_capability(mut self, name: &str) -> Self {
        let name = capability::normalize(name).to_owned();
        if !self.capabilities.contains(&name) {
            self.capabilities.push(name);
        }
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct parent, if any.
    pub fn parent(&self) -> Option<&Arc<Class>> {
        self.parent.as_ref()
    }

    /// `true` when `self` is `other` or descends from it.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if std::ptr::eq(class, other) {
                return true;
            }
            current = class.parent.as_deref();
        }
        false
    }

    /// Looks the capability up on this class and its ancestors.
    pub fn has_capability(&self, name: &str) -> bool {
        let name = capability::normalize(name);
        let mut current = Some(self);
        while let Some(class) = current {
            if class.capabilities.iter().any(|c| c == name) {
                return true;
            }
            current = class.parent.as_deref();
        }
        false
    }
}

// ============================================================================
// OBJECT
// ============================================================================

/// A host value carried in [`Value::Object`].
///
/// Implementors only need to name their class; capabilities default to what
/// the class hierarchy declares.
pub trait Object: fmt::Debug + Send + Sync {
    /// Nominal class of the object.
    fn class(&self) -> &Arc<Class>;

    /// Whether the object supports the (normalized) capability.
    fn has_capability(&self, name: &str) -> bool {
        self.class().has_capability(name)
    }

    /// Entry count for sized objects.
    fn length(&self) -> Option<usize> {
        None
    }
}

// ============================================================================
// KIND
// ============================================================================

/// Nominal runtime kind of a [`Value`].
#[derive(Debug, Clone)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Float,
    Str,
    List,
    Tuple,
    Set,
    Dict,
    Func,
    Class(Arc<Class>),
}

impl Kind {
    /// Kind of a runtime value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Nil => Self::Nil,
            Value::Bool(_) => Self::Bool,
            Value::Int(_) => Self::Int,
            Value::Float(_) => Self::Float,
            Value::Str(_) => Self::Str,
            Value::List(_) => Self::List,
            Value::Tuple(_) => Self::Tuple,
            Value::Set(_) => Self::Set,
            Value::Dict(_) => Self::Dict,
            Value::Func(_) => Self::Func,
            Value::Object(object) => Self::Class(Arc::clone(object.class())),
        }
    }

    /// Parses a built-in kind name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "nil" | "nill" | "none" => Some(Self::Nil),
            "bool" | "boolean" => Some(Self::Bool),
            "int" | "integer" => Some(Self::Int),
            "float" => Some(Self::Float),
            "str" | "string" => Some(Self::Str),
            "list" => Some(Self::List),
            "tuple" => Some(Self::Tuple),
            "set" => Some(Self::Set),
            "dict" | "map" => Some(Self::Dict),
            "func" | "function" | "callable" => Some(Self::Func),
            _ => None,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Nil => "Nill",
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Str => "Str",
            Self::List => "List",
            Self::Tuple => "Tuple",
            Self::Set => "Set",
            Self::Dict => "Dict",
            Self::Func => "Func",
            Self::Class(class) => class.name(),
        }
    }

    /// Container shape values of this kind have.
    pub const fn shape(&self) -> Shape {
        match self {
            Self::List => Shape::List,
            Self::Tuple => Shape::Tuple,
            Self::Set => Shape::Set,
            Self::Dict => Shape::Dict,
            _ => Shape::Scalar,
        }
    }

    /// Nominal membership. `Bool` is not an `Int`.
    pub fn admits(&self, value: &Value, allow_subclass: bool) -> bool {
        match (self, value) {
            (Self::Class(declared), Value::Object(object)) => {
                let class = object.class();
                if allow_subclass {
                    class.is_subclass_of(declared)
                } else {
                    Arc::ptr_eq(class, declared)
                }
            }
            (Self::Class(_), _) => false,
            (kind, value) => *kind == Self::of(value),
        }
    }

    /// `true` when every value of `self` is also of `other`.
    pub fn is_sub_kind_of(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Class(sub), Self::Class(sup)) => sub.is_subclass_of(sup),
            (a, b) => a == b,
        }
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Class(a), Self::Class(b)) => Arc::ptr_eq(a, b),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for Kind {}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&Arc<Class>> for Kind {
    fn from(class: &Arc<Class>) -> Self {
        Self::Class(Arc::clone(class))
    }
}
