//! Descriptor factories
//!
//! Every factory validates its arguments and returns
//! [`ContractError::MalformedTypeSpecification`] when they do not form a
//! descriptor. Factories that cannot fail return the descriptor directly.
//!
//! | Factory | Members |
//! |---|---|
//! | [`union`] | values of at least one constituent |
//! | [`product`], [`product_n`] | fixed-arity tuples |
//! | [`filter`], [`filter_fn`] | base members the predicate accepts |
//! | [`regex`] | text fully matching a pattern |
//! | [`range`] | numbers within inclusive bounds |
//! | [`len`] | base members of an exact length |
//! | [`capability`] | values exposing every named operation |
//! | [`list_of`], [`set_of`], [`tuple_of`], [`dict_of`], [`dict_keyed`] | parametrized containers |
//! | [`inter`], [`compl`] | intersection, complement |
//! | [`model`], [`exact_model`] | mappings with a field schema |
//! | [`null`] | the null object of a descriptor |
//!
//! Descriptors also offer fluent shorthands:
//!
//! ```rust,ignore
//! let port = Descriptor::from(Kind::Int).and(range(1, 65535)?).named("Port");
//! let id = Descriptor::from(Kind::Int).or(Kind::Str);
//! let odd = Descriptor::from(Kind::Int).refine(|v| v.as_int().is_some_and(|i| i % 2 != 0));
//! ```

mod algebra;
mod capability;
mod container;
mod model;
mod product;
mod refine;
mod union;

use std::sync::Arc;

use crate::descriptor::Descriptor;
use crate::foundation::{Class, ContractError, Kind, Result, Value};

pub use algebra::{compl, inter};
pub use capability::{capability, capability_one};
pub use container::{dict_keyed, dict_of, list_of, set_of, tuple_of};
pub use model::{Field, exact_model, model};
pub use product::{product, product_n, uprod};
pub use refine::{filter, filter_fn, len, null, range, range_values, regex};
pub use union::union;

// ============================================================================
// TYPE ARGUMENTS
// ============================================================================

/// One argument to a variadic factory.
///
/// Variadic factories accept nested sequences and flatten them, so
/// `union([a, [b, c]])` is `union([a, b, c])`. A literal value is never a type
/// and makes the specification malformed.
#[derive(Debug, Clone)]
pub enum TypeArg {
    Descriptor(Descriptor),
    Nested(Vec<TypeArg>),
    Literal(Value),
}

impl From<Descriptor> for TypeArg {
    fn from(descriptor: Descriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl From<&Descriptor> for TypeArg {
    fn from(descriptor: &Descriptor) -> Self {
        Self::Descriptor(descriptor.clone())
    }
}

impl From<Kind> for TypeArg {
    fn from(kind: Kind) -> Self {
        Self::Descriptor(Descriptor::from(kind))
    }
}

impl From<&Arc<Class>> for TypeArg {
    fn from(class: &Arc<Class>) -> Self {
        Self::Descriptor(Descriptor::from(class))
    }
}

impl From<Vec<TypeArg>> for TypeArg {
    fn from(items: Vec<TypeArg>) -> Self {
        Self::Nested(items)
    }
}

impl From<Value> for TypeArg {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

/// Flattens nested arguments into descriptors, in order.
pub(crate) fn flatten(args: impl IntoIterator<Item = TypeArg>) -> Result<Vec<Descriptor>> {
    fn walk(arg: TypeArg, out: &mut Vec<Descriptor>) -> Result<()> {
        match arg {
            TypeArg::Descriptor(descriptor) => out.push(descriptor),
            TypeArg::Nested(items) => {
                for item in items {
                    walk(item, out)?;
                }
            }
            TypeArg::Literal(value) => {
                return Err(ContractError::malformed(format!(
                    "expected a type, got the {} literal {}",
                    value.type_name(),
                    value.repr()
                )));
            }
        }
        Ok(())
    }

    let mut out = Vec::new();
    for arg in args {
        walk(arg, &mut out)?;
    }
    Ok(out)
}

// ============================================================================
// FLUENT SHORTHANDS
// ============================================================================

impl Descriptor {
    /// Union of `self` and `other`.
    pub fn or(&self, other: impl Into<Descriptor>) -> Descriptor {
        union::join(vec![self.clone(), other.into()])
    }

    /// Intersection of `self` and `other`.
    pub fn and(&self, other: impl Into<Descriptor>) -> Descriptor {
        algebra::meet(vec![self.clone(), other.into()])
    }

    /// Members of `self` the predicate accepts.
    pub fn refine<F>(&self, predicate: F) -> Descriptor
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        filter(self, predicate)
    }

    /// Members of `self` of exactly `n` entries (chars for text).
    pub fn with_len(&self, n: usize) -> Descriptor {
        len(self, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested() {
        let args = vec![
            TypeArg::from(Kind::Int),
            TypeArg::from(vec![TypeArg::from(Kind::Str), TypeArg::from(vec![TypeArg::from(Kind::Bool)])]),
        ];
        let flat = flatten(args).unwrap();
        let names: Vec<String> = flat.iter().map(Descriptor::display_name).collect();
        assert_eq!(names, ["Int", "Str", "Bool"]);
    }

    #[test]
    fn test_flatten_rejects_literal() {
        let args = vec![TypeArg::from(Kind::Int), TypeArg::from(Value::Int(3))];
        let err = flatten(args).unwrap_err();
        assert!(matches!(err, ContractError::MalformedTypeSpecification { .. }));
        assert!(err.to_string().contains("Int literal 3"));
    }

    #[test]
    fn test_fluent() {
        let int = Descriptor::from(Kind::Int);
        let id = int.or(Kind::Str);
        assert_eq!(id.display_name(), "Union(Int, Str)");

        let small_even = int
            .and(range(0, 10).unwrap())
            .refine(|v| v.as_int().is_some_and(|i| i % 2 == 0));
        assert!(small_even.is_member(&Value::Int(4)));
        assert!(!small_even.is_member(&Value::Int(5)));
        assert!(!small_even.is_member(&Value::Int(12)));

        let pair = Descriptor::from(Kind::Str).with_len(2);
        assert!(pair.is_member(&Value::str("ab")));
    }
}
