//! Canonical null objects
//!
//! [`null_of`] produces the "empty" value of a descriptor: `0` for `Int`, `""`
//! for `Str`, one null element for a typed list, a tuple of nulls for a
//! product, and so on. Refinements are not re-applied: the null of a
//! refinement is the null of its base.
//!
//! ```rust,ignore
//! let row = product([Kind::Int.into(), Kind::Str.into(), Kind::Bool.into()])?;
//! assert_eq!(null_of(&row), Value::tuple([Value::from(0), Value::from(""), Value::from(false)]));
//! assert!(is_null_of_type(&null_of(&row), &row));
//! ```

use indexmap::IndexMap;

use crate::descriptor::{Descriptor, DescriptorKind, Shape};
use crate::foundation::{Kind, Value};
use crate::signature::Callable;
use crate::typed::nill;

/// Null object of a nominal kind.
fn null_of_kind(kind: &Kind) -> Value {
    match kind {
        Kind::Int => Value::Int(0),
        Kind::Float => Value::Float(0.0),
        Kind::Str => Value::Str(String::new()),
        Kind::Bool => Value::Bool(false),
        Kind::List => Value::List(Vec::new()),
        Kind::Tuple => Value::Tuple(Vec::new()),
        Kind::Set => Value::Set(indexmap::IndexSet::new()),
        Kind::Dict => Value::Dict(IndexMap::new()),
        Kind::Func => Value::Func(Callable::Typed(nill())),
        Kind::Nil | Kind::Class(_) => Value::Nil,
    }
}

/// Mapping key standing in for "some key" in the null of a typed dict.
fn key_placeholder(key: Option<&Descriptor>) -> Value {
    match key.map(null_of) {
        Some(value @ (Value::Str(_) | Value::Int(_) | Value::Float(_))) => value,
        _ => Value::Nil,
    }
}

/// The canonical null object of `descriptor`.
pub fn null_of(descriptor: &Descriptor) -> Value {
    match descriptor.kind() {
        DescriptorKind::Any | DescriptorKind::Capability(_) => Value::Nil,
        DescriptorKind::Nominal(kind) => null_of_kind(kind),
        DescriptorKind::Union(constituents) | DescriptorKind::Inter(constituents) => {
            constituents.first().map_or(Value::Nil, null_of)
        }
        DescriptorKind::Product(positions) | DescriptorKind::UProd(positions) => {
            Value::Tuple(positions.iter().map(null_of).collect())
        }
        DescriptorKind::Filter { base, .. }
        | DescriptorKind::Len { base, .. }
        | DescriptorKind::Compl { base, .. } => null_of(base),
        DescriptorKind::Regex { .. } => Value::Str(String::new()),
        DescriptorKind::Range { low, high } => {
            if low.is_float() || high.is_float() {
                Value::Float(0.0)
            } else {
                Value::Int(0)
            }
        }
        DescriptorKind::Container {
            shape,
            elements,
            key,
        } => {
            let Some(first) = elements.first() else {
                return empty(*shape);
            };
            match shape {
                Shape::List => Value::List(vec![null_of(first)]),
                Shape::Set => Value::Set(std::iter::once(null_of(first)).collect()),
                Shape::Dict => Value::Dict(
                    std::iter::once((key_placeholder(key.as_ref()), null_of(first))).collect(),
                ),
                Shape::Tuple | Shape::Scalar => empty(*shape),
            }
        }
        DescriptorKind::Model { fields, .. } => Value::Dict(
            fields
                .iter()
                .map(|field| {
                    let value = field
                        .default()
                        .cloned()
                        .unwrap_or_else(|| null_of(field.descriptor()));
                    (Value::str(field.name()), value)
                })
                .collect(),
        ),
    }
}

fn empty(shape: Shape) -> Value {
    match shape {
        Shape::List => Value::List(Vec::new()),
        Shape::Tuple => Value::Tuple(Vec::new()),
        Shape::Set => Value::Set(indexmap::IndexSet::new()),
        Shape::Dict => Value::Dict(IndexMap::new()),
        Shape::Scalar => Value::Nil,
    }
}

/// `true` when `value` is the null object of `descriptor`.
///
/// For container descriptors the value must also have the descriptor's
/// container shape.
pub fn is_null_of_type(value: &Value, descriptor: &Descriptor) -> bool {
    let shape = descriptor.base_shape();
    if shape.is_container() && value.shape() != shape {
        return false;
    }
    *value == null_of(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{
        Field, capability, dict_keyed, dict_of, list_of, model, product, range, regex, set_of,
        tuple_of, union, uprod,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nominal_nulls() {
        assert_eq!(null_of(&Kind::Int.into()), Value::Int(0));
        assert_eq!(null_of(&Kind::Float.into()), Value::Float(0.0));
        assert_eq!(null_of(&Kind::Str.into()), Value::str(""));
        assert_eq!(null_of(&Kind::Bool.into()), Value::Bool(false));
        assert_eq!(null_of(&Kind::Nil.into()), Value::Nil);
        assert_eq!(null_of(&Descriptor::any()), Value::Nil);
        assert_eq!(null_of(&capability(["len"]).unwrap()), Value::Nil);
    }

    #[test]
    fn test_func_null_is_nill() {
        let null = null_of(&Kind::Func.into());
        let Value::Func(Callable::Typed(f)) = &null else {
            panic!("expected a typed function, got {null}");
        };
        assert!(std::sync::Arc::ptr_eq(f, &nill()));
        assert!(is_null_of_type(&null, &Kind::Func.into()));
    }

    #[test]
    fn test_product_null() {
        let row = product([Kind::Int.into(), Kind::Str.into(), Kind::Bool.into()]).unwrap();
        assert_eq!(
            null_of(&row),
            Value::tuple([Value::Int(0), Value::str(""), Value::Bool(false)])
        );
    }

    #[test]
    fn test_uprod_null_follows_constituent_order() {
        let pair = uprod([Kind::Str.into(), Kind::Float.into()]).unwrap();
        let null = null_of(&pair);
        assert_eq!(null, Value::tuple([Value::str(""), Value::Float(0.0)]));
        assert!(is_null_of_type(&null, &pair));
        assert!(pair.is_member(&null));
    }

    #[test]
    fn test_container_nulls() {
        assert_eq!(null_of(&list_of([Kind::Int])), Value::list([0]));
        assert_eq!(null_of(&set_of([Kind::Str])), Value::set([""]));
        assert_eq!(null_of(&tuple_of([Kind::Int])), Value::Tuple(Vec::new()));
        assert_eq!(null_of(&Kind::List.into()), Value::List(Vec::new()));
    }

    #[test]
    fn test_dict_placeholder_follows_key() {
        assert_eq!(null_of(&dict_keyed(Kind::Str, [Kind::Int])), Value::dict([("", 0)]));
        assert_eq!(null_of(&dict_keyed(Kind::Int, [Kind::Str])), Value::dict([(0, "")]));
        assert_eq!(
            null_of(&dict_keyed(Kind::Float, [Kind::Int])),
            Value::dict([(0.0, 0)])
        );
        assert_eq!(
            null_of(&dict_of([Kind::Int])),
            Value::dict([(Value::Nil, Value::Int(0))])
        );
    }

    #[test]
    fn test_refinement_nulls() {
        assert_eq!(null_of(&regex("[a-z]+").unwrap()), Value::str(""));
        assert_eq!(null_of(&range(1, 9).unwrap()), Value::Int(0));
        assert_eq!(null_of(&range(0.5, 9.0).unwrap()), Value::Float(0.0));
        let id = union([Kind::Str.into(), Kind::Int.into()]).unwrap();
        assert_eq!(null_of(&id), Value::str(""));
    }

    #[test]
    fn test_model_null_uses_defaults() {
        let m = model([
            Field::required("id", Kind::Int),
            Field::optional("tag", Kind::Str, "none").unwrap(),
        ])
        .unwrap();
        assert_eq!(
            null_of(&m),
            Value::dict([("id", Value::Int(0)), ("tag", Value::str("none"))])
        );
    }

    #[test]
    fn test_is_null_of_type_checks_shape() {
        let tuple = Descriptor::from(Kind::Tuple);
        assert!(is_null_of_type(&Value::Tuple(Vec::new()), &tuple));
        assert!(!is_null_of_type(&Value::List(Vec::new()), &tuple));
        assert!(!is_null_of_type(&Value::Int(1), &Kind::Int.into()));
    }
}
