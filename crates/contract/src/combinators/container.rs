//! Parametrized containers
//!
//! `List`, `Set` and `Tuple` containers admit values of the matching kind
//! whose every element is a member of at least one element descriptor; tuple
//! containers have flexible length (see [`product`](super::product) for fixed
//! arity). `Dict` containers check every value, and every key when a key
//! descriptor is given. No element descriptors means any element.

use crate::descriptor::{Descriptor, DescriptorKind, Shape};

fn container<I>(shape: Shape, elements: I, key: Option<Descriptor>) -> Descriptor
where
    I: IntoIterator,
    I::Item: Into<Descriptor>,
{
    Descriptor::new(DescriptorKind::Container {
        shape,
        elements: elements.into_iter().map(Into::into).collect(),
        key,
    })
}

/// Lists of `elements` members.
///
/// ```rust,ignore
/// let names = list_of([Kind::Str]);
/// assert!(names.is_member(&Value::list(["a", "b"])));
/// ```
pub fn list_of<I>(elements: I) -> Descriptor
where
    I: IntoIterator,
    I::Item: Into<Descriptor>,
{
    container(Shape::List, elements, None)
}

/// Sets of `elements` members.
pub fn set_of<I>(elements: I) -> Descriptor
where
    I: IntoIterator,
    I::Item: Into<Descriptor>,
{
    container(Shape::Set, elements, None)
}

/// Tuples of any length whose items are `elements` members.
pub fn tuple_of<I>(elements: I) -> Descriptor
where
    I: IntoIterator,
    I::Item: Into<Descriptor>,
{
    container(Shape::Tuple, elements, None)
}

/// Mappings whose values are `values` members; keys are unchecked.
pub fn dict_of<I>(values: I) -> Descriptor
where
    I: IntoIterator,
    I::Item: Into<Descriptor>,
{
    container(Shape::Dict, values, None)
}

/// Mappings with `key` keys and `values` values.
///
/// ```rust,ignore
/// let scores = dict_keyed(Kind::Str, [Kind::Int]);
/// assert!(scores.is_member(&Value::dict([("ann", 3)])));
/// ```
pub fn dict_keyed<I>(key: impl Into<Descriptor>, values: I) -> Descriptor
where
    I: IntoIterator,
    I::Item: Into<Descriptor>,
{
    container(Shape::Dict, values, Some(key.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Kind, Value};

    #[test]
    fn test_untyped_containers() {
        let any_set = set_of(Vec::<Descriptor>::new());
        assert_eq!(any_set.display_name(), "Set");
        assert!(any_set.is_member(&Value::set([Value::Int(1), Value::str("a")])));
        assert!(!any_set.is_member(&Value::list([1])));
    }

    #[test]
    fn test_tuple_of_is_flexible() {
        let ints = tuple_of([Kind::Int]);
        assert!(ints.is_member(&Value::Tuple(Vec::new())));
        assert!(ints.is_member(&Value::tuple([1, 2, 3, 4])));
        assert!(!ints.is_member(&Value::tuple([Value::Int(1), Value::Nil])));
    }

    #[test]
    fn test_several_element_types() {
        let mixed = list_of([Kind::Int, Kind::Str]);
        assert_eq!(mixed.display_name(), "List(Int, Str)");
        assert!(mixed.is_member(&Value::list([Value::Int(1), Value::str("a")])));
        assert!(!mixed.is_member(&Value::list([Value::Float(1.0)])));
    }

    #[test]
    fn test_dict_of_ignores_keys() {
        let d = dict_of([Kind::Int]);
        assert!(d.is_member(&Value::dict([(Value::Nil, Value::Int(1))])));
        assert!(!d.is_member(&Value::dict([("a", "b")])));
    }
}
