//! Union

use crate::descriptor::{Descriptor, DescriptorKind};
use crate::foundation::{ContractError, Result};

use super::{TypeArg, flatten};

/// Values that are members of at least one constituent.
///
/// Arguments are flattened, nested unions are spliced in, and duplicates are
/// dropped keeping first-seen order. A single remaining constituent is
/// returned as is.
///
/// # Examples
///
/// ```rust,ignore
/// let id = union([Kind::Int.into(), Kind::Str.into()])?;
/// assert!(id.is_member(&Value::from(7)));
///
/// // Literals are not types
/// assert!(union([Kind::Int.into(), Value::from(3).into()]).is_err());
/// ```
pub fn union(args: impl IntoIterator<Item = TypeArg>) -> Result<Descriptor> {
    let constituents = flatten(args)?;
    if constituents.is_empty() {
        return Err(ContractError::malformed("union requires at least one type"));
    }
    Ok(join(constituents))
}

/// Builds a union from descriptors already known to be non-empty.
pub(crate) fn join(constituents: Vec<Descriptor>) -> Descriptor {
    let mut out: Vec<Descriptor> = Vec::with_capacity(constituents.len());
    for descriptor in constituents {
        let spliced = match (descriptor.kind(), descriptor.label()) {
            (DescriptorKind::Union(inner), None) => inner.clone(),
            _ => vec![descriptor],
        };
        for item in spliced {
            if !out.iter().any(|seen| seen.same(&item)) {
                out.push(item);
            }
        }
    }
    if out.len() == 1 {
        return out.remove(0);
    }
    Descriptor::new(DescriptorKind::Union(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Kind, Value};

    #[test]
    fn test_dedup_keeps_order() {
        let u = union([
            Kind::Str.into(),
            Kind::Int.into(),
            TypeArg::Nested(vec![Kind::Str.into()]),
        ])
        .unwrap();
        assert_eq!(u.display_name(), "Union(Str, Int)");
    }

    #[test]
    fn test_splices_nested_union() {
        let inner = union([Kind::Int.into(), Kind::Str.into()]).unwrap();
        let outer = union([inner.into(), Kind::Bool.into()]).unwrap();
        assert_eq!(outer.display_name(), "Union(Int, Str, Bool)");
    }

    #[test]
    fn test_single_collapses() {
        let u = union([Kind::Int.into(), Kind::Int.into()]).unwrap();
        assert_eq!(u.display_name(), "Int");
    }

    #[test]
    fn test_empty_is_malformed() {
        assert!(union(Vec::new()).is_err());
        assert!(union([TypeArg::Nested(Vec::new())]).is_err());
    }

    #[test]
    fn test_literal_is_malformed() {
        let err = union([Kind::Int.into(), Value::str("x").into()]).unwrap_err();
        assert!(matches!(err, ContractError::MalformedTypeSpecification { .. }));
    }
}
