//! Intersection and complement

use crate::descriptor::{Descriptor, DescriptorKind};
use crate::foundation::{ContractError, Result};

use super::{TypeArg, flatten};

/// Values that are members of every constituent.
///
/// Arguments flatten like [`union`](super::union). The first failing
/// constituent decides how a non-member is reported.
pub fn inter(args: impl IntoIterator<Item = TypeArg>) -> Result<Descriptor> {
    let constituents = flatten(args)?;
    if constituents.is_empty() {
        return Err(ContractError::malformed(
            "intersection requires at least one type",
        ));
    }
    Ok(meet(constituents))
}

pub(crate) fn meet(constituents: Vec<Descriptor>) -> Descriptor {
    let mut out: Vec<Descriptor> = Vec::with_capacity(constituents.len());
    for descriptor in constituents {
        let spliced = match (descriptor.kind(), descriptor.label()) {
            (DescriptorKind::Inter(inner), None) => inner.clone(),
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
    Descriptor::new(DescriptorKind::Inter(out))
}

/// Members of `base` that belong to none of `excluded`.
///
/// Excluding a nominal type that is unrelated to a nominal base can never
/// remove anything and is rejected.
///
/// ```rust,ignore
/// let animal_not_cat = compl(&animal, [&cat])?;
/// ```
pub fn compl<I>(base: impl Into<Descriptor>, excluded: I) -> Result<Descriptor>
where
    I: IntoIterator,
    I::Item: Into<Descriptor>,
{
    let base = base.into();
    let excluded: Vec<Descriptor> = excluded.into_iter().map(Into::into).collect();
    if excluded.is_empty() {
        return Err(ContractError::malformed(
            "complement requires at least one excluded type",
        ));
    }
    if let Some(base_kind) = base.as_nominal() {
        for descriptor in &excluded {
            if let Some(kind) = descriptor.as_nominal() {
                if !kind.is_sub_kind_of(base_kind) {
                    return Err(ContractError::malformed(format!(
                        "cannot exclude {} from unrelated {}",
                        kind.name(),
                        base_kind.name()
                    )));
                }
            }
        }
    }
    Ok(Descriptor::new(DescriptorKind::Compl { base, excluded }))
}
