//! Product (fixed-arity tuple)

use crate::descriptor::{Descriptor, DescriptorKind};
use crate::foundation::{ContractError, Result};

use super::{TypeArg, flatten};

/// Tuples whose i-th element is a member of the i-th descriptor.
///
/// ```rust,ignore
/// let point = product([Kind::Int.into(), Kind::Int.into()])?;
/// assert!(point.is_member(&Value::tuple([1, 2])));
/// assert!(!point.is_member(&Value::tuple([1, 2, 3])));
/// ```
pub fn product(args: impl IntoIterator<Item = TypeArg>) -> Result<Descriptor> {
    let positions = flatten(args)?;
    if positions.is_empty() {
        return Err(ContractError::malformed("product requires at least one type"));
    }
    Ok(Descriptor::new(DescriptorKind::Product(positions)))
}

/// Tuples of exactly `n` members of `element`.
pub fn product_n(element: impl Into<Descriptor>, n: usize) -> Result<Descriptor> {
    if n == 0 {
        return Err(ContractError::malformed("product arity must be positive"));
    }
    let element = element.into();
    Ok(Descriptor::new(DescriptorKind::Product(vec![element; n])))
}

/// Tuples of the same arity whose elements fill the constituents in any
/// order, each element using up one constituent that admits it.
///
/// ```rust,ignore
/// let pair = uprod([Kind::Int.into(), Kind::Str.into()])?;
/// assert!(pair.is_member(&Value::tuple([Value::from(1), Value::from("a")])));
/// assert!(pair.is_member(&Value::tuple([Value::from("a"), Value::from(1)])));
/// ```
pub fn uprod(args: impl IntoIterator<Item = TypeArg>) -> Result<Descriptor> {
    let constituents = flatten(args)?;
    if constituents.is_empty() {
        return Err(ContractError::malformed(
            "unordered product requires at least one type",
        ));
    }
    Ok(Descriptor::new(DescriptorKind::UProd(constituents)))
}
