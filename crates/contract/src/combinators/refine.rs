//! Refinements: filter, regex, range, length and null
//!
//! A refinement keeps the shape of its base and narrows its members. When the
//! base admits a value but the refinement does not, membership reports
//! [`Membership::Refused`](crate::descriptor::Membership::Refused) naming the
//! refinement, which is what distinguishes "additional check failed" from a
//! plain type mismatch in diagnostics.

use std::sync::Arc;

use crate::descriptor::{Descriptor, DescriptorKind, Number};
use crate::foundation::{ContractError, Kind, Result, Value};
use crate::null::null_of;
use crate::typed::TypedFn;

/// Members of `base` for which `predicate` holds.
///
/// The predicate must be pure and total; it only ever sees base members.
pub fn filter<F>(base: impl Into<Descriptor>, predicate: F) -> Descriptor
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Descriptor::new(DescriptorKind::Filter {
        base: base.into(),
        predicate: Arc::new(predicate),
    })
}

/// Filter whose predicate is itself a contract-checked function.
///
/// The function must take exactly one parameter, return `Bool`, and accept
/// every member of `base`: when both the parameter and the base are nominal,
/// the base kind must be a sub-kind of the parameter kind.
///
/// ```rust,ignore
/// let is_odd = wrap(function!(is_odd(n: Kind::Int) -> Kind::Bool; |args| {
///     Ok(Value::Bool(args[0].as_int().unwrap_or(0) % 2 != 0))
/// }))?;
/// let odd = filter_fn(Kind::Int, &is_odd)?;
/// ```
pub fn filter_fn(base: impl Into<Descriptor>, predicate: &TypedFn) -> Result<Descriptor> {
    let base = base.into();
    let signature = predicate.signature();
    let reject = |reason: String| {
        Err(ContractError::malformed(format!(
            "filter predicate '{}' {reason}",
            predicate.name()
        )))
    };

    let [parameter] = signature.parameters() else {
        return reject(format!(
            "must take exactly one parameter, takes {}",
            signature.arity()
        ));
    };
    if signature.codomain().and_then(Descriptor::as_nominal) != Some(&Kind::Bool) {
        return reject("must return Bool".to_owned());
    }
    if let (Some(domain), Some(base_kind)) =
        (parameter.descriptor().as_nominal(), base.as_nominal())
    {
        if !base_kind.is_sub_kind_of(domain) {
            return reject(format!(
                "accepts {} which does not cover {}",
                domain.name(),
                base_kind.name()
            ));
        }
    }

    let checked = predicate.clone();
    Ok(filter(base, move |value| {
        matches!(
            checked.call(std::slice::from_ref(value)),
            Ok(Value::Bool(true))
        )
    }))
}

/// Text that fully matches `pattern`; anchors are implied at both ends.
pub fn regex(pattern: &str) -> Result<Descriptor> {
    let compiled = regex::Regex::new(&format!("^(?:{pattern})$")).map_err(|err| {
        ContractError::malformed(format!("invalid pattern r'{pattern}': {err}"))
    })?;
    Ok(Descriptor::new(DescriptorKind::Regex {
        source: pattern.to_owned(),
        compiled,
    }))
}

/// Numbers `n` with `low <= n <= high`. Booleans are not numbers here.
pub fn range(low: impl Into<Number>, high: impl Into<Number>) -> Result<Descriptor> {
    let (low, high) = (low.into(), high.into());
    // `!(a <= b)` also rejects NaN bounds.
    if !(low.as_f64() <= high.as_f64()) {
        return Err(ContractError::malformed(format!(
            "range lower bound {low} exceeds upper bound {high}"
        )));
    }
    Ok(Descriptor::new(DescriptorKind::Range { low, high }))
}

/// [`range`] with bounds given as dynamic values.
pub fn range_values(low: &Value, high: &Value) -> Result<Descriptor> {
    let bound = |value: &Value| {
        Number::from_value(value).ok_or_else(|| {
            ContractError::malformed(format!(
                "range bounds must be numeric, got {} ({})",
                value.repr(),
                value.type_name()
            ))
        })
    };
    range(bound(low)?, bound(high)?)
}

/// Members of `base` with exactly `n` entries (chars for text).
pub fn len(base: impl Into<Descriptor>, n: usize) -> Descriptor {
    Descriptor::new(DescriptorKind::Len {
        base: base.into(),
        len: n,
    })
}

/// The members of `base` equal to its null object.
///
/// ```rust,ignore
/// let zero = null(Kind::Int);
/// assert!(zero.is_member(&Value::from(0)));
/// assert_eq!(zero.display_name(), "Null(Int)");
/// ```
pub fn null(base: impl Into<Descriptor>) -> Descriptor {
    let base = base.into();
    let name = format!("Null({})", base.display_name());
    let empty = null_of(&base);
    filter(base, move |value| *value == empty).named(name)
}
