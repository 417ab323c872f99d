//! Structural capability descriptors

use smallvec::SmallVec;

use crate::descriptor::{Descriptor, DescriptorKind};
use crate::foundation::capability::normalize;
use crate::foundation::{ContractError, Result};

/// Values exposing every named capability, whatever their nominal type.
///
/// Names may use host spelling: `"__len__"` and `"len"` are the same.
///
/// ```rust,ignore
/// let sized = capability(["__len__"])?;
/// assert!(sized.is_member(&Value::from("abc")));
/// assert!(!sized.is_member(&Value::from(3)));
/// ```
pub fn capability<I>(names: I) -> Result<Descriptor>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut normalized: SmallVec<[String; 4]> = SmallVec::new();
    for name in names {
        let name = normalize(name.as_ref());
        if name.is_empty() {
            return Err(ContractError::malformed("capability name must not be empty"));
        }
        if !normalized.iter().any(|seen| seen == name) {
            normalized.push(name.to_owned());
        }
    }
    if normalized.is_empty() {
        return Err(ContractError::malformed(
            "capability descriptor requires at least one name",
        ));
    }
    Ok(Descriptor::new(DescriptorKind::Capability(normalized)))
}

/// Single-capability shorthand.
pub fn capability_one(name: &str) -> Result<Descriptor> {
    capability([name])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_and_dedups() {
        let d = capability(["__iter__", "iter", "len"]).unwrap();
        assert_eq!(d.required_capabilities(), ["iter", "len"]);
        assert_eq!(d.display_name(), "Attr(iter, len)");
    }

    #[test]
    fn test_malformed() {
        assert!(capability(Vec::<&str>::new()).is_err());
        assert!(capability_one("").is_err());
        assert!(capability_one("____").is_err());
    }
}
