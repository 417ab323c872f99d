//! Call-time validation
//!
//! [`check_domain`] validates arguments against a [`Signature`] before a call
//! and [`check_codomain`] validates the result after it. Both turn failed
//! membership tests into [`ViolationRecord`]s; the domain check reports every
//! failing parameter at once rather than stopping at the first.

use crate::descriptor::{Descriptor, Membership};
use crate::foundation::{CheckOptions, ContractError, Result, Value, ViolationRecord};
use crate::signature::Signature;

/// Builds the record for a value that `descriptor` did not admit.
///
/// A refusal names the descriptor whose refinement failed. A plain mismatch
/// against a union lists every constituent, and one against a capability
/// descriptor notes the capabilities the value lacks.
fn violation_for(
    parameter: Option<&str>,
    descriptor: &Descriptor,
    value: &Value,
    membership: Membership,
    options: &CheckOptions,
) -> ViolationRecord {
    let parameter = parameter.map(str::to_owned);
    let expected = descriptor.display_name();
    let record = match membership {
        Membership::Refused { failed } => {
            ViolationRecord::refinement(parameter, value.clone(), expected, failed)
        }
        _ => {
            let record = ViolationRecord::mismatch(parameter, value.clone(), expected);
            let missing: Vec<&str> = descriptor
                .required_capabilities()
                .iter()
                .map(String::as_str)
                .filter(|name| !value.has_capability(name))
                .collect();
            match descriptor.as_union() {
                Some(constituents) => record
                    .with_expected_set(constituents.iter().map(Descriptor::display_name).collect())
                    .with_note(format!(
                        "none of the {} alternatives admits a {}",
                        constituents.len(),
                        value.type_name()
                    )),
                None if !missing.is_empty() => {
                    record.with_note(format!("missing capabilities: {}", missing.join(", ")))
                }
                None => record,
            }
        }
    };
    record.with_display_limit(options.max_value_display)
}

/// Validates `args` against the parameters of `signature`.
///
/// Arity is checked first. Then every argument is classified against its
/// parameter descriptor and all failures are collected into one
/// [`ContractError::DomainViolation`].
///
/// ```rust,ignore
/// let err = check_domain(&signature, &[Value::from(150), Value::from("ok")], &opts)
///     .unwrap_err();
/// assert_eq!(err.violations().len(), 2);
/// ```
pub fn check_domain(signature: &Signature, args: &[Value], options: &CheckOptions) -> Result<()> {
    if args.len() != signature.arity() {
        return Err(ContractError::ArityMismatch {
            function: signature.function().to_owned(),
            expected: signature.arity(),
            supplied: args.len(),
        });
    }

    let violations: Vec<ViolationRecord> = signature
        .parameters()
        .iter()
        .zip(args)
        .filter_map(|(parameter, arg)| {
            let descriptor = parameter.descriptor();
            match descriptor.classify(arg, options) {
                Membership::Member => None,
                failed => Some(violation_for(
                    Some(parameter.name()),
                    descriptor,
                    arg,
                    failed,
                    options,
                )),
            }
        })
        .collect();

    if violations.is_empty() {
        return Ok(());
    }
    tracing::debug!(
        function = %signature.function(),
        violations = violations.len(),
        "domain violation"
    );
    Err(ContractError::DomainViolation {
        function: signature.function().to_owned(),
        violations,
    })
}

/// Validates a call result against the codomain of `signature`.
///
/// An absent or `Any` codomain admits everything. A union codomain admits the
/// result when any constituent does; otherwise the record names the single
/// constituent that refused it, or lists every constituent.
pub fn check_codomain(signature: &Signature, result: &Value, options: &CheckOptions) -> Result<()> {
    let Some(codomain) = signature.codomain() else {
        return Ok(());
    };
    if codomain.is_any() {
        return Ok(());
    }
    match codomain.classify(result, options) {
        Membership::Member => Ok(()),
        failed => Err(ContractError::CodomainViolation {
            function: signature.function().to_owned(),
            violation: Box::new(violation_for(None, codomain, result, failed, options)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{capability, range, regex, union};
    use crate::foundation::{Kind, ViolationKind};
    use crate::signature::Parameter;
    use pretty_assertions::assert_eq;

    fn scoring() -> Signature {
        Signature::new(
            "score",
            vec![
                Parameter::new("points", range(0, 100).unwrap()),
                Parameter::new("label", regex("[A-Z]+").unwrap()),
            ],
            Some(Kind::Bool.into()),
        )
    }

    #[test]
    fn test_domain_collects_every_violation() {
        let err = check_domain(
            &scoring(),
            &[Value::Int(150), Value::str("ok")],
            &CheckOptions::default(),
        )
        .unwrap_err();

        let records = err.violations();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].parameter.as_deref(), Some("points"));
        assert_eq!(
            records[0].kind,
            ViolationKind::Refinement {
                failed: "Range(0, 100)".to_owned()
            }
        );
        assert_eq!(records[1].expected, "Regex(r'[A-Z]+')");
        assert_eq!(records[1].actual, "Str");
    }

    #[test]
    fn test_domain_accepts_members() {
        let ok = check_domain(
            &scoring(),
            &[Value::Int(50), Value::str("OK")],
            &CheckOptions::default(),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_mismatch_is_not_refinement() {
        let err = check_domain(
            &scoring(),
            &[Value::str("50"), Value::str("OK")],
            &CheckOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.violations()[0].kind, ViolationKind::Mismatch);
    }

    #[test]
    fn test_arity_checked_first() {
        let err = check_domain(&scoring(), &[Value::Int(1)], &CheckOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ContractError::ArityMismatch {
                expected: 2,
                supplied: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_codomain_union_lists_constituents() {
        let id = union([Kind::Int.into(), Kind::Str.into()]).unwrap();
        let signature = Signature::new("id", Vec::new(), Some(id));
        let err =
            check_codomain(&signature, &Value::Float(1.5), &CheckOptions::default()).unwrap_err();

        let record = &err.violations()[0];
        assert!(err.is_codomain());
        assert_eq!(record.expected, "Union(Int, Str)");
        assert_eq!(record.expected_set, vec!["Int".to_owned(), "Str".to_owned()]);
        assert_eq!(record.parameter, None);
        assert_eq!(
            record.note.as_deref(),
            Some("none of the 2 alternatives admits a Float")
        );
        assert!(err.to_string().contains("[note]: none of the 2 alternatives admits a Float"));
    }

    #[test]
    fn test_capability_mismatch_notes_missing_names() {
        let sized_hashable = capability(["__len__", "__hash__"]).unwrap();
        let signature = Signature::new("key", vec![Parameter::new("k", sized_hashable)], None);
        let err = check_domain(&signature, &[Value::list([1])], &CheckOptions::default())
            .unwrap_err();
        assert_eq!(
            err.violations()[0].note.as_deref(),
            Some("missing capabilities: hash")
        );
    }

    #[test]
    fn test_plain_mismatch_has_no_note() {
        let err = check_domain(
            &scoring(),
            &[Value::str("50"), Value::str("OK")],
            &CheckOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.violations()[0].note, None);
    }

    #[test]
    fn test_codomain_union_names_refusing_constituent() {
        let id = union([range(0, 9).unwrap().into(), Kind::Str.into()]).unwrap();
        let signature = Signature::new("digit", Vec::new(), Some(id));
        let err =
            check_codomain(&signature, &Value::Int(12), &CheckOptions::default()).unwrap_err();
        assert_eq!(
            err.violations()[0].kind,
            ViolationKind::Refinement {
                failed: "Range(0, 9)".to_owned()
            }
        );
    }

    #[test]
    fn test_codomain_skips_any_and_absent() {
        let opts = CheckOptions::default();
        let absent = Signature::new("f", Vec::new(), None);
        let any = Signature::new("g", Vec::new(), Some(Descriptor::any()));
        assert!(check_codomain(&absent, &Value::Nil, &opts).is_ok());
        assert!(check_codomain(&any, &Value::Nil, &opts).is_ok());
    }

    #[test]
    fn test_display_limit_applies() {
        let signature = Signature::new("f", vec![Parameter::new("s", Kind::Int)], None);
        let opts = CheckOptions::default().with_max_value_display(3);
        let err = check_domain(&signature, &[Value::str("abcdef")], &opts).unwrap_err();
        assert!(err.to_string().contains("[value]: 'abc...'"));
    }
}
