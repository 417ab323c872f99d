//! End-to-end wrapping scenarios.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use rstest::rstest;
use typeward_contract::function;
use typeward_contract::prelude::*;

fn score() -> TypedFn {
    wrap(function!(score(points: range(0, 100).unwrap(), label: regex("[A-Z]+").unwrap()) -> Kind::Bool; |args| {
        Ok(Value::Bool(args[0].as_int().unwrap_or(0) >= 50))
    }))
    .unwrap()
}

#[test]
fn domain_violation_lists_every_failing_argument() {
    let err = score().call(&[Value::from(150), Value::from("ok")]).unwrap_err();
    assert!(err.is_domain());

    let records = err.violations();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].parameter.as_deref(), Some("points"));
    assert_eq!(
        records[0].kind,
        ViolationKind::Refinement {
            failed: "Range(0, 100)".to_owned()
        }
    );
    assert_eq!(records[1].parameter.as_deref(), Some("label"));
    assert_eq!(records[1].actual, "Str");

    let message = err.to_string();
    assert!(message.starts_with("domain mismatch in func 'score':"));
    assert!(message.contains("'points': additional check failed"));
    assert!(message.contains("'label': additional check failed"));
}

#[test]
fn valid_call_checks_result() {
    assert_eq!(
        score().call(&[Value::from(50), Value::from("OK")]).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn product_null_is_tuple_of_nulls() {
    let row = product([Kind::Int.into(), Kind::Str.into(), Kind::Bool.into()]).unwrap();
    assert_eq!(
        null_of(&row),
        Value::tuple([Value::from(0), Value::from(""), Value::from(false)])
    );
}

#[test]
fn dict_null_has_one_placeholder_entry() {
    let counts = dict_keyed(Kind::Str, [Kind::Int]);
    assert_eq!(null_of(&counts), Value::dict([("", 0)]));
    assert!(is_null_of_type(&Value::dict([("", 0)]), &counts));
}

#[test]
fn union_codomain_names_expected_set() {
    let id = union([Kind::Int.into(), Kind::Str.into()]).unwrap();
    let f = Function::new("fetch", |_| Ok(Value::Float(1.5))).returns(id);
    let err = wrap(f).unwrap().call(&[]).unwrap_err();

    assert!(err.is_codomain());
    let record = &err.violations()[0];
    assert_eq!(record.parameter, None);
    assert_eq!(record.expected_set, vec!["Int".to_owned(), "Str".to_owned()]);
    assert_eq!(record.actual, "Float");
    assert!(err.to_string().contains("[expected_any_of]: Int, Str"));
}

#[test]
fn errors_serialize_to_json() {
    let err = score().call(&[Value::from(150), Value::from("OK")]).unwrap_err();
    let json = err.to_json_value();
    assert_eq!(json["code"], "domain_violation");
    assert_eq!(json["function"], "score");
    assert_eq!(json["violations"][0]["parameter"], "points");
    assert_eq!(json["violations"][0]["kind"], "refinement");
    assert_eq!(json["violations"][0]["failed"], "Range(0, 100)");
}

#[test]
fn unannotated_function_is_rejected_at_wrap_time() {
    let f = Function::new("loose", |_| Ok(Value::Nil)).untyped_param("x");
    let err = wrap(f).unwrap_err();
    assert_eq!(
        err.to_string(),
        "func 'loose' is missing annotations for: 'x', return value"
    );
}

#[test]
fn composed_function_checks_inner_domain_and_outer_codomain() {
    let words = wrap(function!(words(s: Kind::Str) -> list_of([Kind::Str]); |args| {
        let text = args[0].as_str().unwrap_or_default();
        Ok(Value::list(text.split_whitespace()))
    }))
    .unwrap();
    let count = wrap(function!(count(items: list_of([Kind::Str])) -> Kind::Int; |args| {
        Ok(Value::Int(args[0].length().unwrap_or(0) as i64))
    }))
    .unwrap();

    let composed = count.compose(&words).unwrap();
    assert_eq!(composed.name(), "(count * words)");
    assert_eq!(composed.call(&[Value::from("a b c")]).unwrap(), Value::Int(3));
    assert!(composed.call(&[Value::from(3)]).unwrap_err().is_domain());
}

#[test]
fn domain_only_wrapping_skips_result() {
    let f = Function::new("log", |_| Ok(Value::from("written"))).param("line", Kind::Str);
    let checked = wrap_with(f, CheckMode::DomainOnly, CheckOptions::default()).unwrap();
    assert_eq!(checked.call(&[Value::from("hi")]).unwrap(), Value::from("written"));
    assert!(checked.call(&[Value::Nil]).unwrap_err().is_domain());
}

#[derive(Debug)]
struct DiskFull;

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("disk full")
    }
}

impl std::error::Error for DiskFull {}

#[test]
fn callee_errors_pass_through() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let f = Function::new("save", move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
        Err(DiskFull.into())
    })
    .param("path", Kind::Str)
    .returns(Kind::Nil);
    let checked = wrap(f).unwrap();

    assert!(checked.call(&[Value::from(1)]).unwrap_err().is_domain());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let err = checked.call(&[Value::from("/tmp/x")]).unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(err.code(), "callee");
    assert_eq!(err.to_string(), "disk full");
    assert!(err.callee().is_some_and(|e| e.is::<DiskFull>()));
}

#[rstest]
#[case(Kind::Int, Value::Int(1), true)]
#[case(Kind::Int, Value::Bool(true), false)]
#[case(Kind::Int, Value::Float(1.0), false)]
#[case(Kind::Float, Value::Float(1.0), true)]
#[case(Kind::Str, Value::str("x"), true)]
#[case(Kind::Bool, Value::Bool(false), true)]
#[case(Kind::Nil, Value::Nil, true)]
#[case(Kind::List, Value::list([1, 2]), true)]
#[case(Kind::Tuple, Value::list([1, 2]), false)]
#[case(Kind::Dict, Value::dict([("a", 1)]), true)]
fn nominal_membership(#[case] kind: Kind, #[case] value: Value, #[case] expected: bool) {
    assert_eq!(Descriptor::from(kind).is_member(&value), expected);
}

#[derive(Debug)]
struct Pet {
    class: Arc<Class>,
}

impl Object for Pet {
    fn class(&self) -> &Arc<Class> {
        &self.class
    }
}

#[test]
fn class_membership_respects_subclass_option() {
    let animal = Class::new("Animal").build();
    let cat = Class::new("Cat").extends(&animal).build();
    let tom = Value::object(Pet {
        class: Arc::clone(&cat),
    });

    let wants_animal = Descriptor::from(&animal);
    assert!(wants_animal.is_member(&tom));
    assert!(!wants_animal.is_member_with(&tom, &CheckOptions::strict()));

    let not_cat = compl(&animal, [&cat]).unwrap();
    assert!(!not_cat.is_member(&tom));
    assert_eq!(tom.type_name(), "Cat");
}
