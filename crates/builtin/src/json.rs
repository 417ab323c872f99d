//! JSON-shaped presets
//!
//! `Json` admits the container shapes a decoded document can take. `Table`
//! narrows it to a list of objects sharing one key set and `Flat` to an
//! object whose keys are all dotted [`entry`] paths.

use std::collections::BTreeSet;

use typeward_contract::combinators::{dict_keyed, filter, regex};
use typeward_contract::{Descriptor, Kind, Value};

/// `true` for a list of dicts that all have the same keys.
fn is_table(value: &Value) -> bool {
    let Value::List(rows) = value else {
        return false;
    };
    let mut key_sets = rows.iter().map(|row| {
        row.as_dict()
            .map(|entries| entries.keys().map(Value::to_string).collect::<BTreeSet<_>>())
    });
    match key_sets.next() {
        None => true,
        Some(None) => false,
        Some(Some(first)) => key_sets.all(|keys| keys.as_ref() == Some(&first)),
    }
}

fn is_flat(value: &Value) -> bool {
    let entry = entry();
    value
        .as_dict()
        .is_some_and(|entries| entries.keys().all(|key| entry.is_member(key)))
}

preset! {
    /// Dicts with text keys, sets, or lists.
    pub fn json() = "Json",
        dict_keyed(Kind::Str, [Descriptor::any()]).or(Kind::Set).or(Kind::List);

    /// Lists of dicts sharing one key set.
    pub fn table() = "Table", filter(json(), is_table);

    /// Dotted key paths such as `server.port`.
    pub fn entry() = "Entry", regex(r"[a-zA-Z0-9_.]+").expect("Entry pattern compiles");

    pub fn flat() = "Flat", filter(dict_keyed(Kind::Str, [Descriptor::any()]), is_flat);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use typeward_contract::null_of;

    #[test]
    fn test_json() {
        assert!(json().is_member(&Value::dict([("a", 1)])));
        assert!(json().is_member(&Value::list([1, 2])));
        assert!(json().is_member(&Value::set(["x"])));
        assert!(!json().is_member(&Value::dict([(1, 1)])));
        assert!(!json().is_member(&Value::str("{}")));
        assert_eq!(null_of(&json()), Value::dict([("", Value::Nil)]));
        assert_eq!(json().canonical_name(), "Union(Dict(Str, Any), Set, List)");
    }

    #[test]
    fn test_table() {
        let rows = Value::list([
            Value::dict([("id", 1), ("score", 10)]),
            Value::dict([("score", 7), ("id", 2)]),
        ]);
        assert!(table().is_member(&rows));
        assert!(table().is_member(&Value::List(Vec::new())));

        let ragged = Value::list([Value::dict([("id", 1)]), Value::dict([("name", "x")])]);
        assert!(!table().is_member(&ragged));
        assert!(!table().is_member(&Value::list([1, 2])));
        assert!(!table().is_member(&Value::dict([("id", 1)])));
    }

    #[test]
    fn test_flat() {
        assert!(flat().is_member(&Value::dict([("server.port", 8080), ("debug", 0)])));
        assert!(!flat().is_member(&Value::dict([("server port", 8080)])));
        assert!(!flat().is_member(&Value::list([1])));
        assert_eq!(
            flat().classify(&Value::dict([("a b", 1)]), &Default::default()).failed(),
            Some("Flat")
        );
    }
}
