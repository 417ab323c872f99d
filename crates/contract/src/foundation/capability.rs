//! Structural capabilities
//!
//! A capability is a named operation a value supports, independent of its
//! nominal type. Names are normalized so that host-style dunder spellings
//! (`__len__`) and bare names (`len`) are interchangeable.

use crate::foundation::value::Value;

// ============================================================================
// NAMES
// ============================================================================

pub const CALL: &str = "call";
pub const ITER: &str = "iter";
pub const NEXT: &str = "next";
pub const LEN: &str = "len";
pub const CONTAINS: &str = "contains";
pub const GETITEM: &str = "getitem";
pub const HASH: &str = "hash";
pub const AWAIT: &str = "await";
pub const AITER: &str = "aiter";
pub const ANEXT: &str = "anext";
pub const ENTER: &str = "enter";
pub const EXIT: &str = "exit";
pub const AENTER: &str = "aenter";
pub const AEXIT: &str = "aexit";

const SCALAR: &[&str] = &[HASH];
const STR: &[&str] = &[ITER, LEN, CONTAINS, GETITEM, HASH];
const LIST: &[&str] = &[ITER, LEN, CONTAINS, GETITEM];
const TUPLE: &[&str] = &[ITER, LEN, CONTAINS, GETITEM, HASH];
const SET: &[&str] = &[ITER, LEN, CONTAINS];
const DICT: &[&str] = &[ITER, LEN, CONTAINS, GETITEM];
const FUNC: &[&str] = &[CALL, HASH];

/// Strips surrounding underscores: `"__len__"` becomes `"len"`.
pub fn normalize(name: &str) -> &str {
    name.trim_matches('_')
}

/// Capabilities of a built-in value. Objects answer for themselves.
pub fn builtin(value: &Value) -> &'static [&'static str] {
    match value {
        Value::Nil | Value::Bool(_) | Value::Int(_) | Value::Float(_) => SCALAR,
        Value::Str(_) => STR,
        Value::List(_) => LIST,
        Value::Tuple(_) => TUPLE,
        Value::Set(_) => SET,
        Value::Dict(_) => DICT,
        Value::Func(_) => FUNC,
        Value::Object(_) => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("__len__"), "len");
        assert_eq!(normalize("len"), "len");
    }

    #[test]
    fn test_builtin_table() {
        assert!(Value::str("ab").has_capability("__getitem__"));
        assert!(Value::list([1]).has_capability(LEN));
        assert!(!Value::list([1]).has_capability(HASH));
        assert!(Value::tuple([1]).has_capability(HASH));
        assert!(!Value::set([1]).has_capability(GETITEM));
        assert!(!Value::Int(1).has_capability(CALL));
    }
}
