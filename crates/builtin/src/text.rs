//! Text presets
//!
//! Single characters, e-mail addresses, environment variable names and
//! UUIDs. All are refinements of `Str`, so their null object is `""`.

use typeward_contract::combinators::{len, regex};
use typeward_contract::Kind;

preset! {
    /// Strings of exactly one character.
    pub fn char() = "Char", len(Kind::Str, 1);

    pub fn email() = "Email",
        regex(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Email pattern compiles");

    /// Upper-case environment variable names such as `HOME` or `RUST_LOG`.
    pub fn env() = "Env", regex(r"[A-Z0-9_]+").expect("Env pattern compiles");

    /// Hyphenated UUIDs of any version, either case.
    pub fn uuid() = "UUID",
        regex(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
            .expect("UUID pattern compiles");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use typeward_contract::Value;

    #[rstest]
    #[case("a", true)]
    #[case("é", true)]
    #[case("", false)]
    #[case("ab", false)]
    fn test_char(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(char().is_member(&Value::str(input)), expected);
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@mail.example.org", true)]
    #[case("user@example", false)]
    #[case("@example.com", false)]
    #[case("user example@x.io", false)]
    fn test_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(email().is_member(&Value::str(input)), expected);
    }

    #[test]
    fn test_env() {
        assert!(env().is_member(&Value::str("RUST_LOG")));
        assert!(!env().is_member(&Value::str("rust_log")));
        assert!(!env().is_member(&Value::str("")));
        assert!(!env().is_member(&Value::Int(1)));
    }

    #[test]
    fn test_uuid() {
        assert!(uuid().is_member(&Value::str("550e8400-e29b-41d4-a716-446655440000")));
        assert!(uuid().is_member(&Value::str("550E8400-E29B-41D4-A716-446655440000")));
        assert!(!uuid().is_member(&Value::str("550e8400e29b41d4a716446655440000")));
    }

    #[test]
    fn test_refusal_names_preset() {
        let membership = email().classify(&Value::str("nope"), &Default::default());
        assert_eq!(membership.failed(), Some("Email"));
    }
}
