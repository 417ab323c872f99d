//! Filesystem presets
//!
//! Paths are carried as `Str`. The refinements query the filesystem at
//! membership time, so the same value can pass one call and fail the next.

use std::path::Path;

use typeward_contract::combinators::filter;
use typeward_contract::{Kind, Value};

fn path_where(test: fn(&Path) -> bool) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
    move |value| value.as_str().is_some_and(|text| test(Path::new(text)))
}

fn is_symlink(path: &Path) -> bool {
    path.symlink_metadata()
        .is_ok_and(|meta| meta.file_type().is_symlink())
}

preset! {
    /// Non-empty path strings. Nothing is checked on disk.
    pub fn path() = "Path", filter(Kind::Str, |value: &Value| value.length().is_some_and(|n| n > 0));

    /// Paths that exist. Broken symlinks do not count.
    pub fn exists() = "Exists", filter(path(), path_where(Path::exists));

    pub fn file() = "File", filter(path(), path_where(Path::is_file));

    pub fn dir() = "Dir", filter(path(), path_where(Path::is_dir));

    /// Symbolic links, whether or not their target exists.
    pub fn symlink() = "Symlink", filter(path(), path_where(is_symlink));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use typeward_contract::null_of;

    #[test]
    fn test_path_is_a_non_empty_string() {
        assert!(path().is_member(&Value::str("relative/missing")));
        assert!(!path().is_member(&Value::str("")));
        assert!(!path().is_member(&Value::Int(1)));
    }

    #[test]
    fn test_missing_path() {
        let missing = Value::str("/definitely/not/here/typeward");
        assert!(!exists().is_member(&missing));
        assert!(!file().is_member(&missing));
        assert!(!dir().is_member(&missing));
        assert!(!symlink().is_member(&missing));
    }

    #[test]
    fn test_null_is_empty_string() {
        assert_eq!(null_of(&dir()), Value::str(""));
    }
}
