//! Presets used at call boundaries and against a real filesystem.

use pretty_assertions::assert_eq;
use typeward_builtin::{color, json, numeric, path, text};
use typeward_contract::prelude::*;

#[test]
fn presets_label_violations() {
    let paint = Function::new("paint", |_| Ok(Value::Nil))
        .param("color", color::rgb())
        .param("layer", numeric::nat())
        .returns(Kind::Nil);
    let checked = wrap(paint).unwrap();

    assert!(checked.call(&[Value::tuple([255, 0, 0]), Value::from(2)]).is_ok());

    let err = checked
        .call(&[Value::tuple([300, 0, 0]), Value::from(-1)])
        .unwrap_err();
    let records = err.violations();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].expected, "RGB");
    assert_eq!(records[1].expected, "Nat");
    assert_eq!(
        records[1].kind,
        ViolationKind::Refinement {
            failed: "Nat".to_owned()
        }
    );
}

#[test]
fn presets_compose_with_factories() {
    let contacts = list_of([text::email()]);
    assert!(contacts.is_member(&Value::list(["a@b.io", "c@d.org"])));
    assert!(!contacts.is_member(&Value::list(["a@b.io", "nope"])));

    let setting = union([json::flat().into(), text::env().into()]).unwrap();
    assert_eq!(setting.display_name(), "Union(Flat, Env)");
    assert!(setting.is_member(&Value::str("RUST_LOG")));
}

#[test]
fn filesystem_presets_follow_the_disk() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("notes.txt");
    std::fs::write(&file_path, "hello").unwrap();

    let dir_value = Value::str(dir.path().to_string_lossy());
    let file_value = Value::str(file_path.to_string_lossy());

    assert!(path::exists().is_member(&dir_value));
    assert!(path::dir().is_member(&dir_value));
    assert!(!path::file().is_member(&dir_value));

    assert!(path::file().is_member(&file_value));
    assert!(!path::dir().is_member(&file_value));
    assert!(!path::symlink().is_member(&file_value));

    std::fs::remove_file(&file_path).unwrap();
    assert!(!path::exists().is_member(&file_value));
}

#[cfg(unix)]
#[test]
fn symlink_preset_sees_dangling_links() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target");
    let link = dir.path().join("link");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let link_value = Value::str(link.to_string_lossy());
    assert!(path::symlink().is_member(&link_value));
    assert!(!path::exists().is_member(&link_value));
}
