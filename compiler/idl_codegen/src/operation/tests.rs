use super::*;
use pretty_assertions::assert_eq;

fn param(name: &str, managed_type: &str, is_optional: bool) -> ParamInfo {
    ParamInfo {
        name: name.to_owned(),
        type_id: Some(managed_type.to_owned()),
        managed_type: managed_type.to_owned(),
        default_value: None,
        is_optional,
        interface: "IDBFactory".to_owned(),
    }
}

fn open() -> OperationInfo {
    OperationInfo {
        interface: "IDBFactory".to_owned(),
        declared_name: Some("open".to_owned()),
        name: Some("openDatabase".to_owned()),
        script_name: Some("open".to_owned()),
        type_name: "IDBRequest".to_owned(),
        params: vec![
            param("name", "String", false),
            param("version", "int", true),
            param("description", "String", true),
        ],
        arguments: Vec::new(),
        overloads: Some(vec![Operation::new("open", "IDBRequest", Vec::new())]),
        is_static: false,
    }
}

#[test]
fn display_name_prefers_exposed_name() {
    let info = open();
    assert_eq!(info.display_name(), "openDatabase");
    assert!(!info.is_constructor());
    assert_eq!(info.return_type_id(), Some("IDBRequest"));
    assert_eq!(info.overload_decls().len(), 1);
}

#[test]
fn anonymous_constructor_displays_type() {
    let info = OperationInfo {
        declared_name: None,
        name: None,
        script_name: None,
        type_name: "XMLHttpRequest".to_owned(),
        overloads: None,
        ..open()
    };
    assert!(info.is_constructor());
    assert_eq!(info.display_name(), "XMLHttpRequest");
    assert_eq!(info.return_type_id(), None);
    assert!(info.overload_decls().is_empty());
}

#[test]
fn with_default_targets_named_parameter() {
    let info = open().with_default("version", "1").with_default("missing", "0");
    assert_eq!(
        info.param("version").and_then(|p| p.default_value.as_deref()),
        Some("1")
    );
    assert_eq!(info.param("name").and_then(|p| p.default_value.as_deref()), None);
}

#[test]
fn required_count_stops_at_first_optional() {
    assert_eq!(open().required_count(), 1);
}

#[test]
fn dynamic_parameters() {
    let mut erased = param("x", DYNAMIC_TYPE, false);
    erased.type_id = None;
    assert!(erased.is_dynamic());
    assert!(!param("x", "int", false).is_dynamic());
}
