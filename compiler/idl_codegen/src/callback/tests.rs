use idl_ir::{Argument, IdlDatabase, Interface, Operation};
use idl_types::build_registry;
use pretty_assertions::assert_eq;

use super::*;
use crate::CodegenOptions;

fn param(name: &str, type_id: &str) -> ParamInfo {
    ParamInfo {
        name: name.to_owned(),
        type_id: Some(type_id.to_owned()),
        managed_type: type_id.to_owned(),
        default_value: None,
        is_optional: false,
        interface: "Geolocation".to_owned(),
    }
}

fn handler(name: &str, module: &str, arguments: Vec<Argument>) -> Interface {
    Interface::new(name)
        .with_annotation("WebKit", "module", module)
        .with_operation(Operation::new("handleEvent", "boolean", arguments))
}

fn graph() -> IdlDatabase {
    [
        handler(
            "PositionCallback",
            "html",
            vec![Argument::new("position", "Geoposition")],
        ),
        Interface::new("Geoposition").with_annotation("WebKit", "module", "html"),
        handler(
            "StringCallback",
            "core",
            vec![Argument::new("data", "DOMString")],
        ),
        handler(
            "ProgressHandler",
            "dom",
            vec![
                Argument::new("loaded", "long"),
                Argument::new("total", "double"),
                Argument::new("done", "boolean"),
            ],
        ),
        handler(
            "DatabaseCallback",
            "storage",
            vec![Argument::new("database", "Database")],
        ),
        Interface::new("Database").with_annotation("WebKit", "module", "storage"),
        handler(
            "DateCallback",
            "html",
            vec![Argument::new("when", "Date")],
        ),
        Interface::new("EmptyCallback"),
        handler("MysteryCallback", "atlantis", Vec::new()),
    ]
    .into_iter()
    .collect()
}

fn bind(type_id: &str) -> Result<String, CodegenError> {
    let registry = build_registry();
    let graph = graph();
    let options = CodegenOptions::default();
    let cx = CodegenContext::new(&registry, &graph, &options);
    bind_argument(&cx, "getCurrentPosition", &param("callback", type_id))
}

#[test]
fn non_handler_types_pass_by_name() {
    assert_eq!(bind("Node"), Ok("callback".to_owned()));
    assert_eq!(bind("DOMString"), Ok("callback".to_owned()));
}

#[test]
fn type_erased_parameters_pass_by_name() {
    let registry = build_registry();
    let graph = graph();
    let options = CodegenOptions::default();
    let cx = CodegenContext::new(&registry, &graph, &options);
    let mut erased = param("callback_OR_options", "PositionCallback");
    erased.type_id = None;
    assert_eq!(
        bind_argument(&cx, "watch", &erased),
        Ok("callback_OR_options".to_owned())
    );
}

#[test]
fn interface_arguments_use_qualified_signatures() {
    assert_eq!(
        bind("PositionCallback"),
        Ok("$entry(callback.@elemental.html.PositionCallback::onPositionCallback(\
            Lelemental/html/Geoposition;)).bind(callback)"
            .to_owned())
    );
}

#[test]
fn primitive_arguments_use_signature_table() {
    assert_eq!(
        bind("ProgressHandler"),
        Ok("$entry(callback.@elemental.dom.ProgressHandler::onProgressHandler(IDZ)).bind(callback)"
            .to_owned())
    );
    assert_eq!(
        bind("StringCallback"),
        Ok("$entry(callback.@elemental.dom.StringCallback::onStringCallback(\
            Ljava/lang/String;)).bind(callback)"
            .to_owned())
    );
}

#[test]
fn database_callback_collapses_database_variants() {
    assert_eq!(
        bind("DatabaseCallback"),
        Ok("$entry(callback.@elemental.html.DatabaseCallback::onDatabaseCallback(\
            Ljava/lang/Object;)).bind(callback)"
            .to_owned())
    );
}

#[test]
fn unknown_argument_type_is_a_hard_failure() {
    assert_eq!(
        bind("DateCallback"),
        Err(CodegenError::UnresolvableHandlerArgument {
            interface: "Geolocation".to_owned(),
            operation: "getCurrentPosition".to_owned(),
            handler: "DateCallback".to_owned(),
            argument_type: "Date".to_owned(),
        })
    );
}

#[test]
fn missing_handler_declarations() {
    let missing = |handler: &str| CodegenError::MissingHandlerDeclaration {
        handler: handler.to_owned(),
    };
    assert_eq!(bind("UndeclaredCallback"), Err(missing("UndeclaredCallback")));
    assert_eq!(bind("EmptyCallback"), Err(missing("EmptyCallback")));
}

#[test]
fn unknown_module_is_reported() {
    assert_eq!(
        bind("MysteryCallback"),
        Err(CodegenError::UnmappedModule {
            interface: "MysteryCallback".to_owned(),
            module: "atlantis".to_owned(),
        })
    );
}

#[test]
fn package_root_is_configurable() {
    let registry = build_registry();
    let graph = graph();
    let options = CodegenOptions::default().with_package_root("com.example.dom");
    let cx = CodegenContext::new(&registry, &graph, &options);
    assert_eq!(
        bind_argument(&cx, "getCurrentPosition", &param("cb", "PositionCallback")),
        Ok("$entry(cb.@com.example.dom.html.PositionCallback::onPositionCallback(\
            Lcom/example/dom/html/Geoposition;)).bind(cb)"
            .to_owned())
    );
}

#[test]
fn module_aliases() {
    assert_eq!("core".parse(), Ok(TargetModule::Dom));
    assert_eq!("webaudio".parse(), Ok(TargetModule::Html));
    assert_eq!("fileapi".parse(), Ok(TargetModule::Html));
    assert_eq!("svg".parse(), Ok(TargetModule::Svg));
    assert_eq!("atlantis".parse::<TargetModule>(), Err(()));
    for module in TargetModule::ALL {
        assert_eq!(module.as_str().parse(), Ok(*module));
    }
}

#[test]
fn unannotated_interfaces_belong_to_dom() {
    assert_eq!(TargetModule::of(&Interface::new("Node")), Ok(TargetModule::Dom));
}

#[test]
fn primitive_signature_table() {
    let table: Vec<&str> = PrimitiveSignature::ALL
        .iter()
        .map(|signature| signature.as_str())
        .collect();
    assert_eq!(
        table,
        vec![
            "I",
            "S",
            "F",
            "D",
            "B",
            "C",
            "J",
            "Z",
            "Ljava/lang/String;",
            "Ljava/lang/Object;",
        ]
    );
    assert_eq!(PrimitiveSignature::for_managed("Date"), None);
    assert_eq!(
        PrimitiveSignature::for_managed("boolean"),
        Some(PrimitiveSignature::Boolean)
    );
}
