use std::collections::BTreeSet;

use idl_codegen::{AttributeBinding, ConstructorBinding, TargetModule};
use pretty_assertions::assert_eq;

use super::*;

fn operation(name: &str, params: &str, call: &str) -> OperationBinding {
    OperationBinding {
        name: name.to_owned(),
        script_name: name.to_owned(),
        is_static: false,
        return_type: "void".to_owned(),
        interface_params: params.to_owned(),
        implementation_params: params.to_owned(),
        overlay_params: params.to_owned(),
        call_arguments: call.to_owned(),
        native_conversions: Vec::new(),
        return_conversion: None,
    }
}

fn interface(name: &str) -> InterfaceBindings {
    InterfaceBindings {
        interface: name.to_owned(),
        module: TargetModule::Dom,
        script_name: name.to_owned(),
        is_pure: false,
        handler: None,
        list_element: None,
        typed_array_element: None,
        constructor: None,
        operations: Vec::new(),
        attributes: Vec::new(),
        includes: BTreeSet::new(),
    }
}

#[test]
fn renders_operations_and_attributes() {
    let mut node = interface("Node");
    node.includes.insert("\"Node.h\"".to_owned());
    node.operations.push(operation("appendChild", "Node child", "child"));
    node.operations.push(operation("normalize", "", ""));
    node.attributes.push(AttributeBinding {
        name: "nodeName".to_owned(),
        managed_type: "String".to_owned(),
        accessors: None,
        getter: "DartUtilities::stringToDart(result)".to_owned(),
        setter: None,
    });

    assert_eq!(
        render_report(&[node]),
        "interface Node [dom]\n\
         \x20 include \"Node.h\"\n\
         \x20 op void appendChild(Node child)\n\
         \x20   call child\n\
         \x20 op void normalize()\n\
         \x20 attr String nodeName (read-only)\n"
    );
}

#[test]
fn renders_script_name_and_constructor() {
    let mut array = interface("Float32Array");
    array.module = TargetModule::Html;
    array.script_name = "webkitFloat32Array".to_owned();
    array.list_element = Some("float".to_owned());
    array.typed_array_element = Some("float".to_owned());
    array.constructor = Some(ConstructorBinding {
        name: None,
        params: "int length".to_owned(),
        call_arguments: "length".to_owned(),
        factory: Some("_TypedArrayFactoryProvider"),
        native_conversions: Vec::new(),
    });

    assert_eq!(
        render_report(&[array, interface("Node")]),
        "interface Float32Array [html] as webkitFloat32Array\n\
         \x20 typed array of float\n\
         \x20 constructor Float32Array(int length) via _TypedArrayFactoryProvider\n\
         \n\
         interface Node [dom]\n"
    );
}

#[test]
fn empty_report() {
    assert_eq!(render_report(&[]), "");
}
