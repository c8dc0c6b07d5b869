//! Plain-text rendering of generated bindings.
//!
//! One block per interface:
//!
//! ```text
//! interface IDBFactory [html] as webkitIDBFactory
//!   include "DartIDBRequest.h"
//!   op IDBRequest open(String name, int version)
//!     call name, version
//!     return DartIDBRequest::toDart(result)
//!   attr int length (read-only)
//! ```

use std::fmt::Write;

use idl_codegen::{InterfaceBindings, OperationBinding};

/// Render every interface's bindings, separated by blank lines.
pub fn render_report(bindings: &[InterfaceBindings]) -> String {
    let mut out = String::new();
    for (index, interface) in bindings.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_interface(&mut out, interface);
    }
    out
}

fn render_interface(out: &mut String, interface: &InterfaceBindings) {
    let _ = write!(out, "interface {} [{}]", interface.interface, interface.module);
    if interface.script_name != interface.interface {
        let _ = write!(out, " as {}", interface.script_name);
    }
    if interface.is_pure {
        out.push_str(" (mixin)");
    }
    out.push('\n');

    if let Some(element) = &interface.typed_array_element {
        let _ = writeln!(out, "  typed array of {element}");
    } else if let Some(element) = &interface.list_element {
        let _ = writeln!(out, "  list of {element}");
    }
    for include in &interface.includes {
        let _ = writeln!(out, "  include {include}");
    }

    if let Some(constructor) = &interface.constructor {
        let name = constructor.name.as_deref().unwrap_or(&interface.interface);
        let _ = write!(out, "  constructor {name}({})", constructor.params);
        if let Some(factory) = constructor.factory {
            let _ = write!(out, " via {factory}");
        }
        out.push('\n');
    }
    if let Some(handler) = &interface.handler {
        render_operation(out, "handler", handler);
    }
    for operation in &interface.operations {
        render_operation(out, "op", operation);
    }

    for attribute in &interface.attributes {
        let access = if attribute.setter.is_some() {
            "read-write"
        } else {
            "read-only"
        };
        let _ = writeln!(
            out,
            "  attr {} {} ({access})",
            attribute.managed_type, attribute.name
        );
    }
}

fn render_operation(out: &mut String, keyword: &str, operation: &OperationBinding) {
    let modifier = if operation.is_static { "static " } else { "" };
    let _ = writeln!(
        out,
        "  {keyword} {modifier}{} {}({})",
        operation.return_type, operation.name, operation.interface_params
    );
    if !operation.call_arguments.is_empty() {
        let _ = writeln!(out, "    call {}", operation.call_arguments);
    }
    if let Some(conversion) = &operation.return_conversion {
        let _ = writeln!(out, "    return {conversion}");
    }
}

#[cfg(test)]
mod tests;
