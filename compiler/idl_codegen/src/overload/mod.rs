//! Overload resolution.
//!
//! Collapses the overloads of one operation name into a single calling
//! convention, and reads constructors out of their annotations.
//!
//! # Algorithm
//!
//! Arguments are zipped by position across every overload. A shorter
//! overload contributes nothing at trailing positions, which makes those
//! positions optional:
//!
//! ```text
//! open(DOMString name)
//! open(DOMString name, long version)
//! open(DOMString name, long version, DOMString description)
//!
//! position 0   {name}          DOMString   required
//! position 1   {version}       long        optional (overload 1 omits it)
//! position 2   {description}   DOMString   optional
//! ```
//!
//! Names that differ across overloads are sorted, deduplicated and joined
//! with `_OR_`. A position keeps its managed type only if every overload
//! agrees on it, and keeps its IDL type id only if the ids agree too. Any
//! disagreement erases the id; a managed-type disagreement also widens the
//! type to `Dynamic`.
//!
//! The merge never validates optional/required ordering and never invents
//! default values. Ordering is enforced when the parameters are formatted.

use std::collections::BTreeSet;

use idl_ir::{names, Argument, FunctionValue, InterfaceDecl, Operation};
use idl_types::TypeRegistry;

use crate::operation::{OperationInfo, ParamInfo, DYNAMIC_TYPE};

/// Joins the candidate names of a merged position.
pub const NAME_SEPARATOR: &str = "_OR_";

/// Name of the dispatch operation of a callback interface.
pub const HANDLER_OPERATION: &str = "handleEvent";

/// Merge one position's arguments into a parameter.
///
/// `None` entries are overloads that supply no argument at this position.
pub fn merge_argument(
    registry: &TypeRegistry,
    interface: &str,
    arguments: &[Option<&Argument>],
) -> ParamInfo {
    let is_optional = arguments
        .iter()
        .any(|argument| argument.map_or(true, |argument| argument.is_optional));
    let present: Vec<&Argument> = arguments.iter().flatten().copied().collect();

    let names: BTreeSet<&str> = present.iter().map(|argument| argument.id.as_str()).collect();
    let type_ids: BTreeSet<&str> = present
        .iter()
        .map(|argument| argument.type_id.as_str())
        .collect();
    let managed_types: BTreeSet<String> = type_ids
        .iter()
        .map(|type_id| registry.managed_type(type_id))
        .collect();

    let mut managed_types = managed_types.into_iter();
    let (type_id, managed_type) = match (managed_types.next(), managed_types.next()) {
        (Some(managed), None) => {
            let shared_id = match type_ids.len() {
                1 => type_ids.first().map(|id| (*id).to_owned()),
                _ => None,
            };
            (shared_id, managed)
        }
        _ => (None, DYNAMIC_TYPE.to_owned()),
    };

    ParamInfo {
        name: names.into_iter().collect::<Vec<_>>().join(NAME_SEPARATOR),
        type_id,
        managed_type,
        default_value: None,
        is_optional,
        interface: interface.to_owned(),
    }
}

/// Merge the overloads of one operation name.
///
/// Returns `None` for an empty overload list.
#[tracing::instrument(level = "debug", skip_all, fields(interface = interface))]
pub fn merge_overloads(
    registry: &TypeRegistry,
    interface: &str,
    operations: &[&Operation],
) -> Option<OperationInfo> {
    let first = *operations.first()?;

    let arity = operations
        .iter()
        .map(|op| op.arguments.len())
        .max()
        .unwrap_or_default();
    let params: Vec<ParamInfo> = (0..arity)
        .map(|position| {
            let column: Vec<Option<&Argument>> = operations
                .iter()
                .map(|op| op.arguments.get(position))
                .collect();
            let param = merge_argument(registry, interface, &column);
            tracing::trace!(
                operation = first.id.as_str(),
                position,
                name = param.name.as_str(),
                managed_type = param.managed_type.as_str(),
                optional = param.is_optional,
                "merged parameter"
            );
            param
        })
        .collect();

    let is_static = first.is_static;
    if operations.iter().any(|op| op.is_static != is_static) {
        tracing::warn!(
            interface,
            operation = first.id.as_str(),
            "overloads disagree on static; using the first overload"
        );
    }

    let name = first
        .ext_attrs
        .value(names::RENAME)
        .unwrap_or(first.id.as_str())
        .to_owned();

    Some(OperationInfo {
        interface: interface.to_owned(),
        declared_name: Some(first.id.clone()),
        name: Some(name),
        script_name: Some(first.id.clone()),
        type_name: registry.managed_type(&first.type_id),
        params,
        arguments: first.arguments.clone(),
        overloads: Some(operations.iter().map(|op| (*op).clone()).collect()),
        is_static,
    })
}

/// Resolve an interface's constructor, if it declares one.
///
/// `[Constructor]` yields an anonymous constructor without arguments,
/// `[Constructor(args)]` one with arguments, and `[NamedConstructor=N(args)]`
/// a constructor exposed as `N`. `Constructor` wins when both are present.
pub fn analyze_constructor<I: InterfaceDecl + ?Sized>(
    registry: &TypeRegistry,
    interface: &I,
) -> Option<OperationInfo> {
    let ext_attrs = interface.ext_attrs();
    let (name, arguments) = if ext_attrs.contains(names::CONSTRUCTOR) {
        let arguments = ext_attrs
            .function(names::CONSTRUCTOR)
            .map(|function| function.arguments.clone())
            .unwrap_or_default();
        (None, arguments)
    } else {
        let FunctionValue { id, arguments } = ext_attrs.function(names::NAMED_CONSTRUCTOR)?;
        (id.clone(), arguments.clone())
    };

    let params = arguments
        .iter()
        .map(|argument| merge_argument(registry, interface.name(), &[Some(argument)]))
        .collect();

    Some(OperationInfo {
        interface: interface.name().to_owned(),
        declared_name: name.clone(),
        name: name.clone(),
        script_name: name,
        type_name: interface.name().to_owned(),
        params,
        arguments,
        overloads: None,
        is_static: false,
    })
}

/// The dispatch operation of an interface that looks like a callback.
///
/// The interface must carry the `Callback` marker and declare nothing but
/// `handleEvent` overloads.
pub fn recognize_callback<I: InterfaceDecl + ?Sized>(
    registry: &TypeRegistry,
    interface: &I,
) -> Option<OperationInfo> {
    if !interface.ext_attrs().contains(names::CALLBACK) {
        return None;
    }
    let operations = interface.operations();
    if operations.is_empty() || operations.iter().any(|op| op.id != HANDLER_OPERATION) {
        return None;
    }
    let handlers: Vec<&Operation> = operations.iter().collect();
    merge_overloads(registry, interface.name(), &handlers)
}
