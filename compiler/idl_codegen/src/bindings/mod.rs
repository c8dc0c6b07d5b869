//! Per-interface binding generation.
//!
//! # Architecture
//!
//! ```text
//! InterfaceDecl
//!     ├── TargetModule::of()          module (unmapped → whole interface fails)
//!     ├── analyze_constructor()       ConstructorBinding
//!     ├── recognize_callback()        handler (its group is not repeated below)
//!     ├── group operations by name    (first-appearance order)
//!     │     └── merge_overloads()
//!     │           ├── three parameter views   (validates calling convention)
//!     │           ├── argument_expressions()  (binds handler parameters)
//!     │           ├── native conversions      (typed parameters)
//!     │           └── managed conversion      (return value)
//!     └── attributes                  getter + setter conversions
//!           ↓
//! BindingsResult { bindings, diagnostics }
//! ```
//!
//! A failing operation is dropped and reported; its siblings are still
//! generated. Only an unmapped module fails the whole interface.

use std::collections::BTreeSet;

use idl_diagnostic::Diagnostic;
use idl_ir::{Argument, Attribute, DeclarationGraph, ExtAttrs, InterfaceDecl, Operation};
use idl_types::{Accessors, NativeConversion, NativeConversionContext, TypeDescriptor};
use rustc_hash::FxHashMap;

use crate::callback::TargetModule;
use crate::naming::{
    attribute_name, attribute_output_order, factory_provider, is_pure_interface,
    list_element_type, overlay_type_name, typed_array_element_type,
};
use crate::operation::OperationInfo;
use crate::overload::{
    analyze_constructor, merge_overloads, recognize_callback, HANDLER_OPERATION,
};
use crate::{CodegenContext, CodegenError};

/// IDL return type that needs no conversion.
const VOID: &str = "void";

/// Local holding a native call's result.
const RESULT: &str = "result";

/// Local holding an attribute setter's incoming value.
const SETTER_VALUE: &str = "value";

/// Generated bindings for one operation name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OperationBinding {
    /// Exposed name.
    pub name: String,
    /// Name the script runtime dispatches on.
    pub script_name: String,
    pub is_static: bool,
    /// Managed return type.
    pub return_type: String,
    pub interface_params: String,
    pub implementation_params: String,
    /// Implementation parameters with script-overlay type names.
    pub overlay_params: String,
    pub call_arguments: String,
    /// Native conversions of the typed parameters, in parameter order.
    pub native_conversions: Vec<NativeConversion>,
    /// Managed conversion of the result; absent for `void`.
    pub return_conversion: Option<String>,
}

/// Generated bindings for a constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstructorBinding {
    /// Exposed name of a named constructor.
    pub name: Option<String>,
    pub params: String,
    pub call_arguments: String,
    /// Provider the constructor delegates to, for typed arrays.
    pub factory: Option<&'static str>,
    pub native_conversions: Vec<NativeConversion>,
}

/// Generated bindings for one attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeBinding {
    /// Exposed name.
    pub name: String,
    pub managed_type: String,
    /// Reflected-attribute accessors, for primitive types.
    pub accessors: Option<Accessors>,
    /// Managed conversion of the getter's result.
    pub getter: String,
    /// Native conversion of the setter's value; absent when read-only.
    pub setter: Option<NativeConversion>,
}

/// Everything generated for one interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterfaceBindings {
    pub interface: String,
    pub module: TargetModule,
    /// Name the script runtime binds the interface to.
    pub script_name: String,
    pub is_pure: bool,
    /// Dispatch operation, when the interface is a callback.
    pub handler: Option<OperationBinding>,
    /// `T` when the interface extends `sequence<T>`.
    pub list_element: Option<String>,
    /// `T` when the interface is a typed array over `T`.
    pub typed_array_element: Option<String>,
    pub constructor: Option<ConstructorBinding>,
    pub operations: Vec<OperationBinding>,
    pub attributes: Vec<AttributeBinding>,
    /// Native and conversion headers, deduplicated and sorted.
    pub includes: BTreeSet<String>,
}

/// Result of generating one interface.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BindingsResult {
    /// Absent when the interface as a whole could not be generated.
    pub bindings: Option<InterfaceBindings>,
    pub diagnostics: Vec<Diagnostic>,
    /// Operations (and attributes) dropped because of errors.
    pub failed: usize,
}

impl BindingsResult {
    pub fn has_errors(&self) -> bool {
        self.failed > 0 || self.bindings.is_none()
    }
}

/// Generate bindings for one interface.
#[tracing::instrument(level = "debug", skip_all, fields(interface = interface.name()))]
pub fn generate_interface<G: DeclarationGraph, I: InterfaceDecl + ?Sized>(
    cx: &CodegenContext<'_, G>,
    interface: &I,
) -> BindingsResult {
    let name = interface.name();
    let module = match TargetModule::of(interface) {
        Ok(module) => module,
        Err(error) => {
            tracing::warn!(interface = name, %error, "interface skipped");
            return BindingsResult {
                bindings: None,
                diagnostics: vec![error.to_diagnostic(name, None)],
                failed: 0,
            };
        }
    };

    let mut generator = InterfaceGenerator {
        cx,
        interface: name,
        includes: BTreeSet::new(),
        diagnostics: Vec::new(),
        failed: 0,
    };

    let constructor = analyze_constructor(cx.registry, interface)
        .and_then(|info| generator.constructor(&info));

    let callback = recognize_callback(cx.registry, interface);
    let is_callback = callback.is_some();
    let handler = callback.and_then(|info| generator.operation(&info));

    let mut operations = Vec::new();
    for group in group_by_name(interface.operations()) {
        // Already generated as the handler.
        if is_callback && group[0].id == HANDLER_OPERATION {
            continue;
        }
        let Some(info) = merge_overloads(cx.registry, name, &group) else {
            continue;
        };
        if let Some(binding) = generator.operation(&info) {
            operations.push(binding);
        }
    }

    let mut declared: Vec<&Attribute> = interface.attributes().iter().collect();
    declared.sort_by(|a, b| attribute_output_order(a, b));
    let attributes: Vec<AttributeBinding> = declared
        .into_iter()
        .map(|attribute| generator.attribute(attribute))
        .collect();

    let InterfaceGenerator {
        includes,
        diagnostics,
        failed,
        ..
    } = generator;
    tracing::debug!(
        operations = operations.len(),
        failed,
        includes = includes.len(),
        "interface generated"
    );

    BindingsResult {
        bindings: Some(InterfaceBindings {
            interface: name.to_owned(),
            module,
            script_name: cx.registry.script_type(name),
            is_pure: is_pure_interface(name),
            handler,
            list_element: list_element_type(interface).map(str::to_owned),
            typed_array_element: typed_array_element_type(interface).map(str::to_owned),
            constructor,
            operations,
            attributes,
            includes,
        }),
        diagnostics,
        failed,
    }
}

/// Group overloads by name, keeping first-appearance order.
fn group_by_name(operations: &[Operation]) -> Vec<Vec<&Operation>> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<&Operation>> = Vec::new();
    for op in operations {
        match index.get(op.id.as_str()) {
            Some(&slot) => groups[slot].push(op),
            None => {
                index.insert(op.id.as_str(), groups.len());
                groups.push(vec![op]);
            }
        }
    }
    groups
}

/// Native-argument expression for a parameter position.
fn native_argument(index: usize) -> String {
    format!("Dart_GetNativeArgument(args, {index})")
}

struct InterfaceGenerator<'cx, 'a, G: DeclarationGraph> {
    cx: &'cx CodegenContext<'a, G>,
    interface: &'cx str,
    includes: BTreeSet<String>,
    diagnostics: Vec<Diagnostic>,
    failed: usize,
}

impl<G: DeclarationGraph> InterfaceGenerator<'_, '_, G> {
    fn report(&mut self, operation: &str, error: &CodegenError) {
        tracing::warn!(
            interface = self.interface,
            operation,
            %error,
            "operation dropped"
        );
        self.diagnostics
            .push(error.to_diagnostic(self.interface, Some(operation)));
        self.failed += 1;
    }

    /// Record the headers a descriptor's conversion code needs.
    fn track(&mut self, desc: &TypeDescriptor) {
        self.includes.extend(desc.conversion_includes());
        if !desc.is_primitive() {
            self.includes.extend(desc.native_includes());
        }
    }

    fn operation(&mut self, info: &OperationInfo) -> Option<OperationBinding> {
        match self.try_operation(info) {
            Ok(binding) => Some(binding),
            Err(error) => {
                self.report(info.display_name(), &error);
                None
            }
        }
    }

    fn try_operation(&mut self, info: &OperationInfo) -> Result<OperationBinding, CodegenError> {
        let interface_params = info.parameters_interface_declaration()?;
        let implementation_params = info.parameters_implementation_declaration()?;
        let overlay_params = info.parameters_implementation_declaration_with(|managed| {
            overlay_type_name(managed, &[])
        })?;
        let call_arguments = info.parameters_as_argument_list(self.cx)?;

        let first_native = usize::from(!info.is_static);
        let native_conversions = self.native_conversions(info, first_native);

        let return_conversion = match info.return_type_id() {
            Some(VOID) | None => None,
            Some(return_type) => {
                let desc = self.cx.registry.resolve(return_type);
                self.track(&desc);
                let attrs = info.overload_decls().first().map(|op| &op.ext_attrs);
                Some(desc.emit_managed_conversion(RESULT, self.interface, attrs))
            }
        };

        Ok(OperationBinding {
            name: info.display_name().to_owned(),
            script_name: info
                .script_name
                .clone()
                .unwrap_or_else(|| info.display_name().to_owned()),
            is_static: info.is_static,
            return_type: info.type_name.clone(),
            interface_params,
            implementation_params,
            overlay_params,
            call_arguments,
            native_conversions,
            return_conversion,
        })
    }

    fn constructor(&mut self, info: &OperationInfo) -> Option<ConstructorBinding> {
        let binding = info.parameters_interface_declaration().and_then(|params| {
            let call_arguments = info.parameters_as_argument_list(self.cx)?;
            Ok((params, call_arguments))
        });
        match binding {
            Ok((params, call_arguments)) => Some(ConstructorBinding {
                name: info.name.clone(),
                params,
                call_arguments,
                factory: factory_provider(self.interface),
                native_conversions: self.native_conversions(info, 0),
            }),
            Err(error) => {
                self.report(info.display_name(), &error);
                None
            }
        }
    }

    /// Native conversions for every parameter with a single IDL type.
    ///
    /// Annotations come from the first overload supplying the position.
    fn native_conversions(&mut self, info: &OperationInfo, first_native: usize) -> Vec<NativeConversion> {
        let empty = ExtAttrs::new();
        let mut conversions = Vec::new();
        for (position, param) in info.params.iter().enumerate() {
            let Some(type_id) = param.type_id.as_deref() else {
                continue;
            };
            let desc = self.cx.registry.resolve(type_id);
            self.track(&desc);

            let attrs = argument_at(info, position).map_or(&empty, |argument| &argument.ext_attrs);
            let handle = native_argument(first_native + position);
            conversions.push(desc.emit_native_conversion(&NativeConversionContext {
                name: &param.name,
                handle: &handle,
                interface_name: self.interface,
                attrs,
            }));
        }
        conversions
    }

    fn attribute(&mut self, attribute: &Attribute) -> AttributeBinding {
        let desc = self.cx.registry.resolve(&attribute.type_id);
        self.track(&desc);

        let getter =
            desc.emit_managed_conversion(RESULT, self.interface, Some(&attribute.ext_attrs));
        let setter = (!attribute.is_read_only).then(|| {
            let handle = native_argument(1);
            desc.emit_native_conversion(&NativeConversionContext {
                name: SETTER_VALUE,
                handle: &handle,
                interface_name: self.interface,
                attrs: &attribute.ext_attrs,
            })
        });

        AttributeBinding {
            name: attribute_name(attribute).to_owned(),
            managed_type: desc.managed_type().into_owned(),
            accessors: desc.accessor_names(),
            getter,
            setter,
        }
    }
}

/// The IDL argument at `position`, from the first overload that has one.
fn argument_at(info: &OperationInfo, position: usize) -> Option<&Argument> {
    if info.is_constructor() {
        return info.arguments.get(position);
    }
    info.overload_decls()
        .iter()
        .find_map(|op| op.arguments.get(position))
}
