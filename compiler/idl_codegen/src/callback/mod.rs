//! Handler argument binding.
//!
//! A parameter whose IDL type ends in `Callback` or `Handler` cannot be passed
//! to the script runtime as-is: the runtime expects a function, while the
//! managed side holds a handler object. The binder wraps such a parameter in
//! an adapter that binds the handler's dispatch method:
//!
//! ```text
//! $entry(callback.@elemental.html.PositionCallback::onPositionCallback(Lelemental/html/Geoposition;)).bind(callback)
//!        ───┬──── ───────────────┬───────────────   ────────┬────────  ───────────┬──────────
//!        value     declaring handler type            dispatch method    argument signatures
//! ```
//!
//! `$entry` defers the cross-boundary call until the function is invoked,
//! and the bound function survives crossing the boundary repeatedly.
//!
//! Every other parameter is passed by name.

mod module;

use idl_ir::{DeclarationGraph, InterfaceDecl};

pub use module::TargetModule;

use crate::operation::ParamInfo;
use crate::{CodegenContext, CodegenError};

/// Handler family whose dispatch arguments collapse to `Object`.
const DATABASE_CALLBACK: &str = "DatabaseCallback";

/// Argument interfaces collapsed for [`DATABASE_CALLBACK`].
const DATABASE_VARIANTS: &[&str] = &["Database", "DatabaseSync"];

/// Signature of a managed primitive in a method descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveSignature {
    Int,
    Short,
    Float,
    Double,
    Byte,
    Char,
    Long,
    Boolean,
    String,
    Object,
}

impl PrimitiveSignature {
    pub const ALL: &'static [PrimitiveSignature] = &[
        PrimitiveSignature::Int,
        PrimitiveSignature::Short,
        PrimitiveSignature::Float,
        PrimitiveSignature::Double,
        PrimitiveSignature::Byte,
        PrimitiveSignature::Char,
        PrimitiveSignature::Long,
        PrimitiveSignature::Boolean,
        PrimitiveSignature::String,
        PrimitiveSignature::Object,
    ];

    /// Look up the signature of a managed type name.
    pub fn for_managed(managed_type: &str) -> Option<Self> {
        let signature = match managed_type {
            "int" => PrimitiveSignature::Int,
            "short" => PrimitiveSignature::Short,
            "float" => PrimitiveSignature::Float,
            "double" => PrimitiveSignature::Double,
            "byte" => PrimitiveSignature::Byte,
            "char" => PrimitiveSignature::Char,
            "long" => PrimitiveSignature::Long,
            "boolean" => PrimitiveSignature::Boolean,
            "String" => PrimitiveSignature::String,
            "Object" => PrimitiveSignature::Object,
            _ => return None,
        };
        Some(signature)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveSignature::Int => "I",
            PrimitiveSignature::Short => "S",
            PrimitiveSignature::Float => "F",
            PrimitiveSignature::Double => "D",
            PrimitiveSignature::Byte => "B",
            PrimitiveSignature::Char => "C",
            PrimitiveSignature::Long => "J",
            PrimitiveSignature::Boolean => "Z",
            PrimitiveSignature::String => "Ljava/lang/String;",
            PrimitiveSignature::Object => "Ljava/lang/Object;",
        }
    }
}

/// Whether an IDL type id names a handler interface.
pub fn is_handler_type(type_id: &str) -> bool {
    type_id.ends_with("Callback") || type_id.ends_with("Handler")
}

/// Call-site expression for one parameter of `operation`.
///
/// Type-erased parameters and non-handler types are passed by name.
pub fn bind_argument<G: DeclarationGraph>(
    cx: &CodegenContext<'_, G>,
    operation: &str,
    param: &ParamInfo,
) -> Result<String, CodegenError> {
    let Some(handler_type) = param.type_id.as_deref().filter(|id| is_handler_type(id)) else {
        return Ok(param.name.clone());
    };

    let missing = || CodegenError::MissingHandlerDeclaration {
        handler: handler_type.to_owned(),
    };
    let handler = cx.graph.interface(handler_type).ok_or_else(missing)?;
    let dispatch = handler.operations().first().ok_or_else(missing)?;
    let handler_module = TargetModule::of(handler)?;

    let package_path = cx.options.package_path();
    let mut signatures = String::new();
    for argument in &dispatch.arguments {
        if let Some(argument_interface) = cx.graph.interface(&argument.type_id) {
            if handler_type == DATABASE_CALLBACK
                && DATABASE_VARIANTS.contains(&argument_interface.name())
            {
                signatures.push_str(PrimitiveSignature::Object.as_str());
            } else {
                let module = TargetModule::of(argument_interface)?;
                let managed = cx.managed_type(&argument.type_id);
                signatures.push_str(&format!("L{package_path}/{module}/{managed};"));
            }
            continue;
        }

        let managed = cx.managed_type(&argument.type_id);
        let signature = PrimitiveSignature::for_managed(&managed).ok_or_else(|| {
            CodegenError::UnresolvableHandlerArgument {
                interface: param.interface.clone(),
                operation: operation.to_owned(),
                handler: handler_type.to_owned(),
                argument_type: argument.type_id.clone(),
            }
        })?;
        signatures.push_str(signature.as_str());
    }

    let name = &param.name;
    let root = &cx.options.package_root;
    let handler_name = handler.name();
    Ok(format!(
        "$entry({name}.@{root}.{handler_module}.{handler_name}::on{handler_name}({signatures})).bind({name})"
    ))
}

#[cfg(test)]
mod tests;
