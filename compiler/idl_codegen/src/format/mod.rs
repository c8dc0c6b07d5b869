//! Parameter-list views of an [`OperationInfo`].
//!
//! Three views render the same parameters:
//!
//! ```text
//! interface declaration     String name, int version, String description
//! implementation            String name, int version = 1, String description
//! call-site arguments       name, version, description
//! ```
//!
//! Every view first checks the calling convention: once a parameter is
//! optional, every later one must be too. A violation fails the whole view
//! with [`CodegenError::InvalidCallingConvention`] so no malformed signature
//! is ever emitted.

use idl_ir::DeclarationGraph;

use crate::callback::bind_argument;
use crate::operation::{OperationInfo, ParamInfo};
use crate::{CodegenContext, CodegenError};

/// Managed type used where a parameter cannot be precisely typed.
const UNTYPED: &str = "Object";

/// Interface whose handlers are overloaded on the receiving database type.
const DATABASE_CALLBACK: &str = "DatabaseCallback";

/// Type prefix for a parameter declaration, with a trailing space.
///
/// Type-erased parameters, and every parameter of the database callback
/// interface, are declared as `Object`.
pub fn type_or_nothing(managed_type: &str, param: &ParamInfo) -> String {
    if param.is_dynamic() || param.interface == DATABASE_CALLBACK {
        format!("{UNTYPED} ")
    } else {
        format!("{managed_type} ")
    }
}

impl OperationInfo {
    /// Check that no required parameter follows an optional one.
    pub fn validate_calling_convention(&self) -> Result<(), CodegenError> {
        let mut seen_optional = false;
        for param in &self.params {
            if param.is_optional {
                seen_optional = true;
            } else if seen_optional {
                return Err(CodegenError::InvalidCallingConvention {
                    interface: self.interface.clone(),
                    operation: self.display_name().to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Parameters for an abstract declaration. Never prints defaults.
    pub fn parameters_interface_declaration(&self) -> Result<String, CodegenError> {
        self.format_params(true, |param| type_or_nothing(&param.managed_type, param))
    }

    /// Parameters for an implementation. Optional parameters print
    /// `= default` where a default was supplied.
    pub fn parameters_implementation_declaration(&self) -> Result<String, CodegenError> {
        self.format_params(false, |param| type_or_nothing(&param.managed_type, param))
    }

    /// Like [`parameters_implementation_declaration`], with every managed
    /// type passed through `rename_type` first.
    ///
    /// [`parameters_implementation_declaration`]: Self::parameters_implementation_declaration
    pub fn parameters_implementation_declaration_with(
        &self,
        rename_type: impl Fn(&str) -> String,
    ) -> Result<String, CodegenError> {
        self.format_params(false, |param| {
            type_or_nothing(&rename_type(&param.managed_type), param)
        })
    }

    /// Call-site argument expressions, one per parameter.
    ///
    /// Handler-typed parameters are replaced by a bound dispatch adapter.
    pub fn argument_expressions<G: DeclarationGraph>(
        &self,
        cx: &CodegenContext<'_, G>,
    ) -> Result<Vec<String>, CodegenError> {
        self.validate_calling_convention()?;
        self.params
            .iter()
            .map(|param| bind_argument(cx, self.display_name(), param))
            .collect()
    }

    /// The call-site argument list.
    pub fn parameters_as_argument_list<G: DeclarationGraph>(
        &self,
        cx: &CodegenContext<'_, G>,
    ) -> Result<String, CodegenError> {
        Ok(self.argument_expressions(cx)?.join(", "))
    }

    fn format_params(
        &self,
        is_interface: bool,
        type_fn: impl Fn(&ParamInfo) -> String,
    ) -> Result<String, CodegenError> {
        self.validate_calling_convention()?;
        let params: Vec<String> = self
            .params
            .iter()
            .map(|param| {
                let declared_type = type_fn(param);
                match &param.default_value {
                    Some(default) if !is_interface => {
                        format!("{declared_type}{} = {default}", param.name)
                    }
                    _ => format!("{declared_type}{}", param.name),
                }
            })
            .collect();
        Ok(params.join(", "))
    }
}
