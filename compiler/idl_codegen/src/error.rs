//! Generation errors.
//!
//! Every variant aborts emission of one operation (or attribute) only. The
//! binding generator turns them into diagnostics and moves on.

use idl_diagnostic::{Diagnostic, ErrorCode};

/// A build-time failure while generating one operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CodegenError {
    /// A required parameter follows an optional one in a merged operation.
    #[error("optional parameters cannot precede required ones in `{interface}.{operation}`")]
    InvalidCallingConvention { interface: String, operation: String },

    /// A handler dispatch argument has neither an interface declaration nor
    /// a primitive signature.
    #[error(
        "cannot bind argument of type `{argument_type}` of handler `{handler}` \
         in `{interface}.{operation}`"
    )]
    UnresolvableHandlerArgument {
        interface: String,
        operation: String,
        handler: String,
        argument_type: String,
    },

    /// A handler type has no declaration, or declares no dispatch operation.
    #[error("handler `{handler}` has no declared dispatch operation")]
    MissingHandlerDeclaration { handler: String },

    /// An interface's module annotation names no known target module.
    #[error("interface `{interface}` belongs to unknown module `{module}`")]
    UnmappedModule { interface: String, module: String },
}

impl CodegenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CodegenError::InvalidCallingConvention { .. } => ErrorCode::E1001,
            CodegenError::UnresolvableHandlerArgument { .. } => ErrorCode::E1002,
            CodegenError::MissingHandlerDeclaration { .. } => ErrorCode::E1003,
            CodegenError::UnmappedModule { .. } => ErrorCode::E1004,
        }
    }

    /// Convert to a diagnostic located at `interface.operation`.
    ///
    /// The location is where generation failed, which for handler and module
    /// errors differs from the declaration named in the message.
    pub fn to_diagnostic(&self, interface: &str, operation: Option<&str>) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .at(interface, operation.map(str::to_owned));
        match self {
            CodegenError::InvalidCallingConvention { .. } => {
                diag.with_note("every parameter after the first optional one must be optional")
            }
            CodegenError::UnresolvableHandlerArgument { .. } => {
                diag.with_note("declare the argument's interface or use a primitive type")
            }
            CodegenError::MissingHandlerDeclaration { .. } => diag,
            CodegenError::UnmappedModule { module, .. } => {
                diag.with_note(format!("add `{module}` to the module table"))
            }
        }
    }
}
