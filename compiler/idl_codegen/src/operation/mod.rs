//! The resolved shape of an operation or constructor.
//!
//! An [`OperationInfo`] is produced by the overload resolver and consumed by
//! the formatting views and the binding generator. Once built it is only
//! read, except for upstream default-value injection.

use idl_ir::{Argument, Operation};

/// Managed type of a parameter whose overloads disagree on type.
pub const DYNAMIC_TYPE: &str = "Dynamic";

/// One merged parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParamInfo {
    /// Merged name; divergent overload names are joined with `_OR_`.
    pub name: String,
    /// Shared IDL type id, absent when the overloads disagree.
    pub type_id: Option<String>,
    /// Merged managed type, [`DYNAMIC_TYPE`] when the overloads disagree.
    pub managed_type: String,
    /// Default-value expression. Never inferred by the resolver.
    pub default_value: Option<String>,
    /// Whether some overload omits this position or marks it optional.
    pub is_optional: bool,
    /// Owning interface, for contextual lookups only.
    pub interface: String,
}

impl ParamInfo {
    pub fn is_dynamic(&self) -> bool {
        self.managed_type == DYNAMIC_TYPE
    }
}

/// The resolved shape of one operation name or one constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OperationInfo {
    /// Owning interface.
    pub interface: String,
    /// IDL name. Absent for an anonymous constructor.
    pub declared_name: Option<String>,
    /// Exposed name, after renaming.
    pub name: Option<String>,
    /// Name the script runtime dispatches on.
    pub script_name: Option<String>,
    /// Managed return type (the constructed interface for constructors).
    pub type_name: String,
    pub params: Vec<ParamInfo>,
    /// The IDL arguments the parameters were built from: those of the first
    /// overload, or the constructor annotation's payload.
    pub arguments: Vec<Argument>,
    /// Overloads merged into this operation. Absent for constructors.
    pub overloads: Option<Vec<Operation>>,
    pub is_static: bool,
}

impl OperationInfo {
    pub fn is_constructor(&self) -> bool {
        self.overloads.is_none()
    }

    /// Name used in diagnostics and reports.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.declared_name.as_deref())
            .unwrap_or(self.type_name.as_str())
    }

    /// Return type of the first overload, as an IDL id.
    pub fn return_type_id(&self) -> Option<&str> {
        self.overloads
            .as_ref()
            .and_then(|overloads| overloads.first())
            .map(|op| op.type_id.as_str())
    }

    pub fn param(&self, name: &str) -> Option<&ParamInfo> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Attach a default-value expression to the named parameter.
    ///
    /// Unknown names are ignored.
    #[must_use]
    pub fn with_default(mut self, name: &str, expression: &str) -> Self {
        if let Some(param) = self.params.iter_mut().find(|param| param.name == name) {
            param.default_value = Some(expression.to_owned());
        }
        self
    }

    /// Number of leading required parameters.
    pub fn required_count(&self) -> usize {
        self.params
            .iter()
            .take_while(|param| !param.is_optional)
            .count()
    }

    /// Merged overload declarations; empty for constructors.
    pub fn overload_decls(&self) -> &[Operation] {
        self.overloads.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
