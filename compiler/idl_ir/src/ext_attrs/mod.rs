//! Extension annotations (`[Callback, DartName=foo, Constructor(long x)]`).
//!
//! An annotation is either a bare flag, a `Name=Value` pair, or a function
//! value carrying an argument list (used by `Constructor` and
//! `NamedConstructor`). Annotations are looked up by name only.

use std::collections::BTreeMap;

use crate::Argument;

/// Annotation names the generator consumes.
pub mod names {
    /// Overrides the exposed name of an operation or attribute.
    pub const RENAME: &str = "DartName";
    /// Supplies the constructor argument list.
    pub const CONSTRUCTOR: &str = "Constructor";
    /// Supplies a named constructor (`NamedConstructor=Image(long w)`).
    pub const NAMED_CONSTRUCTOR: &str = "NamedConstructor";
    /// Flags an interface (or a parameter) as dispatch-only.
    pub const CALLBACK: &str = "Callback";
    /// `Optional=DefaultIsNullString` marks a string that treats null as default.
    pub const OPTIONAL: &str = "Optional";
    /// Value of [`OPTIONAL`] that requests null-to-default substitution.
    pub const DEFAULT_IS_NULL_STRING: &str = "DefaultIsNullString";
    /// Adds the null-to-default flag to the native conversion.
    pub const REQUIRED_NATIVE_PARAMETER: &str = "RequiredCppParameter";
    /// Attribute getters that return null strings as the default value.
    pub const TREAT_RETURNED_NULL_STRING_AS: &str = "TreatReturnedNullStringAs";
}

/// Value of a single extension annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ExtAttrValue {
    /// `Name=Value`.
    Value(String),
    /// `Name(args)` or `Name=Id(args)`.
    Function(FunctionValue),
    /// Bare `Name`.
    Flag,
}

/// Function-valued annotation payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FunctionValue {
    /// Name given by `Name=Id(...)`, absent for `Name(...)`.
    pub id: Option<String>,
    pub arguments: Vec<Argument>,
}

/// Extension-annotation mapping attached to a declaration.
///
/// Backed by a `BTreeMap` so iteration (and therefore generated output) is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExtAttrs(BTreeMap<String, ExtAttrValue>);

impl ExtAttrs {
    /// Create an empty annotation set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder: add a bare flag.
    #[must_use]
    pub fn with_flag(mut self, name: &str) -> Self {
        self.0.insert(name.to_owned(), ExtAttrValue::Flag);
        self
    }

    /// Builder: add a `Name=Value` pair.
    #[must_use]
    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.0
            .insert(name.to_owned(), ExtAttrValue::Value(value.to_owned()));
        self
    }

    /// Builder: add a function-valued annotation.
    #[must_use]
    pub fn with_function(mut self, name: &str, value: FunctionValue) -> Self {
        self.0.insert(name.to_owned(), ExtAttrValue::Function(value));
        self
    }

    /// Whether the annotation is present, whatever its value.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ExtAttrValue> {
        self.0.get(name)
    }

    /// The string value of a `Name=Value` annotation.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.0.get(name)? {
            ExtAttrValue::Value(value) => Some(value),
            ExtAttrValue::Function(_) | ExtAttrValue::Flag => None,
        }
    }

    /// The payload of a function-valued annotation.
    pub fn function(&self, name: &str) -> Option<&FunctionValue> {
        match self.0.get(name)? {
            ExtAttrValue::Function(func) => Some(func),
            ExtAttrValue::Value(_) | ExtAttrValue::Flag => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtAttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}
