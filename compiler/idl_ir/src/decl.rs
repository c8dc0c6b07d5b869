//! Declaration records: interfaces, operations, attributes, arguments.

use std::collections::BTreeMap;

use crate::ExtAttrs;

/// Grouped key/value annotations (`annotations["WebKit"]["module"]`).
pub type Annotations = BTreeMap<String, BTreeMap<String, String>>;

/// One declared argument of an operation or constructor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Argument {
    /// Argument name.
    pub id: String,
    /// IDL type id, e.g. `DOMString` or `sequence<long>`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_id: String,
    pub is_optional: bool,
    pub ext_attrs: ExtAttrs,
}

impl Argument {
    /// A required argument with no annotations.
    pub fn new(id: &str, type_id: &str) -> Self {
        Self {
            id: id.to_owned(),
            type_id: type_id.to_owned(),
            is_optional: false,
            ext_attrs: ExtAttrs::new(),
        }
    }

    /// An optional argument with no annotations.
    pub fn optional(id: &str, type_id: &str) -> Self {
        Self {
            is_optional: true,
            ..Self::new(id, type_id)
        }
    }

    #[must_use]
    pub fn with_ext_attrs(mut self, ext_attrs: ExtAttrs) -> Self {
        self.ext_attrs = ext_attrs;
        self
    }
}

/// One declared operation. Overloads appear as separate records sharing `id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Operation {
    pub id: String,
    /// Return type id.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_id: String,
    pub arguments: Vec<Argument>,
    pub is_static: bool,
    pub ext_attrs: ExtAttrs,
}

impl Operation {
    pub fn new(id: &str, type_id: &str, arguments: Vec<Argument>) -> Self {
        Self {
            id: id.to_owned(),
            type_id: type_id.to_owned(),
            arguments,
            is_static: false,
            ext_attrs: ExtAttrs::new(),
        }
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub fn with_ext_attrs(mut self, ext_attrs: ExtAttrs) -> Self {
        self.ext_attrs = ext_attrs;
        self
    }
}

/// One declared attribute.
///
/// Getter and setter halves of the same attribute may appear as separate
/// records, distinguished by `is_getter` / `is_setter`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Attribute {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_id: String,
    pub is_read_only: bool,
    pub is_getter: bool,
    pub is_setter: bool,
    pub ext_attrs: ExtAttrs,
}

impl Attribute {
    /// A plain read-write attribute.
    pub fn new(id: &str, type_id: &str) -> Self {
        Self {
            id: id.to_owned(),
            type_id: type_id.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    #[must_use]
    pub fn with_ext_attrs(mut self, ext_attrs: ExtAttrs) -> Self {
        self.ext_attrs = ext_attrs;
        self
    }
}

/// One declared interface.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Interface {
    pub id: String,
    /// Parent type ids, including `sequence<T>` for list-shaped interfaces.
    pub parents: Vec<String>,
    pub operations: Vec<Operation>,
    pub attributes: Vec<Attribute>,
    pub ext_attrs: ExtAttrs,
    pub annotations: Annotations,
}

impl Interface {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parents.push(parent.to_owned());
        self
    }

    #[must_use]
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_ext_attrs(mut self, ext_attrs: ExtAttrs) -> Self {
        self.ext_attrs = ext_attrs;
        self
    }

    /// Builder: set `annotations[group][key] = value`.
    #[must_use]
    pub fn with_annotation(mut self, group: &str, key: &str, value: &str) -> Self {
        self.annotations
            .entry(group.to_owned())
            .or_default()
            .insert(key.to_owned(), value.to_owned());
        self
    }
}
