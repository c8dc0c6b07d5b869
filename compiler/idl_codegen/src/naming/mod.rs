//! Naming and classification queries over declarations.

use std::cmp::Ordering;

use idl_ir::{names, Attribute, InterfaceDecl};
use idl_types::{catalog::TYPED_ARRAY_TYPES, sequence_element};

use crate::callback::is_handler_type;

/// Mixin-only interfaces; they are implemented by other types and never
/// generated as standalone classes.
pub const PURE_INTERFACES: &[&str] = &[
    "DOMStringMap",
    "ElementTimeControl",
    "ElementTraversal",
    "MediaQueryListListener",
    "NodeSelector",
    "SVGExternalResourcesRequired",
    "SVGFilterPrimitiveStandardAttributes",
    "SVGFitToViewBox",
    "SVGLangSpace",
    "SVGLocatable",
    "SVGStylable",
    "SVGTests",
    "SVGTransformable",
    "SVGURIReference",
    "SVGViewSpec",
    "SVGZoomAndPan",
    "TimeoutHandler",
];

/// Managed types that map onto the platform's own classes.
pub const PLATFORM_TYPES: &[&str] = &["Object", "String", "Exception", "DOMTimeStamp", "DOMString", "Date"];

/// Provider that typed-array constructors delegate to.
pub const TYPED_ARRAY_FACTORY: &str = "_TypedArrayFactoryProvider";

/// Prefix of script-overlay implementation types.
const OVERLAY_PREFIX: &str = "Js";

/// Attribute names that are reserved words in the managed language.
const ATTRIBUTE_RENAMES: &[(&str, &str)] = &[("default", "defaultValue"), ("final", "finalValue")];

pub fn is_pure_interface(name: &str) -> bool {
    PURE_INTERFACES.contains(&name)
}

/// Is the type a managed list (`List`, `sequence<T>`)?
pub fn is_list_type(type_name: &str) -> bool {
    type_name == "List" || type_name.starts_with("sequence<")
}

/// Exposed name of an attribute.
///
/// Reserved words are renamed, and a rename annotation wins over both.
pub fn attribute_name(attribute: &Attribute) -> &str {
    if let Some(renamed) = attribute.ext_attrs.value(names::RENAME) {
        return renamed;
    }
    ATTRIBUTE_RENAMES
        .iter()
        .find(|(reserved, _)| *reserved == attribute.id)
        .map_or(attribute.id.as_str(), |(_, renamed)| *renamed)
}

/// The attribute of `interface` with the same name and accessor kind.
pub fn find_matching_attribute<'a, I: InterfaceDecl + ?Sized>(
    interface: &'a I,
    attribute: &Attribute,
) -> Option<&'a Attribute> {
    let mut matches = interface.attributes().iter().filter(|candidate| {
        candidate.id == attribute.id
            && candidate.is_getter == attribute.is_getter
            && candidate.is_setter == attribute.is_setter
    });
    let found = matches.next();
    if matches.next().is_some() {
        tracing::warn!(
            interface = interface.name(),
            attribute = attribute.id.as_str(),
            "attribute declared more than once; using the first"
        );
    }
    found
}

/// Canonical attribute order: by name, getters before setters.
pub fn attribute_output_order(a: &Attribute, b: &Attribute) -> Ordering {
    a.id.cmp(&b.id).then(a.is_setter.cmp(&b.is_setter))
}

/// `T` of the first `sequence<T>` parent.
pub fn list_element_type<I: InterfaceDecl + ?Sized>(interface: &I) -> Option<&str> {
    interface
        .parents()
        .iter()
        .find_map(|parent| sequence_element(parent))
}

/// Element type of a typed array: a list that also extends `ArrayBufferView`.
pub fn typed_array_element_type<I: InterfaceDecl + ?Sized>(interface: &I) -> Option<&str> {
    let is_view = interface
        .parents()
        .iter()
        .any(|parent| parent == "ArrayBufferView");
    if is_view {
        list_element_type(interface)
    } else {
        None
    }
}

/// Factory provider that constructors of `interface_name` delegate to.
pub fn factory_provider(interface_name: &str) -> Option<&'static str> {
    let is_typed_array = interface_name != "ArrayBuffer"
        && interface_name != "ArrayBufferView"
        && TYPED_ARRAY_TYPES.contains(&interface_name);
    is_typed_array.then_some(TYPED_ARRAY_FACTORY)
}

/// Implementation type name in the script overlay.
///
/// Capitalised types get the overlay prefix unless they are handlers, one
/// of `mixins`, platform types, or already prefixed.
pub fn overlay_type_name(managed_type: &str, mixins: &[&str]) -> String {
    let keep = is_handler_type(managed_type)
        || mixins.contains(&managed_type)
        || PLATFORM_TYPES.contains(&managed_type)
        || managed_type.starts_with(OVERLAY_PREFIX)
        || !managed_type.starts_with(|c: char| c.is_ascii_uppercase());
    if keep {
        managed_type.to_owned()
    } else {
        format!("{OVERLAY_PREFIX}{managed_type}")
    }
}
