//! Property-based tests for type resolution and conversion emission.
//!
//! Verifies that:
//! 1. Resolution never fails and unknown names resolve to themselves
//! 2. Sequence descriptors are cached per full name
//! 3. Both conversion directions of a primitive agree on its native type

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::Arc;

use idl_ir::ExtAttrs;
use idl_types::{build_registry, NativeConversionContext, TearOffCast};
use proptest::prelude::*;

// -- Strategies --

/// An interface-style identifier that is not in the catalog.
fn unknown_type_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("Zz[A-Z][a-zA-Z0-9]{0,12}").expect("valid regex")
}

/// A type name usable as a sequence element.
fn element_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("long".to_owned()),
        Just("double".to_owned()),
        Just("DOMString".to_owned()),
        Just("Node".to_owned()),
        unknown_type_strategy(),
    ]
}

/// A catalog primitive's IDL name.
fn primitive_strategy() -> impl Strategy<Value = String> {
    let names: Vec<String> = build_registry()
        .entries()
        .into_iter()
        .filter(|desc| desc.is_primitive())
        .map(|desc| desc.idl_type().to_owned())
        .collect();
    prop::sample::select(names)
}

fn local_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9]{0,10}").expect("valid regex")
}

/// `unsigned long long` → `unsignedLongLong`.
fn camel(native: &str) -> String {
    let mut out = String::new();
    let mut upper = false;
    for c in native.chars() {
        if c == ' ' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => out,
    }
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Unknown names resolve to an identity descriptor.
    #[test]
    fn prop_unknown_names_are_identity(name in unknown_type_strategy()) {
        let registry = build_registry();
        let desc = registry.resolve(&name);
        prop_assert_eq!(desc.idl_type(), name.as_str());
        prop_assert_eq!(desc.managed_type(), name.as_str());
        prop_assert_eq!(desc.native_type(), name.as_str());
        prop_assert!(!desc.is_primitive());
    }

    /// One descriptor per distinct sequence name, however often resolved.
    #[test]
    fn prop_sequences_cached_per_name(elements in prop::collection::vec(element_strategy(), 1..12)) {
        let registry = build_registry();
        let mut distinct: Vec<&String> = elements.iter().collect();
        distinct.sort();
        distinct.dedup();

        for element in &elements {
            let name = format!("sequence<{}>", element);
            let first = registry.resolve(&name);
            let again = registry.resolve(&name);
            prop_assert!(Arc::ptr_eq(&first, &again));
            prop_assert_eq!(
                first.element().map(|e| e.idl_type().to_owned()),
                Some(element.clone())
            );
        }
        prop_assert_eq!(registry.cached_sequences(), distinct.len());
    }

    /// Native and managed conversions of a primitive name the same native type.
    #[test]
    fn prop_primitive_conversions_agree(idl_type in primitive_strategy(), name in local_name_strategy()) {
        let registry = build_registry();
        let desc = registry.resolve(&idl_type);
        let native = desc.native_type().into_owned();
        let attrs = ExtAttrs::new();

        let to_native = desc.emit_native_conversion(&NativeConversionContext {
            name: &name,
            handle: "handle",
            interface_name: "Node",
            attrs: &attrs,
        });
        let expected_decl = format!("const ParameterAdapter<{}> {}(handle);", native, name);
        prop_assert!(to_native.code.starts_with(&expected_decl));
        prop_assert_eq!(to_native.argument, name.clone());

        let to_managed = desc.emit_managed_conversion(&name, "Node", None);
        prop_assert_eq!(to_managed, format!("DartUtilities::{}ToDart({})", camel(&native), name));
    }

    /// Animated owners always reinterpret, whatever the value type.
    #[test]
    fn prop_animated_owner_wins(suffix in "[A-Z][a-zA-Z]{0,10}", value in element_strategy()) {
        let owner = format!("SVGAnimated{}", suffix);
        prop_assert_eq!(TearOffCast::select(&value, &owner), TearOffCast::AnimatedReinterpret);
        prop_assert_eq!(TearOffCast::select("SVGStringList", &owner), TearOffCast::AnimatedReinterpret);
    }
}
