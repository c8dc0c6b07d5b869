//! Property-based tests for overload merging and calling-convention checks.
//!
//! Verifies that:
//! 1. A merged position is named by the sorted union of its overload names
//! 2. A position is optional exactly when some overload omits it
//! 3. Every parameter view agrees with the calling-convention check

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::BTreeSet;

use idl_codegen::{merge_overloads, OperationInfo, ParamInfo};
use idl_ir::{Argument, Operation};
use idl_types::build_registry;
use proptest::prelude::*;

// -- Strategies --

fn arg_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "data", "name", "version"]).prop_map(str::to_owned)
}

fn idl_type_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["long", "unsigned short", "double", "DOMString", "Node", "Blob"])
        .prop_map(str::to_owned)
}

/// One overload: required arguments only.
fn overload_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arg_name_strategy(), idl_type_strategy()), 0..5)
}

fn overloads_strategy() -> impl Strategy<Value = Vec<Vec<(String, String)>>> {
    prop::collection::vec(overload_strategy(), 1..5)
}

fn build_operations(shapes: &[Vec<(String, String)>]) -> Vec<Operation> {
    shapes
        .iter()
        .map(|shape| {
            let arguments = shape
                .iter()
                .map(|(name, type_id)| Argument::new(name, type_id))
                .collect();
            Operation::new("f", "void", arguments)
        })
        .collect()
}

fn operation_with_flags(flags: &[bool]) -> OperationInfo {
    let params = flags
        .iter()
        .enumerate()
        .map(|(i, &is_optional)| ParamInfo {
            name: format!("p{}", i),
            type_id: Some("long".to_owned()),
            managed_type: "int".to_owned(),
            default_value: None,
            is_optional,
            interface: "Test".to_owned(),
        })
        .collect();
    OperationInfo {
        interface: "Test".to_owned(),
        declared_name: Some("f".to_owned()),
        name: Some("f".to_owned()),
        script_name: Some("f".to_owned()),
        type_name: "void".to_owned(),
        params,
        arguments: Vec::new(),
        overloads: Some(Vec::new()),
        is_static: false,
    }
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Merged names are the sorted, deduplicated union joined by `_OR_`.
    #[test]
    fn prop_merged_names_are_union(shapes in overloads_strategy()) {
        let registry = build_registry();
        let operations = build_operations(&shapes);
        let refs: Vec<&Operation> = operations.iter().collect();
        let info = merge_overloads(&registry, "Test", &refs).expect("non-empty overloads");

        let arity = shapes.iter().map(|shape| shape.len()).max().unwrap_or(0);
        prop_assert_eq!(info.params.len(), arity);

        for (position, param) in info.params.iter().enumerate() {
            let names: BTreeSet<&str> = shapes
                .iter()
                .filter_map(|shape| shape.get(position))
                .map(|(name, _)| name.as_str())
                .collect();
            let expected = names.into_iter().collect::<Vec<_>>().join("_OR_");
            prop_assert_eq!(&param.name, &expected);
        }
    }

    /// Positions past the shortest overload are optional; the rest are not.
    #[test]
    fn prop_trailing_positions_optional(shapes in overloads_strategy()) {
        let registry = build_registry();
        let operations = build_operations(&shapes);
        let refs: Vec<&Operation> = operations.iter().collect();
        let info = merge_overloads(&registry, "Test", &refs).expect("non-empty overloads");

        let shortest = shapes.iter().map(|shape| shape.len()).min().unwrap_or(0);
        for (position, param) in info.params.iter().enumerate() {
            prop_assert_eq!(param.is_optional, position >= shortest);
            prop_assert!(param.default_value.is_none());
        }
        prop_assert_eq!(info.required_count(), shortest);
        prop_assert!(info.validate_calling_convention().is_ok());
    }

    /// A position keeps its type id only when every overload supplying it agrees.
    #[test]
    fn prop_type_id_kept_only_on_agreement(shapes in overloads_strategy()) {
        let registry = build_registry();
        let operations = build_operations(&shapes);
        let refs: Vec<&Operation> = operations.iter().collect();
        let info = merge_overloads(&registry, "Test", &refs).expect("non-empty overloads");

        for (position, param) in info.params.iter().enumerate() {
            let ids: BTreeSet<&str> = shapes
                .iter()
                .filter_map(|shape| shape.get(position))
                .map(|(_, type_id)| type_id.as_str())
                .collect();
            if ids.len() == 1 {
                prop_assert_eq!(param.type_id.as_deref(), ids.first().copied());
            } else {
                prop_assert_eq!(param.type_id.as_deref(), None);
            }
        }
    }

    /// Every view fails exactly when a required parameter follows an optional one.
    #[test]
    fn prop_views_agree_with_convention(flags in prop::collection::vec(any::<bool>(), 0..8)) {
        let info = operation_with_flags(&flags);
        let first_optional = flags.iter().position(|&optional| optional);
        let valid = first_optional.map_or(true, |start| flags[start..].iter().all(|&optional| optional));

        prop_assert_eq!(info.validate_calling_convention().is_ok(), valid);
        prop_assert_eq!(info.parameters_interface_declaration().is_ok(), valid);
        prop_assert_eq!(info.parameters_implementation_declaration().is_ok(), valid);
    }
}
