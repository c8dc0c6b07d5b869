//! Native header includes for a descriptor.

use super::{DescriptorKind, TypeDescriptor};
use crate::catalog::{SVG_SUPPLEMENTAL_INCLUDES, TYPED_ARRAY_TYPES};

impl TypeDescriptor {
    /// Headers declaring the native type itself.
    ///
    /// Typed arrays live in the engine's template library; non-SVG types have
    /// a header named after their native type. SVG types additionally need
    /// the tear-off headers, and path-segment variants share one header per
    /// segment family (`SVGPathSegArcAbs` and `SVGPathSegArcRel` both include
    /// `SVGPathSegArc.h`). Sequences forward to their element; primitive
    /// elements need no header.
    pub fn native_includes(&self) -> Vec<String> {
        if let DescriptorKind::Sequence(element) = self.kind() {
            if element.is_primitive() {
                return Vec::new();
            }
            return element.native_includes();
        }

        let idl_type = self.idl_type();
        if TYPED_ARRAY_TYPES.contains(&idl_type) {
            return vec![format!("<wtf/{}.h>", self.native_type())];
        }
        if !idl_type.starts_with("SVG") {
            return vec![format!("\"{}.h\"", self.native_type())];
        }
        if matches!(idl_type, "SVGNumber" | "SVGPoint") {
            return vec!["\"SVGPropertyTearOff.h\"".to_owned()];
        }

        let header = if idl_type.starts_with("SVGPathSeg") {
            idl_type.replace("Abs", "").replace("Rel", "")
        } else {
            idl_type.to_owned()
        };
        std::iter::once(format!("\"{header}.h\""))
            .chain(SVG_SUPPLEMENTAL_INCLUDES.iter().map(|h| (*h).to_owned()))
            .collect()
    }
}
