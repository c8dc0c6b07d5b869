//! Native value → managed value.

use idl_ir::{names, ExtAttrs};

use super::{NULL_TO_DEFAULT, UTILITIES, WRAPPER_PREFIX};
use crate::catalog::SVG_PRIMITIVE_TYPES;
use crate::{DescriptorKind, TypeDescriptor};

/// How a tear-off value is rewrapped before handing it to the managed side.
///
/// The choice depends on both the owning interface and the value's type:
///
/// ```text
/// owner SVGAnimated*         static_cast<N*>(v)
/// value SVGStringList        N::create(receiver, v)
/// owner *List                static_cast<N*>(v.get())
/// value SVG primitive        N::create(v)
/// otherwise                  static_cast<N*>(v)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TearOffCast {
    /// Animated properties already hold the tear-off; reinterpret it.
    AnimatedReinterpret,
    /// Static string lists are bound to the receiver that owns them.
    ReceiverBound,
    /// List items come back as smart handles; unwrap before the cast.
    ListHandle,
    /// SVG value types are copied into a fresh tear-off.
    Factory,
    /// Plain reinterpretation.
    Reinterpret,
}

impl TearOffCast {
    /// Pick the cast for a value of `idl_type` read from `interface_name`.
    ///
    /// Rules are tried in order; the first match wins.
    pub fn select(idl_type: &str, interface_name: &str) -> Self {
        if interface_name.starts_with("SVGAnimated") {
            TearOffCast::AnimatedReinterpret
        } else if idl_type == "SVGStringList" {
            TearOffCast::ReceiverBound
        } else if interface_name.ends_with("List") {
            TearOffCast::ListHandle
        } else if SVG_PRIMITIVE_TYPES.contains(&idl_type) {
            TearOffCast::Factory
        } else {
            TearOffCast::Reinterpret
        }
    }

    /// Apply the cast to `value` for native type `native`.
    pub fn apply(self, native: &str, value: &str) -> String {
        match self {
            TearOffCast::AnimatedReinterpret | TearOffCast::Reinterpret => {
                format!("static_cast<{native}*>({value})")
            }
            TearOffCast::ReceiverBound => format!("{native}::create(receiver, {value})"),
            TearOffCast::ListHandle => format!("static_cast<{native}*>({value}.get())"),
            TearOffCast::Factory => format!("{native}::create({value})"),
        }
    }
}

impl TypeDescriptor {
    /// Emit an expression converting a native `value` to its managed form.
    ///
    /// `interface_name` is the interface owning the operation or attribute;
    /// only tear-offs consult it. `attrs` are the annotations on that member.
    pub fn emit_managed_conversion(
        &self,
        value: &str,
        interface_name: &str,
        attrs: Option<&ExtAttrs>,
    ) -> String {
        match self.kind() {
            DescriptorKind::Primitive(_) => {
                let null_is_default =
                    attrs.is_some_and(|attrs| attrs.contains(names::TREAT_RETURNED_NULL_STRING_AS));
                let function = utility_function_name(&self.native_type());
                if null_is_default {
                    format!("{UTILITIES}::{function}ToDart({value}, {NULL_TO_DEFAULT})")
                } else {
                    format!("{UTILITIES}::{function}ToDart({value})")
                }
            }
            DescriptorKind::Sequence(element) => format!(
                "DartDOMWrapper::vectorToDart<{WRAPPER_PREFIX}{}>({value})",
                element.native_type()
            ),
            DescriptorKind::Generic => {
                format!("{WRAPPER_PREFIX}{}::toDart({value})", self.idl_type())
            }
            DescriptorKind::TearOff => {
                let cast = TearOffCast::select(self.idl_type(), interface_name)
                    .apply(&self.native_type(), value);
                format!("{WRAPPER_PREFIX}{}::toDart({cast})", self.idl_type())
            }
        }
    }
}

/// `unsigned long long` → `unsignedLongLong`, `String` → `string`.
fn utility_function_name(native: &str) -> String {
    let mut name = String::with_capacity(native.len());
    let mut chars = native.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' && chars.peek().is_some_and(char::is_ascii_lowercase) {
            if let Some(next) = chars.next() {
                name.push(next.to_ascii_uppercase());
            }
        } else {
            name.push(c);
        }
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => name,
    }
}
