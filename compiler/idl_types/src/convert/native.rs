//! Managed value → native value.

use idl_ir::{names, ExtAttrs};

use super::{NO_CONVERSION_FLAG, NULL_TO_DEFAULT, WRAPPER_PREFIX};
use crate::{DescriptorKind, TypeDescriptor};

/// Inputs for one native conversion.
#[derive(Clone, Copy, Debug)]
pub struct NativeConversionContext<'a> {
    /// Name of the native local to declare.
    pub name: &'a str,
    /// Expression yielding the incoming managed handle.
    pub handle: &'a str,
    /// Interface that owns the operation or attribute being bound.
    pub interface_name: &'a str,
    /// Annotations on the parameter (or attribute) being converted.
    pub attrs: &'a ExtAttrs,
}

/// Emitted native conversion.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NativeConversion {
    /// Statements declaring and checking the converted local.
    pub code: String,
    /// Expression to pass where the native value is consumed.
    pub argument: String,
}

impl TypeDescriptor {
    /// Emit the statements converting an incoming managed value to its
    /// native representation.
    ///
    /// - Primitives go through a strict `ParameterAdapter`, failing with the
    ///   adapter's exception.
    /// - Object handles are downcast by the wrapper's `toNative`, which sets
    ///   `exception` on a type mismatch.
    /// - Tear-offs owned by a non-list interface pass the wrapped property
    ///   reference; list interfaces alias the native list directly.
    /// - Parameters flagged as callbacks are wrapped with `create`.
    pub fn emit_native_conversion(&self, cx: &NativeConversionContext<'_>) -> NativeConversion {
        match self.kind() {
            DescriptorKind::Primitive(_) => self.emit_adapter(cx),
            DescriptorKind::Generic | DescriptorKind::Sequence(_) | DescriptorKind::TearOff => {
                if cx.attrs.contains(names::CALLBACK) {
                    self.emit_callback_create(cx)
                } else {
                    self.emit_to_native(cx)
                }
            }
        }
    }

    fn emit_adapter(&self, cx: &NativeConversionContext<'_>) -> NativeConversion {
        let mut arguments = vec![cx.handle];
        let null_is_default = cx.attrs.value(names::OPTIONAL) == Some(names::DEFAULT_IS_NULL_STRING);
        if null_is_default || cx.attrs.contains(names::REQUIRED_NATIVE_PARAMETER) {
            arguments.push(NULL_TO_DEFAULT);
        }

        let name = cx.name;
        let code = format!(
            "const ParameterAdapter<{native}> {name}({arguments});\n\
             if (!{name}.conversionSuccessful()) {{\n    \
             exception = {name}.exception();\n    \
             goto fail;\n\
             }}\n",
            native = self.native_type(),
            arguments = arguments.join(", "),
        );
        NativeConversion {
            code,
            argument: name.to_owned(),
        }
    }

    fn emit_callback_create(&self, cx: &NativeConversionContext<'_>) -> NativeConversion {
        let flag = if cx.attrs.contains(names::REQUIRED_NATIVE_PARAMETER) {
            NULL_TO_DEFAULT
        } else {
            NO_CONVERSION_FLAG
        };
        let code = format!(
            "RefPtr<{native}> {name} = {WRAPPER_PREFIX}{idl}::create({handle}, {flag}, exception);\n\
             if (exception)\n    \
             goto fail;\n",
            native = self.native_type(),
            name = cx.name,
            idl = self.idl_type(),
            handle = cx.handle,
        );
        NativeConversion {
            code,
            argument: cx.name.to_owned(),
        }
    }

    fn emit_to_native(&self, cx: &NativeConversionContext<'_>) -> NativeConversion {
        let name = cx.name;
        let (native_decl, argument) = if self.has_custom_to_native() {
            (format!("RefPtr<{}>", self.native_type()), format!("{name}.get()"))
        } else if self.is_tear_off() && !cx.interface_name.ends_with("List") {
            (
                format!("{}*", self.native_type()),
                format!("{name}->propertyReference()"),
            )
        } else {
            (format!("{}*", self.native_type()), name.to_owned())
        };

        let code = format!(
            "{native_decl} {name} = {WRAPPER_PREFIX}{idl}::toNative({handle}, exception);\n\
             if (exception)\n    \
             goto fail;\n",
            idl = self.idl_type(),
            handle = cx.handle,
        );
        NativeConversion { code, argument }
    }
}
