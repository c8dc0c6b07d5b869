//! Conversion-code emitters.
//!
//! Emission never fails: the emitters are templates. The *generated* code is
//! what fails at run time, raising the engine's typed conversion exception
//! when a value cannot be adapted (wrong dynamic type, null for a
//! non-nullable primitive, overflow of a fixed-width integer). The emitters
//! only shape that contract into the output:
//!
//! ```text
//! native direction   const ParameterAdapter<int> x(handle);
//!                    if (!x.conversionSuccessful()) { exception = ...; goto fail; }
//!
//! managed direction  DartUtilities::intToDart(value)
//! ```

mod managed;
mod native;

pub use managed::TearOffCast;
pub use native::{NativeConversion, NativeConversionContext};

/// Prefix of the generated per-type wrapper classes (`DartNode`).
const WRAPPER_PREFIX: &str = "Dart";

/// Shared conversion utilities class in the generated glue.
const UTILITIES: &str = "DartUtilities";

/// Flag requesting that null converts to the type's default value.
const NULL_TO_DEFAULT: &str = "DartUtilities::ConvertNullToDefaultValue";

/// Flag requesting no null substitution.
const NO_CONVERSION_FLAG: &str = "DartUtilities::ConvertNone";
