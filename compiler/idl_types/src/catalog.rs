//! The fixed literal type catalog.
//!
//! Every entry is keyed by its own IDL type name, so the key and the
//! descriptor can never disagree.

use crate::TypeDescriptor;

/// Typed-array types whose native headers live in the engine's template library.
pub const TYPED_ARRAY_TYPES: &[&str] = &[
    "ArrayBuffer",
    "ArrayBufferView",
    "Float32Array",
    "Float64Array",
    "Int8Array",
    "Int16Array",
    "Int32Array",
    "Uint8Array",
    "Uint16Array",
    "Uint32Array",
    "Uint8ClampedArray",
];

/// SVG value types converted to managed values through a factory call.
pub const SVG_PRIMITIVE_TYPES: &[&str] = &[
    "SVGAngle",
    "SVGLength",
    "SVGMatrix",
    "SVGNumber",
    "SVGPoint",
    "SVGRect",
    "SVGTransform",
];

/// Tear-off headers every SVG type's native code needs.
pub const SVG_SUPPLEMENTAL_INCLUDES: &[&str] = &[
    "\"SVGAnimatedPropertyTearOff.h\"",
    "\"SVGAnimatedListPropertyTearOff.h\"",
    "\"SVGStaticListPropertyTearOff.h\"",
    "\"SVGTransformListPropertyTearOff.h\"",
    "\"SVGPathSegListPropertyTearOff.h\"",
];

/// Build the catalog entries.
pub fn entries() -> Vec<TypeDescriptor> {
    let mut entries = primitives();
    entries.extend(objects());
    entries.extend(tear_offs());
    entries.extend(prefixed_script_names());
    entries
}

fn primitives() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::primitive("boolean", "boolean")
            .native("bool")
            .accessors("hasAttribute", "setBooleanAttribute"),
        TypeDescriptor::primitive("short", "short").native("short"),
        TypeDescriptor::primitive("unsigned short", "int").native("int"),
        TypeDescriptor::primitive("int", "int"),
        TypeDescriptor::primitive("unsigned int", "int").native("unsigned"),
        TypeDescriptor::primitive("long", "int")
            .native("int")
            .accessors("getIntegralAttribute", "setIntegralAttribute"),
        TypeDescriptor::primitive("unsigned long", "int")
            .native("unsigned")
            .accessors(
                "getUnsignedIntegralAttribute",
                "setUnsignedIntegralAttribute",
            ),
        TypeDescriptor::primitive("long long", "double"),
        TypeDescriptor::primitive("unsigned long long", "double"),
        TypeDescriptor::primitive("float", "float").native("double"),
        TypeDescriptor::primitive("double", "double"),
        TypeDescriptor::primitive("any", "Object"),
        TypeDescriptor::primitive("any[]", "Indexable"),
        TypeDescriptor::primitive("Array", "Indexable"),
        TypeDescriptor::primitive("custom", "Object"),
        TypeDescriptor::primitive("Date", "Date").native("double"),
        TypeDescriptor::primitive("DOMObject", "Object").native("ScriptValue"),
        TypeDescriptor::primitive("DOMString", "String").native("String"),
        TypeDescriptor::primitive("Dictionary", "Mappable"),
        // Really a dictionary of {create: bool, exclusive: bool}.
        TypeDescriptor::primitive("Flags", "Object"),
        TypeDescriptor::primitive("DOMTimeStamp", "double").native("unsigned long long"),
        TypeDescriptor::primitive("object", "Object").native("ScriptValue"),
        TypeDescriptor::primitive("SerializedScriptValue", "Object"),
        TypeDescriptor::primitive("WebKitFlags", "Object"),
        TypeDescriptor::primitive("sequence", "Indexable"),
        TypeDescriptor::primitive("void", "void"),
    ]
}

fn objects() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::generic("CSSRule").depends_on(&["CSSImportRule"]),
        TypeDescriptor::generic("DOMException").native("DOMCoreException"),
        TypeDescriptor::generic("DOMStringList")
            .managed("Indexable")
            .custom_to_native(),
        TypeDescriptor::generic("DOMStringMap").managed("Mappable"),
        TypeDescriptor::generic("DOMWindow").custom_to_managed(),
        TypeDescriptor::generic("Element").custom_to_managed(),
        TypeDescriptor::generic("EventListener").custom_to_native(),
        TypeDescriptor::generic("EventTarget").custom_to_native(),
        TypeDescriptor::generic("HTMLElement").custom_to_managed(),
        TypeDescriptor::generic("IDBAny")
            .managed("Object")
            .custom_to_native(),
        TypeDescriptor::generic("IDBKey")
            .managed("Object")
            .custom_to_native(),
        TypeDescriptor::generic("StyleSheet").depends_on(&["CSSStyleSheet"]),
        TypeDescriptor::generic("SVGElement").custom_to_managed(),
    ]
}

fn tear_offs() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::tear_off("SVGAngle"),
        TypeDescriptor::tear_off("SVGLength"),
        TypeDescriptor::tear_off("SVGLengthList"),
        TypeDescriptor::tear_off("SVGMatrix"),
        TypeDescriptor::tear_off("SVGNumber").native("SVGPropertyTearOff<float>"),
        TypeDescriptor::tear_off("SVGNumberList"),
        TypeDescriptor::tear_off("SVGPathSegList").native("SVGPathSegListPropertyTearOff"),
        TypeDescriptor::tear_off("SVGPoint").native("SVGPropertyTearOff<FloatPoint>"),
        TypeDescriptor::tear_off("SVGPointList"),
        TypeDescriptor::tear_off("SVGPreserveAspectRatio"),
        TypeDescriptor::tear_off("SVGRect").native("SVGPropertyTearOff<FloatRect>"),
        TypeDescriptor::tear_off("SVGStringList")
            .native("SVGStaticListPropertyTearOff<SVGStringList>"),
        TypeDescriptor::tear_off("SVGTransform"),
        TypeDescriptor::tear_off("SVGTransformList").native("SVGTransformListPropertyTearOff"),
    ]
}

/// Types the script runtime still exposes under vendor-prefixed names.
fn prefixed_script_names() -> Vec<TypeDescriptor> {
    [
        ("PeerConnection00", "webkitPeerConnection00"),
        ("AudioContext", "webkitAudioContext"),
        ("AudioPannerNode", "webkitAudioPannerNode"),
        ("IDBCursor", "webkitIDBCursor"),
        ("IDBDatabase", "webkitIDBDatabase"),
        ("IDBDatabaseFactory", "webkitIDBDatabaseFactory"),
        ("IDBFactory", "webkitIDBFactory"),
        ("IDBIndex", "webkitIDBIndex"),
        ("IDBKeyRange", "webkitIDBKeyRange"),
        ("IDBObjectStore", "webkitIDBObjectStore"),
        ("IDBRequest", "webkitIDBRequest"),
        ("IDBTransaction", "webkitIDBTransaction"),
        ("IndexedDB", "webkitIndexedDB"),
        ("Intent", "webkitIntent"),
        ("MediaStream", "webkitMediaStream"),
        ("URL", "webkitURL"),
        ("ShadowRoot", "WebKitShadowRoot"),
        ("BlobBuilder", "WebKitBlobBuilder"),
    ]
    .into_iter()
    .map(|(idl_type, script_type)| TypeDescriptor::generic(idl_type).script(script_type))
    .collect()
}
