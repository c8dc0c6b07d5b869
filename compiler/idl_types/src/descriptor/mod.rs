//! Type descriptors and their variant-specific naming rules.
//!
//! A descriptor carries three names for one IDL type:
//! - the **managed** name used in generated signatures (`int`, `String`, ...)
//! - the **native** name used in generated engine glue (`unsigned`, `RefPtr<..>`)
//! - the **script** binding name the managed runtime resolves at load time
//!
//! Each falls back to the IDL name when the catalog leaves it unset.

use std::borrow::Cow;
use std::sync::Arc;

mod includes;

/// Attribute-style accessor names for primitive-valued reflected attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Accessors {
    pub getter: &'static str,
    pub setter: &'static str,
}

impl Default for Accessors {
    fn default() -> Self {
        Accessors {
            getter: "getAttribute",
            setter: "setAttribute",
        }
    }
}

/// The conversion strategy of a descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    /// Value semantics; converted through a fallible parameter adapter.
    Primitive(Accessors),
    /// Reference semantics; an opaque object handle with a checked downcast.
    Generic,
    /// `sequence<T>`; conversion is driven by the element descriptor.
    Sequence(Arc<TypeDescriptor>),
    /// Native wrapper presenting a mutable view over a value owned elsewhere.
    TearOff,
}

/// Everything the generator knows about one IDL type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    idl_type: String,
    managed_type: Option<String>,
    native_type: Option<String>,
    script_type: Option<String>,
    custom_to_native: bool,
    custom_to_managed: bool,
    /// Extra types whose conversion definitions must be available.
    dependencies: Vec<String>,
    kind: DescriptorKind,
}

/// Extract `T` from `sequence<T>`.
///
/// `T` must be a single word (letters, digits, underscores), so
/// `sequence<unsigned long>` is not recognized and falls through to a direct
/// name lookup.
pub fn sequence_element(type_name: &str) -> Option<&str> {
    let element = type_name.strip_prefix("sequence<")?.strip_suffix('>')?;
    let is_word = !element.is_empty()
        && element
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word.then_some(element)
}

impl TypeDescriptor {
    fn with_kind(idl_type: &str, kind: DescriptorKind) -> Self {
        TypeDescriptor {
            idl_type: idl_type.to_owned(),
            managed_type: None,
            native_type: None,
            script_type: None,
            custom_to_native: false,
            custom_to_managed: false,
            dependencies: Vec::new(),
            kind,
        }
    }

    /// A primitive with the given managed name and default accessors.
    pub fn primitive(idl_type: &str, managed_type: &str) -> Self {
        Self::with_kind(idl_type, DescriptorKind::Primitive(Accessors::default()))
            .managed(managed_type)
    }

    /// An object handle type.
    pub fn generic(idl_type: &str) -> Self {
        Self::with_kind(idl_type, DescriptorKind::Generic)
    }

    /// The synthetic descriptor for names missing from the catalog.
    pub fn identity(idl_type: &str) -> Self {
        Self::generic(idl_type)
    }

    /// A tear-off wrapper type.
    pub fn tear_off(idl_type: &str) -> Self {
        Self::with_kind(idl_type, DescriptorKind::TearOff)
    }

    /// A sequence over an already-resolved element descriptor.
    pub fn sequence(idl_type: &str, element: Arc<TypeDescriptor>) -> Self {
        Self::with_kind(idl_type, DescriptorKind::Sequence(element))
    }

    #[must_use]
    pub fn managed(mut self, managed_type: &str) -> Self {
        self.managed_type = Some(managed_type.to_owned());
        self
    }

    #[must_use]
    pub fn native(mut self, native_type: &str) -> Self {
        self.native_type = Some(native_type.to_owned());
        self
    }

    #[must_use]
    pub fn script(mut self, script_type: &str) -> Self {
        self.script_type = Some(script_type.to_owned());
        self
    }

    #[must_use]
    pub fn custom_to_native(mut self) -> Self {
        self.custom_to_native = true;
        self
    }

    #[must_use]
    pub fn custom_to_managed(mut self) -> Self {
        self.custom_to_managed = true;
        self
    }

    #[must_use]
    pub fn depends_on(mut self, types: &[&str]) -> Self {
        self.dependencies
            .extend(types.iter().map(|name| (*name).to_owned()));
        self
    }

    /// Override the accessor names. No effect on non-primitive descriptors.
    #[must_use]
    pub fn accessors(mut self, getter: &'static str, setter: &'static str) -> Self {
        if let DescriptorKind::Primitive(accessors) = &mut self.kind {
            *accessors = Accessors { getter, setter };
        }
        self
    }

    pub fn idl_type(&self) -> &str {
        &self.idl_type
    }

    pub fn kind(&self) -> &DescriptorKind {
        &self.kind
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, DescriptorKind::Primitive(_))
    }

    pub fn is_tear_off(&self) -> bool {
        matches!(self.kind, DescriptorKind::TearOff)
    }

    /// Element descriptor of a sequence.
    pub fn element(&self) -> Option<&Arc<TypeDescriptor>> {
        match &self.kind {
            DescriptorKind::Sequence(element) => Some(element),
            DescriptorKind::Primitive(_) | DescriptorKind::Generic | DescriptorKind::TearOff => {
                None
            }
        }
    }

    /// Whether the IDL type is list-shaped (`SVGLengthList`, `DOMStringList`).
    pub fn is_list_shaped(&self) -> bool {
        self.idl_type.ends_with("List")
    }

    /// Does native-side conversion need hand-written code?
    pub fn has_custom_to_native(&self) -> bool {
        self.custom_to_native
    }

    /// Does managed-side conversion need hand-written code?
    pub fn has_custom_to_managed(&self) -> bool {
        self.custom_to_managed
    }

    /// Managed-language type name used in signatures.
    ///
    /// Sequences widen to one of three indexable names chosen by the element's
    /// managed type; the managed type system has no user-defined generics.
    pub fn managed_type(&self) -> Cow<'_, str> {
        match &self.kind {
            DescriptorKind::Sequence(element) => Cow::Borrowed(match &*element.managed_type() {
                "int" => "IndexableInt",
                "float" | "double" => "IndexableNumber",
                _ => "Indexable",
            }),
            DescriptorKind::Primitive(_) | DescriptorKind::Generic | DescriptorKind::TearOff => {
                Cow::Borrowed(self.managed_type.as_deref().unwrap_or(self.idl_type.as_str()))
            }
        }
    }

    /// Native representation name.
    ///
    /// Tear-offs without an explicit native name wrap the IDL type in the
    /// property tear-off template matching its shape.
    pub fn native_type(&self) -> Cow<'_, str> {
        if let Some(native) = &self.native_type {
            return Cow::Borrowed(native.as_str());
        }
        match &self.kind {
            DescriptorKind::TearOff => {
                let template = if self.is_list_shaped() {
                    "SVGListPropertyTearOff"
                } else {
                    "SVGPropertyTearOff"
                };
                Cow::Owned(format!("{template}<{}>", self.idl_type))
            }
            DescriptorKind::Primitive(_) | DescriptorKind::Generic | DescriptorKind::Sequence(_) => {
                Cow::Borrowed(self.idl_type.as_str())
            }
        }
    }

    /// Name the managed runtime binds the type to at load time.
    pub fn script_type(&self) -> &str {
        self.script_type.as_deref().unwrap_or(self.idl_type.as_str())
    }

    /// Accessor names, for primitives only.
    pub fn accessor_names(&self) -> Option<Accessors> {
        match self.kind {
            DescriptorKind::Primitive(accessors) => Some(accessors),
            DescriptorKind::Generic | DescriptorKind::Sequence(_) | DescriptorKind::TearOff => None,
        }
    }

    /// Native parameter type for a generated native function signature.
    pub fn parameter_type(&self) -> String {
        let native = self.native_type();
        match self.kind {
            DescriptorKind::Primitive(_) if native == "String" => "const String&".to_owned(),
            DescriptorKind::Primitive(_) => native.into_owned(),
            DescriptorKind::Generic | DescriptorKind::Sequence(_) | DescriptorKind::TearOff => {
                format!("{native}*")
            }
        }
    }

    /// Expression prefix for calling into the native receiver.
    ///
    /// Scalar tear-offs reach through to the wrapped property value.
    pub fn receiver(&self) -> &'static str {
        match self.kind {
            DescriptorKind::TearOff if !self.is_list_shaped() => "receiver->propertyReference().",
            DescriptorKind::TearOff
            | DescriptorKind::Primitive(_)
            | DescriptorKind::Generic
            | DescriptorKind::Sequence(_) => "receiver->",
        }
    }

    /// Type names whose conversion definitions must be pulled in wherever
    /// this descriptor's conversion code is emitted.
    ///
    /// Primitives convert through shared utilities and need none; sequences
    /// forward to their element; everything else needs its declared
    /// dependencies plus itself.
    pub fn native_dependencies(&self) -> Vec<&str> {
        match &self.kind {
            DescriptorKind::Primitive(_) => Vec::new(),
            DescriptorKind::Sequence(element) => element.native_dependencies(),
            DescriptorKind::Generic | DescriptorKind::TearOff => self
                .dependencies
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(self.idl_type.as_str()))
                .collect(),
        }
    }

    /// Conversion headers for [`native_dependencies`](Self::native_dependencies).
    pub fn conversion_includes(&self) -> Vec<String> {
        self.native_dependencies()
            .into_iter()
            .map(|name| format!("\"Dart{name}.h\""))
            .collect()
    }
}
