//! Interface and implementation declarations.

use crate::MethodSignature;

/// A named, typed field of an implementation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A value type implementing the interface.
///
/// Fields are listed in declaration order and must be the complete field
/// set of the struct: the generated unpack constructor builds the struct
/// from exactly these fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImplementationDescriptor {
    pub name: String,
    /// Module path the struct lives in, e.g. `crate::shapes`.
    pub namespace: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<FieldDescriptor>,
    /// `use` paths the field types need, merged into the union's imports.
    #[cfg_attr(feature = "serde", serde(default))]
    pub imports: Vec<String>,
}

impl ImplementationDescriptor {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        ImplementationDescriptor {
            name: name.into(),
            namespace: namespace.into(),
            fields: Vec::new(),
            imports: Vec::new(),
        }
    }

    /// Append a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor::new(name, ty));
        self
    }

    /// Append an import.
    #[must_use]
    pub fn with_import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    /// Number of fields typed `ty`.
    pub fn count_of_type(&self, ty: &str) -> usize {
        self.fields.iter().filter(|f| f.ty.trim() == ty).count()
    }
}

/// A trait together with every implementation discovered for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceDescriptor {
    pub name: String,
    pub namespace: String,
    /// Own and inherited methods, in dispatch order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub methods: Vec<MethodSignature>,
    /// Implementations in discovery order. The order decides slot layout.
    #[cfg_attr(feature = "serde", serde(default))]
    pub implementations: Vec<ImplementationDescriptor>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub imports: Vec<String>,
}

impl InterfaceDescriptor {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        InterfaceDescriptor {
            name: name.into(),
            namespace: namespace.into(),
            methods: Vec::new(),
            implementations: Vec::new(),
            imports: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_implementation(mut self, implementation: ImplementationDescriptor) -> Self {
        self.implementations.push(implementation);
        self
    }

    #[must_use]
    pub fn with_import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }
}

/// Input of one generation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptorSet {
    #[cfg_attr(feature = "serde", serde(default))]
    pub interfaces: Vec<InterfaceDescriptor>,
}

impl DescriptorSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_interface(mut self, interface: InterfaceDescriptor) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}
