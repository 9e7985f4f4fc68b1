//! Union layout.
//!
//! Decides which implementations take part in the union, runs the field
//! merger over them, and renders the structural part of the merged type:
//! the discriminant newtype with one tag per implementation, and the merged
//! struct with the discriminant first and the slots after it in creation
//! order.

use poly_ir::{ImplementationDescriptor, InterfaceDescriptor, MethodSignature};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::merge::{merge_fields, FieldMerge, ImplId};
use crate::naming::{merged_type_name, qualify, type_id_name, DISCRIMINANT_FIELD};
use crate::writer::SourceWriter;

/// Everything needed to emit the merged type and its conversions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedTypeDescriptor {
    /// Merged type name, `Shape` for `IShape`.
    pub name: String,
    pub interface_name: String,
    pub namespace: String,
    /// Accepted implementations; the position is the discriminant value.
    pub variants: Vec<ImplementationDescriptor>,
    pub merge: FieldMerge,
    pub methods: Vec<MethodSignature>,
    /// Interface and implementation imports, deduplicated, first seen first.
    pub imports: Vec<String>,
}

impl MergedTypeDescriptor {
    /// Name of the discriminant newtype.
    pub fn type_id_name(&self) -> String {
        type_id_name(&self.name)
    }

    /// Ids of all variants in discriminant order.
    pub fn variant_ids(&self) -> impl Iterator<Item = ImplId> + '_ {
        (0..self.variants.len()).map(|i| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "implementation counts are far below u32::MAX"
            )]
            let index = i as u32;
            ImplId::new(index)
        })
    }

    pub fn variant(&self, id: ImplId) -> &ImplementationDescriptor {
        &self.variants[id.index()]
    }

    /// `use` paths for the merged artifact: collected imports, then every
    /// implementation living in another module.
    pub fn merged_imports(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        let foreign = self
            .variants
            .iter()
            .filter(|v| v.namespace != self.namespace)
            .map(|v| qualify(&v.namespace, &v.name));
        for path in self.imports.iter().cloned().chain(foreign) {
            if seen.insert(path.clone()) {
                out.push(path);
            }
        }
        out
    }

    /// `use` paths for the artifact of `id`: the merged type and its
    /// discriminant, unless the implementation shares their module.
    pub fn implementation_imports(&self, id: ImplId) -> Vec<String> {
        if self.variant(id).namespace == self.namespace {
            return Vec::new();
        }
        vec![
            qualify(&self.namespace, &self.name),
            qualify(&self.namespace, &self.type_id_name()),
        ]
    }
}

/// Build the merged type description for `interface`.
///
/// Returns `Ok(None)` when no implementation is accepted: there is nothing
/// to merge and no artifact is produced, so nothing else is validated.
pub fn build_layout(
    interface: &InterfaceDescriptor,
    config: &CodegenConfig,
) -> Result<Option<MergedTypeDescriptor>, CodegenError> {
    let name = merged_type_name(&interface.name, config.marker, &config.fallback_suffix);
    let variants = accept_implementations(interface, &name)?;
    if variants.is_empty() {
        return Ok(None);
    }
    validate_names(interface, &variants)?;

    let merge = merge_fields(&variants);
    debug!(
        merged = %name,
        variants = variants.len(),
        slots = merge.len(),
        "built union layout"
    );

    let imports: Vec<String> = {
        let mut seen = FxHashSet::default();
        interface
            .imports
            .iter()
            .chain(variants.iter().flat_map(|v| v.imports.iter()))
            .filter(|path| !path.trim().is_empty() && seen.insert(path.as_str()))
            .cloned()
            .collect()
    };

    Ok(Some(MergedTypeDescriptor {
        name,
        interface_name: interface.name.clone(),
        namespace: interface.namespace.clone(),
        variants,
        merge,
        methods: interface.methods.clone(),
        imports,
    }))
}

/// Implementations that become variants, in discovery order.
///
/// An implementation named like the merged type is dropped. A repeated
/// name is an error even across modules: tags and artifact names are
/// keyed by the bare name.
fn accept_implementations(
    interface: &InterfaceDescriptor,
    merged_name: &str,
) -> Result<Vec<ImplementationDescriptor>, CodegenError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut accepted = Vec::with_capacity(interface.implementations.len());

    for imp in &interface.implementations {
        if imp.name == merged_name {
            debug!(implementation = %imp.name, "skipping implementation named like the merged type");
            continue;
        }
        if !seen.insert(imp.name.as_str()) {
            return Err(CodegenError::DuplicateImplementation {
                interface: interface.name.clone(),
                name: imp.name.clone(),
                namespace: imp.namespace.clone(),
            });
        }
        accepted.push(imp.clone());
    }

    Ok(accepted)
}

/// Names that end up in generated source: the interface, its methods and
/// the accepted implementations.
fn validate_names(
    interface: &InterfaceDescriptor,
    variants: &[ImplementationDescriptor],
) -> Result<(), CodegenError> {
    let empty = |what: &'static str| CodegenError::EmptyName {
        interface: interface.name.clone(),
        what,
    };

    if interface.name.trim().is_empty() {
        return Err(empty("interface"));
    }
    for method in &interface.methods {
        if method.name.trim().is_empty() {
            return Err(empty("method"));
        }
        if method.params.iter().any(|p| p.name.trim().is_empty()) {
            return Err(empty("parameter"));
        }
    }
    for imp in variants {
        if imp.name.trim().is_empty() {
            return Err(empty("implementation"));
        }
        if imp.fields.iter().any(|f| f.name.trim().is_empty()) {
            return Err(empty("field"));
        }
    }
    Ok(())
}

/// Emit the discriminant newtype and the merged struct.
pub fn emit_layout(w: &mut SourceWriter, desc: &MergedTypeDescriptor, config: &CodegenConfig) {
    let type_id = desc.type_id_name();

    w.line("#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]");
    w.line(&format!("pub struct {type_id}(pub u32);"));
    w.blank_line();
    w.line("#[allow(non_upper_case_globals)]");
    w.block(&format!("impl {type_id}"), |w| {
        for id in desc.variant_ids() {
            let variant = desc.variant(id);
            w.line(&format!("pub const {}: Self = Self({});", variant.name, id.tag()));
        }
    });
    w.blank_line();

    w.line(&format!("#[derive({})]", config.merged_derives().join(", ")));
    w.block(&format!("pub struct {}", desc.name), |w| {
        w.line(&format!("pub {DISCRIMINANT_FIELD}: {type_id},"));
        for field in desc.merge.fields() {
            w.line(&format!("pub {}: {},", field.name, field.ty));
        }
    });
}
