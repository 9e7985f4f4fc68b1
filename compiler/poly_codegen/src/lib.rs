//! Tagged-Union Code Generation
//!
//! Turns a trait and its value-type implementations into one fixed-layout
//! struct that implements the trait without boxing or virtual calls. The
//! struct carries a discriminant plus a merged set of fields; each trait
//! method matches on the discriminant, rebuilds the matching
//! implementation, forwards the call, and writes the implementation back.
//!
//! # Architecture
//!
//! ```text
//! InterfaceDescriptor
//!        ↓
//!   build_layout        (accept implementations, merge_fields)
//!        ↓
//! MergedTypeDescriptor
//!     ↙        ↘
//! emit_merged_source   emit_implementation_source (one per implementation)
//!     ↘        ↙
//!   InterfaceArtifacts
//! ```
//!
//! The pipeline is a pure function of its input: no I/O, no shared state
//! between interfaces.

mod config;
pub mod conversion;
pub mod dispatch;
mod error;
pub mod layout;
pub mod merge;
pub mod naming;
pub mod writer;

use std::fmt;

use poly_ir::InterfaceDescriptor;
use tracing::debug;

pub use config::{CodegenConfig, DEFAULT_HEADER};
pub use conversion::emit_implementation_source;
pub use dispatch::emit_merged_source;
pub use error::CodegenError;
pub use layout::{build_layout, MergedTypeDescriptor};
pub use merge::{merge_fields, FieldMerge, ImplId, MergedField};
pub use writer::SourceWriter;

/// What an artifact contains.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Discriminant, merged struct and dispatching trait impls.
    MergedType,
    /// Unpack and pack conversions of one implementation.
    Implementation,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::MergedType => f.write_str("merged type"),
            ArtifactKind::Implementation => f.write_str("implementation"),
        }
    }
}

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Artifact {
    /// File name, unique across a generation pass.
    pub name: String,
    /// Type the artifact is generated for.
    pub type_name: String,
    /// Module the artifact is meant to be included into.
    pub namespace: String,
    pub kind: ArtifactKind,
    pub source: String,
}

/// All artifacts of one interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterfaceArtifacts {
    pub merged: Artifact,
    /// One per accepted implementation, in discriminant order.
    pub implementations: Vec<Artifact>,
}

impl InterfaceArtifacts {
    /// Merged artifact first, then implementations.
    pub fn into_vec(self) -> Vec<Artifact> {
        let mut out = Vec::with_capacity(self.implementations.len() + 1);
        out.push(self.merged);
        out.extend(self.implementations);
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        std::iter::once(&self.merged).chain(self.implementations.iter())
    }
}

/// Generate every artifact for `interface`.
///
/// Returns `Ok(None)` when the interface has no accepted implementation.
#[tracing::instrument(level = "debug", skip_all, fields(interface = %interface.name))]
pub fn generate_interface(
    interface: &InterfaceDescriptor,
    config: &CodegenConfig,
) -> Result<Option<InterfaceArtifacts>, CodegenError> {
    let Some(desc) = build_layout(interface, config)? else {
        debug!("no implementations, nothing to generate");
        return Ok(None);
    };

    let merged = Artifact {
        name: format!("{}{}", desc.name, config.artifact_suffix),
        type_name: desc.name.clone(),
        namespace: desc.namespace.clone(),
        kind: ArtifactKind::MergedType,
        source: emit_merged_source(&desc, config),
    };

    let implementations = desc
        .variant_ids()
        .map(|id| {
            let variant = desc.variant(id);
            Artifact {
                name: format!("{}.{}{}", variant.name, desc.name, config.artifact_suffix),
                type_name: variant.name.clone(),
                namespace: variant.namespace.clone(),
                kind: ArtifactKind::Implementation,
                source: emit_implementation_source(&desc, id, config),
            }
        })
        .collect();

    debug!(merged = %desc.name, variants = desc.variants.len(), "generated artifacts");
    Ok(Some(InterfaceArtifacts {
        merged,
        implementations,
    }))
}
