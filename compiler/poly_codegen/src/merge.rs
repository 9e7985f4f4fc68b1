//! Field merging.
//!
//! Assigns every field of every implementation to a slot of the merged
//! type. Slots are shared across implementations when their types match,
//! but an implementation never claims the same slot twice, so the slot
//! count per type is the largest number of same-typed fields any single
//! implementation declares.
//!
//! The assignment is greedy and order-sensitive: implementations are
//! visited in discovery order, fields in declaration order, and each field
//! takes the first free slot of its type. Reordering implementations can
//! produce a different (equally valid) layout.

use std::fmt;

use poly_ir::ImplementationDescriptor;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::naming::slot_name;

/// Position of an implementation in discovery order.
///
/// Doubles as the implementation's discriminant value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ImplId(u32);

impl ImplId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ImplId(index)
    }

    /// Index into the implementation list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Discriminant value in generated code.
    #[inline]
    pub const fn tag(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ImplId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One field position of the merged type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedField {
    /// Fixed at creation.
    pub ty: String,
    /// `{type}_{index}`, unique within the merged type.
    pub name: String,
    /// Creation index.
    pub index: usize,
    /// Which field of which implementation lives here.
    sources: FxHashMap<ImplId, String>,
}

impl MergedField {
    fn new(ty: &str, index: usize) -> Self {
        MergedField {
            ty: ty.to_string(),
            name: slot_name(ty, index),
            index,
            sources: FxHashMap::default(),
        }
    }

    /// Name of the field `imp` stores here, if it claimed this slot.
    pub fn source_field(&self, imp: ImplId) -> Option<&str> {
        self.sources.get(&imp).map(String::as_str)
    }

    /// Number of implementations using this slot.
    pub fn user_count(&self) -> usize {
        self.sources.len()
    }
}

/// Result of merging: the slot list and, per implementation, the slot of
/// each of its fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMerge {
    fields: Vec<MergedField>,
    /// `assignments[imp][field]` is a slot index.
    assignments: Vec<Vec<usize>>,
}

impl FieldMerge {
    /// Slots in creation order.
    pub fn fields(&self) -> &[MergedField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Slot indices of `imp`'s fields, in declaration order.
    pub fn assignments(&self, imp: ImplId) -> &[usize] {
        self.assignments
            .get(imp.index())
            .map_or(&[][..], Vec::as_slice)
    }

    /// Slot holding field number `field` of `imp`.
    pub fn slot_of(&self, imp: ImplId, field: usize) -> Option<&MergedField> {
        let slot = *self.assignments(imp).get(field)?;
        self.fields.get(slot)
    }

    /// Number of slots typed `ty`.
    pub fn count_of_type(&self, ty: &str) -> usize {
        self.fields.iter().filter(|f| f.ty == ty).count()
    }
}

/// Merge the fields of `implementations`, given in discovery order.
pub fn merge_fields(implementations: &[ImplementationDescriptor]) -> FieldMerge {
    let mut merge = FieldMerge::default();
    let mut used_this_round: FxHashSet<usize> = FxHashSet::default();

    for (position, imp) in implementations.iter().enumerate() {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "implementation counts are far below u32::MAX"
        )]
        let id = ImplId::new(position as u32);
        used_this_round.clear();
        let mut slots = Vec::with_capacity(imp.fields.len());

        for field in &imp.fields {
            let ty = field.ty.trim();
            let found = merge
                .fields
                .iter()
                .position(|slot| slot.ty == ty && !used_this_round.contains(&slot.index));

            let slot = if let Some(slot) = found {
                trace!(
                    implementation = %imp.name,
                    field = %field.name,
                    slot = %merge.fields[slot].name,
                    users = merge.fields[slot].user_count(),
                    "reusing slot"
                );
                slot
            } else {
                let index = merge.fields.len();
                let created = MergedField::new(ty, index);
                debug!(
                    implementation = %imp.name,
                    field = %field.name,
                    slot = %created.name,
                    "creating slot"
                );
                merge.fields.push(created);
                index
            };

            merge.fields[slot].sources.insert(id, field.name.clone());
            used_this_round.insert(slot);
            slots.push(slot);
        }

        merge.assignments.push(slots);
    }

    merge
}
