//! Conversion codegen.
//!
//! Per implementation: an unpack constructor (`From<&Merged>`), a pack
//! method writing into an existing merged value, and a pack method building
//! a fresh one. Packing only touches the discriminant and the slots the
//! implementation claimed; whatever a previous variant left in other slots
//! stays there and is never read back under this discriminant.

use crate::config::CodegenConfig;
use crate::layout::MergedTypeDescriptor;
use crate::merge::ImplId;
use crate::naming::{pack_into_method, pack_method, DISCRIMINANT_FIELD};
use crate::writer::SourceWriter;

/// Full source of the artifact for implementation `id`.
pub fn emit_implementation_source(
    desc: &MergedTypeDescriptor,
    id: ImplId,
    config: &CodegenConfig,
) -> String {
    let mut w = SourceWriter::new(config.indent.as_str());
    w.preamble(&config.header, &desc.implementation_imports(id));
    emit_unpack(&mut w, desc, id);
    w.blank_line();
    emit_pack(&mut w, desc, id);
    w.finish()
}

/// `impl From<&Merged> for Impl`.
fn emit_unpack(w: &mut SourceWriter, desc: &MergedTypeDescriptor, id: ImplId) {
    let variant = desc.variant(id);
    let merged = &desc.name;
    let source = if variant.fields.is_empty() { "_s" } else { "s" };

    w.block(&format!("impl From<&{merged}> for {}", variant.name), |w| {
        w.block(&format!("fn from({source}: &{merged}) -> Self"), |w| {
            w.block("Self", |w| {
                for (i, field) in variant.fields.iter().enumerate() {
                    if let Some(slot) = desc.merge.slot_of(id, i) {
                        w.line(&format!("{}: {source}.{},", field.name, slot.name));
                    }
                }
            });
        });
    });
}

/// `write_to_{merged}` and `to_{merged}`.
fn emit_pack(w: &mut SourceWriter, desc: &MergedTypeDescriptor, id: ImplId) {
    let variant = desc.variant(id);
    let merged = &desc.name;
    let pack_into = pack_into_method(merged);
    let pack = pack_method(merged);

    w.block(&format!("impl {}", variant.name), |w| {
        w.block(&format!("pub fn {pack_into}(&self, s: &mut {merged})"), |w| {
            w.line(&format!(
                "s.{DISCRIMINANT_FIELD} = {}::{};",
                desc.type_id_name(),
                variant.name
            ));
            for slot in desc.merge.fields() {
                if let Some(field) = slot.source_field(id) {
                    w.line(&format!("s.{} = self.{field};", slot.name));
                }
            }
        });
        w.blank_line();
        w.block(&format!("pub fn {pack}(&self) -> {merged}"), |w| {
            w.lines(&[
                format!("let mut s = {merged}::default();"),
                format!("self.{pack_into}(&mut s);"),
                "s".to_string(),
            ]);
        });
    });
}
