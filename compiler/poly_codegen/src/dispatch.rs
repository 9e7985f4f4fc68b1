//! Dispatch codegen.
//!
//! Every trait method of the merged type matches on the discriminant. Each
//! arm rebuilds the implementation from the slots, calls the method on it
//! with the caller's arguments, and packs the implementation back so field
//! mutations survive the call. A discriminant outside the declared tags
//! panics: only a corrupted or hand-built value can hold one.

use poly_ir::{MethodSignature, Receiver};

use crate::config::CodegenConfig;
use crate::layout::{emit_layout, MergedTypeDescriptor};
use crate::merge::ImplId;
use crate::naming::{pack_into_method, DISCRIMINANT_FIELD};
use crate::writer::{fresh_local, SourceWriter};

/// Full source of the merged-type artifact.
pub fn emit_merged_source(desc: &MergedTypeDescriptor, config: &CodegenConfig) -> String {
    let mut w = SourceWriter::new(config.indent.as_str());
    w.preamble(&config.header, &desc.merged_imports());
    emit_layout(&mut w, desc, config);
    emit_dispatch(&mut w, desc);
    w.finish()
}

/// One `impl Trait for Merged` block per declaring trait.
///
/// The interface's own block always comes first, even when empty, so the
/// merged type implements the interface in every case.
pub fn emit_dispatch(w: &mut SourceWriter, desc: &MergedTypeDescriptor) {
    for (trait_path, methods) in trait_groups(desc) {
        w.blank_line();
        w.block(&format!("impl {trait_path} for {}", desc.name), |w| {
            for (i, method) in methods.iter().enumerate() {
                if i > 0 {
                    w.blank_line();
                }
                emit_method(w, desc, trait_path, method);
            }
        });
    }
}

/// Methods grouped by declaring trait, in first-appearance order.
fn trait_groups(desc: &MergedTypeDescriptor) -> Vec<(&str, Vec<&MethodSignature>)> {
    let mut groups: Vec<(&str, Vec<&MethodSignature>)> =
        vec![(desc.interface_name.as_str(), Vec::new())];
    for method in &desc.methods {
        let owner = method
            .declared_in
            .as_deref()
            .unwrap_or(desc.interface_name.as_str());
        if let Some((_, methods)) = groups.iter_mut().find(|(t, _)| *t == owner) {
            methods.push(method);
        } else {
            groups.push((owner, vec![method]));
        }
    }
    groups
}

fn emit_method(
    w: &mut SourceWriter,
    desc: &MergedTypeDescriptor,
    trait_path: &str,
    method: &MethodSignature,
) {
    w.block(&method.declaration(), |w| {
        w.block(&format!("match self.{DISCRIMINANT_FIELD}"), |w| {
            for id in desc.variant_ids() {
                emit_arm(w, desc, trait_path, method, id);
            }
            w.line(&format!(
                "other => panic!(\"unexpected type id {{}} for merged type {}\", other.0),",
                desc.name
            ));
        });
    });
}

fn emit_arm(
    w: &mut SourceWriter,
    desc: &MergedTypeDescriptor,
    trait_path: &str,
    method: &MethodSignature,
    id: ImplId,
) {
    let variant = &desc.variant(id).name;
    let instance = fresh_local("instance", |n| method.has_param(n));
    let result = fresh_local("r", |n| method.has_param(n));
    let pattern = format!("{}::{variant} =>", desc.type_id_name());

    w.block(&pattern, |w| match method.receiver {
        Receiver::Mut => {
            let call = call_expr(trait_path, method, &format!("&mut {instance}"));
            let pack = pack_into_method(&desc.name);
            w.line(&format!("let mut {instance} = {variant}::from(&*self);"));
            if method.returns_unit() {
                w.line(&format!("{call};"));
                w.line(&format!("{instance}.{pack}(self);"));
            } else {
                w.line(&format!("let {result} = {call};"));
                w.line(&format!("{instance}.{pack}(self);"));
                w.line(&result);
            }
        }
        // Nothing can be written back through `&self`.
        Receiver::Shared => {
            let call = call_expr(trait_path, method, &format!("&{instance}"));
            w.line(&format!("let {instance} = {variant}::from(self);"));
            if method.returns_unit() {
                w.line(&format!("{call};"));
            } else {
                w.line(&call);
            }
        }
    });
}

/// `Trait::method(receiver, a, b)`.
fn call_expr(trait_path: &str, method: &MethodSignature, receiver: &str) -> String {
    let args = method.forwarding_arguments();
    if args.is_empty() {
        format!("{trait_path}::{}({receiver})", method.name)
    } else {
        format!("{trait_path}::{}({receiver}, {args})", method.name)
    }
}
