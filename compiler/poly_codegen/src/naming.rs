//! Names of generated items.

/// Field of the merged type holding the discriminant.
pub const DISCRIMINANT_FIELD: &str = "current_type_id";

/// Name of the merged type for an interface.
///
/// Strips one leading `marker` (`IShape` → `Shape`). When the name carries
/// no marker, or is nothing but the marker, `fallback_suffix` is appended
/// instead so the merged type never shadows the trait.
pub fn merged_type_name(interface: &str, marker: char, fallback_suffix: &str) -> String {
    match interface.strip_prefix(marker) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => format!("{interface}{fallback_suffix}"),
    }
}

/// Name of the discriminant newtype, `ShapeTypeId`.
pub fn type_id_name(merged: &str) -> String {
    format!("{merged}TypeId")
}

/// Pack-by-reference method, `write_to_shape`.
pub fn pack_into_method(merged: &str) -> String {
    format!("write_to_{}", to_snake_case(merged))
}

/// Pack-by-value method, `to_shape`.
pub fn pack_method(merged: &str) -> String {
    format!("to_{}", to_snake_case(merged))
}

/// Name of the slot created with `index`, e.g. `i32_0` or `vec2_f32_3`.
pub fn slot_name(ty: &str, index: usize) -> String {
    let mut base = to_snake_case(type_base_name(ty));
    if base.is_empty() {
        base.push_str("field");
    } else if base.starts_with(|c: char| c.is_ascii_digit()) {
        base.insert(0, 't');
    }
    format!("{base}_{index}")
}

/// Type text without its leading module path.
///
/// Only `::` outside generic arguments, tuples and arrays counts, so
/// `crate::math::Vec2<crate::units::Meters>` yields
/// `Vec2<crate::units::Meters>`.
pub fn type_base_name(ty: &str) -> &str {
    let ty = ty.trim();
    let bytes = ty.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' | b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                start = i + 2;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    &ty[start..]
}

/// Convert an identifier or type text to `snake_case`.
///
/// Word boundaries are lower→upper transitions, the last capital of an
/// acronym (`IOHandler` → `io_handler`), and any non-alphanumeric run.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            push_separator(&mut out);
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                push_separator(&mut out);
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
    }
}

/// `path::name`, or `crate::name` when `path` is empty.
pub fn qualify(path: &str, name: &str) -> String {
    if path.is_empty() {
        format!("crate::{name}")
    } else {
        format!("{path}::{name}")
    }
}
