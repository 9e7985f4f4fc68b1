//! Descriptors of the fixture interfaces.
//!
//! Each function describes exactly the traits and structs declared in
//! `dispatch_runtime.rs`; the checked-in sources under `fixtures/` are what
//! the generator produces for them.

#![allow(dead_code, reason = "each test binary uses a subset")]

use poly_ir::{ImplementationDescriptor, InterfaceDescriptor, MethodSignature, PassMode, Receiver};

pub fn field_interface() -> InterfaceDescriptor {
    let ns = "crate::fields";
    InterfaceDescriptor::new("IFieldInterface", ns)
        .with_implementation(
            ImplementationDescriptor::new("FieldStructA", ns)
                .with_field("int1", "i32")
                .with_field("int2", "i32"),
        )
        .with_implementation(ImplementationDescriptor::new("FieldStructB", ns).with_field("int", "i32"))
        .with_implementation(
            ImplementationDescriptor::new("FieldStructC", ns)
                .with_field("flag", "bool")
                .with_field("int", "i32"),
        )
}

pub fn correct_implementation() -> InterfaceDescriptor {
    let ns = "crate::correct";
    InterfaceDescriptor::new("ICorrectImplementation", ns)
        .with_method(MethodSignature::new("foo").with_return("i32"))
        .with_implementation(ImplementationDescriptor::new("CorrectImplementationA", ns).with_field("a", "i32"))
        .with_implementation(
            ImplementationDescriptor::new("CorrectImplementationB", ns)
                .with_field("a", "i32")
                .with_field("b", "i32"),
        )
}

pub fn void_method() -> InterfaceDescriptor {
    let ns = "crate::void_method";
    InterfaceDescriptor::new("IVoidMethod", ns)
        .with_method(MethodSignature::new("foo"))
        .with_implementation(ImplementationDescriptor::new("VoidMethodA", ns).with_field("a", "i32"))
        .with_implementation(ImplementationDescriptor::new("VoidMethodB", ns).with_field("b", "i32"))
}

pub fn parameter_method() -> InterfaceDescriptor {
    let ns = "crate::params";
    InterfaceDescriptor::new("IParameterMethod", ns)
        .with_method(
            MethodSignature::new("foo")
                .with_param("a", "i32", PassMode::Ref)
                .with_param("b", "bool", PassMode::In)
                .with_param("c", "i32", PassMode::Out)
                .with_param("s", "String", PassMode::Value),
        )
        .with_implementation(ImplementationDescriptor::new("ParameterMethodA", ns))
        .with_implementation(ImplementationDescriptor::new("ParameterMethodB", ns))
}

pub fn action() -> InterfaceDescriptor {
    let ns = "crate::hierarchy";
    InterfaceDescriptor::new("IAction", ns)
        .with_method(
            MethodSignature::new("perform")
                .with_param("bonus", "i32", PassMode::Value)
                .with_return("i32"),
        )
        .with_method(
            MethodSignature::new("id")
                .with_receiver(Receiver::Shared)
                .with_return("u32")
                .inherited_from("IBase"),
        )
        .with_implementation(ImplementationDescriptor::new("Melee", ns).with_field("power", "i32"))
        .with_implementation(
            ImplementationDescriptor::new("Ranged", ns)
                .with_field("range", "f32")
                .with_field("ammo", "i32"),
        )
}

/// Every fixture interface with the directory holding its sources.
pub fn all() -> Vec<(&'static str, InterfaceDescriptor)> {
    vec![
        ("fields", field_interface()),
        ("correct", correct_implementation()),
        ("void_method", void_method()),
        ("params", parameter_method()),
        ("hierarchy", action()),
    ]
}
