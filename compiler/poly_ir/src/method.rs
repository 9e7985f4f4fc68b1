//! Trait method signatures.

use std::fmt;

/// How a parameter is passed.
///
/// `Ref` and `Out` both render as `&mut T`; they are kept apart so a
/// descriptor round-trips the caller's intent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassMode {
    /// `name: T`
    #[default]
    Value,
    /// `name: &mut T`
    Ref,
    /// `name: &T`
    In,
    /// `name: &mut T`, written by the callee.
    Out,
}

impl PassMode {
    /// Render the parameter type for this pass mode.
    pub fn render_type(self, ty: &str) -> String {
        match self {
            PassMode::Value => ty.to_string(),
            PassMode::Ref | PassMode::Out => format!("&mut {ty}"),
            PassMode::In => format!("&{ty}"),
        }
    }
}

impl fmt::Display for PassMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PassMode::Value => "value",
            PassMode::Ref => "ref",
            PassMode::In => "in",
            PassMode::Out => "out",
        };
        f.write_str(s)
    }
}

/// Receiver of a trait method.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Receiver {
    /// `&mut self`
    #[default]
    Mut,
    /// `&self`
    Shared,
}

impl Receiver {
    /// Source text of the receiver.
    pub fn as_str(self) -> &'static str {
        match self {
            Receiver::Mut => "&mut self",
            Receiver::Shared => "&self",
        }
    }
}

/// One parameter of a method, excluding the receiver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    pub ty: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pass_mode: PassMode,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, pass_mode: PassMode) -> Self {
        Parameter {
            name: name.into(),
            ty: ty.into(),
            pass_mode,
        }
    }

    /// `name: T` with the pass mode applied to `T`.
    pub fn declaration(&self) -> String {
        format!("{}: {}", self.name, self.pass_mode.render_type(&self.ty))
    }
}

/// A method the merged type has to dispatch.
///
/// Methods inherited from super-traits live in the same list as the
/// trait's own methods. `declared_in` names the super-trait so the method
/// lands in the right `impl` block; dispatch is otherwise identical.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodSignature {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<Parameter>,
    /// `None` means the method returns `()`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub return_type: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub receiver: Receiver,
    /// Path of the declaring super-trait; `None` for the interface itself.
    #[cfg_attr(feature = "serde", serde(default))]
    pub declared_in: Option<String>,
}

impl MethodSignature {
    /// A `&mut self` method with no parameters and no return value.
    pub fn new(name: impl Into<String>) -> Self {
        MethodSignature {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            receiver: Receiver::Mut,
            declared_in: None,
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, ty: impl Into<String>, pass_mode: PassMode) -> Self {
        self.params.push(Parameter::new(name, ty, pass_mode));
        self
    }

    /// Set the return type.
    #[must_use]
    pub fn with_return(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Set the receiver kind.
    #[must_use]
    pub fn with_receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = receiver;
        self
    }

    /// Mark the method as inherited from `trait_path`.
    #[must_use]
    pub fn inherited_from(mut self, trait_path: impl Into<String>) -> Self {
        self.declared_in = Some(trait_path.into());
        self
    }

    pub fn returns_unit(&self) -> bool {
        self.return_type.is_none()
    }

    /// `fn name(&mut self, a: T) -> R`, without body or trailing space.
    pub fn declaration(&self) -> String {
        let mut out = format!("fn {}({}", self.name, self.receiver.as_str());
        for param in &self.params {
            out.push_str(", ");
            out.push_str(&param.declaration());
        }
        out.push(')');
        if let Some(ret) = &self.return_type {
            out.push_str(" -> ");
            out.push_str(ret);
        }
        out
    }

    /// Comma-separated argument list forwarding every parameter unchanged.
    ///
    /// Reference parameters are reborrowed and value parameters moved, which
    /// is exactly the pass mode the caller used.
    pub fn forwarding_arguments(&self) -> String {
        self.params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether any parameter is named `name`.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }
}
