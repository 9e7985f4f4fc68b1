//! Polystruct IR - Descriptor Model
//!
//! Plain data describing one trait ("interface") and the value types that
//! implement it. The generator never talks to a live compiler; whatever
//! discovery pass produced these descriptors, the codegen only sees what is
//! in here.
//!
//! - [`MethodSignature`] / [`Parameter`] / [`PassMode`]: the trait surface
//! - [`ImplementationDescriptor`] / [`FieldDescriptor`]: one implementing struct
//! - [`InterfaceDescriptor`]: a trait plus its implementations, in discovery order
//! - [`DescriptorSet`]: the input of one generation pass
//!
//! # Serialization
//!
//! With the `serde` feature every type derives `Serialize`/`Deserialize`.
//! Optional members default when absent, so hand-written JSON stays short.

mod declaration;
mod method;

pub use declaration::{DescriptorSet, FieldDescriptor, ImplementationDescriptor, InterfaceDescriptor};
pub use method::{MethodSignature, Parameter, PassMode, Receiver};
