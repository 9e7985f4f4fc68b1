//! Generation-time errors.
//!
//! Generation is total over well-formed descriptors; these errors only
//! catch descriptors that would make the emitted source uncompilable.

use thiserror::Error;

/// An interface whose descriptors cannot be turned into source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum CodegenError {
    /// Two accepted implementations share a name.
    #[error("implementation `{name}` of `{interface}` is declared more than once (again in `{namespace}`)")]
    DuplicateImplementation {
        interface: String,
        name: String,
        namespace: String,
    },

    /// An identifier the generated source needs is empty.
    #[error("{what} in `{interface}` has an empty name")]
    EmptyName {
        interface: String,
        what: &'static str,
    },
}
