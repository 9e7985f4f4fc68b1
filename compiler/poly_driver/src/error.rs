//! Driver errors.

use std::io;
use std::path::PathBuf;

use poly_codegen::CodegenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    /// Descriptor or config JSON could not be parsed.
    #[error("invalid descriptor input: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("failed to write `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An artifact name already produced by an earlier interface.
    #[error("artifact `{name}` of `{interface}` collides with an earlier interface")]
    DuplicateArtifact { name: String, interface: String },

    #[error("cannot generate `{interface}`: {source}")]
    Codegen {
        interface: String,
        #[source]
        source: CodegenError,
    },
}

impl DriverError {
    /// Interface the error belongs to, if any.
    pub fn interface(&self) -> Option<&str> {
        match self {
            DriverError::DuplicateArtifact { interface, .. }
            | DriverError::Codegen { interface, .. } => Some(interface.as_str()),
            DriverError::Descriptor(_) | DriverError::Io { .. } => None,
        }
    }
}
