//! Result of a generation pass.

use poly_codegen::Artifact;

use crate::DriverError;

#[derive(Debug, Default)]
pub struct GenerateOutput {
    /// Artifacts of every successful interface, in input order.
    pub artifacts: Vec<Artifact>,
    /// Interfaces without accepted implementations.
    pub skipped: Vec<String>,
    /// One entry per failed interface, in input order.
    pub errors: Vec<DriverError>,
}

impl GenerateOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Look up an artifact by file name.
    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }
}
