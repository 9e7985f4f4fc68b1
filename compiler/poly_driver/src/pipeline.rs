//! Multi-interface generation.
//!
//! Interfaces are independent, so each one runs as its own task. Results
//! are collected in input order and only then checked against each other,
//! which keeps the outcome identical between parallel and sequential runs.

use poly_codegen::{generate_interface, CodegenConfig, CodegenError, InterfaceArtifacts};
use poly_ir::{DescriptorSet, InterfaceDescriptor};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::{DriverError, GenerateOutput};

/// Settings for one generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub codegen: CodegenConfig,
    /// Generate interfaces on the rayon thread pool.
    pub parallel: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            codegen: CodegenConfig::default(),
            parallel: true,
        }
    }
}

impl GenerateConfig {
    #[must_use]
    pub fn with_codegen(mut self, codegen: CodegenConfig) -> Self {
        self.codegen = codegen;
        self
    }

    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Generate every interface of `set`.
///
/// A failing interface is reported in [`GenerateOutput::errors`] and
/// contributes no artifacts; the others are unaffected.
#[tracing::instrument(level = "debug", skip_all, fields(interfaces = set.len(), parallel = config.parallel))]
pub fn generate(set: &DescriptorSet, config: &GenerateConfig) -> GenerateOutput {
    let run = |interface: &InterfaceDescriptor| generate_interface(interface, &config.codegen);
    let results: Vec<Result<Option<InterfaceArtifacts>, CodegenError>> = if config.parallel {
        set.interfaces.par_iter().map(run).collect()
    } else {
        set.interfaces.iter().map(run).collect()
    };

    let mut output = GenerateOutput::default();
    let mut names: FxHashSet<String> = FxHashSet::default();

    for (interface, result) in set.interfaces.iter().zip(results) {
        match result {
            Ok(Some(artifacts)) => {
                let clash = artifacts
                    .iter()
                    .find(|a| names.contains(&a.name))
                    .map(|a| a.name.clone());
                if let Some(name) = clash {
                    warn!(interface = %interface.name, artifact = %name, "artifact name collision");
                    output.errors.push(DriverError::DuplicateArtifact {
                        name,
                        interface: interface.name.clone(),
                    });
                    continue;
                }
                names.extend(artifacts.iter().map(|a| a.name.clone()));
                output.artifacts.extend(artifacts.into_vec());
            }
            Ok(None) => {
                debug!(interface = %interface.name, "skipped: no implementations");
                output.skipped.push(interface.name.clone());
            }
            Err(source) => {
                warn!(interface = %interface.name, error = %source, "generation failed");
                output.errors.push(DriverError::Codegen {
                    interface: interface.name.clone(),
                    source,
                });
            }
        }
    }

    debug!(
        artifacts = output.artifacts.len(),
        skipped = output.skipped.len(),
        errors = output.errors.len(),
        "generation finished"
    );
    output
}
