//! Host-side input and output.

use std::fs;
use std::path::{Path, PathBuf};

use poly_codegen::Artifact;
use poly_ir::DescriptorSet;
use tracing::debug;

use crate::{DriverError, GenerateConfig};

/// Parse a descriptor set from JSON.
pub fn load_descriptors(json: &str) -> Result<DescriptorSet, DriverError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a generation config from JSON; missing fields keep their defaults.
pub fn load_config(json: &str) -> Result<GenerateConfig, DriverError> {
    Ok(serde_json::from_str(json)?)
}

/// Write each artifact to `dir/<artifact name>`, creating `dir` if needed.
///
/// Returns the written paths in artifact order.
#[tracing::instrument(level = "debug", skip_all, fields(dir = %dir.display(), count = artifacts.len()))]
pub fn write_artifacts(artifacts: &[Artifact], dir: &Path) -> Result<Vec<PathBuf>, DriverError> {
    fs::create_dir_all(dir).map_err(|source| DriverError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(&artifact.name);
        fs::write(&path, &artifact.source).map_err(|source| DriverError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), kind = %artifact.kind, "wrote artifact");
        written.push(path);
    }
    Ok(written)
}
