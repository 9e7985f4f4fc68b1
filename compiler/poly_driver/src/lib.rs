//! Generation driver.
//!
//! Runs the per-interface pipeline of `poly_codegen` over a whole
//! [`DescriptorSet`], checks that artifact names stay unique across
//! interfaces, and offers the host-side conveniences around it: loading
//! descriptors from JSON and writing artifacts to disk.
//!
//! # Usage
//!
//! ```ignore
//! use poly_driver::{generate, load_descriptors, write_artifacts, GenerateConfig};
//!
//! let set = load_descriptors(&std::fs::read_to_string("shapes.json")?)?;
//! let output = generate(&set, &GenerateConfig::default());
//! for error in &output.errors {
//!     eprintln!("{error}");
//! }
//! write_artifacts(&output.artifacts, "src/generated".as_ref())?;
//! ```
//!
//! # Architecture
//!
//! ```text
//!        poly_ir
//!           ↓
//!     poly_codegen
//!           ↓
//!     poly_driver  ← this crate
//! ```

mod artifacts;
mod error;
mod output;
mod pipeline;

pub use artifacts::{load_config, load_descriptors, write_artifacts};
pub use error::DriverError;
pub use output::GenerateOutput;
pub use pipeline::{generate, GenerateConfig};

pub use poly_codegen::{Artifact, ArtifactKind, CodegenConfig};
pub use poly_ir::DescriptorSet;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=poly_codegen=debug` or `RUST_LOG=poly_codegen::merge=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
