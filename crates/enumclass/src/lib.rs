//! ## Crate layout
//! - `build`: source provider, generation pass, sinks and the build-script
//!   entry point.
//! - `schema`: the metadata model, marker arguments and identifier policy.
//!
//! Typical use is a build script calling `enumclass::build!()` and a module
//! that `include!`s the generated files next to the marked struct.

pub use enumclass_build as build;
pub use enumclass_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use enumclass_build::build;

///
/// Prelude
///

pub mod prelude {
    pub use crate::build::{
        ArtifactSink, BuildConfig, BuildError, DirectorySink, GenerationCache, GenerationPass,
        MemorySink, PassOutput, SourceProvider,
    };
    pub use crate::schema::{
        Diagnostic, SchemaError,
        node::{GeneratedArtifact, GenerationModel},
        provider::SymbolProvider,
    };
}
