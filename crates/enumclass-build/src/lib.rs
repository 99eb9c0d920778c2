//! Build-time generation of closed, lookup-capable value types over enums.
//!
//! A struct marked `#[enum_class(SomeEnum)]` gets a registry of one instance
//! per variant, with names, optional descriptions, numeric values and
//! conversions in every direction. Generation runs from a build script
//! (`build!`) and the output is `include!`d next to the marked struct.

pub mod codegen;
pub mod config;
pub mod error;
pub mod gate;
pub mod model;
pub mod pass;
pub mod resolve;
pub mod sink;
pub mod source;

mod macros;

pub use codegen::synthesize;
pub use config::BuildConfig;
pub use error::{BuildError, ConfigError, SinkError, SourceError};
pub use gate::{CACHE_FILE, GenerationCache, unchanged};
pub use pass::{GenerationPass, PassOutput};
pub use sink::{ArtifactSink, DirectorySink, MemorySink, emit};
pub use source::SourceProvider;

use enumclass_schema::prelude::*;
use std::{
    env,
    path::{Path, PathBuf},
};

///
/// BuildReport
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub written: usize,
    pub reused: usize,
    pub targets: Vec<String>,
}

// generate
// one uncached pass over `provider`
#[must_use]
pub fn generate<P>(provider: &P) -> PassOutput
where
    P: SymbolProvider + Sync + ?Sized,
{
    GenerationPass::new(provider).run(&mut GenerationCache::new())
}

/// Run a full build-script pass. Prefer the `build!` macro.
pub fn run_build_script(config: &Path) -> Result<BuildReport, BuildError> {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .ok_or(ConfigError::MissingEnv("CARGO_MANIFEST_DIR"))?;
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or(ConfigError::MissingEnv("OUT_DIR"))?;

    let config_path = manifest_dir.join(config);
    println!("cargo:rerun-if-changed={}", config_path.display());

    let config = BuildConfig::load(&config_path)?;
    for input in config.inputs() {
        println!("cargo:rerun-if-changed={}", input.display());
    }

    generate_into(&config, &out_dir)
}

/// Generate every declaration named by `config` into `out_dir`. The change
/// gate cache is kept in `out_dir` between runs.
pub fn generate_into(config: &BuildConfig, out_dir: &Path) -> Result<BuildReport, BuildError> {
    let provider = config.provider()?;
    let cache_path = out_dir.join(CACHE_FILE);
    let mut cache = GenerationCache::load(&cache_path);
    let output = GenerationPass::new(&provider).run(&mut cache);

    for diagnostic in &output.diagnostics {
        println!("cargo:warning=enumclass: {diagnostic}");
    }
    if !output.diagnostics.is_empty() {
        return Err(BuildError::Diagnostics(output.diagnostics));
    }
    if output.cancelled {
        return Err(BuildError::Cancelled);
    }

    let mut sink = DirectorySink::new(out_dir)?;
    let written = emit(&output, &mut sink)?;
    cache.save(&cache_path)?;

    Ok(BuildReport {
        out_dir: out_dir.to_path_buf(),
        written,
        reused: output.reused,
        targets: output.artifacts.into_keys().collect(),
    })
}

///
/// TESTS
///
