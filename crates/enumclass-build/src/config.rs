//! `enumclass.toml`: which source files make up the program.
//!
//! ```toml
//! [[source]]
//! module = "crate::elements"
//! path = "src/elements.rs"
//! ```

use crate::{
    error::{BuildError, ConfigError},
    source::SourceProvider,
};
use serde::Deserialize;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, relative to the crate manifest.
pub const CONFIG_FILE: &str = "enumclass.toml";

///
/// BuildConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceEntry>,
}

///
/// SourceEntry
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SourceEntry {
    pub module: String,
    pub path: PathBuf,
}

impl BuildConfig {
    /// Read a config file; relative source paths resolve against its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        Self::parse(&contents, base_dir)
    }

    pub fn parse(contents: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(contents)?;

        let mut modules = HashSet::new();
        for entry in &mut config.sources {
            if !modules.insert(entry.module.clone()) {
                return Err(ConfigError::DuplicateModule(entry.module.clone()));
            }
            if entry.path.is_relative() {
                entry.path = base_dir.join(&entry.path);
            }
        }

        Ok(config)
    }

    /// Every file the generated output depends on.
    pub fn inputs(&self) -> impl Iterator<Item = &Path> {
        self.sources.iter().map(|entry| entry.path.as_path())
    }

    /// Parse every listed source into one provider.
    pub fn provider(&self) -> Result<SourceProvider, BuildError> {
        let mut provider = SourceProvider::new();
        for entry in &self.sources {
            provider.add_file(&entry.module, &entry.path)?;
        }

        Ok(provider)
    }
}

///
/// TESTS
///
