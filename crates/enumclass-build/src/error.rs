use enumclass_schema::Diagnostic;
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// SourceError
///

#[derive(Debug, ThisError)]
pub enum SourceError {
    #[error("failed to parse module `{module}`: {source}")]
    Parse {
        module: String,
        #[source]
        source: syn::Error,
    },

    #[error("invalid module path `{0}`")]
    InvalidModule(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

///
/// SinkError
///

#[derive(Debug, ThisError)]
pub enum SinkError {
    #[error("artifact `{0}` was added twice")]
    DuplicateArtifactName(String),

    #[error("artifact name `{0}` is not a plain file name")]
    InvalidHint(String),

    #[error("failed to encode generation cache: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("module `{0}` is listed more than once")]
    DuplicateModule(String),

    #[error("environment variable `{0}` is not set")]
    MissingEnv(&'static str),
}

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("{} declaration(s) failed to generate", .0.len())]
    Diagnostics(Vec<Diagnostic>),

    #[error("generation was cancelled")]
    Cancelled,
}
