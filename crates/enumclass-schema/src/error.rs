use std::fmt;
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Every failure a single declaration's pipeline can hit. Errors stay local to
/// the declaration that produced them.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("`{reference}` does not resolve to an enum")]
    NotAnEnumeration { reference: String },

    #[error("variant `{variant}` of `{enumeration}` carries fields; only unit variants are supported")]
    UnsupportedVariant {
        enumeration: String,
        variant: String,
    },

    #[error("enum `{0}` has no variants")]
    EmptyEnumeration(String),

    #[error("marker on `{0}` is missing its enum argument")]
    MissingTypeArgument(String),

    #[error("invalid marker: {0}")]
    InvalidMarker(String),

    #[error("malformed documentation: {0}")]
    MalformedDocumentation(String),

    #[error("artifact `{0}` was produced twice in one generation pass")]
    DuplicateArtifactName(String),

    #[error("members `{first}` and `{second}` both map to the constant `{constant}`")]
    DuplicateConstant {
        constant: String,
        first: String,
        second: String,
    },

    #[error("the identifier `{0}` is reserved")]
    ReservedIdentifier(String),

    #[error("invalid path `{0}`")]
    InvalidPath(String),
}

impl SchemaError {
    /// Content-level problems degrade to a default instead of failing the
    /// declaration.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedDocumentation(_))
    }
}

///
/// Diagnostic
///
/// A `SchemaError` attached to the declaration it belongs to.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub declaration: String,
    pub error: SchemaError,
}

impl Diagnostic {
    #[must_use]
    pub fn new(declaration: impl Into<String>, error: SchemaError) -> Self {
        Self {
            declaration: declaration.into(),
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.declaration, self.error)
    }
}

impl std::error::Error for Diagnostic {}
