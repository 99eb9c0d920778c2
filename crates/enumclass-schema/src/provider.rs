//! The input boundary of the generation pipeline.
//!
//! Discovery of declarations and enums belongs to the host. Whatever reads
//! the program (a parsed source tree, a test fixture) implements
//! `SymbolProvider`; the pipeline only performs in-memory lookups against it.

use crate::prelude::*;

///
/// SymbolProvider
///

pub trait SymbolProvider {
    /// Every struct declaration that may carry the marker, in a stable order.
    fn declarations(&self) -> &[DeclSymbol];

    /// Resolve a type reference as written inside module `scope`.
    /// `None` when nothing with that path exists.
    fn resolve_type(&self, scope: &str, reference: &str) -> Option<TypeSymbol>;
}

///
/// DeclSymbol
///
/// A candidate target declaration as the provider saw it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeclSymbol {
    pub name: String,
    pub module_path: String,
    pub visibility: String,

    /// Outer attributes other than the marker, rendered as tokens.
    pub attributes: Vec<String>,

    /// Last path segment of every derived trait.
    pub derives: Vec<String>,

    pub fieldless: bool,
    pub generic: bool,

    /// `None` when the marker is absent.
    pub marker: Option<Result<MarkerArgs, SchemaError>>,
}

impl DeclSymbol {
    #[must_use]
    pub fn path(&self) -> String {
        if self.module_path.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.module_path, self.name)
        }
    }

    #[must_use]
    pub fn derives(&self, name: &str) -> bool {
        self.derives.iter().any(|derive| derive == name)
    }
}

///
/// TypeSymbol
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeSymbol {
    Enum(EnumSymbol),

    /// Anything that is not an enum: a struct, a type alias, a union.
    Other { path: String, kind: String },
}

///
/// EnumSymbol
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumSymbol {
    pub path: String,
    pub repr: Option<Repr>,
    pub members: Vec<MemberSymbol>,
}

///
/// MemberSymbol
///
/// One variant plus the documentation and comment lookups the description
/// resolver needs.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemberSymbol {
    /// Identifier as written, including any `r#` prefix.
    pub ident: String,
    pub unit: bool,
    pub is_default: bool,
    pub description: Option<String>,
    pub documentation: Option<String>,
    pub comment: Option<String>,
}

impl MemberSymbol {
    #[must_use]
    pub fn unit(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            unit: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.ident.strip_prefix("r#").unwrap_or(&self.ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_identifier_prefix_is_not_part_of_the_name() {
        assert_eq!(MemberSymbol::unit("r#Type").name(), "Type");
        assert_eq!(MemberSymbol::unit("Active").name(), "Active");
    }
}
