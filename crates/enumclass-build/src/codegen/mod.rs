//! Rendering of a `GenerationModel` into its two source artifacts.
//!
//! Every function here is pure: the same model always renders the same text.

mod constants;
mod lookup;

use enumclass_schema::prelude::*;
use syn::{Ident, Path, Visibility};

/// First line of every generated file.
pub const HEADER: &str = "// @generated by enumclass. Do not edit.";

// synthesize
// renders both artifacts or neither
pub fn synthesize(model: &GenerationModel) -> Result<Artifacts, SchemaError> {
    let constants = constants::generate(model)?;
    let lookup = lookup::generate(model)?;

    Ok(Artifacts {
        constants: GeneratedArtifact::new(model.constants_hint(), render(&constants)),
        lookup: GeneratedArtifact::new(model.lookup_hint(), render(&lookup)),
    })
}

fn render(tokens: &TokenStream) -> String {
    format!("{HEADER}\n{tokens}\n")
}

//
// token helpers shared by both artifacts
//

pub(crate) fn ident(name: &str) -> Result<Ident, SchemaError> {
    syn::parse_str(name).map_err(|_| SchemaError::ReservedIdentifier(name.to_string()))
}

pub(crate) fn path(path: &str) -> Result<Path, SchemaError> {
    syn::parse_str(path).map_err(|_| SchemaError::InvalidPath(path.to_string()))
}

pub(crate) fn visibility(vis: &str) -> Result<Visibility, SchemaError> {
    syn::parse_str(vis)
        .map_err(|_| SchemaError::InvalidMarker(format!("invalid visibility `{vis}`")))
}

pub(crate) fn attributes(attrs: &[String]) -> Result<Vec<TokenStream>, SchemaError> {
    attrs
        .iter()
        .map(|attr| {
            attr.parse::<TokenStream>()
                .map_err(|_| SchemaError::InvalidMarker(format!("invalid attribute `{attr}`")))
        })
        .collect()
}

///
/// TESTS
///
