use crate::{WITH_DESCRIPTION_OPTION, prelude::*};
use darling::ast::NestedMeta;
use syn::Meta;

///
/// MarkerOptions
///
/// Named options of `#[enum_class(..)]`. Unknown options are rejected.
///

#[derive(Clone, Debug, Default, Eq, FromMeta, Hash, PartialEq)]
pub struct MarkerOptions {
    #[darling(default)]
    pub with_description: bool,
}

///
/// MarkerArgs
///
/// `#[enum_class(EnumPath, with_description)]` as a plain configuration
/// value. `enum_ref` is `None` when the marker names no enum at all.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct MarkerArgs {
    pub enum_ref: Option<String>,
    pub options: MarkerOptions,
}

impl MarkerArgs {
    /// Read the marker from an attribute already known to be `enum_class`.
    pub fn from_meta(meta: &Meta) -> Result<Self, SchemaError> {
        match meta {
            Meta::Path(_) => Ok(Self::default()),
            Meta::List(list) => Self::parse(list.tokens.clone()),
            Meta::NameValue(_) => Err(SchemaError::InvalidMarker(
                "expected `#[enum_class(EnumPath, ..)]`".to_string(),
            )),
        }
    }

    /// Parse the argument list between the marker's parentheses.
    pub fn parse(tokens: TokenStream) -> Result<Self, SchemaError> {
        let mut items = NestedMeta::parse_meta_list(tokens)
            .map_err(|err| SchemaError::InvalidMarker(err.to_string()))?;

        // the enum is the only positional argument and must come first
        let enum_ref = match items.first() {
            Some(NestedMeta::Meta(Meta::Path(path))) if !path.is_ident(WITH_DESCRIPTION_OPTION) => {
                let rendered = path_to_string(path);
                items.remove(0);

                Some(rendered)
            }
            _ => None,
        };

        let options = MarkerOptions::from_list(&items)
            .map_err(|err| SchemaError::InvalidMarker(err.to_string()))?;

        Ok(Self { enum_ref, options })
    }
}

// path_to_string
#[must_use]
pub fn path_to_string(path: &syn::Path) -> String {
    path.to_token_stream().to_string().replace(' ', "")
}

///
/// TESTS
///
