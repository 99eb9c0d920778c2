//! Metadata model shared by every enumclass generation stage.
//!
//! ## Crate layout
//! - `node`: enum members, resolved members, the generation model and the
//!   marker attribute arguments.
//! - `provider`: the symbol-provider boundary the pipeline reads from.
//! - `types`: small closed vocabularies (`Repr`, `TargetKind`).
//! - `validate`: identifier policy for emitted names.

pub mod error;
pub mod node;
pub mod provider;
pub mod types;
pub mod validate;

/// Name of the marker attribute recognized on target declarations.
pub const MARKER_ATTRIBUTE: &str = "enum_class";

/// Name of the marker option enabling per-member descriptions.
pub const WITH_DESCRIPTION_OPTION: &str = "with_description";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::{Diagnostic, SchemaError},
        node::*,
        provider::{DeclSymbol, EnumSymbol, MemberSymbol, SymbolProvider, TypeSymbol},
        types::{Repr, TargetKind},
    };
    pub use darling::FromMeta;
    pub use proc_macro2::TokenStream;
    pub use quote::{ToTokens, format_ident, quote};
    pub use serde::{Deserialize, Serialize};
}

pub use error::{Diagnostic, SchemaError};
