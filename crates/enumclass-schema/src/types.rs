use crate::prelude::*;
use derive_more::Display;

///
/// Repr
///
/// Integer storage of an enumerated type, read from `#[repr(..)]`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Repr {
    #[display("i8")]
    I8,
    #[display("i16")]
    I16,
    #[default]
    #[display("i32")]
    I32,
    #[display("i64")]
    I64,
    #[display("i128")]
    I128,
    #[display("isize")]
    Isize,
    #[display("u8")]
    U8,
    #[display("u16")]
    U16,
    #[display("u32")]
    U32,
    #[display("u64")]
    U64,
    #[display("u128")]
    U128,
    #[display("usize")]
    Usize,
}

impl Repr {
    /// Parse a `#[repr(..)]` argument; non-integer reprs (`C`, `transparent`)
    /// return `None`.
    #[must_use]
    pub fn from_ident(ident: &str) -> Option<Self> {
        let repr = match ident {
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "i128" => Self::I128,
            "isize" => Self::Isize,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "u128" => Self::U128,
            "usize" => Self::Usize,
            _ => return None,
        };

        Some(repr)
    }
}

impl ToTokens for Repr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = format_ident!("{self}");

        tokens.extend(quote!(#ident));
    }
}

///
/// TargetKind
///
/// `DataRecord` targets already derive structural equality, so the
/// synthesizer must not emit its own.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum TargetKind {
    #[default]
    ValueClass,
    DataRecord,
}

impl TargetKind {
    #[must_use]
    pub const fn from_derives_partial_eq(derives_partial_eq: bool) -> Self {
        if derives_partial_eq {
            Self::DataRecord
        } else {
            Self::ValueClass
        }
    }

    #[must_use]
    pub const fn emits_equality(self) -> bool {
        matches!(self, Self::ValueClass)
    }
}

///
/// TESTS
///
