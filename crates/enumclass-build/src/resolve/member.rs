use enumclass_schema::prelude::*;

// lookup
// resolve `reference`, as written in module `scope`, to an enum symbol
pub fn lookup<P>(provider: &P, scope: &str, reference: &str) -> Result<EnumSymbol, SchemaError>
where
    P: SymbolProvider + ?Sized,
{
    match provider.resolve_type(scope, reference) {
        Some(TypeSymbol::Enum(symbol)) => Ok(symbol),
        Some(TypeSymbol::Other { path, kind }) => {
            tracing::debug!(%path, %kind, "enum reference resolved to a non-enum item");

            Err(SchemaError::NotAnEnumeration {
                reference: reference.to_string(),
            })
        }
        None => Err(SchemaError::NotAnEnumeration {
            reference: reference.to_string(),
        }),
    }
}

// members
// ordered raw facts for every variant of `symbol`
pub fn members(symbol: &EnumSymbol) -> Result<Vec<EnumMember>, SchemaError> {
    symbol
        .members
        .iter()
        .map(|member| {
            if !member.unit {
                return Err(SchemaError::UnsupportedVariant {
                    enumeration: symbol.path.clone(),
                    variant: member.name().to_string(),
                });
            }

            let mut resolved =
                EnumMember::new(member.name(), format!("{}::{}", symbol.path, member.ident));
            resolved.raw_annotation_description.clone_from(&member.description);
            resolved.raw_documentation.clone_from(&member.documentation);
            resolved.raw_comment.clone_from(&member.comment);

            Ok(resolved)
        })
        .collect()
}

// resolve
pub fn resolve<P>(provider: &P, scope: &str, reference: &str) -> Result<Vec<EnumMember>, SchemaError>
where
    P: SymbolProvider + ?Sized,
{
    members(&lookup(provider, scope, reference)?)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceProvider;

    const SOURCE: &str = r"
pub enum Status {
    /// Waiting.
    Pending,
    r#Type,
}

pub enum Payload {
    Empty,
    Bytes(Vec<u8>),
}

pub struct Holder;
";

    fn provider() -> SourceProvider {
        SourceProvider::from_sources([("crate::m", SOURCE)]).expect("source parses")
    }

    #[test]
    fn members_are_qualified_and_ordered() {
        let members = resolve(&provider(), "crate::m", "Status").expect("enum resolves");

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "Pending");
        assert_eq!(members[0].qualified_ref, "crate::m::Status::Pending");
        assert_eq!(members[0].raw_documentation.as_deref(), Some(" Waiting."));
        assert_eq!(members[1].name, "Type");
        assert_eq!(members[1].qualified_ref, "crate::m::Status::r#Type");
    }

    #[test]
    fn non_enum_and_unknown_references_fail() {
        let provider = provider();

        for reference in ["Holder", "Nowhere"] {
            assert_eq!(
                resolve(&provider, "crate::m", reference),
                Err(SchemaError::NotAnEnumeration {
                    reference: reference.to_string()
                })
            );
        }
    }

    #[test]
    fn data_carrying_variants_are_rejected() {
        assert_eq!(
            resolve(&provider(), "crate::m", "Payload"),
            Err(SchemaError::UnsupportedVariant {
                enumeration: "crate::m::Payload".into(),
                variant: "Bytes".into(),
            })
        );
    }
}
