use crate::resolve::{description, member};
use enumclass_schema::{
    prelude::*,
    validate::{check_constants, constant_ident, validate_type_name},
};

// build
// Ok(None) when the declaration is not marked
pub fn build<P>(provider: &P, decl: &DeclSymbol) -> Result<Option<GenerationModel>, SchemaError>
where
    P: SymbolProvider + ?Sized,
{
    let Some(marker) = &decl.marker else {
        return Ok(None);
    };
    let args = marker.clone()?;

    if !decl.fieldless || decl.generic {
        return Err(SchemaError::InvalidMarker(format!(
            "`{}` must be a fieldless, non-generic struct",
            decl.name
        )));
    }
    validate_type_name(&decl.name)?;
    let target_kind = target_kind(decl)?;

    let enum_ref = args
        .enum_ref
        .ok_or_else(|| SchemaError::MissingTypeArgument(decl.path()))?;
    let symbol = member::lookup(provider, &decl.module_path, &enum_ref)?;
    let members = member::members(&symbol)?;

    if members.is_empty() {
        return Err(SchemaError::EmptyEnumeration(symbol.path));
    }

    let members = members
        .into_iter()
        .map(|member| {
            let description = description::resolve(&member);
            let constant = constant_ident(&member.name)?;

            Ok(ResolvedMember::new(member, description, constant))
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    check_constants(
        members
            .iter()
            .map(|m| (m.name.as_str(), m.constant.as_str())),
    )?;

    let default_member = symbol
        .members
        .iter()
        .find(|m| m.is_default)
        .map(|m| m.name().to_string());

    tracing::debug!(
        declaration = %decl.path(),
        enumeration = %symbol.path,
        members = members.len(),
        "built generation model"
    );

    Ok(Some(GenerationModel {
        target_type_name: decl.name.clone(),
        target_namespace: decl.module_path.clone(),
        target_kind,
        target_visibility: decl.visibility.clone(),
        target_attributes: decl.attributes.clone(),
        enumerate_type_full_name: symbol.path,
        enumerate_underlying_numeric_type: symbol.repr.unwrap_or_default(),
        default_member,
        with_description: args.options.with_description,
        members,
    }))
}

// target_kind
// `Eq` or `Hash` without `PartialEq` would clash with the generated identity impls
fn target_kind(decl: &DeclSymbol) -> Result<TargetKind, SchemaError> {
    let partial_eq = decl.derives("PartialEq");

    if !partial_eq && let Some(derive) = ["Eq", "Hash"].into_iter().find(|d| decl.derives(d)) {
        return Err(SchemaError::InvalidMarker(format!(
            "`{}` derives `{derive}` without `PartialEq`",
            decl.name
        )));
    }

    Ok(TargetKind::from_derives_partial_eq(partial_eq))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceProvider;

    const ELEMENTS: &str = r#"
#[repr(u16)]
pub enum TestElements {
    None,
    /// First element.
    Element1,
    #[description = "Second element"]
    Element2,
    Element3,
}

pub enum Status {
    Active,
    #[default]
    Pending,
}

pub enum Nothing {}

pub enum Clash {
    InProgress,
    In_Progress,
}

pub struct NotAnEnum;
"#;

    fn model_for(target: &str) -> Result<Option<GenerationModel>, SchemaError> {
        let targets = format!("use crate::elements::*;\n{target}");
        let provider =
            SourceProvider::from_sources([("crate::elements", ELEMENTS), ("crate::targets", targets.as_str())])
                .expect("sources parse");
        let decl = provider
            .declarations()
            .iter()
            .find(|d| d.module_path == "crate::targets")
            .expect("target declared");

        build(&provider, decl)
    }

    #[test]
    fn unmarked_declarations_produce_nothing() {
        assert_eq!(model_for("pub struct Plain;"), Ok(None));
    }

    #[test]
    fn builds_ordered_model() {
        let model = model_for("#[enum_class(TestElements)] pub struct TestElementsClass;")
            .expect("model builds")
            .expect("marked");

        let names: Vec<_> = model.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["None", "Element1", "Element2", "Element3"]);
        assert_eq!(model.enumerate_type_full_name, "crate::elements::TestElements");
        assert_eq!(model.enumerate_underlying_numeric_type, Repr::U16);
        assert_eq!(model.target_kind, TargetKind::ValueClass);
        assert_eq!(model.target_namespace, "crate::targets");
        assert!(!model.with_description);
        assert_eq!(model.default_member, None);

        // descriptions resolve even without `with_description`
        assert_eq!(model.members[1].description, "First element.");
        assert_eq!(model.members[2].description, "Second element");
        assert_eq!(model.members[3].description, "Element3");
    }

    #[test]
    fn partial_eq_targets_are_records() {
        let model = model_for(
            "#[enum_class(Status, with_description)] #[derive(PartialEq)] pub struct StatusRecord;",
        )
        .expect("model builds")
        .expect("marked");

        assert_eq!(model.target_kind, TargetKind::DataRecord);
        assert_eq!(model.default_member.as_deref(), Some("Pending"));
        assert_eq!(model.enumerate_underlying_numeric_type, Repr::I32);
        assert!(model.with_description);
    }

    #[test]
    fn rejects_bad_targets() {
        assert_eq!(
            model_for("#[enum_class(NotAnEnum)] pub struct A;"),
            Err(SchemaError::NotAnEnumeration {
                reference: "NotAnEnum".into()
            })
        );
        assert_eq!(
            model_for("#[enum_class] pub struct A;"),
            Err(SchemaError::MissingTypeArgument("crate::targets::A".into()))
        );
        assert_eq!(
            model_for("#[enum_class(Nothing)] pub struct A;"),
            Err(SchemaError::EmptyEnumeration("crate::elements::Nothing".into()))
        );
        assert!(matches!(
            model_for("#[enum_class(Status)] pub struct A { id: u32 }"),
            Err(SchemaError::InvalidMarker(_))
        ));
        assert!(matches!(
            model_for("#[enum_class(Status, colour)] pub struct A;"),
            Err(SchemaError::InvalidMarker(_))
        ));
    }

    #[test]
    fn identity_derives_without_partial_eq_are_rejected() {
        for derive in ["Eq", "Hash", "Eq, Hash"] {
            let target = format!("#[enum_class(Status)] #[derive(Debug, {derive})] pub struct A;");

            assert!(
                matches!(model_for(&target), Err(SchemaError::InvalidMarker(msg)) if msg.contains("without `PartialEq`")),
                "{derive}"
            );
        }

        let record = model_for("#[enum_class(Status)] #[derive(Eq, Hash, PartialEq)] pub struct A;")
            .expect("model builds")
            .expect("marked");
        assert_eq!(record.target_kind, TargetKind::DataRecord);
    }

    #[test]
    fn colliding_constants_are_reported() {
        assert!(matches!(
            model_for("#[enum_class(Clash)] pub struct A;"),
            Err(SchemaError::DuplicateConstant { .. })
        ));
    }
}
