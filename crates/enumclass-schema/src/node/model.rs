use crate::prelude::*;
use convert_case::{Case, Casing};

///
/// GenerationModel
///
/// Canonical input of the code synthesizer. Rebuilt on every pass and
/// compared structurally by the change gate, so every field that can affect
/// the emitted text must live here.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GenerationModel {
    pub target_type_name: String,
    pub target_namespace: String,
    pub target_kind: TargetKind,

    /// Visibility tokens of the target declaration (`pub`, `pub(crate)`, empty).
    pub target_visibility: String,

    /// Outer attributes re-emitted on the generated struct, marker excluded.
    pub target_attributes: Vec<String>,

    pub enumerate_type_full_name: String,
    pub enumerate_underlying_numeric_type: Repr,

    /// Variant carrying `#[default]`, if the enum declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_member: Option<String>,

    pub with_description: bool,
    pub members: Vec<ResolvedMember>,
}

impl GenerationModel {
    /// Fully qualified path of the generated type.
    #[must_use]
    pub fn target_path(&self) -> String {
        if self.target_namespace.is_empty() {
            self.target_type_name.clone()
        } else {
            format!("{}::{}", self.target_namespace, self.target_type_name)
        }
    }

    /// The member bound to the `Empty` sentinel.
    #[must_use]
    pub fn empty_member(&self) -> Option<&ResolvedMember> {
        self.members.first()
    }

    /// The member whose value counts as the enum's default.
    #[must_use]
    pub fn default_variant(&self) -> Option<&ResolvedMember> {
        self.default_member
            .as_ref()
            .and_then(|name| self.members.iter().find(|m| &m.name == name))
    }

    #[must_use]
    pub fn hint_stem(&self) -> String {
        self.target_type_name.to_case(Case::Snake)
    }

    #[must_use]
    pub fn constants_hint(&self) -> String {
        format!("{}_constants.rs", self.hint_stem())
    }

    #[must_use]
    pub fn lookup_hint(&self) -> String {
        format!("{}_lookup.rs", self.hint_stem())
    }
}

///
/// GeneratedArtifact
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GeneratedArtifact {
    pub hint_name: String,
    pub source_text: String,
}

impl GeneratedArtifact {
    #[must_use]
    pub fn new(hint_name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            hint_name: hint_name.into(),
            source_text: source_text.into(),
        }
    }
}

///
/// Artifacts
///
/// The pair produced for one model. Always complete; there is no way to hold
/// only one half.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Artifacts {
    pub constants: GeneratedArtifact,
    pub lookup: GeneratedArtifact,
}

impl Artifacts {
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        [&self.constants, &self.lookup].into_iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<GeneratedArtifact> {
        vec![self.constants, self.lookup]
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn model(members: &[&str]) -> GenerationModel {
        GenerationModel {
            target_type_name: "OrderStatusClass".into(),
            target_namespace: "crate::orders".into(),
            target_kind: TargetKind::ValueClass,
            target_visibility: "pub".into(),
            target_attributes: Vec::new(),
            enumerate_type_full_name: "crate::orders::OrderStatus".into(),
            enumerate_underlying_numeric_type: Repr::I32,
            default_member: Some("Pending".into()),
            with_description: false,
            members: members
                .iter()
                .map(|name| {
                    ResolvedMember::new(
                        EnumMember::new(*name, format!("crate::orders::OrderStatus::{name}")),
                        (*name).to_string(),
                        name.to_uppercase(),
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn hints_use_snake_case_target_name() {
        let model = model(&["Pending"]);

        assert_eq!(model.constants_hint(), "order_status_class_constants.rs");
        assert_eq!(model.lookup_hint(), "order_status_class_lookup.rs");
        assert_eq!(model.target_path(), "crate::orders::OrderStatusClass");
    }

    #[test]
    fn empty_member_is_first_declared() {
        let model = model(&["Shipped", "Pending"]);

        assert_eq!(model.empty_member().map(|m| m.name.as_str()), Some("Shipped"));
        assert_eq!(model.default_variant().map(|m| m.name.as_str()), Some("Pending"));
    }

    #[test]
    fn member_order_is_part_of_equality() {
        assert_ne!(model(&["A", "B"]), model(&["B", "A"]));
        assert_eq!(model(&["A", "B"]), model(&["A", "B"]));
    }
}
