use crate::prelude::*;
use derive_more::Deref;

///
/// EnumMember
///
/// Raw facts about one enum variant, in declaration order. Nothing here is
/// interpreted yet; the description resolver decides what the comments mean.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EnumMember {
    /// Variant name without any `r#` prefix.
    pub name: String,

    /// Path expression evaluating to the variant, e.g. `crate::m::Status::Active`.
    pub qualified_ref: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_annotation_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_documentation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_comment: Option<String>,
}

impl EnumMember {
    #[must_use]
    pub fn new(name: impl Into<String>, qualified_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualified_ref: qualified_ref.into(),
            raw_annotation_description: None,
            raw_documentation: None,
            raw_comment: None,
        }
    }

    #[must_use]
    pub fn with_annotation_description(mut self, description: impl Into<String>) -> Self {
        self.raw_annotation_description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.raw_documentation = Some(documentation.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.raw_comment = Some(comment.into());
        self
    }
}

///
/// ResolvedMember
///
/// An `EnumMember` with its display description settled. The description is
/// never empty.
///

#[derive(Clone, Debug, Deref, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ResolvedMember {
    #[deref]
    #[serde(flatten)]
    pub member: EnumMember,

    pub description: String,

    /// Rendered identifier of the mirrored string constant.
    pub constant: String,
}

impl ResolvedMember {
    #[must_use]
    pub const fn new(member: EnumMember, description: String, constant: String) -> Self {
        Self {
            member,
            description,
            constant,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_member_derefs_to_raw_facts() {
        let member = EnumMember::new("Active", "crate::Status::Active")
            .with_annotation_description("Currently active");
        let resolved = ResolvedMember::new(member, "Currently active".into(), "ACTIVE".into());

        assert_eq!(resolved.name, "Active");
        assert_eq!(resolved.qualified_ref, "crate::Status::Active");
        assert_eq!(
            resolved.raw_annotation_description.as_deref(),
            Some("Currently active")
        );
    }

    #[test]
    fn absent_facts_are_not_serialized() {
        let member = EnumMember::new("Active", "crate::Status::Active");
        let json = serde_json::to_value(&member).expect("serialize member");

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Active",
                "qualified_ref": "crate::Status::Active",
            })
        );
    }
}
