//! Display descriptions for enum members.
//!
//! Tiers, first non-empty wins:
//! 1. summary of the doc comment
//! 2. the description attribute
//! 3. a plain `////` or `<summary>` comment directly above the member
//! 4. the member name
//!
//! Markup problems never fail resolution; the tier is skipped with a warning.

use enumclass_schema::prelude::*;

/// Tags understood inside summaries. Anything else between `<` and `>` is
/// ordinary text (`Vec<u8>` stays as written).
const KNOWN_TAGS: &[&str] = &[
    "b",
    "br",
    "c",
    "code",
    "description",
    "em",
    "example",
    "i",
    "inheritdoc",
    "item",
    "list",
    "para",
    "paramref",
    "remarks",
    "returns",
    "see",
    "seealso",
    "summary",
    "term",
    "typeparamref",
    "value",
];

/// Tag attributes whose value replaces the tag.
const KEPT_ATTRIBUTES: &[&str] = &["cref", "langword", "name", "href"];

// resolve
#[must_use]
pub fn resolve(member: &EnumMember) -> String {
    tier(member, member.raw_documentation.as_deref().map(summary))
        .or_else(|| member.raw_annotation_description.as_deref().and_then(non_blank))
        .or_else(|| tier(member, member.raw_comment.as_deref().map(comment_summary)))
        .unwrap_or_else(|| member.name.clone())
}

fn tier(member: &EnumMember, result: Option<Result<Option<String>, SchemaError>>) -> Option<String> {
    match result? {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(member = %member.name, error = %err, "ignoring member documentation");
            None
        }
    }
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();

    (!text.is_empty()).then(|| text.to_string())
}

// summary
// `<summary>` content when the markup is present, otherwise the first paragraph
pub fn summary(text: &str) -> Result<Option<String>, SchemaError> {
    let text = strip_block_stars(text);

    let body = match text.find("<summary>") {
        Some(start) => {
            let inner = &text[start + "<summary>".len()..];
            let end = inner.find("</summary>").ok_or_else(|| {
                SchemaError::MalformedDocumentation("`<summary>` is never closed".to_string())
            })?;

            inner[..end].to_string()
        }
        None if text.contains("</summary>") => {
            return Err(SchemaError::MalformedDocumentation(
                "`</summary>` without an opening tag".to_string(),
            ));
        }
        None => first_paragraph(&text),
    };

    Ok(non_blank(&collapse(&strip_tags(&body)?)))
}

// comment_summary
// only comments that look like documentation count
fn comment_summary(comment: &str) -> Result<Option<String>, SchemaError> {
    let lines: Vec<&str> = comment.lines().map(str::trim).collect();
    let qualifies = comment.contains("<summary>") || lines.iter().any(|line| line.starts_with("////"));

    if !qualifies {
        return Ok(None);
    }

    let stripped = lines
        .iter()
        .map(|line| line.trim_start_matches('/'))
        .collect::<Vec<_>>()
        .join("\n");

    summary(&stripped)
}

// /** */ docs keep their leading ` * ` decoration
fn strip_block_stars(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix('*')
                .filter(|rest| !rest.starts_with('*'))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn first_paragraph(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// strip_tags
// removes known tags, keeping the value of reference attributes
fn strip_tags(text: &str) -> Result<String, SchemaError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        if !is_known_tag(after) {
            out.push('<');
            rest = after;
            continue;
        }

        let close = after.find('>').ok_or_else(|| {
            SchemaError::MalformedDocumentation(format!(
                "unterminated tag `<{}`",
                after.split_whitespace().next().unwrap_or_default()
            ))
        })?;

        if let Some(value) = kept_attribute(&after[..close]) {
            out.push_str(value);
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    Ok(out)
}

// a tag name must end at `>`, `/` or whitespace, so `Vec<i32>` is not `<i>`
fn is_known_tag(after_open: &str) -> bool {
    let body = after_open.strip_prefix('/').unwrap_or(after_open);
    let len = body
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(body.len());
    let terminated = body[len..]
        .chars()
        .next()
        .is_none_or(|c| c == '>' || c == '/' || c.is_whitespace());

    terminated && KNOWN_TAGS.contains(&&body[..len])
}

fn kept_attribute(tag: &str) -> Option<&str> {
    KEPT_ATTRIBUTES.iter().find_map(|attr| {
        let start = tag.find(&format!("{attr}=\""))? + attr.len() + 2;
        let len = tag[start..].find('"')?;
        let value = &tag[start..start + len];

        // `T:Namespace.Type` references keep the type name
        Some(value.rsplit(['.', ':']).next().unwrap_or(value))
    })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> EnumMember {
        EnumMember::new("Element2", "crate::m::TestElements::Element2")
    }

    #[test]
    fn name_is_the_last_resort() {
        assert_eq!(resolve(&member()), "Element2");
    }

    #[test]
    fn each_tier_alone() {
        let annotated = EnumMember::new("Element3", "crate::E::Element3")
            .with_annotation_description("This is element 3");
        let documented =
            EnumMember::new("Element1", "crate::E::Element1").with_documentation(" First element");
        let bare = EnumMember::new("Element6", "crate::E::Element6");

        assert_eq!(resolve(&annotated), "This is element 3");
        assert_eq!(resolve(&documented), "First element");
        assert_eq!(resolve(&bare), "Element6");
    }

    #[test]
    fn annotation_only_yields_annotation() {
        let member = member().with_annotation_description("Second element");

        assert_eq!(resolve(&member), "Second element");
    }

    #[test]
    fn documentation_outranks_annotation() {
        let member = member()
            .with_annotation_description("from attribute")
            .with_documentation(" From the docs.\n\n More detail here.");

        assert_eq!(resolve(&member), "From the docs.");
    }

    #[test]
    fn summary_markup_is_unwrapped_and_joined() {
        let member = member().with_documentation(
            " <summary>\n The second\n   element of <see cref=\"T:Crate.TestElements\"/>.\n </summary>\n <remarks>ignored</remarks>",
        );

        assert_eq!(resolve(&member), "The second element of TestElements.");
    }

    #[test]
    fn unknown_angle_brackets_are_text() {
        let member = member().with_documentation(" Stores a Vec<i32> buffer.");

        assert_eq!(resolve(&member), "Stores a Vec<i32> buffer.");
    }

    #[test]
    fn whitespace_only_documentation_is_absent() {
        let member = member()
            .with_documentation("   \n  ")
            .with_annotation_description("  ");

        assert_eq!(resolve(&member), "Element2");
    }

    #[test]
    fn malformed_documentation_falls_through() {
        let member = member()
            .with_documentation(" <summary> never closed")
            .with_annotation_description("fallback");

        assert_eq!(resolve(&member), "fallback");
        assert!(matches!(
            summary(" <summary> never closed"),
            Err(SchemaError::MalformedDocumentation(_))
        ));
        assert!(matches!(
            summary(" broken <see cref=\"X\""),
            Err(SchemaError::MalformedDocumentation(_))
        ));
    }

    #[test]
    fn four_slash_comments_count_as_documentation() {
        let member = member().with_comment("//// Summary from\n//// a comment.");

        assert_eq!(resolve(&member), "Summary from a comment.");
    }

    #[test]
    fn summary_comments_count_as_documentation() {
        let member = member().with_comment("// <summary>\n// Tagged comment\n// </summary>");

        assert_eq!(resolve(&member), "Tagged comment");
    }

    #[test]
    fn ordinary_comments_are_ignored() {
        let member = member().with_comment("// implementation note");

        assert_eq!(resolve(&member), "Element2");
    }

    #[test]
    fn annotation_outranks_comment() {
        let member = member()
            .with_comment("//// From the comment")
            .with_annotation_description("From the attribute");

        assert_eq!(resolve(&member), "From the attribute");
    }

    #[test]
    fn block_doc_decoration_is_removed() {
        let member = member().with_documentation("\n * Block style\n * docs.\n ");

        assert_eq!(resolve(&member), "Block style docs.");
    }
}
