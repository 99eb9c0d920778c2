use crate::{
    prelude::*,
    validate::reserved::{is_keyword, is_reserved_word},
};
use convert_case::{Case, Casing};
use std::collections::HashMap;

// constant_ident
// SCREAMING_SNAKE_CASE form of a member name, raw-escaped when it is a keyword
pub fn constant_ident(name: &str) -> Result<String, SchemaError> {
    let constant = name.to_case(Case::UpperSnake);

    if constant.is_empty() || is_reserved_word(&constant) {
        return Err(SchemaError::ReservedIdentifier(constant));
    }

    if is_keyword(&constant) {
        Ok(format!("r#{constant}"))
    } else {
        Ok(constant)
    }
}

// check_constants
// takes (member name, constant) pairs in declaration order
pub fn check_constants<'a, I>(pairs: I) -> Result<(), SchemaError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (member, constant) in pairs {
        if let Some(first) = seen.insert(constant, member) {
            return Err(SchemaError::DuplicateConstant {
                constant: constant.to_string(),
                first: first.to_string(),
                second: member.to_string(),
            });
        }
    }

    Ok(())
}

// validate_type_name
pub fn validate_type_name(name: &str) -> Result<(), SchemaError> {
    let bare = name.strip_prefix("r#").unwrap_or(name);

    if bare.is_empty() || is_reserved_word(bare) || is_keyword(bare) {
        return Err(SchemaError::ReservedIdentifier(bare.to_string()));
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_screaming_snake_case() {
        assert_eq!(constant_ident("Element").unwrap(), "ELEMENT");
        assert_eq!(constant_ident("InProgress").unwrap(), "IN_PROGRESS");
    }

    #[test]
    fn lowercase_members_still_produce_plain_constants() {
        assert_eq!(constant_ident("match").unwrap(), "MATCH");
        assert_eq!(constant_ident("type").unwrap(), "TYPE");
    }

    #[test]
    fn detects_colliding_constants() {
        let err = check_constants([("InProgress", "IN_PROGRESS"), ("In_Progress", "IN_PROGRESS")])
            .unwrap_err();

        assert_eq!(
            err,
            SchemaError::DuplicateConstant {
                constant: "IN_PROGRESS".into(),
                first: "InProgress".into(),
                second: "In_Progress".into(),
            }
        );
    }

    #[test]
    fn distinct_constants_pass() {
        assert!(check_constants([("A", "A"), ("B", "B")]).is_ok());
    }

    #[test]
    fn keyword_type_names_are_rejected() {
        assert!(validate_type_name("StatusClass").is_ok());
        assert_eq!(
            validate_type_name("r#match"),
            Err(SchemaError::ReservedIdentifier("match".into()))
        );
        assert!(validate_type_name("Self").is_err());
    }
}
