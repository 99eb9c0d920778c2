use std::{collections::HashSet, sync::LazyLock};

///
/// KEYWORDS
/// https://doc.rust-lang.org/reference/keywords.html
///

static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut words = Vec::new();

    // strict
    words.extend(vec![
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
        "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while", "async", "await", "dyn",
    ]);

    // reserved
    words.extend(vec![
        "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "typeof",
        "unsized", "virtual", "yield", "try",
    ]);

    words.into_iter().collect()
});

///
/// RESERVED_WORDS
/// keywords that cannot be written as raw identifiers
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["self", "Self", "super", "crate", "_"].into_iter().collect());

/// Check if an identifier is a keyword, raw-able or not.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// Check if an identifier can never be emitted, not even as `r#word`.
#[must_use]
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_and_reserved_keywords_are_known() {
        for word in ["match", "type", "async", "gen", "yield"] {
            assert!(is_keyword(word), "{word}");
        }

        assert!(!is_keyword("Match"));
        assert!(!is_keyword("TYPE"));
    }

    #[test]
    fn path_keywords_cannot_be_raw() {
        for word in ["self", "Self", "super", "crate", "_"] {
            assert!(is_reserved_word(word), "{word}");
        }

        assert!(!is_reserved_word("match"));
    }
}
