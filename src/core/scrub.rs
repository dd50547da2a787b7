//! Literal text removal: delete every case-insensitive occurrence of a
//! fixed string from a source text.

use regex::RegexBuilder;

/// Errors from the removal transform. Validation failures leave the caller's
/// state untouched.
#[derive(Debug, thiserror::Error)]
pub enum ScrubError {
    #[error("Please enter some text first")]
    EmptySource,
    #[error("Please enter text to remove")]
    EmptyPattern,
    /// Escaped pattern failed to compile (e.g. exceeds the regex size limit).
    #[error("Pattern cannot be used: {0}")]
    Pattern(#[from] regex::Error),
}

/// Remove every non-overlapping, case-insensitive occurrence of `pattern`
/// from `source`, scanning left to right.
///
/// `pattern` is treated as literal text, not a pattern language: all regex
/// metacharacters are escaped before matching, so "a.b" matches only the
/// three-character sequence "a.b".
pub fn remove_literal(source: &str, pattern: &str) -> Result<String, ScrubError> {
    if source.is_empty() {
        return Err(ScrubError::EmptySource);
    }
    if pattern.is_empty() {
        return Err(ScrubError::EmptyPattern);
    }
    let re = RegexBuilder::new(&regex::escape(pattern))
        .case_insensitive(true)
        .build()?;
    Ok(re.replace_all(source, "").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_every_occurrence() {
        let out = remove_literal("foo bar foo baz foo", "foo").unwrap();
        assert_eq!(out, " bar  baz ");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let out = remove_literal("Foo bar FOO baz fOo", "foo").unwrap();
        assert_eq!(out, " bar  baz ");
    }

    #[test]
    fn non_matching_text_is_untouched() {
        let out = remove_literal("hello world", "xyz").unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn metacharacters_are_literal() {
        // ".*" must remove only the exact substring ".*", not everything.
        let out = remove_literal("a.*b and a!b", ".*").unwrap();
        assert_eq!(out, "ab and a!b");
    }

    #[test]
    fn all_listed_metacharacters_round_trip() {
        let meta = r". * + ? ^ $ { } ( ) | [ ] \";
        let source = format!("x{}x", meta);
        let out = remove_literal(&source, meta).unwrap();
        assert_eq!(out, "xx");
    }

    #[test]
    fn overlapping_matches_advance_past_each_match() {
        // "aa" in "aaaa": two non-overlapping pairs, nothing left.
        let out = remove_literal("aaaa", "aa").unwrap();
        assert_eq!(out, "");
        // "aaa": one pair removed, the trailing "a" survives.
        let out = remove_literal("aaa", "aa").unwrap();
        assert_eq!(out, "a");
    }

    #[test]
    fn empty_source_is_a_validation_error() {
        assert!(matches!(
            remove_literal("", "foo"),
            Err(ScrubError::EmptySource)
        ));
    }

    #[test]
    fn empty_pattern_is_a_validation_error() {
        assert!(matches!(
            remove_literal("foo", ""),
            Err(ScrubError::EmptyPattern)
        ));
    }

    #[test]
    fn removal_can_produce_empty_output() {
        let out = remove_literal("foofoo", "foo").unwrap();
        assert_eq!(out, "");
    }
}
