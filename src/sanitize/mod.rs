//! Identifier sanitization.
//!
//! Node names end up as the local part of qualified names in RDF/XML, so they
//! must be valid XML NCName tokens. [`sanitize`] maps any path segment or
//! relative path onto that grammar:
//!
//! 1. `/` becomes `__`, keeping a trace of the former hierarchy;
//! 2. a leading run of `.` becomes `dot_`;
//! 3. anything outside `[A-Za-z0-9_\-.]` becomes `_`;
//! 4. an `n` is prepended when the first character is not a letter or `_`.
//!
//! Distinct inputs may collapse onto the same token (`a:b` and `a?b` both
//! become `a_b`). Collisions are reported by the builder, not masked here.
use regex::Regex;
use std::sync::OnceLock;

/// Marker substituted for every path separator.
pub const SEPARATOR_MARKER: &str = "__";
/// Marker substituted for a leading run of dots.
pub const DOT_MARKER: &str = "dot_";

#[derive(Debug)]
pub struct SanitizerPatterns {
    pub leading_dots: Regex,
    pub disallowed: Regex,
}

impl SanitizerPatterns {
    pub fn compile() -> Self {
        let leading_dots = Regex::new(r"^\.+").unwrap();
        let disallowed = Regex::new(r"[^A-Za-z0-9_\-.]").unwrap();
        Self { leading_dots, disallowed }
    }
}

impl Default for SanitizerPatterns {
    fn default() -> Self { Self::compile() }
}

#[derive(Debug, Default)]
pub struct NameSanitizer {
    patterns: SanitizerPatterns,
}

impl NameSanitizer {
    pub fn new() -> Self {
        Self { patterns: SanitizerPatterns::compile() }
    }

    /// Map `token` onto a valid identifier. Total: never fails.
    ///
    /// An empty input yields an empty output; callers pass non-empty names.
    #[must_use]
    pub fn sanitize(&self, token: &str) -> String {
        let flattened = token.replace('/', SEPARATOR_MARKER);
        let undotted = self.patterns.leading_dots.replace(&flattened, DOT_MARKER);
        let cleaned = self.patterns.disallowed.replace_all(&undotted, "_");
        let first = cleaned.chars().next();
        match first {
            Some(c) if !is_name_start(c) => format!("n{cleaned}"),
            _ => cleaned.into_owned(),
        }
    }
}

fn shared() -> &'static NameSanitizer {
    static SANITIZER: OnceLock<NameSanitizer> = OnceLock::new();
    SANITIZER.get_or_init(NameSanitizer::new)
}

/// Sanitize with a process-wide [`NameSanitizer`].
#[must_use]
pub fn sanitize(token: &str) -> String {
    shared().sanitize(token)
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// True if `token` is non-empty and matches `[A-Za-z_][A-Za-z0-9_\-.]*`.
#[must_use]
pub fn is_valid_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_char),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_become_double_underscore() {
        assert_eq!(sanitize("sub/dir"), "sub__dir");
        assert_eq!(sanitize("a/b/c.txt"), "a__b__c.txt");
    }

    #[test]
    fn leading_dots_become_marker() {
        assert_eq!(sanitize(".hidden"), "dot_hidden");
        assert_eq!(sanitize("...x"), "dot_x");
        // only the leading run is replaced
        assert_eq!(sanitize(".a.b"), "dot_a.b");
        assert_eq!(sanitize("."), "dot_");
    }

    #[test]
    fn disallowed_characters_become_underscore() {
        assert_eq!(sanitize("my file (1).txt"), "my_file__1_.txt");
        assert_eq!(sanitize("a:b"), "a_b");
        assert_eq!(sanitize("café"), "caf_");
    }

    #[test]
    fn non_letter_start_gets_prefix() {
        assert_eq!(sanitize("2024-report.pdf"), "n2024-report.pdf");
        assert_eq!(sanitize("-flag"), "n-flag");
        assert_eq!(sanitize("_private"), "_private");
    }

    #[test]
    fn separator_marker_is_applied_before_dot_rule() {
        // "/.x" flattens to "__.x", which no longer starts with a dot
        assert_eq!(sanitize("/.x"), "__.x");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn validity_check_matches_grammar() {
        assert!(is_valid_identifier("root"));
        assert!(is_valid_identifier("dot_git__config"));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("a b"));
    }
}
