// src/signature_core.rs

// Marker strings used by the interface-description extractor for
// reference and const qualifiers on encoded type signatures.
pub const CONST_REF_PREFIX: &str = "r.q(const).";
pub const REF_PREFIX: &str = "r.";
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Applies one step of prefix normalization to an encoded signature.
///
/// Rules are tried in order and the first match wins:
/// 1. `r.q(const).` reference-to-const wrapper is dropped.
/// 2. `r.` plain reference wrapper is dropped.
/// 3. One leading namespace segment (`utilities::`, `std::`, ...) is dropped.
///
/// Returns `Some(remainder)` when a rule matched, `None` when the string is
/// already a bare token. Callers recurse on the remainder until `None`.
pub fn strip_qualifier(encoded: &str) -> Option<&str> {
    if let Some(rest) = encoded.strip_prefix(CONST_REF_PREFIX) {
        return Some(rest);
    }
    if let Some(rest) = encoded.strip_prefix(REF_PREFIX) {
        return Some(rest);
    }
    // A namespace prefix only counts when the leading segment is purely
    // alphanumeric; a separator further inside the string (e.g. inside a
    // template parameter list) must not trigger stripping here.
    if let Some(idx) = encoded.find(NAMESPACE_SEPARATOR) {
        let segment = &encoded[..idx];
        if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Some(&encoded[idx + NAMESPACE_SEPARATOR.len()..]);
        }
    }
    None
}

/// True when the token is a plain interface type name: a letter followed by
/// letters and digits only. Underscore-bearing tokens are deliberately
/// excluded so that unknown scalar-shaped names (`int128_t` and friends)
/// reach the caller's fallback path instead of passing through unmapped.
pub fn is_bare_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_const_reference_wrapper() {
        assert_eq!(strip_qualifier("r.q(const).double"), Some("double"));
    }

    #[test]
    fn test_strip_plain_reference_wrapper() {
        assert_eq!(strip_qualifier("r.double"), Some("double"));
    }

    #[test]
    fn test_const_reference_checked_before_plain_reference() {
        // "r.q(const)." starts with "r." as well; the longer rule must win,
        // otherwise the remainder would be the nonsense token "q(const).double".
        assert_eq!(strip_qualifier("r.q(const).Model"), Some("Model"));
    }

    #[test]
    fn test_strip_single_namespace_segment() {
        assert_eq!(
            strip_qualifier("utilities::CommandLineParser"),
            Some("CommandLineParser")
        );
        assert_eq!(strip_qualifier("std::vector"), Some("vector"));
    }

    #[test]
    fn test_nested_namespace_stripped_one_segment_at_a_time() {
        assert_eq!(strip_qualifier("ell::api::Map"), Some("api::Map"));
        assert_eq!(strip_qualifier("api::Map"), Some("Map"));
    }

    #[test]
    fn test_no_rule_matches_bare_token() {
        assert_eq!(strip_qualifier("double"), None);
        assert_eq!(strip_qualifier("CompiledMap"), None);
        assert_eq!(strip_qualifier(""), None);
    }

    #[test]
    fn test_namespace_separator_inside_template_body_ignored() {
        // The separator is preceded by non-alphanumeric text, so this is not
        // a leading namespace qualifier.
        assert_eq!(strip_qualifier("vector&lt;(std::Map)>"), None);
    }

    #[test]
    fn test_is_bare_identifier() {
        assert!(is_bare_identifier("CompiledMap"));
        assert!(is_bare_identifier("vector"));
        assert!(is_bare_identifier("Matrix3d"));
        assert!(!is_bare_identifier(""));
        assert!(!is_bare_identifier("int128_t"));
        assert!(!is_bare_identifier("3dMatrix"));
        assert!(!is_bare_identifier("a::b"));
        assert!(!is_bare_identifier("Foo&lt;(Bar)>"));
    }
}
