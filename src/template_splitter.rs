// src/template_splitter.rs

use std::fmt;

// Template instantiation markers as they appear in extracted signatures.
// The extractor escapes '<' but not '>', so the usual close is ")>"; some
// extraction paths escape both, so ")&gt;" is accepted as well.
pub const TEMPLATE_MARKER: &str = "&lt;";
pub const TEMPLATE_OPEN: &str = "&lt;(";
pub const TEMPLATE_CLOSE: &str = ")>";
pub const TEMPLATE_CLOSE_ESCAPED: &str = ")&gt;";

// Structural parse failures. These are kept distinct from the translator's
// unknown-type fallback so that malformed extractor output stays visible
// instead of silently turning into a fallback annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitterError {
    UnbalancedTemplate(String),
    TrailingInput(String),
    EmptyParameterList(String),
    EmptyParameter(String),
}

impl fmt::Display for SplitterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitterError::UnbalancedTemplate(s) => {
                write!(f, "Unbalanced template markers in signature: '{}'", s)
            }
            SplitterError::TrailingInput(s) => {
                write!(f, "Unexpected text after closing template marker in signature: '{}'", s)
            }
            SplitterError::EmptyParameterList(s) => {
                write!(f, "Empty template parameter list in signature: '{}'", s)
            }
            SplitterError::EmptyParameter(s) => {
                write!(f, "Zero-length token in template signature: '{}'", s)
            }
        }
    }
}

impl std::error::Error for SplitterError {}

/// Outer type name and top-level parameter tokens of one template
/// instantiation. Parameters keep their raw encoded form; translating them
/// is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParts {
    pub outer: String,
    pub params: Vec<String>,
}

/// True when the signature contains a template instantiation marker.
pub fn contains_template(encoded: &str) -> bool {
    encoded.contains(TEMPLATE_MARKER)
}

/// Splits `Outer&lt;(A,B,...)>` into the outer name and the top-level
/// parameter tokens.
///
/// The scan tracks nesting depth: `&lt;(` opens a level, `)>` or `)&gt;`
/// closes one, and a comma separates parameters only at the outer list's own
/// level. Commas inside a nested template's parameter list therefore stay
/// inside that parameter token. `Outer&lt;(Inner&lt;(A,B)>,C)>` yields
/// exactly two parameters, `Inner&lt;(A,B)>` and `C`.
pub fn split_template(encoded: &str) -> Result<TemplateParts, SplitterError> {
    let marker_idx = match encoded.find(TEMPLATE_MARKER) {
        Some(idx) => idx,
        None => return Err(SplitterError::UnbalancedTemplate(encoded.to_string())),
    };
    if !encoded[marker_idx..].starts_with(TEMPLATE_OPEN) {
        // A bare "&lt;" marker with no "(" behind it is not a template
        // instantiation this grammar knows.
        return Err(SplitterError::UnbalancedTemplate(encoded.to_string()));
    }
    let outer = &encoded[..marker_idx];
    if outer.is_empty() {
        return Err(SplitterError::EmptyParameter(encoded.to_string()));
    }

    let body_start = marker_idx + TEMPLATE_OPEN.len();
    let mut depth: usize = 1;
    let mut params: Vec<String> = Vec::new();
    let mut token_start = body_start;
    let mut i = body_start;
    // (index of the closing marker, index of the first byte after it)
    let mut list_end: Option<(usize, usize)> = None;

    while i < encoded.len() {
        let rest = &encoded[i..];
        if rest.starts_with(TEMPLATE_OPEN) {
            depth += 1;
            i += TEMPLATE_OPEN.len();
        } else if rest.starts_with(TEMPLATE_CLOSE_ESCAPED) {
            depth -= 1;
            if depth == 0 {
                list_end = Some((i, i + TEMPLATE_CLOSE_ESCAPED.len()));
                break;
            }
            i += TEMPLATE_CLOSE_ESCAPED.len();
        } else if rest.starts_with(TEMPLATE_CLOSE) {
            depth -= 1;
            if depth == 0 {
                list_end = Some((i, i + TEMPLATE_CLOSE.len()));
                break;
            }
            i += TEMPLATE_CLOSE.len();
        } else if depth == 1 && rest.starts_with(',') {
            params.push(encoded[token_start..i].to_string());
            i += 1;
            token_start = i;
        } else {
            i += rest.chars().next().map(char::len_utf8).unwrap_or(1);
        }
    }

    let (close_idx, after_close) = match list_end {
        Some(pair) => pair,
        None => return Err(SplitterError::UnbalancedTemplate(encoded.to_string())),
    };
    if after_close != encoded.len() {
        // Anything after the closing marker would be a sibling top-level
        // type on the same string; each call handles exactly one type.
        return Err(SplitterError::TrailingInput(encoded.to_string()));
    }

    let last = &encoded[token_start..close_idx];
    if params.is_empty() && last.is_empty() {
        return Err(SplitterError::EmptyParameterList(encoded.to_string()));
    }
    params.push(last.to_string());
    if params.iter().any(|p| p.is_empty()) {
        return Err(SplitterError::EmptyParameter(encoded.to_string()));
    }

    Ok(TemplateParts {
        outer: outer.to_string(),
        params,
    })
}
