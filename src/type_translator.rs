// src/type_translator.rs

use crate::config::TypegenConfig;
use crate::primitive_map::PrimitiveMap;
use crate::signature_core;
use crate::template_splitter::{self, SplitterError};
use log::warn;
use std::fmt;

// Template nesting in real interface declarations stays in single digits;
// anything past this bound is malformed or adversarial input.
const MAX_RECURSION_DEPTH: usize = 64;

// 1. TranslateError Enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    Splitter(SplitterError),
    DepthExceeded(String),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Splitter(e) => write!(f, "Splitter error: {}", e),
            TranslateError::DepthExceeded(s) => {
                write!(f, "Recursion depth limit exceeded while translating: '{}'", s)
            }
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Splitter(ref e) => Some(e),
            TranslateError::DepthExceeded(_) => None,
        }
    }
}

impl From<SplitterError> for TranslateError {
    fn from(err: SplitterError) -> TranslateError {
        TranslateError::Splitter(err)
    }
}

// 2. Translator
/// Translates encoded native type signatures into TypeScript type
/// expressions.
///
/// Holds only immutable configuration (the primitive table and the fallback
/// type name), so one instance can be shared freely across threads and two
/// calls with the same input always produce the same output.
#[derive(Debug, Clone)]
pub struct Translator {
    primitives: PrimitiveMap,
    fallback_type: String,
}

impl Translator {
    pub fn new(config: &TypegenConfig) -> Self {
        let mut primitives = PrimitiveMap::builtin();
        primitives.extend_with(&config.primitive_overrides);
        Translator {
            primitives,
            fallback_type: config.fallback_type.clone(),
        }
    }

    /// Translates one encoded signature. Total: always returns a type
    /// expression, substituting the fallback annotation when the input does
    /// not parse. This is the contract the surrounding declaration generator
    /// relies on; it must receive *something* for every member.
    pub fn translate_type(&self, encoded: &str) -> String {
        match self.translate_checked(encoded) {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Falling back to '{}' for signature '{}': {}", self.fallback_type, encoded, e);
                self.fallback(encoded)
            }
        }
    }

    /// Like [`translate_type`](Self::translate_type), but structural parse
    /// failures (unbalanced or empty template markers) surface as errors
    /// instead of being absorbed into the fallback annotation.
    pub fn translate_checked(&self, encoded: &str) -> Result<String, TranslateError> {
        self.translate_at_depth(encoded, 0)
    }

    fn translate_at_depth(&self, encoded: &str, depth: usize) -> Result<String, TranslateError> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(TranslateError::DepthExceeded(encoded.to_string()));
        }

        // a. Qualifier and namespace prefixes come off the whole current
        //    string first, so a const-reference-to-template reaches the
        //    template branch with its wrapper already gone.
        if let Some(rest) = signature_core::strip_qualifier(encoded) {
            return self.translate_at_depth(rest, depth + 1);
        }

        // b. Template instantiation: translate the outer name and every
        //    top-level parameter independently, then recombine.
        if template_splitter::contains_template(encoded) {
            let parts = template_splitter::split_template(encoded)?;
            let outer = self.translate_at_depth(&parts.outer, depth + 1)?;
            let mut translated_params = Vec::with_capacity(parts.params.len());
            for param in &parts.params {
                translated_params.push(self.translate_at_depth(param, depth + 1)?);
            }
            return Ok(format!("{}<{}>", outer, translated_params.join(",")));
        }

        // c. Built-in scalar names. Checked before the identifier
        //    pass-through: "bool" must become "boolean", not survive as a
        //    plausible-looking identifier.
        if let Some(mapped) = self.primitives.lookup(encoded) {
            return Ok(mapped.to_string());
        }

        // d. Anything identifier-shaped is assumed to be a previously
        //    declared interface type and passes through verbatim.
        if signature_core::is_bare_identifier(encoded) {
            return Ok(encoded.to_string());
        }

        // e. Nothing matched. Emit the fallback annotation carrying the
        //    original text; an unrecognized token is not an error.
        Ok(self.fallback(encoded))
    }

    fn fallback(&self, encoded: &str) -> String {
        format!("{} /* {} */", self.fallback_type, encoded)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Translator::new(&TypegenConfig::default())
    }
}
