// src/primitive_map.rs

use std::collections::HashMap;

// Closed set of built-in scalar names the extractor emits, with their
// TypeScript equivalents. Numeric width and signedness collapse to `number`;
// the consumer is a type-declaration surface, not a binary codec.
const BUILTIN_PRIMITIVES: &[(&str, &str)] = &[
    ("void", "void"),
    ("bool", "boolean"),
    ("double", "number"),
    ("uint64_t", "number"),
    ("size_t", "number"),
    ("string", "string"),
];

/// Immutable lookup table from encoded scalar names to target type names.
///
/// Built once from the closed built-in set, optionally extended by
/// configuration overrides, then only queried. Unknown names return `None`
/// and are resolved by the caller (identifier pass-through or fallback),
/// never by this table.
#[derive(Debug, Clone)]
pub struct PrimitiveMap {
    entries: HashMap<String, String>,
}

impl PrimitiveMap {
    pub fn builtin() -> Self {
        let entries = BUILTIN_PRIMITIVES
            .iter()
            .map(|&(encoded, target)| (encoded.to_string(), target.to_string()))
            .collect();
        PrimitiveMap { entries }
    }

    /// Merges configuration overrides into the table. An override with a key
    /// already present replaces the built-in mapping.
    pub fn extend_with(&mut self, overrides: &HashMap<String, String>) {
        for (encoded, target) in overrides {
            self.entries.insert(encoded.clone(), target.clone());
        }
    }

    pub fn lookup(&self, encoded: &str) -> Option<&str> {
        self.entries.get(encoded).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PrimitiveMap {
    fn default() -> Self {
        PrimitiveMap::builtin()
    }
}
