// src/config.rs

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Translator configuration, loadable from a JSON file.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change. `primitive_overrides` entries extend or replace the built-in
/// scalar table without a code change.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TypegenConfig {
    /// Base type name emitted when no translation rule matches. The original
    /// encoded text is appended in a comment for diagnostics.
    pub fallback_type: String,
    /// Extra or replacement entries for the primitive table,
    /// encoded name -> target type name.
    pub primitive_overrides: HashMap<String, String>,
}

impl Default for TypegenConfig {
    fn default() -> Self {
        TypegenConfig {
            fallback_type: "any".to_string(),
            primitive_overrides: HashMap::new(),
        }
    }
}

impl TypegenConfig {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(config_path).exists() {
            return Err(format!("Config file not found at: {}", config_path).into());
        }

        let mut file = File::open(config_path)
            .map_err(|e| format!("Failed to open config file {}: {}", config_path, e))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| format!("Failed to read config file {}: {}", config_path, e))?;

        let config: TypegenConfig = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to deserialize JSON from {}: {}", config_path, e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TypegenConfig::default();
        assert_eq!(config.fallback_type, "any");
        assert!(config.primitive_overrides.is_empty());
    }

    #[test]
    fn test_load_partial_config() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{ "primitive_overrides": {{ "float": "number", "int": "number" }} }}"#
        )?;

        let config = TypegenConfig::load(file.path().to_str().unwrap())?;
        assert_eq!(config.fallback_type, "any");
        assert_eq!(
            config.primitive_overrides.get("float"),
            Some(&"number".to_string())
        );
        assert_eq!(config.primitive_overrides.len(), 2);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let result = TypegenConfig::load("no/such/typegen_config.json");
        assert!(result.is_err());
        let msg = result.err().unwrap().to_string();
        assert!(msg.contains("Config file not found"), "unexpected message: {}", msg);
        assert!(msg.contains("no/such/typegen_config.json"));
    }

    #[test]
    fn test_load_malformed_json_reports_path() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "{{ not json")?;

        let result = TypegenConfig::load(file.path().to_str().unwrap());
        assert!(result.is_err());
        let msg = result.err().unwrap().to_string();
        assert!(msg.contains("Failed to deserialize JSON"), "unexpected message: {}", msg);
        Ok(())
    }
}
