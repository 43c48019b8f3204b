//! Configuration structures and validation
//!
//! This module defines the TOML schema for locale rule sets.

use breakdex_core::{BoundaryError, BoundaryKind, Result};
use serde::{Deserialize, Serialize};

/// Root rule-set configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub kinds: Kinds,
    #[serde(default)]
    pub sentence: SentenceRules,
}

/// Rule-set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Boundary kinds the rule set provides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kinds {
    #[serde(default = "all_kinds")]
    pub enabled: Vec<BoundaryKind>,
}

impl Default for Kinds {
    fn default() -> Self {
        Self {
            enabled: all_kinds(),
        }
    }
}

/// Sentence tailoring
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceRules {
    #[serde(default)]
    pub case_sensitive: bool,
    /// Words that end with a full stop without ending the sentence
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

fn all_kinds() -> Vec<BoundaryKind> {
    BoundaryKind::ALL.to_vec()
}

impl RuleSetConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RuleSetConfig = toml::from_str(source)
            .map_err(|e| BoundaryError::Config(format!("failed to parse rule set: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(BoundaryError::Config(
                "metadata.code must not be empty".to_string(),
            ));
        }
        if self.kinds.enabled.is_empty() {
            return Err(BoundaryError::Config(format!(
                "rule set '{}' enables no boundary kind",
                self.metadata.code
            )));
        }
        for abbrev in &self.sentence.abbreviations {
            if abbrev.trim().is_empty() {
                return Err(BoundaryError::Config(format!(
                    "rule set '{}' has a blank abbreviation",
                    self.metadata.code
                )));
            }
            if abbrev.chars().any(char::is_whitespace) {
                return Err(BoundaryError::Config(format!(
                    "abbreviation '{abbrev}' in rule set '{}' contains whitespace",
                    self.metadata.code
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_enables_everything() {
        let config = RuleSetConfig::from_toml_str(
            r#"
            [metadata]
            code = "xx"
            name = "Test"
            "#,
        )
        .unwrap();

        assert_eq!(config.kinds.enabled, BoundaryKind::ALL.to_vec());
        assert!(config.sentence.abbreviations.is_empty());
        assert!(!config.sentence.case_sensitive);
    }

    #[test]
    fn test_kinds_are_lowercase_names() {
        let config = RuleSetConfig::from_toml_str(
            r#"
            [metadata]
            code = "xx"
            name = "Test"

            [kinds]
            enabled = ["line", "word"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.kinds.enabled,
            vec![BoundaryKind::Line, BoundaryKind::Word]
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = RuleSetConfig::from_toml_str(
            r#"
            [metadata]
            code = "xx"
            name = "Test"

            [kinds]
            enabled = ["paragraph"]
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, BoundaryError::Config(_)));
    }

    #[test]
    fn test_validation_errors() {
        let empty_kinds = r#"
            [metadata]
            code = "xx"
            name = "Test"

            [kinds]
            enabled = []
        "#;
        assert!(RuleSetConfig::from_toml_str(empty_kinds).is_err());

        let spaced = r#"
            [metadata]
            code = "xx"
            name = "Test"

            [sentence]
            abbreviations = ["a b"]
        "#;
        assert!(RuleSetConfig::from_toml_str(spaced).is_err());

        let no_code = r#"
            [metadata]
            code = " "
            name = "Test"
        "#;
        assert!(RuleSetConfig::from_toml_str(no_code).is_err());
    }
}
