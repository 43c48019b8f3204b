//! Runtime rule tables
//!
//! A [`RuleSet`] is the read-only data an analyzer consults while
//! segmenting. It is built once from a [`RuleSetConfig`] (or a
//! [`RuleSetBuilder`]) and then shared between analyzers of every width.

use std::collections::HashSet;

use breakdex_core::{BoundaryKind, Result};

use crate::config::{Kinds, Metadata, RuleSetConfig, SentenceRules};

/// Locale tailoring for the built-in analyzers
#[derive(Debug, Clone)]
pub struct RuleSet {
    code: String,
    name: String,
    kinds: Vec<BoundaryKind>,
    abbreviations: HashSet<String>,
    case_sensitive: bool,
}

impl RuleSet {
    /// Create from configuration
    pub fn from_config(config: &RuleSetConfig) -> Result<Self> {
        config.validate()?;

        let case_sensitive = config.sentence.case_sensitive;
        let abbreviations = config
            .sentence
            .abbreviations
            .iter()
            .map(|a| fold(a.trim(), case_sensitive))
            .collect();

        let mut kinds = config.kinds.enabled.clone();
        kinds.sort();
        kinds.dedup();

        Ok(Self {
            code: config.metadata.code.trim().to_string(),
            name: config.metadata.name.clone(),
            kinds,
            abbreviations,
            case_sensitive,
        })
    }

    /// Untailored rules: every kind, no abbreviations
    pub fn root() -> Self {
        Self {
            code: "root".to_string(),
            name: "Root".to_string(),
            kinds: BoundaryKind::ALL.to_vec(),
            abbreviations: HashSet::new(),
            case_sensitive: true,
        }
    }

    /// Start a programmatic rule set
    pub fn builder(code: impl Into<String>) -> RuleSetBuilder {
        RuleSetBuilder::new(code)
    }

    /// Locale code the rules were written for
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the rules cover `kind`
    pub fn supports(&self, kind: BoundaryKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Enabled kinds, in declaration order
    pub fn kinds(&self) -> &[BoundaryKind] {
        &self.kinds
    }

    /// Whether `word` (without its trailing full stop) is a known abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        !word.is_empty()
            && self
                .abbreviations
                .contains(fold(word, self.case_sensitive).as_str())
    }

    /// Number of configured abbreviations
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }
}

fn fold(word: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

/// Builder for rule sets defined in code
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    config: RuleSetConfig,
}

impl RuleSetBuilder {
    fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            config: RuleSetConfig {
                metadata: Metadata {
                    name: code.clone(),
                    code,
                },
                kinds: Kinds::default(),
                sentence: SentenceRules::default(),
            },
        }
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.metadata.name = name.into();
        self
    }

    /// Restrict the rule set to the given kinds
    pub fn kinds(mut self, kinds: impl IntoIterator<Item = BoundaryKind>) -> Self {
        self.config.kinds.enabled = kinds.into_iter().collect();
        self
    }

    /// Add a sentence abbreviation, written without its full stop
    pub fn abbreviation(mut self, word: impl Into<String>) -> Self {
        self.config.sentence.abbreviations.push(word.into());
        self
    }

    /// Match abbreviations case-sensitively
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.config.sentence.case_sensitive = yes;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<RuleSet> {
        RuleSet::from_config(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakdex_core::BoundaryError;

    #[test]
    fn test_builder_defaults() {
        let rules = RuleSet::builder("xx").build().unwrap();
        assert_eq!(rules.code(), "xx");
        assert_eq!(rules.name(), "xx");
        assert!(BoundaryKind::ALL.iter().all(|k| rules.supports(*k)));
        assert_eq!(rules.abbreviation_count(), 0);
    }

    #[test]
    fn test_case_folding() {
        let insensitive = RuleSet::builder("xx").abbreviation("Dr").build().unwrap();
        assert!(insensitive.is_abbreviation("dr"));
        assert!(insensitive.is_abbreviation("DR"));

        let sensitive = RuleSet::builder("xx")
            .abbreviation("Dr")
            .case_sensitive(true)
            .build()
            .unwrap();
        assert!(sensitive.is_abbreviation("Dr"));
        assert!(!sensitive.is_abbreviation("dr"));
        assert!(!sensitive.is_abbreviation(""));
    }

    #[test]
    fn test_kinds_are_deduplicated() {
        let rules = RuleSet::builder("xx")
            .kinds([BoundaryKind::Line, BoundaryKind::Word, BoundaryKind::Line])
            .build()
            .unwrap();
        assert_eq!(rules.kinds(), &[BoundaryKind::Word, BoundaryKind::Line]);
        assert!(!rules.supports(BoundaryKind::Sentence));
    }

    #[test]
    fn test_builder_validates() {
        let err = RuleSet::builder("xx").kinds(Vec::new()).build().unwrap_err();
        assert!(matches!(err, BoundaryError::Config(_)));
    }
}
