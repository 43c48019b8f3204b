//! Embedded locale rule sets
//!
//! Rule tables ship inside the binary as TOML and are parsed once, on first
//! access.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use breakdex_core::{BoundaryError, Result};

use crate::{config::RuleSetConfig, rule_set::RuleSet};

const EMBEDDED_TABLES: &[(&str, &str)] = &[
    ("root", include_str!("../configs/locales/root.toml")),
    ("en", include_str!("../configs/locales/en.toml")),
    ("de", include_str!("../configs/locales/de.toml")),
    ("ja", include_str!("../configs/locales/ja.toml")),
];

static EMBEDDED: OnceLock<HashMap<String, Arc<RuleSet>>> = OnceLock::new();

fn embedded() -> &'static HashMap<String, Arc<RuleSet>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();
        for (code, source) in EMBEDDED_TABLES {
            match load_embedded(source) {
                Ok(rules) => {
                    let rules = Arc::new(rules);
                    map.insert(rules.name().to_lowercase(), Arc::clone(&rules));
                    map.insert((*code).to_string(), rules);
                }
                Err(e) => {
                    log::warn!("failed to load embedded '{code}' rule set: {e}");
                }
            }
        }
        map
    })
}

fn load_embedded(source: &str) -> Result<RuleSet> {
    let config = RuleSetConfig::from_toml_str(source)?;
    RuleSet::from_config(&config)
}

/// Look up an embedded rule set by locale code (`"en"`) or name (`"english"`)
pub fn embedded_rule_set(code: &str) -> Result<Arc<RuleSet>> {
    embedded()
        .get(code.trim().to_lowercase().as_str())
        .cloned()
        .ok_or_else(|| BoundaryError::Config(format!("no embedded rule set for '{code}'")))
}

/// Codes of every embedded rule set, sorted
pub fn embedded_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = EMBEDDED_TABLES
        .iter()
        .map(|(code, _)| *code)
        .filter(|code| embedded().contains_key(*code))
        .collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakdex_core::BoundaryKind;

    #[test]
    fn test_all_embedded_tables_load() {
        assert_eq!(embedded_codes(), vec!["de", "en", "ja", "root"]);
    }

    #[test]
    fn test_lookup_by_code_and_name() {
        let by_code = embedded_rule_set("en").unwrap();
        let by_name = embedded_rule_set("English").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_name));
        assert!(by_code.is_abbreviation("dr"));
        assert!(by_code.is_abbreviation("e.g"));
    }

    #[test]
    fn test_japanese_has_no_abbreviations() {
        let ja = embedded_rule_set("ja").unwrap();
        assert_eq!(ja.abbreviation_count(), 0);
        assert!(ja.supports(BoundaryKind::Line));
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            embedded_rule_set("tlh"),
            Err(BoundaryError::Config(_))
        ));
    }
}
