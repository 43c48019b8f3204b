//! Locale identity
//!
//! Names follow the POSIX shape `language[_COUNTRY][.encoding][@variant]`;
//! `-` is accepted in place of `_`. Parsing normalizes case so that
//! `EN-us.UTF-8` and `en_US.utf-8` are the same registry key.

use core::fmt;
use core::str::FromStr;

use breakdex_core::{BoundaryError, Result};

/// A parsed, normalized locale name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    country: Option<String>,
    encoding: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// Parse a locale name; `C`, `POSIX` and `root` name the root locale
    ///
    /// These three match in any case.
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(invalid(name, "empty name"));
        }
        if ["c", "posix", "root"]
            .iter()
            .any(|root| trimmed.eq_ignore_ascii_case(root))
        {
            return Ok(Self::root());
        }

        let (rest, variant) = split_once_opt(trimmed, '@');
        let (rest, encoding) = split_once_opt(rest, '.');
        let (language, country) = match rest.find(['_', '-']) {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
        };

        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid(name, "language must be 2 to 8 ASCII letters"));
        }
        if let Some(country) = country {
            if !(2..=3).contains(&country.len())
                || !country.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid(name, "country must be 2 or 3 ASCII letters or digits"));
            }
        }
        if let Some(encoding) = encoding {
            if encoding.is_empty()
                || !encoding
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(invalid(name, "malformed encoding"));
            }
        }
        if let Some(variant) = variant {
            if variant.is_empty() || !variant.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid(name, "malformed variant"));
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            country: country.map(str::to_ascii_uppercase),
            encoding: encoding.map(str::to_ascii_lowercase),
            variant: variant.map(str::to_ascii_lowercase),
        })
    }

    /// The root locale: no language-specific tailoring
    pub fn root() -> Self {
        Self {
            language: "root".to_string(),
            country: None,
            encoding: None,
            variant: None,
        }
    }

    /// Lowercase language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase country code
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Lowercase encoding name
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Lowercase variant
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Same locale with only the language kept
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            country: None,
            encoding: None,
            variant: None,
        }
    }
}

fn split_once_opt(s: &str, sep: char) -> (&str, Option<&str>) {
    match s.split_once(sep) {
        Some((head, tail)) => (head, Some(tail)),
        None => (s, None),
    }
}

fn invalid(name: &str, reason: &str) -> BoundaryError {
    BoundaryError::InvalidLocale {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(country) = &self.country {
            write!(f, "_{country}")?;
        }
        if let Some(encoding) = &self.encoding {
            write!(f, ".{encoding}")?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "@{variant}")?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = BoundaryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let locale = Locale::parse("en_US.UTF-8@Euro").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.country(), Some("US"));
        assert_eq!(locale.encoding(), Some("utf-8"));
        assert_eq!(locale.variant(), Some("euro"));
        assert_eq!(locale.to_string(), "en_US.utf-8@euro");
    }

    #[test]
    fn test_normalization_makes_equal_keys() {
        assert_eq!(
            Locale::parse("EN-us").unwrap(),
            Locale::parse("en_US").unwrap()
        );
        assert_eq!("ja".parse::<Locale>().unwrap().to_string(), "ja");
    }

    #[test]
    fn test_posix_names_are_root() {
        assert_eq!(Locale::parse("C").unwrap(), Locale::root());
        assert_eq!(Locale::parse("POSIX").unwrap(), Locale::root());
        assert_eq!(Locale::parse("c").unwrap(), Locale::root());
        assert_eq!(Locale::parse(" Posix ").unwrap(), Locale::root());
        assert_eq!(Locale::root().to_string(), "root");
    }

    #[test]
    fn test_language_only() {
        let locale = Locale::parse("de_AT.utf8").unwrap();
        assert_eq!(locale.language_only(), Locale::parse("de").unwrap());
    }

    #[test]
    fn test_rejections() {
        for bad in ["", "e", "en_", "en_USAX", "en.", "en@", "1x", "en_US.ut f8"] {
            assert!(
                matches!(Locale::parse(bad), Err(BoundaryError::InvalidLocale { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
