//! Locale rule sets and built-in boundary analyzers
//!
//! This crate supplies the concrete segmentation strategies behind the
//! `breakdex-core` contract:
//!
//! - [`UnicodeAnalyzer`]: UAX #29 / UAX #14 segmentation, tailored per locale
//!   by a [`RuleSet`];
//! - [`AsciiLineAnalyzer`]: a line-only breaker for plain ASCII text.
//!
//! Rule sets come from embedded TOML tables ([`embedded_rule_set`]) or are
//! assembled in code with [`RuleSet::builder`].
//!
//! # Example
//!
//! ```rust
//! use breakdex_core::{BoundaryAnalyzer, BoundaryKind, RuleTag};
//! use breakdex_rules::UnicodeAnalyzer;
//!
//! let analyzer = UnicodeAnalyzer::for_locale("en").unwrap();
//! let text: Vec<u16> = "Hi Bob.".encode_utf16().collect();
//! let index = analyzer.map(BoundaryKind::Word, &text[..]).unwrap();
//!
//! let offsets: Vec<usize> = index.offsets().collect();
//! assert_eq!(offsets, vec![0, 2, 3, 6, 7]);
//! assert_eq!(index.get(1).unwrap().rule, RuleTag::WORD_LETTER);
//! ```

mod ascii;
mod classify;
pub mod config;
mod loader;
mod rule_set;
mod unicode;

pub use ascii::AsciiLineAnalyzer;
pub use config::RuleSetConfig;
pub use loader::{embedded_codes, embedded_rule_set};
pub use rule_set::{RuleSet, RuleSetBuilder};
pub use unicode::UnicodeAnalyzer;
