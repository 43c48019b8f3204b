//! # breakdex
//!
//! Text boundary indexing: given a buffer of code units and a boundary kind
//! (character, word, sentence or line), produce the ordered list of break
//! positions inside it, each tagged with the rule that produced it.
//!
//! The pieces:
//!
//! - [`BoundaryAnalyzer`]: the per-width contract every analyzer implements;
//! - [`BreakIndex`]: the result, searchable by offset;
//! - [`UnicodeAnalyzer`] and [`AsciiLineAnalyzer`]: built-in analyzers;
//! - [`FacetRegistry`]: the active analyzer for each locale and code-unit width.
//!
//! ## Example
//!
//! ```rust
//! use breakdex::{BoundaryKind, FacetRegistry, Locale, RuleTag};
//!
//! let registry = FacetRegistry::with_builtin_locales()?;
//! let en = Locale::parse("en")?;
//!
//! let text: Vec<u16> = "Hi Bob.".encode_utf16().collect();
//! let index = registry.map(&en, BoundaryKind::Word, &text[..])?;
//!
//! assert_eq!(index.offsets().collect::<Vec<_>>(), vec![0, 2, 3, 6, 7]);
//! assert_eq!(index.get(1).map(|p| p.rule), Some(RuleTag::WORD_LETTER));
//! # Ok::<(), breakdex::BoundaryError>(())
//! ```
//!
//! Custom analyzers are installed per width and shared behind an [`Arc`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use breakdex::{AsciiLineAnalyzer, BoundaryError, BoundaryKind, FacetRegistry, Locale};
//!
//! let registry = FacetRegistry::new();
//! let locale = Locale::parse("en_US")?;
//! registry.install::<u8>(&locale, Arc::new(AsciiLineAnalyzer));
//!
//! let lines = registry.map(&locale, BoundaryKind::Line, b"one two".as_slice())?;
//! assert_eq!(lines.len(), 3);
//!
//! let words = registry.map(&locale, BoundaryKind::Word, b"one two".as_slice());
//! assert!(matches!(words, Err(BoundaryError::UnsupportedBoundaryKind { .. })));
//! # Ok::<(), BoundaryError>(())
//! ```
//!
//! [`Arc`]: std::sync::Arc

pub mod locale;
pub mod registry;

pub use breakdex_core::{
    BoundaryAnalyzer, BoundaryError, BoundaryKind, BreakIndex, BreakPoint, CharWidth, CodeUnit,
    DecodedText, IndexBuilder, Result, RuleTag, Segment, SharedAnalyzer,
};
pub use breakdex_rules::{
    embedded_codes, embedded_rule_set, AsciiLineAnalyzer, RuleSet, RuleSetBuilder, RuleSetConfig,
    UnicodeAnalyzer,
};

pub use locale::Locale;
pub use registry::FacetRegistry;
