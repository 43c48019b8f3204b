//! Built-in analyzer backed by the Unicode segmentation algorithms
//!
//! Characters, words and sentences follow UAX #29, lines follow UAX #14.
//! The locale's [`RuleSet`] decides which kinds are available and tailors
//! sentence breaks around abbreviations.

use std::sync::Arc;

use breakdex_core::{
    BoundaryAnalyzer, BoundaryKind, BreakIndex, CodeUnit, DecodedText, Result, RuleTag,
};
use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    classify::{is_closing, is_hard_separator, is_opening, sentence_tag, word_tag},
    loader::embedded_rule_set,
    rule_set::RuleSet,
};

/// Unicode segmenter tailored by a locale rule set
///
/// One instance implements [`BoundaryAnalyzer`] for every code-unit width.
/// Offsets in the produced indexes are always expressed in the caller's
/// code units.
#[derive(Debug, Clone)]
pub struct UnicodeAnalyzer {
    rules: Arc<RuleSet>,
}

impl UnicodeAnalyzer {
    /// Analyzer for the given rules
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Analyzer without locale tailoring
    pub fn root() -> Self {
        Self::new(Arc::new(RuleSet::root()))
    }

    /// Analyzer for one of the embedded locale rule sets
    pub fn for_locale(code: &str) -> Result<Self> {
        Ok(Self::new(embedded_rule_set(code)?))
    }

    /// The rules in use
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    fn index_decoded(&self, kind: BoundaryKind, decoded: &DecodedText<'_>) -> Result<BreakIndex> {
        let text = decoded.as_str();
        if text.is_empty() {
            return Ok(BreakIndex::start_only());
        }

        let breaks = match kind {
            BoundaryKind::Character => character_breaks(text),
            BoundaryKind::Word => word_breaks(text),
            BoundaryKind::Sentence => sentence_breaks(text, &self.rules),
            BoundaryKind::Line => line_breaks(text),
        };

        let mut builder = BreakIndex::builder().with_capacity(breaks.len());
        for (byte, rule) in breaks {
            builder.push(decoded.unit_offset(byte), rule)?;
        }
        Ok(builder.finish())
    }
}

impl Default for UnicodeAnalyzer {
    fn default() -> Self {
        Self::root()
    }
}

impl<U: CodeUnit> BoundaryAnalyzer<U> for UnicodeAnalyzer {
    fn supports(&self, kind: BoundaryKind) -> bool {
        self.rules.supports(kind)
    }

    fn map(&self, kind: BoundaryKind, text: &[U]) -> Result<BreakIndex> {
        BoundaryAnalyzer::<U>::ensure_supported(self, kind)?;
        let decoded = U::decode(text);
        let index = self.index_decoded(kind, &decoded)?;
        log::trace!(
            "mapped {} {} units as {kind} with '{}' rules: {} points",
            decoded.unit_len(),
            U::WIDTH,
            self.rules.code(),
            index.len()
        );
        Ok(index)
    }
}

/// Byte offset just past each extended grapheme cluster
fn character_breaks(text: &str) -> Vec<(usize, RuleTag)> {
    text.grapheme_indices(true)
        .map(|(start, cluster)| (start + cluster.len(), RuleTag::CHARACTER_ANY))
        .collect()
}

fn word_breaks(text: &str) -> Vec<(usize, RuleTag)> {
    text.split_word_bound_indices()
        .map(|(start, segment)| (start + segment.len(), word_tag(segment)))
        .collect()
}

fn sentence_breaks(text: &str, rules: &RuleSet) -> Vec<(usize, RuleTag)> {
    let mut breaks = Vec::new();
    let mut start = 0;
    for (offset, segment) in text.split_sentence_bound_indices() {
        let end = offset + segment.len();
        let sentence = &text[start..end];
        if end < text.len() && ends_with_abbreviation(sentence, rules) {
            continue;
        }
        breaks.push((end, sentence_tag(sentence)));
        start = end;
    }
    breaks
}

/// `true` when the sentence ends in `<abbreviation>.`, then closers and spaces
fn ends_with_abbreviation(sentence: &str, rules: &RuleSet) -> bool {
    let trimmed = sentence.trim_end();
    if sentence[trimmed.len()..].chars().any(is_hard_separator) {
        return false;
    }
    let Some(body) = trimmed.trim_end_matches(is_closing).strip_suffix('.') else {
        return false;
    };
    let word = body
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(is_opening);
    rules.is_abbreviation(word)
}

fn line_breaks(text: &str) -> Vec<(usize, RuleTag)> {
    let ends_hard = text.chars().next_back().is_some_and(is_hard_separator);
    linebreaks(text)
        .map(|(offset, opportunity)| {
            let rule = match opportunity {
                BreakOpportunity::Mandatory if offset < text.len() || ends_hard => {
                    RuleTag::LINE_HARD
                }
                _ => RuleTag::LINE_SOFT,
            };
            (offset, rule)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> UnicodeAnalyzer {
        UnicodeAnalyzer::new(Arc::new(
            RuleSet::builder("en").abbreviation("Dr").build().unwrap(),
        ))
    }

    fn offsets(index: &BreakIndex) -> Vec<usize> {
        index.offsets().collect()
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let text = "He said \"Stop.\" Then left.";
        let index = UnicodeAnalyzer::root()
            .map(BoundaryKind::Sentence, text.as_bytes())
            .unwrap();
        assert_eq!(offsets(&index), vec![0, 16, text.len()]);
        assert_eq!(index.get(1).unwrap().rule, RuleTag::SENTENCE_TERM);
    }

    #[test]
    fn test_abbreviation_suppresses_break() {
        let text = "Ask Dr. Smith. He knows.";
        let root = UnicodeAnalyzer::root()
            .map(BoundaryKind::Sentence, text.as_bytes())
            .unwrap();
        let tailored = english().map(BoundaryKind::Sentence, text.as_bytes()).unwrap();

        assert_eq!(offsets(&root), vec![0, 8, 15, 24]);
        assert_eq!(offsets(&tailored), vec![0, 15, 24]);
    }

    #[test]
    fn test_abbreviation_before_newline_still_breaks() {
        let text = "See Dr.\nNext line.";
        let index = english().map(BoundaryKind::Sentence, text.as_bytes()).unwrap();
        assert!(index.contains_offset(8));
    }

    #[test]
    fn test_parenthesised_abbreviation() {
        let rules = RuleSet::builder("xx").abbreviation("approx").build().unwrap();
        assert!(ends_with_abbreviation("(approx. ", &rules));
        assert!(!ends_with_abbreviation("approx? ", &rules));
    }

    #[test]
    fn test_abbreviation_inside_closers() {
        let text = "See (Dr.) Smith now. Ok.";
        let index = english().map(BoundaryKind::Sentence, text.as_bytes()).unwrap();
        assert_eq!(offsets(&index), vec![0, 21, 24]);

        let rules = RuleSet::builder("xx").abbreviation("etc").build().unwrap();
        assert!(ends_with_abbreviation("\"and so on, etc.\" ", &rules));
        assert!(!ends_with_abbreviation("(and so on.) ", &rules));
    }

    #[test]
    fn test_line_end_tag_follows_last_char() {
        let soft = UnicodeAnalyzer::root()
            .map(BoundaryKind::Line, "a b".as_bytes())
            .unwrap();
        assert_eq!(offsets(&soft), vec![0, 2, 3]);
        assert_eq!(soft.last().unwrap().rule, RuleTag::LINE_SOFT);

        let hard = UnicodeAnalyzer::root()
            .map(BoundaryKind::Line, "a\nb\n".as_bytes())
            .unwrap();
        assert_eq!(offsets(&hard), vec![0, 2, 4]);
        assert!(hard.iter().skip(1).all(|p| p.rule == RuleTag::LINE_HARD));
    }

    #[test]
    fn test_characters_keep_clusters_together() {
        // e + combining acute, then CRLF
        let text = "e\u{301}\r\n";
        let index = UnicodeAnalyzer::root()
            .map(BoundaryKind::Character, text.as_bytes())
            .unwrap();
        assert_eq!(offsets(&index), vec![0, 3, 5]);
    }

    #[test]
    fn test_empty_range_is_start_only() {
        let empty: &[u16] = &[];
        for kind in BoundaryKind::ALL {
            let index = UnicodeAnalyzer::root().map(kind, empty).unwrap();
            assert_eq!(index, BreakIndex::start_only());
        }
    }
}
