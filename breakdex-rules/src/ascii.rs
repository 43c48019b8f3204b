//! Minimal line-only analyzer
//!
//! Breaks after runs of ASCII blanks and after ASCII line terminators, and
//! knows nothing else. Useful where full UAX #14 tables are not wanted, and as
//! an analyzer that deliberately rejects every other boundary kind.

use breakdex_core::{BoundaryAnalyzer, BoundaryKind, BreakIndex, CodeUnit, Result, RuleTag};

/// ASCII line breaker
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiLineAnalyzer;

impl AsciiLineAnalyzer {
    /// Create the analyzer
    pub fn new() -> Self {
        Self
    }
}

impl<U: CodeUnit> BoundaryAnalyzer<U> for AsciiLineAnalyzer {
    fn supports(&self, kind: BoundaryKind) -> bool {
        kind == BoundaryKind::Line
    }

    fn map(&self, kind: BoundaryKind, text: &[U]) -> Result<BreakIndex> {
        BoundaryAnalyzer::<U>::ensure_supported(self, kind)?;
        let decoded = U::decode(text);
        let s = decoded.as_str();
        let mut builder = BreakIndex::builder();
        let mut chars = s.char_indices().peekable();

        while let Some((i, ch)) = chars.next() {
            match ch {
                '\r' => {
                    let mut end = i + 1;
                    if let Some(&(j, '\n')) = chars.peek() {
                        chars.next();
                        end = j + 1;
                    }
                    builder.push(decoded.unit_offset(end), RuleTag::LINE_HARD)?;
                }
                '\n' => builder.push(decoded.unit_offset(i + 1), RuleTag::LINE_HARD)?,
                ' ' | '\t' => {
                    let mut end = i + 1;
                    while let Some(&(j, ' ' | '\t')) = chars.peek() {
                        chars.next();
                        end = j + 1;
                    }
                    // A newline right after the blanks breaks hard instead
                    if end < s.len() && !matches!(chars.peek(), Some((_, '\r' | '\n'))) {
                        builder.push(decoded.unit_offset(end), RuleTag::LINE_SOFT)?;
                    }
                }
                _ => {}
            }
        }

        if !s.is_empty() && builder.last_offset() != decoded.unit_len() {
            builder.push(decoded.unit_len(), RuleTag::LINE_SOFT)?;
        }
        Ok(builder.finish())
    }
}
