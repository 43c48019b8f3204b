//! The boundary analyzer capability
//!
//! A [`BoundaryAnalyzer`] is one pluggable segmentation strategy for text of
//! a given code-unit width. Locales (or tests) supply different
//! implementations; consumers only ever see the trait.

use std::sync::Arc;

use crate::{
    error::{BoundaryError, Result},
    index::BreakIndex,
    kind::BoundaryKind,
    unit::{CharWidth, CodeUnit},
};

/// Builds break indexes for text stored as `U` code units
///
/// Implementations must be pure: `map` may only read the analyzer's own rule
/// data and must keep all working storage local to the call, so one instance
/// can serve any number of threads at once.
pub trait BoundaryAnalyzer<U: CodeUnit>: Send + Sync {
    /// Whether this analyzer has rules for `kind`
    fn supports(&self, kind: BoundaryKind) -> bool;

    /// Index the breaks of `kind` in `text`
    ///
    /// Offsets are relative to the start of `text`. The result starts at
    /// offset 0, is sorted by offset and is identical for identical inputs.
    ///
    /// # Errors
    /// [`BoundaryError::UnsupportedBoundaryKind`] when [`supports`](Self::supports)
    /// is `false` for `kind`.
    fn map(&self, kind: BoundaryKind, text: &[U]) -> Result<BreakIndex>;

    /// Index the breaks of `kind` in `buffer[begin..end]`
    ///
    /// # Errors
    /// [`BoundaryError::InvalidRange`] when `begin > end` or `end` lies past
    /// the buffer; positions are never clamped.
    fn map_range(
        &self,
        kind: BoundaryKind,
        buffer: &[U],
        begin: usize,
        end: usize,
    ) -> Result<BreakIndex> {
        if begin > end || end > buffer.len() {
            return Err(BoundaryError::InvalidRange {
                begin,
                end,
                len: buffer.len(),
            });
        }
        self.map(kind, &buffer[begin..end])
    }

    /// Code-unit width this analyzer is specialized for
    fn width(&self) -> CharWidth {
        U::WIDTH
    }

    /// Fail with [`BoundaryError::UnsupportedBoundaryKind`] unless `kind` is supported
    fn ensure_supported(&self, kind: BoundaryKind) -> Result<()> {
        if self.supports(kind) {
            Ok(())
        } else {
            Err(BoundaryError::UnsupportedBoundaryKind {
                kind,
                width: U::WIDTH,
            })
        }
    }
}

/// Shared, atomically reference-counted analyzer handle
pub type SharedAnalyzer<U> = Arc<dyn BoundaryAnalyzer<U>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleTag;

    /// Breaks after every unit, words only
    struct EveryUnit;

    impl<U: CodeUnit> BoundaryAnalyzer<U> for EveryUnit {
        fn supports(&self, kind: BoundaryKind) -> bool {
            kind == BoundaryKind::Word
        }

        fn map(&self, kind: BoundaryKind, text: &[U]) -> Result<BreakIndex> {
            BoundaryAnalyzer::<U>::ensure_supported(self, kind)?;
            let mut builder = BreakIndex::builder().with_capacity(text.len());
            for offset in 1..=text.len() {
                builder.push(offset, RuleTag::WORD_NONE)?;
            }
            Ok(builder.finish())
        }
    }

    #[test]
    fn test_map_range_is_relative_to_begin() {
        let buffer: &[u8] = b"abcdef";
        let index = EveryUnit.map_range(BoundaryKind::Word, buffer, 2, 5).unwrap();
        let offsets: Vec<usize> = index.offsets().collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_map_range_rejects_inverted_range() {
        let buffer: &[u8] = b"abcdef";
        let err = EveryUnit
            .map_range(BoundaryKind::Word, buffer, 4, 2)
            .unwrap_err();
        assert_eq!(
            err,
            BoundaryError::InvalidRange {
                begin: 4,
                end: 2,
                len: 6
            }
        );
    }

    #[test]
    fn test_map_range_rejects_out_of_buffer() {
        let buffer: Vec<u16> = "abc".encode_utf16().collect();
        assert!(matches!(
            EveryUnit.map_range(BoundaryKind::Word, &buffer[..], 0, 4),
            Err(BoundaryError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_unsupported_kind_reports_width() {
        let text: Vec<char> = "abc".chars().collect();
        let err = EveryUnit.map(BoundaryKind::Line, &text[..]).unwrap_err();
        assert_eq!(
            err,
            BoundaryError::UnsupportedBoundaryKind {
                kind: BoundaryKind::Line,
                width: CharWidth::Scalar
            }
        );
    }

    #[test]
    fn test_shared_handle_delegates() {
        let shared: SharedAnalyzer<u32> = Arc::new(EveryUnit);
        assert_eq!(shared.width(), CharWidth::Utf32);
        assert_eq!(shared.map(BoundaryKind::Word, &[0x41, 0x42]).unwrap().len(), 3);
    }
}
