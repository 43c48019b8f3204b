//! Classification tags attached to break points
//!
//! A [`RuleTag`] records *why* a break occurs. The bit layout depends on the
//! boundary kind that produced it, so the same bits mean different things for
//! a word index and a line index. The index itself never looks at the tag.
//!
//! Each kind reserves 4-bit groups:
//!
//! | kind      | group     | constant                     |
//! |-----------|-----------|------------------------------|
//! | character | `0x0000F` | [`RuleTag::CHARACTER_ANY`]   |
//! | word      | `0x0000F` | [`RuleTag::WORD_NONE`]       |
//! | word      | `0x000F0` | [`RuleTag::WORD_NUMBER`]     |
//! | word      | `0x00F00` | [`RuleTag::WORD_LETTER`]     |
//! | word      | `0x0F000` | [`RuleTag::WORD_KANA`]       |
//! | word      | `0xF0000` | [`RuleTag::WORD_IDEO`]       |
//! | sentence  | `0x0000F` | [`RuleTag::SENTENCE_TERM`]   |
//! | sentence  | `0x000F0` | [`RuleTag::SENTENCE_SEP`]    |
//! | line      | `0x0000F` | [`RuleTag::LINE_SOFT`]       |
//! | line      | `0x000F0` | [`RuleTag::LINE_HARD`]       |

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

/// Opaque classification bit-set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleTag(u32);

impl RuleTag {
    /// No classification; carried by the synthetic start point
    pub const NONE: Self = Self(0);

    /// Any grapheme cluster end
    pub const CHARACTER_ANY: Self = Self(0x0000F);

    /// Whitespace, punctuation and symbol runs
    pub const WORD_NONE: Self = Self(0x0000F);
    /// Numeric runs
    pub const WORD_NUMBER: Self = Self(0x000F0);
    /// Letter runs outside kana and ideographs
    pub const WORD_LETTER: Self = Self(0x00F00);
    /// Hiragana/katakana runs
    pub const WORD_KANA: Self = Self(0x0F000);
    /// Ideographic runs
    pub const WORD_IDEO: Self = Self(0xF0000);
    /// Any word-like run
    pub const WORD_ANY: Self = Self(0xFFFF0);

    /// Sentence ended by a terminator
    pub const SENTENCE_TERM: Self = Self(0x0000F);
    /// Sentence ended by a hard separator or end of input
    pub const SENTENCE_SEP: Self = Self(0x000F0);

    /// Line break opportunity
    pub const LINE_SOFT: Self = Self(0x0000F);
    /// Mandatory line break
    pub const LINE_HARD: Self = Self(0x000F0);

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build a tag from raw bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// `true` when no bit is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if every bit of `other` is also set in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` if `self` and `mask` share at least one bit
    pub const fn intersects(self, mask: Self) -> bool {
        self.0 & mask.0 != 0
    }
}

impl BitOr for RuleTag {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RuleTag {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for RuleTag {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for RuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07x}", self.0)
    }
}
