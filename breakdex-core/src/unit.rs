//! Code-unit widths and decoding
//!
//! Analyzers work on scalar values, but offsets must be reported in the code
//! units of the caller's buffer. [`CodeUnit::decode`] turns a range of units
//! into UTF-8 plus a table mapping every UTF-8 char boundary back to the
//! unit offset it came from.

use core::fmt;
use std::borrow::Cow;

use crate::error::BoundaryError;

/// Storage width of a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharWidth {
    /// 8-bit units (`u8`, UTF-8)
    Utf8,
    /// 16-bit units (`u16`, UTF-16)
    Utf16,
    /// 32-bit units (`u32`, UTF-32)
    Utf32,
    /// Unicode scalar values (`char`), the platform-wide unit
    Scalar,
}

impl CharWidth {
    /// Every width, narrowest first
    pub const ALL: [CharWidth; 4] = [
        CharWidth::Utf8,
        CharWidth::Utf16,
        CharWidth::Utf32,
        CharWidth::Scalar,
    ];

    /// Size of one code unit in bits
    pub fn bits(self) -> u32 {
        match self {
            CharWidth::Utf8 => 8,
            CharWidth::Utf16 => 16,
            CharWidth::Utf32 | CharWidth::Scalar => 32,
        }
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            CharWidth::Utf8 => "utf8",
            CharWidth::Utf16 => "utf16",
            CharWidth::Utf32 => "utf32",
            CharWidth::Scalar => "scalar",
        }
    }
}

impl fmt::Display for CharWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for CharWidth {
    type Err = BoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" | "8" => Ok(CharWidth::Utf8),
            "utf16" | "utf-16" | "16" => Ok(CharWidth::Utf16),
            "utf32" | "utf-32" | "32" => Ok(CharWidth::Utf32),
            "scalar" | "char" | "wide" => Ok(CharWidth::Scalar),
            other => Err(BoundaryError::Config(format!("unknown width '{other}'"))),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for char {}
}

/// A fixed-width code unit an analyzer can be specialized for
///
/// Implemented for `u8`, `u16`, `u32` and `char`.
pub trait CodeUnit: sealed::Sealed + Copy + Send + Sync + 'static {
    /// Width tag used to key registries
    const WIDTH: CharWidth;

    /// Decode a range of units; ill-formed sequences become U+FFFD
    fn decode(units: &[Self]) -> DecodedText<'_>;
}

impl CodeUnit for u8 {
    const WIDTH: CharWidth = CharWidth::Utf8;

    fn decode(units: &[u8]) -> DecodedText<'_> {
        if let Ok(text) = core::str::from_utf8(units) {
            return DecodedText::borrowed(text);
        }
        let mut decoder = Decoder::with_capacity(units.len());
        for chunk in units.utf8_chunks() {
            for ch in chunk.valid().chars() {
                decoder.push(ch, ch.len_utf8());
            }
            if !chunk.invalid().is_empty() {
                decoder.push(char::REPLACEMENT_CHARACTER, chunk.invalid().len());
            }
        }
        decoder.finish()
    }
}

impl CodeUnit for u16 {
    const WIDTH: CharWidth = CharWidth::Utf16;

    fn decode(units: &[u16]) -> DecodedText<'_> {
        let mut decoder = Decoder::with_capacity(units.len());
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) => decoder.push(ch, ch.len_utf16()),
                // Unpaired surrogate
                Err(_) => decoder.push(char::REPLACEMENT_CHARACTER, 1),
            }
        }
        decoder.finish()
    }
}

impl CodeUnit for u32 {
    const WIDTH: CharWidth = CharWidth::Utf32;

    fn decode(units: &[u32]) -> DecodedText<'_> {
        let mut decoder = Decoder::with_capacity(units.len());
        for &unit in units {
            decoder.push(
                char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER),
                1,
            );
        }
        decoder.finish()
    }
}

impl CodeUnit for char {
    const WIDTH: CharWidth = CharWidth::Scalar;

    fn decode(units: &[char]) -> DecodedText<'_> {
        let mut decoder = Decoder::with_capacity(units.len());
        for &ch in units {
            decoder.push(ch, 1);
        }
        decoder.finish()
    }
}

/// A decoded range: UTF-8 text plus the way back to unit offsets
#[derive(Debug, Clone)]
pub struct DecodedText<'a> {
    text: Cow<'a, str>,
    /// `None` when UTF-8 byte offsets already are unit offsets
    units: Option<Vec<usize>>,
    unit_len: usize,
}

impl<'a> DecodedText<'a> {
    fn borrowed(text: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            units: None,
            unit_len: text.len(),
        }
    }

    /// The range as UTF-8
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of code units in the original range
    pub fn unit_len(&self) -> usize {
        self.unit_len
    }

    /// Code-unit offset of a UTF-8 char boundary in [`as_str`](Self::as_str)
    ///
    /// Offsets inside a multi-byte char map to the start of that char.
    /// Offsets past the end map to the end of the range.
    pub fn unit_offset(&self, byte: usize) -> usize {
        match &self.units {
            None => byte.min(self.unit_len),
            Some(units) => units.get(byte).copied().unwrap_or(self.unit_len),
        }
    }
}

struct Decoder {
    text: String,
    units: Vec<usize>,
    unit_pos: usize,
}

impl Decoder {
    fn with_capacity(units: usize) -> Self {
        Self {
            text: String::with_capacity(units),
            units: Vec::with_capacity(units + 1),
            unit_pos: 0,
        }
    }

    fn push(&mut self, ch: char, width: usize) {
        self.text.push(ch);
        for _ in 0..ch.len_utf8() {
            self.units.push(self.unit_pos);
        }
        self.unit_pos += width;
    }

    fn finish(mut self) -> DecodedText<'static> {
        self.units.push(self.unit_pos);
        DecodedText {
            text: Cow::Owned(self.text),
            units: Some(self.units),
            unit_len: self.unit_pos,
        }
    }
}
