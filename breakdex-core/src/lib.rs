//! Break points, break indexes and the boundary analyzer contract
//!
//! This crate defines the value types every boundary analysis produces and
//! the capability trait segmentation strategies implement:
//!
//! - [`BreakPoint`]: an offset plus a [`RuleTag`] describing the break;
//! - [`BreakIndex`]: the ordered, immutable result of one analysis;
//! - [`BoundaryAnalyzer`]: one strategy for one [`CodeUnit`] width.
//!
//! No segmentation rules live here; see `breakdex-rules` for those.
//!
//! # Example
//!
//! ```rust
//! use breakdex_core::{BoundaryAnalyzer, BoundaryKind, BreakIndex, CodeUnit, Result, RuleTag};
//!
//! /// Every unit is its own character
//! struct PerUnit;
//!
//! impl<U: CodeUnit> BoundaryAnalyzer<U> for PerUnit {
//!     fn supports(&self, kind: BoundaryKind) -> bool {
//!         kind == BoundaryKind::Character
//!     }
//!
//!     fn map(&self, kind: BoundaryKind, text: &[U]) -> Result<BreakIndex> {
//!         BoundaryAnalyzer::<U>::ensure_supported(self, kind)?;
//!         let mut builder = BreakIndex::builder();
//!         for offset in 1..=text.len() {
//!             builder.push(offset, RuleTag::CHARACTER_ANY)?;
//!         }
//!         Ok(builder.finish())
//!     }
//! }
//!
//! let text: &[u8] = b"abc";
//! let index = PerUnit.map(BoundaryKind::Character, text).unwrap();
//! assert_eq!(index.ceil(2).unwrap().offset, 2);
//! ```

pub mod analyzer;
pub mod error;
pub mod index;
pub mod kind;
pub mod point;
pub mod rule;
pub mod unit;

pub use analyzer::{BoundaryAnalyzer, SharedAnalyzer};
pub use error::{BoundaryError, Result};
pub use index::{BreakIndex, IndexBuilder, Segment};
pub use kind::BoundaryKind;
pub use point::BreakPoint;
pub use rule::RuleTag;
pub use unit::{CharWidth, CodeUnit, DecodedText};
