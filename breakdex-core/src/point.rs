//! A single break point

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::rule::RuleTag;

/// A break occurring at `offset`, classified by `rule`
///
/// Ordering, equality and hashing look at `offset` only, so a bare search key
/// built with [`BreakPoint::at`] compares equal to any real point at the same
/// offset. Use [`BreakPoint::is_identical`] to compare the tag as well.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakPoint {
    /// Code-unit offset from the start of the analyzed range
    pub offset: usize,
    /// Why the break occurs; layout depends on the boundary kind
    pub rule: RuleTag,
}

impl BreakPoint {
    /// Create a classified break point
    pub const fn new(offset: usize, rule: RuleTag) -> Self {
        Self { offset, rule }
    }

    /// Search key for ordered lookup; never stored in an index
    pub const fn at(offset: usize) -> Self {
        Self {
            offset,
            rule: RuleTag::NONE,
        }
    }

    /// Compare both offset and rule
    pub fn is_identical(&self, other: &Self) -> bool {
        self.offset == other.offset && self.rule == other.rule
    }
}

impl PartialEq for BreakPoint {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for BreakPoint {}

impl PartialOrd for BreakPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BreakPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl Hash for BreakPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
    }
}
