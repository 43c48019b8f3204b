//! Ordered break index produced by a single `map` call

use core::ops::Range;

use crate::{
    error::{BoundaryError, Result},
    point::BreakPoint,
    rule::RuleTag,
};

/// All break points of one (kind, range) analysis
///
/// Invariants, enforced at construction:
/// - never empty, and the first point sits at offset 0;
/// - offsets are non-decreasing.
///
/// The index owns its points and keeps no reference to the analyzed text or
/// to the analyzer, so it outlives both.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<BreakPoint>", into = "Vec<BreakPoint>")
)]
pub struct BreakIndex {
    points: Vec<BreakPoint>,
}

/// Span between two consecutive break points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Code-unit range of the segment
    pub range: Range<usize>,
    /// Tag of the break that closes the segment
    pub rule: RuleTag,
}

impl BreakIndex {
    /// Start building an index; the start point is already in place
    pub fn builder() -> IndexBuilder {
        IndexBuilder::new()
    }

    /// Index holding only the start point, as produced for an empty range
    pub fn start_only() -> Self {
        Self {
            points: vec![BreakPoint::default()],
        }
    }

    /// Validate and wrap externally produced points
    pub fn from_points(points: Vec<BreakPoint>) -> Result<Self> {
        match points.first() {
            None => return Err(malformed("index has no points")),
            Some(first) if first.offset != 0 => {
                return Err(malformed(format!(
                    "first point is at offset {} instead of 0",
                    first.offset
                )))
            }
            Some(_) => {}
        }
        if let Some(i) = points.windows(2).position(|w| w[1] < w[0]) {
            return Err(malformed(format!(
                "offset {} follows offset {} at position {}",
                points[i + 1].offset,
                points[i].offset,
                i + 1
            )));
        }
        Ok(Self { points })
    }

    /// Number of points, start point included
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a constructed index; kept for container parity
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as a sorted slice
    pub fn as_slice(&self) -> &[BreakPoint] {
        &self.points
    }

    /// Point at position `i`
    pub fn get(&self, i: usize) -> Option<&BreakPoint> {
        self.points.get(i)
    }

    /// The start point
    pub fn first(&self) -> Option<&BreakPoint> {
        self.points.first()
    }

    /// The point with the highest offset
    pub fn last(&self) -> Option<&BreakPoint> {
        self.points.last()
    }

    /// Offset of the last point
    pub fn end_offset(&self) -> usize {
        self.points.last().map_or(0, |p| p.offset)
    }

    /// Forward/backward traversal
    pub fn iter(&self) -> core::slice::Iter<'_, BreakPoint> {
        self.points.iter()
    }

    /// Offsets only
    pub fn offsets(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.points.iter().map(|p| p.offset)
    }

    /// Position of the smallest point with offset `>= offset`
    pub fn position_ceil(&self, offset: usize) -> Option<usize> {
        let key = BreakPoint::at(offset);
        let i = self.points.partition_point(|p| *p < key);
        (i < self.points.len()).then_some(i)
    }

    /// Position of the largest point with offset `<= offset`
    ///
    /// With duplicate offsets this is the last of them.
    pub fn position_floor(&self, offset: usize) -> Option<usize> {
        let key = BreakPoint::at(offset);
        let i = self.points.partition_point(|p| *p <= key);
        i.checked_sub(1)
    }

    /// Smallest point with offset `>= offset`
    pub fn ceil(&self, offset: usize) -> Option<&BreakPoint> {
        self.position_ceil(offset).map(|i| &self.points[i])
    }

    /// Largest point with offset `<= offset`
    pub fn floor(&self, offset: usize) -> Option<&BreakPoint> {
        self.position_floor(offset).map(|i| &self.points[i])
    }

    /// Whether some break sits exactly at `offset`
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.points.binary_search(&BreakPoint::at(offset)).is_ok()
    }

    /// Consecutive spans, each tagged with the rule of its closing break
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment {
            range: w[0].offset..w[1].offset,
            rule: w[1].rule,
        })
    }

    /// Keep the start point and the breaks whose rule intersects `mask`
    pub fn filter(&self, mask: RuleTag) -> BreakIndex {
        let mut points = Vec::with_capacity(self.points.len());
        points.push(self.points[0]);
        points.extend(
            self.points[1..]
                .iter()
                .filter(|p| p.rule.intersects(mask))
                .copied(),
        );
        Self { points }
    }
}

/// Exact equality: same points with the same tags
impl PartialEq for BreakIndex {
    fn eq(&self, other: &Self) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a.is_identical(b))
    }
}

impl Eq for BreakIndex {}

impl<'a> IntoIterator for &'a BreakIndex {
    type Item = &'a BreakPoint;
    type IntoIter = core::slice::Iter<'a, BreakPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for BreakIndex {
    type Item = BreakPoint;
    type IntoIter = std::vec::IntoIter<BreakPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl TryFrom<Vec<BreakPoint>> for BreakIndex {
    type Error = BoundaryError;

    fn try_from(points: Vec<BreakPoint>) -> Result<Self> {
        Self::from_points(points)
    }
}

impl From<BreakIndex> for Vec<BreakPoint> {
    fn from(index: BreakIndex) -> Self {
        index.points
    }
}

/// Incremental, order-checked index construction
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    points: Vec<BreakPoint>,
}

impl IndexBuilder {
    fn new() -> Self {
        Self {
            points: vec![BreakPoint::default()],
        }
    }

    /// Reserve room for `additional` more points
    pub fn with_capacity(mut self, additional: usize) -> Self {
        self.points.reserve(additional);
        self
    }

    /// Offset of the most recently pushed point
    pub fn last_offset(&self) -> usize {
        self.points.last().map_or(0, |p| p.offset)
    }

    /// Append a break; `offset` must not go backwards
    pub fn push(&mut self, offset: usize, rule: RuleTag) -> Result<()> {
        let last = self.last_offset();
        if offset < last {
            return Err(malformed(format!(
                "offset {offset} pushed after offset {last}"
            )));
        }
        self.points.push(BreakPoint::new(offset, rule));
        Ok(())
    }

    /// Number of points pushed so far, start point included
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: the start point is present from the beginning
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Freeze into an immutable index
    pub fn finish(self) -> BreakIndex {
        BreakIndex {
            points: self.points,
        }
    }
}

fn malformed(reason: impl Into<String>) -> BoundaryError {
    BoundaryError::MalformedIndex {
        reason: reason.into(),
    }
}
