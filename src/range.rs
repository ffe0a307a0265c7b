use serde::{Deserialize, Serialize};

/// A contiguous span of text, stored as a start offset plus a length —
/// equivalently the half-open interval `[start, start + length)` over
/// character offsets into a buffer.
///
/// Offsets and lengths are unsigned, so negative geometry cannot be
/// represented. A `length` of zero is a valid value (an empty span) but is
/// never stored in a [`RangeSet`](crate::set::RangeSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct TextRange {
    pub start: u64,
    pub length: u64,
}

impl TextRange {
    #[must_use]
    pub const fn new(start: u64, length: u64) -> Self {
        Self { start, length }
    }

    /// Build a range from half-open bounds. Bounds with `end <= start`
    /// produce an empty range at `start`.
    #[must_use]
    pub const fn from_bounds(start: u64, end: u64) -> Self {
        Self {
            start,
            length: end.saturating_sub(start),
        }
    }

    /// One past the last offset covered by this range.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.start + self.length
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub const fn contains(&self, pos: u64) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Whether the two ranges share a span of positive length. Ranges that
    /// merely touch end-to-start do not intersect, and an empty range
    /// intersects nothing, not even a range enclosing its position.
    #[must_use]
    pub const fn intersects(&self, other: Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end()
            && other.start < self.end()
    }

    /// The overlapping portion of the two ranges, if it has positive length.
    #[must_use]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end().min(other.end());
        (start < end).then(|| Self::from_bounds(start, end))
    }

    /// Try to absorb `other` into `self` as a *grow* gesture, returning the
    /// merged range.
    ///
    /// This is deliberately not a plain union of overlapping ranges. It
    /// returns `None` exactly when `other` sits inside `self`, or lies flush
    /// against `self`'s start or end without reaching past it — the shapes
    /// that signal an un-highlight gesture, which [`TextRange::difference`]
    /// handles instead. The asymmetry between the two ranges is intentional:
    /// `self` is the stored highlight, `other` the incoming selection.
    #[must_use]
    pub fn join(&self, other: Self) -> Option<Self> {
        if other.end() == self.end() {
            // Same right edge: only a selection reaching further left grows.
            (other.start < self.start).then(|| Self::from_bounds(other.start, self.end()))
        } else if other.start == self.start {
            // Same left edge: only a longer selection grows.
            (other.length > self.length).then(|| Self::from_bounds(self.start, other.end()))
        } else if other.start > self.start {
            // Starts inside: grows only if it reaches past the right edge.
            (other.end() > self.end()).then(|| Self::from_bounds(self.start, other.end()))
        } else if other.length > self.length {
            // Starts before and is longer outright: the selection wins whole.
            Some(other)
        } else {
            // Starts before but shorter: extend left, keep the right edge.
            Some(Self::from_bounds(other.start, self.end()))
        }
    }

    /// Subtract `other`'s overlap from `self`, yielding up to two remainder
    /// pieces. With no overlap, `self` comes back untouched.
    ///
    /// The one-sided branches size the remainder by `other.length` rather
    /// than the exact overlap length; on the toggle path the selection never
    /// reaches past the far edge here (a selection that did would have
    /// joined instead), so the two agree. An oversized `other` saturates the
    /// remainder length at zero rather than underflowing; callers drop such
    /// degenerate pieces.
    #[must_use]
    pub fn difference(&self, other: Self) -> Vec<Self> {
        let Some(overlap) = self.intersection(other) else {
            return vec![*self];
        };
        if overlap.start == self.start {
            // Overlap reaches the left edge: keep the right remainder.
            vec![Self::new(
                self.start + other.length,
                self.length.saturating_sub(other.length),
            )]
        } else if overlap.end() == self.end() {
            // Overlap reaches the right edge: keep the left remainder.
            vec![Self::new(
                self.start,
                self.length.saturating_sub(other.length),
            )]
        } else {
            // Strictly interior: punch a hole, keep both sides.
            vec![
                Self::from_bounds(self.start, other.start),
                Self::from_bounds(other.end(), self.end()),
            ]
        }
    }

    /// The smallest single range covering every range in `ranges`, gaps
    /// included. `None` for an empty iterator.
    #[must_use]
    pub fn bounding(ranges: impl IntoIterator<Item = Self>) -> Option<Self> {
        ranges
            .into_iter()
            .map(|range| (range.start, range.end()))
            .reduce(|(start, end), (next_start, next_end)| {
                (start.min(next_start), end.max(next_end))
            })
            .map(|(start, end)| Self::from_bounds(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(start: u64, end: u64) -> TextRange {
        TextRange::from_bounds(start, end)
    }

    #[test]
    fn end_and_contains() {
        let range = TextRange::new(5, 5);
        assert_eq!(range.end(), 10);
        assert!(range.contains(5));
        assert!(range.contains(9));
        assert!(!range.contains(10));
        assert!(!range.contains(4));
    }

    #[test]
    fn touching_ranges_do_not_intersect() {
        assert!(!bounds(5, 10).intersects(bounds(10, 15)));
        assert!(bounds(5, 10).intersects(bounds(9, 15)));
        assert_eq!(bounds(5, 10).intersection(bounds(10, 15)), None);
        assert_eq!(
            bounds(5, 10).intersection(bounds(8, 15)),
            Some(bounds(8, 10))
        );
    }

    #[test]
    fn zero_length_range_intersects_nothing() {
        assert!(!bounds(5, 10).intersects(TextRange::new(7, 0)));
        assert!(!TextRange::new(7, 0).intersects(bounds(5, 10)));
        assert!(!TextRange::new(7, 0).intersects(TextRange::new(7, 0)));
        assert_eq!(bounds(5, 10).intersection(TextRange::new(7, 0)), None);
    }

    #[test]
    fn join_same_end_from_the_left_grows() {
        assert_eq!(bounds(5, 10).join(bounds(3, 10)), Some(bounds(3, 10)));
    }

    #[test]
    fn join_same_end_from_inside_fails() {
        assert_eq!(bounds(5, 10).join(bounds(7, 10)), None);
        assert_eq!(bounds(5, 10).join(bounds(5, 10)), None);
    }

    #[test]
    fn join_same_start_longer_grows_shorter_fails() {
        assert_eq!(bounds(5, 10).join(bounds(5, 12)), Some(bounds(5, 12)));
        assert_eq!(bounds(5, 10).join(bounds(5, 8)), None);
    }

    #[test]
    fn join_strictly_inside_fails() {
        assert_eq!(bounds(5, 15).join(bounds(8, 12)), None);
    }

    #[test]
    fn join_reaching_past_the_right_edge_grows() {
        assert_eq!(bounds(5, 10).join(bounds(7, 14)), Some(bounds(5, 14)));
    }

    #[test]
    fn join_from_the_left_keeps_the_right_edge_unless_longer() {
        // Selection shorter than the stored range: right edge kept.
        assert_eq!(bounds(5, 15).join(bounds(2, 8)), Some(bounds(2, 15)));
        // Selection longer outright: taken whole, both sides extended.
        assert_eq!(bounds(5, 10).join(bounds(3, 12)), Some(bounds(3, 12)));
    }

    #[test]
    fn difference_at_the_left_edge_leaves_right_remainder() {
        assert_eq!(bounds(5, 10).difference(bounds(5, 6)), vec![bounds(6, 10)]);
        // Selection reaching in from before the start.
        assert_eq!(bounds(5, 10).difference(bounds(3, 7)), vec![bounds(9, 10)]);
    }

    #[test]
    fn difference_at_the_right_edge_leaves_left_remainder() {
        assert_eq!(bounds(5, 10).difference(bounds(8, 10)), vec![bounds(5, 8)]);
    }

    #[test]
    fn difference_interior_punches_a_hole() {
        assert_eq!(
            bounds(5, 15).difference(bounds(8, 12)),
            vec![bounds(5, 8), bounds(12, 15)]
        );
    }

    #[test]
    fn difference_oversized_selection_saturates_to_empty() {
        let pieces = bounds(5, 10).difference(bounds(4, 20));
        assert_eq!(pieces.len(), 1);
        assert!(pieces[0].is_empty());
    }

    #[test]
    fn difference_without_overlap_returns_self() {
        assert_eq!(bounds(5, 10).difference(bounds(12, 15)), vec![bounds(5, 10)]);
    }

    #[test]
    fn bounding_spans_all_inputs() {
        let cover = TextRange::bounding([bounds(0, 5), bounds(10, 15), bounds(20, 25)]);
        assert_eq!(cover, Some(bounds(0, 25)));
        assert_eq!(TextRange::bounding([]), None);
    }
}
