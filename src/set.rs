use serde::{Deserialize, Serialize};

use crate::range::TextRange;

/// Shrink remainders must be longer than this to stay in the set; a trim
/// leaving a single character behind is treated as selection noise.
const MIN_REMAINDER_LENGTH: u64 = 1;

/// A segment of a buffer together with its highlight state, as handed to the
/// presentation layer. Runs cover the buffer in order without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct StyleRun {
    pub range: TextRange,
    pub highlighted: bool,
}

/// The highlighted ranges of a single text buffer.
///
/// Invariant: no two stored ranges overlap. Ranges that merely touch
/// end-to-start stay separate; only a toggle whose selection overlaps both
/// merges them. The storage order carries no meaning.
///
/// All mutation flows through [`RangeSet::toggle`] (plus [`RangeSet::clear`]);
/// callers re-read the set after each toggle to repaint.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RangeSet {
    ranges: Vec<TextRange>,
}

impl RangeSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Rebuild a set from ranges previously read off a set (e.g. restored
    /// from persistence). Zero-length entries are discarded.
    #[must_use]
    pub fn from_ranges(ranges: Vec<TextRange>) -> Self {
        Self {
            ranges: ranges.into_iter().filter(|r| !r.is_empty()).collect(),
        }
    }

    #[must_use]
    pub fn ranges(&self) -> &[TextRange] {
        &self.ranges
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextRange> {
        self.ranges.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether the offset falls inside any highlighted range.
    #[must_use]
    pub fn contains(&self, pos: u64) -> bool {
        self.ranges.iter().any(|range| range.contains(pos))
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Toggle the highlight state for the user's current selection.
    ///
    /// Depending on how many stored ranges the selection overlaps:
    /// - none: the selection is inserted as a new highlight;
    /// - exactly one: the pair is [joined](TextRange::join) when the
    ///   selection reads as a grow gesture, otherwise the selection is
    ///   [subtracted](TextRange::difference) from the stored range and
    ///   remainders longer than one character are kept;
    /// - several: all of them coalesce with the selection into their single
    ///   bounding range, gaps between them included.
    ///
    /// A zero-length selection (cursor placement without a drag) toggles
    /// nothing.
    pub fn toggle(&mut self, selected: TextRange) {
        if selected.is_empty() {
            return;
        }
        let matched = self.matched_indexes(selected);
        match matched.as_slice() {
            [] => self.ranges.push(selected),
            &[index] => {
                let existing = self.ranges.remove(index);
                if let Some(joined) = existing.join(selected) {
                    self.ranges.push(joined);
                } else {
                    for piece in existing.difference(selected) {
                        if piece.length > MIN_REMAINDER_LENGTH {
                            self.ranges.push(piece);
                        }
                    }
                }
            }
            _ => {
                let mut spanned = Vec::with_capacity(matched.len() + 1);
                // Remove back-to-front so the earlier indexes stay valid.
                for &index in matched.iter().rev() {
                    spanned.push(self.ranges.remove(index));
                }
                spanned.push(selected);
                if let Some(cover) = TextRange::bounding(spanned) {
                    self.ranges.push(cover);
                }
            }
        }
    }

    /// Split `[0, buffer_len)` into ordered runs alternating between
    /// highlighted and plain text, for the presentation layer to style.
    /// Ranges reaching past `buffer_len` are clipped to it.
    #[must_use]
    pub fn style_runs(&self, buffer_len: u64) -> Vec<StyleRun> {
        let mut sorted = self.ranges.clone();
        sorted.sort_by_key(|range| range.start);

        let mut runs = Vec::new();
        let mut cursor = 0;
        for range in sorted {
            if range.start >= buffer_len {
                break;
            }
            if range.start > cursor {
                runs.push(StyleRun {
                    range: TextRange::from_bounds(cursor, range.start),
                    highlighted: false,
                });
            }
            let end = range.end().min(buffer_len);
            runs.push(StyleRun {
                range: TextRange::from_bounds(range.start, end),
                highlighted: true,
            });
            cursor = end;
        }
        if cursor < buffer_len {
            runs.push(StyleRun {
                range: TextRange::from_bounds(cursor, buffer_len),
                highlighted: false,
            });
        }
        runs
    }

    /// Indexes of stored ranges whose intersection with `selected` has
    /// positive length.
    fn matched_indexes(&self, selected: TextRange) -> Vec<usize> {
        self.ranges
            .iter()
            .enumerate()
            .filter(|(_, range)| range.intersects(selected))
            .map(|(index, _)| index)
            .collect()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a TextRange;
    type IntoIter = core::slice::Iter<'a, TextRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
