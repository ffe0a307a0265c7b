use serde::{Deserialize, Serialize};

use crate::range::TextRange;
use crate::set::RangeSet;

/// An RGBA color with 8-bit channels, used as the highlight fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// The classic marker yellow, used when no color is configured.
    pub const YELLOW: Self = Self::opaque(255, 255, 0);

    #[must_use]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::YELLOW
    }
}

/// Everything a highlightable view persists between launches: its stable
/// identifier, the highlighted ranges, and the menu title and fill color
/// configured for it. A flat record; serializing it round-trips every field
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct HighlightState {
    /// Identifier of the view this state belongs to. Must be unique within
    /// the app for persistence to be meaningful.
    pub view_id: String,
    pub ranges: Vec<TextRange>,
    /// Title shown on the custom menu item; `None` means the default.
    pub menu_title: Option<String>,
    pub color: Rgba,
}

impl HighlightState {
    #[must_use]
    pub fn new(view_id: impl Into<String>) -> Self {
        Self {
            view_id: view_id.into(),
            ranges: Vec::new(),
            menu_title: None,
            color: Rgba::YELLOW,
        }
    }

    /// State with a freshly generated identifier, for views the app did not
    /// name itself.
    #[must_use]
    pub fn with_generated_id() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    /// Rebuild the live range set from the persisted ranges.
    #[must_use]
    pub fn range_set(&self) -> RangeSet {
        RangeSet::from_ranges(self.ranges.clone())
    }

    /// Capture the current ranges of a live set into this record.
    pub fn set_ranges(&mut self, set: &RangeSet) {
        self.ranges = set.ranges().to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_yellow() {
        assert_eq!(Rgba::default(), Rgba::YELLOW);
        assert_eq!(Rgba::YELLOW.alpha, 255);
    }

    #[test]
    fn new_state_is_empty_with_defaults() {
        let state = HighlightState::new("reader");
        assert_eq!(state.view_id, "reader");
        assert!(state.ranges.is_empty());
        assert_eq!(state.menu_title, None);
        assert_eq!(state.color, Rgba::YELLOW);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = HighlightState::with_generated_id();
        let b = HighlightState::with_generated_id();
        assert_ne!(a.view_id, b.view_id);
        assert!(!a.view_id.is_empty());
    }

    #[test]
    fn range_set_round_trips_through_state() {
        let mut set = RangeSet::new();
        set.toggle(TextRange::new(5, 5));
        set.toggle(TextRange::new(20, 3));

        let mut state = HighlightState::new("reader");
        state.set_ranges(&set);
        assert_eq!(state.range_set(), set);
    }
}
