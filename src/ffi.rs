//! `UniFFI` bindings for the highlight core
//!
//! This module wraps one text buffer's range set behind a single object so
//! hosts (iOS, Android, Python, etc.) drive one toggle entry point and
//! re-read the highlights afterward to repaint.
#![allow(clippy::missing_panics_doc)]

use std::sync::Mutex;

use crate::menu::DEFAULT_MENU_TITLE;
use crate::models::{HighlightState, Rgba};
use crate::range::TextRange;
use crate::set::{RangeSet, StyleRun};

struct BufferState {
    set: RangeSet,
    view_id: String,
    menu_title: Option<String>,
    color: Rgba,
}

/// One highlightable text buffer, shared across the FFI boundary.
#[derive(uniffi::Object)]
pub struct HighlightedBuffer {
    state: Mutex<BufferState>,
}

#[uniffi::export]
impl HighlightedBuffer {
    /// Create an empty buffer with the given view identifier
    #[uniffi::constructor]
    #[must_use]
    pub fn new(view_id: String) -> Self {
        Self::from_state(HighlightState::new(view_id))
    }

    /// Restore a buffer from previously persisted state
    #[uniffi::constructor]
    #[must_use]
    pub fn from_state(state: HighlightState) -> Self {
        Self {
            state: Mutex::new(BufferState {
                set: state.range_set(),
                view_id: state.view_id,
                menu_title: state.menu_title,
                color: state.color,
            }),
        }
    }

    /// Toggle the highlight state for the current selection
    pub fn toggle_highlight(&self, selected: TextRange) {
        self.state.lock().unwrap().set.toggle(selected);
    }

    /// The current highlighted ranges, in no particular order
    #[must_use]
    pub fn highlights(&self) -> Vec<TextRange> {
        self.state.lock().unwrap().set.ranges().to_vec()
    }

    /// Ordered styling runs covering `[0, buffer_len)`
    #[must_use]
    pub fn style_runs(&self, buffer_len: u64) -> Vec<StyleRun> {
        self.state.lock().unwrap().set.style_runs(buffer_len)
    }

    /// Whether the offset falls inside a highlight
    #[must_use]
    pub fn is_highlighted(&self, pos: u64) -> bool {
        self.state.lock().unwrap().set.contains(pos)
    }

    /// Remove every highlight
    pub fn clear(&self) {
        self.state.lock().unwrap().set.clear();
    }

    /// The configured menu title, or the default
    #[must_use]
    pub fn menu_title(&self) -> String {
        self.state
            .lock()
            .unwrap()
            .menu_title
            .clone()
            .unwrap_or_else(|| DEFAULT_MENU_TITLE.to_string())
    }

    pub fn set_menu_title(&self, title: Option<String>) {
        self.state.lock().unwrap().menu_title = title;
    }

    /// The configured highlight fill color
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.state.lock().unwrap().color
    }

    pub fn set_color(&self, color: Rgba) {
        self.state.lock().unwrap().color = color;
    }

    /// Snapshot the buffer into a flat record for persistence
    #[must_use]
    pub fn state(&self) -> HighlightState {
        let state = self.state.lock().unwrap();
        HighlightState {
            view_id: state.view_id.clone(),
            ranges: state.set.ranges().to_vec(),
            menu_title: state.menu_title.clone(),
            color: state.color,
        }
    }
}
