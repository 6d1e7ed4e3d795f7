//! Pagination of the tab header strip
//!
//! When headers overflow the canvas the strip is shifted left by
//! `offset` pixels. The offset is always kept inside
//! `[0, content_width - viewport_width]`.

use serde::{Deserialize, Serialize};

use crate::metrics::LayoutSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pagination {
    offset: f64,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current horizontal displacement of the strip
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Clamp a candidate offset to the legal range for `layout`.
    ///
    /// Returns 0 when the headers fit inside the viewport or nothing has
    /// been measured.
    pub fn fix_offset(value: f64, layout: &LayoutSnapshot) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        let max = (layout.content_width() - layout.viewport_width).max(0.0);
        value.max(0.0).min(max)
    }

    /// Whether the headers are wider than the space available to them
    pub fn should_paginate(layout: &LayoutSnapshot) -> bool {
        !layout.is_empty() && layout.total_tab_width() > layout.container_width
    }

    /// Store a clamped offset. Returns true if the offset moved.
    pub fn set_offset(&mut self, value: f64, layout: &LayoutSnapshot) -> bool {
        let fixed = Self::fix_offset(value, layout);
        if fixed == self.offset {
            return false;
        }
        tracing::debug!(from = self.offset, to = fixed, "Pagination offset changed");
        self.offset = fixed;
        true
    }

    /// Re-clamp the current offset after the layout changed
    pub fn refit(&mut self, layout: &LayoutSnapshot) -> bool {
        self.set_offset(self.offset, layout)
    }

    /// Apply a mouse-wheel delta. Returns false, leaving the offset alone,
    /// when the strip does not overflow.
    pub fn scroll(&mut self, wheel_delta: f64, layout: &LayoutSnapshot) -> bool {
        if !Self::should_paginate(layout) {
            return false;
        }
        self.set_offset(self.offset - wheel_delta, layout);
        true
    }

    /// Bring the first header that crosses the right edge of the viewport
    /// to the left edge.
    pub fn next_page(&mut self, layout: &LayoutSnapshot) -> bool {
        let edge = layout.viewport_width + self.offset;
        let Some(tab) = layout
            .tabs
            .iter()
            .find(|t| t.right() > edge)
            .or_else(|| layout.tabs.last())
        else {
            return false;
        };
        self.set_offset(tab.offset_left, layout)
    }

    /// Bring the first header that crosses the left edge of the viewport
    /// to the right edge.
    pub fn previous_page(&mut self, layout: &LayoutSnapshot) -> bool {
        let edge = self.offset;
        let Some(tab) = layout
            .tabs
            .iter()
            .find(|t| t.right() >= edge)
            .or_else(|| layout.tabs.last())
        else {
            return false;
        };
        self.set_offset(tab.right() - layout.viewport_width, layout)
    }

    pub fn can_page_back(&self) -> bool {
        self.offset > 0.0
    }

    pub fn can_page_forward(&self, layout: &LayoutSnapshot) -> bool {
        layout
            .tabs
            .last()
            .is_some_and(|t| t.right() > layout.viewport_width + self.offset)
    }

    /// Move the offset as little as possible so the header at `index` is
    /// fully visible. No-op if that header has not been measured.
    pub fn reveal(&mut self, index: usize, layout: &LayoutSnapshot) -> bool {
        let Some(tab) = layout.tab(index) else {
            return false;
        };
        let offset = self
            .offset
            .max(Self::fix_offset(tab.right() - layout.viewport_width, layout))
            .min(Self::fix_offset(tab.offset_left, layout));
        self.set_offset(offset, layout)
    }
}
