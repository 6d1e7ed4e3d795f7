//! Layout measurements supplied by the rendering environment

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Geometry of one rendered tab header
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TabMetrics {
    /// Distance from the start of the tab strip
    pub offset_left: f64,
    /// Rendered header width
    pub width: f64,
}

impl TabMetrics {
    pub fn new(offset_left: f64, width: f64) -> Self {
        Self { offset_left, width }
    }

    /// Right edge of the header, measured from the start of the strip
    pub fn right(&self) -> f64 {
        self.offset_left + self.width
    }
}

/// One read of the live layout, taken after a render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Client width of the tab-set element
    pub container_width: f64,
    /// Client width of the canvas the header strip scrolls inside
    pub viewport_width: f64,
    /// Rendered width of the strip holding the headers and the ink bar
    pub strip_width: f64,
    /// Window width, matched against the mobile breakpoint
    pub window_width: f64,
    /// Header geometry in presentation order
    pub tabs: Vec<TabMetrics>,
}

impl LayoutSnapshot {
    /// Lay headers out back to back inside a viewport of `viewport_width`.
    ///
    /// Container and window take the viewport width; the strip is as wide
    /// as its headers.
    pub fn from_widths(widths: &[f64], viewport_width: f64) -> Self {
        let mut left = 0.0;
        let tabs: Vec<TabMetrics> = widths
            .iter()
            .map(|&width| {
                let tab = TabMetrics::new(left, width);
                left += width;
                tab
            })
            .collect();

        Self {
            container_width: viewport_width,
            viewport_width,
            strip_width: left,
            window_width: viewport_width,
            tabs,
        }
    }

    pub fn with_window_width(mut self, window_width: f64) -> Self {
        self.window_width = window_width;
        self
    }

    pub fn tab(&self, index: usize) -> Option<&TabMetrics> {
        self.tabs.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Sum of all header widths
    pub fn total_tab_width(&self) -> f64 {
        self.tabs.iter().map(|t| t.width).sum()
    }

    /// Right edge of the last header, zero with no headers
    pub fn content_width(&self) -> f64 {
        self.tabs.last().map(TabMetrics::right).unwrap_or(0.0)
    }
}

/// Read access to the rendering environment's measurements.
///
/// Returns `None` until the first render has produced a layout.
pub trait LayoutSource: Send + Sync {
    fn measure(&self) -> Option<LayoutSnapshot>;
}

/// Layout source the host pushes fresh measurements into after each
/// render pass.
#[derive(Debug, Default)]
pub struct SharedLayout {
    snapshot: Arc<RwLock<Option<LayoutSnapshot>>>,
}

impl SharedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: LayoutSnapshot) -> Self {
        let layout = Self::new();
        layout.set(snapshot);
        layout
    }

    /// Replace the current measurements
    pub fn set(&self, snapshot: LayoutSnapshot) {
        tracing::trace!(
            tabs = snapshot.tabs.len(),
            viewport = snapshot.viewport_width,
            "Layout measured"
        );
        *self.snapshot.write() = Some(snapshot);
    }

    /// Forget measurements, e.g. when the element is detached
    pub fn clear(&self) {
        *self.snapshot.write() = None;
    }

    /// Apply a change to the current measurements in place
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut LayoutSnapshot),
    {
        if let Some(snapshot) = self.snapshot.write().as_mut() {
            f(snapshot);
        }
    }
}

impl Clone for SharedLayout {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
        }
    }
}

impl LayoutSource for SharedLayout {
    fn measure(&self) -> Option<LayoutSnapshot> {
        self.snapshot.read().clone()
    }
}
