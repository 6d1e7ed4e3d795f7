//! Tabset Layout
//!
//! Everything the tab controller needs from the rendering environment:
//! measured header geometry, the horizontal pagination offset computed
//! from it, a queue of tasks that run after the next layout pass, and a
//! window-resize registry with explicit subscribe/unsubscribe.

mod frame;
mod metrics;
mod pagination;
mod resize;

pub use frame::FrameQueue;
pub use metrics::{LayoutSnapshot, LayoutSource, SharedLayout, TabMetrics};
pub use pagination::Pagination;
pub use resize::{ResizeNotifier, Subscription};
