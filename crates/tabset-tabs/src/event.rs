//! Notifications for the presentation layer

use serde::Serialize;

/// Emitted by the controller in the order changes happen; drained with
/// [`crate::TabsController::drain_events`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TabsEvent {
    /// The selected tab changed
    SelectionChanged {
        from: Option<usize>,
        to: Option<usize>,
    },
    /// The header strip moved
    PaginationChanged { offset: f64 },
    /// Keyboard focus should move to the dummy element of this tab
    FocusRedirected { index: usize },
}
