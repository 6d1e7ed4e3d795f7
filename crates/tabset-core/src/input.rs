//! User input forwarded by the presentation layer

use serde::{Deserialize, Serialize};
use tabset_tabs::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swipe {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Mouse wheel over the header strip
    Wheel { delta: f64 },
    /// Pointer click on a header
    Click { index: usize },
    /// The strip's focus target gained focus
    Focus,
    Blur,
    PreviousPage,
    NextPage,
    /// Swipe over the header strip pages it
    HeaderSwipe(Swipe),
    /// Swipe over a content pane moves the selection
    ContentSwipe(Swipe),
}
