//! Selection indicator under the active header

use serde::{Deserialize, Serialize};
use tabset_layout::LayoutSnapshot;

use crate::state::InkBarDirection;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InkBar {
    /// Inset from the left edge of the strip
    pub left: f64,
    /// Inset from the right edge of the strip
    pub right: f64,
    /// Travel direction of the last move, `None` for the first placement
    pub direction: Option<InkBarDirection>,
    /// Set by the `no_ink_bar` option; position is still tracked
    pub hidden: bool,
}

impl InkBar {
    /// Place the bar under the header at `index`.
    ///
    /// Returns false, leaving the bar untouched, when that header has not
    /// been measured.
    pub fn place(
        &mut self,
        index: usize,
        previous: Option<usize>,
        layout: &LayoutSnapshot,
    ) -> bool {
        let Some(tab) = layout.tab(index) else {
            return false;
        };

        self.left = tab.offset_left;
        self.right = layout.strip_width - tab.offset_left - tab.width;
        self.direction = previous.and_then(|old| match index.cmp(&old) {
            std::cmp::Ordering::Less => Some(InkBarDirection::Left),
            std::cmp::Ordering::Greater => Some(InkBarDirection::Right),
            std::cmp::Ordering::Equal => None,
        });

        tracing::trace!(
            index,
            left = self.left,
            right = self.right,
            direction = ?self.direction,
            "Ink bar placed"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_computes_insets() {
        let layout = LayoutSnapshot::from_widths(&[100.0, 60.0, 40.0], 400.0);
        let mut bar = InkBar::default();

        assert!(bar.place(1, None, &layout));
        assert_eq!(bar.left, 100.0);
        assert_eq!(bar.right, 40.0);
        assert_eq!(bar.direction, None);
    }

    #[test]
    fn test_direction_follows_selection() {
        let layout = LayoutSnapshot::from_widths(&[50.0; 4], 400.0);
        let mut bar = InkBar::default();

        bar.place(3, Some(1), &layout);
        assert_eq!(bar.direction, Some(InkBarDirection::Right));

        bar.place(0, Some(3), &layout);
        assert_eq!(bar.direction, Some(InkBarDirection::Left));

        bar.place(0, Some(0), &layout);
        assert_eq!(bar.direction, None);
    }

    #[test]
    fn test_unmeasured_header_is_skipped() {
        let layout = LayoutSnapshot::from_widths(&[50.0], 400.0);
        let mut bar = InkBar::default();
        bar.place(0, None, &layout);

        assert!(!bar.place(5, Some(0), &layout));
        assert_eq!(bar.left, 0.0);
        assert_eq!(bar.right, 0.0);
    }
}
