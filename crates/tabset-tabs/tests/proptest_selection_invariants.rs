//! Property tests for selection and focus.
//!
//! 1. After any sequence of mutations, selection and focus sit on enabled
//!    tabs whenever one exists.
//! 2. Stepping never moves past either end of the collection.
//! 3. hasContent stays false once a tab without content was inserted.
//! 4. select(i) makes exactly tab i active.

use proptest::prelude::*;
use std::sync::Arc;
use tabset_layout::{FrameQueue, LayoutSnapshot, SharedLayout};
use tabset_tabs::{nearest_safe_index, step_to_enabled, Key, TabRecord, TabsController};

// ── Helpers ─────────────────────────────────────────────────────────────

fn new_controller() -> (TabsController, FrameQueue) {
    let layout = SharedLayout::with_snapshot(LayoutSnapshot::from_widths(&[80.0; 32], 500.0));
    let frames = FrameQueue::new();
    (TabsController::new(Arc::new(layout), frames.clone()), frames)
}

fn records(flags: &[bool]) -> Vec<TabRecord> {
    flags
        .iter()
        .enumerate()
        .map(|(i, &disabled)| TabRecord::new(format!("Tab {}", i)).with_disabled(disabled))
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    Insert { disabled: bool, at: usize },
    Remove(usize),
    Toggle(usize),
    Select(usize),
    Bind(usize),
    Step(isize, bool),
    Key(u8),
    Refresh,
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![
            (any::<bool>(), 0usize..12).prop_map(|(disabled, at)| Op::Insert { disabled, at }),
            (0usize..12).prop_map(Op::Remove),
            (0usize..12).prop_map(Op::Toggle),
            (0usize..14).prop_map(Op::Select),
            (0usize..14).prop_map(Op::Bind),
            (prop_oneof![Just(-1isize), Just(1isize)], any::<bool>())
                .prop_map(|(d, f)| Op::Step(d, f)),
            (0u8..5).prop_map(Op::Key),
            Just(Op::Refresh),
        ],
        1..=40,
    )
}

fn apply(controller: &TabsController, op: &Op) {
    let ids: Vec<String> = controller.tabs().into_iter().map(|t| t.id).collect();
    match *op {
        Op::Insert { disabled, at } => {
            controller.insert_tab(TabRecord::new("t").with_disabled(disabled), Some(at));
        }
        Op::Remove(i) => {
            if let Some(id) = ids.get(i) {
                controller.remove_tab(id).unwrap();
            }
        }
        Op::Toggle(i) => {
            if let Some(id) = ids.get(i) {
                let disabled = controller.tabs()[i].disabled;
                controller.set_disabled(id, !disabled).unwrap();
            }
        }
        Op::Select(i) => controller.select(i),
        Op::Bind(i) => controller.set_selected_index(i),
        Op::Step(delta, focus_only) => {
            controller.increment_selected_index(delta, focus_only);
        }
        Op::Key(k) => {
            let key = match k {
                0 => Key::ArrowLeft,
                1 => Key::ArrowRight,
                2 => Key::Space,
                3 => Key::Enter,
                _ => Key::Other,
            };
            controller.keydown(key);
        }
        Op::Refresh => controller.refresh_index(),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Selection and focus rest on enabled tabs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nearest_safe_index_lands_on_enabled(
        flags in proptest::collection::vec(any::<bool>(), 1..=16),
        candidate in 0usize..20,
    ) {
        let tabs = records(&flags);
        let index = nearest_safe_index(candidate, &tabs);

        if flags.iter().any(|d| !d) {
            prop_assert!(index < tabs.len());
            prop_assert!(!tabs[index].disabled);

            // Nothing enabled is strictly closer
            let distance = index.abs_diff(candidate);
            for (i, tab) in tabs.iter().enumerate() {
                if !tab.disabled {
                    prop_assert!(i.abs_diff(candidate) >= distance);
                }
            }
        } else {
            prop_assert_eq!(index, candidate);
        }
    }
}

proptest! {
    #[test]
    fn mutations_keep_selection_and_focus_enabled(ops in ops()) {
        let (controller, frames) = new_controller();
        controller.insert_tab(TabRecord::new("first"), None);

        for op in &ops {
            apply(&controller, op);
            if flushes_layout(op) {
                frames.run_after_layout();
            }

            let tabs = controller.tabs();
            if tabs.iter().any(|t| !t.disabled) {
                let selected = controller.selected_index();
                prop_assert!(selected.is_some(), "selection absent after {:?}", op);
                if let Some(selected) = selected {
                    prop_assert!(!tabs[selected].disabled, "selected disabled tab after {:?}", op);
                }
                let focus = controller.focus_index();
                prop_assert!(focus < tabs.len());
                prop_assert!(!tabs[focus].disabled, "focused disabled tab after {:?}", op);
            }
            if tabs.is_empty() {
                prop_assert_eq!(controller.selected_index(), None);
            }
        }
    }
}

fn flushes_layout(op: &Op) -> bool {
    matches!(op, Op::Insert { .. } | Op::Remove(_))
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Stepping never wraps
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn step_never_leaves_collection(
        flags in proptest::collection::vec(any::<bool>(), 1..=16),
        start in 0usize..16,
        forward in any::<bool>(),
    ) {
        let tabs = records(&flags);
        let start = start.min(tabs.len() - 1);
        let delta = if forward { 1 } else { -1 };

        match step_to_enabled(start, delta, &tabs) {
            Some(index) => {
                prop_assert!(index < tabs.len());
                prop_assert!(!tabs[index].disabled);
                if forward {
                    prop_assert!(index > start);
                    prop_assert!(tabs[start + 1..index].iter().all(|t| t.disabled));
                } else {
                    prop_assert!(index < start);
                    prop_assert!(tabs[index + 1..start].iter().all(|t| t.disabled));
                }
            }
            None => {
                let beyond = if forward { &tabs[start + 1..] } else { &tabs[..start] };
                prop_assert!(beyond.iter().all(|t| t.disabled));
            }
        }
    }
}

proptest! {
    #[test]
    fn repeated_steps_stop_at_the_ends(
        flags in proptest::collection::vec(any::<bool>(), 1..=12),
        presses in 1usize..30,
        forward in any::<bool>(),
    ) {
        let (controller, _) = new_controller();
        for record in records(&flags) {
            controller.insert_tab(record, None);
        }
        let key = if forward { Key::ArrowRight } else { Key::ArrowLeft };
        for _ in 0..presses {
            controller.keydown(key);
            prop_assert!(controller.focus_index() < flags.len());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. hasContent is sticky
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn has_content_never_recovers(
        with_content in proptest::collection::vec(any::<bool>(), 1..=10),
        removals in proptest::collection::vec(0usize..10, 0..=10),
    ) {
        let (controller, _) = new_controller();
        for (i, &content) in with_content.iter().enumerate() {
            let mut record = TabRecord::new(format!("Tab {}", i));
            if content {
                record = record.with_template("body");
            }
            controller.insert_tab(record, None);
        }
        for i in removals {
            let ids: Vec<String> = controller.tabs().into_iter().map(|t| t.id).collect();
            if let Some(id) = ids.get(i) {
                controller.remove_tab(id).unwrap();
            }
        }

        prop_assert_eq!(controller.has_content(), with_content.iter().all(|&c| c));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. select(i) activates exactly tab i
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn select_activates_one_tab(len in 1usize..12, pick in 0usize..12) {
        let (controller, _) = new_controller();
        let handles: Vec<_> = (0..len)
            .map(|i| controller.insert_tab(TabRecord::new(format!("Tab {}", i)), None))
            .collect();
        let pick = pick % len;

        controller.select(pick);
        for (i, handle) in handles.iter().enumerate() {
            prop_assert_eq!(handle.is_active(), i == pick);
        }
    }
}
