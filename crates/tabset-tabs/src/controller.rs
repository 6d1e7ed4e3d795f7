//! Tabs Controller
//!
//! Owns the ordered tab collection together with the selected index, the
//! keyboard-focus index and the pagination offset. Every mutation leaves
//! selection and focus on enabled tabs and recomputes the ink bar and
//! offset from the current layout instead of patching them.
//!
//! Measurements come from a [`LayoutSource`]. Anything that depends on
//! them quietly does nothing while no layout is available. Changes that
//! alter header widths (insertion, removal, relabeling) schedule a
//! recomputation on the [`FrameQueue`] so it sees the post-render layout.

use parking_lot::RwLock;
use std::sync::{Arc, Weak};

use tabset_layout::{FrameQueue, LayoutSnapshot, LayoutSource, Pagination};

use crate::error::TabError;
use crate::event::TabsEvent;
use crate::index::{nearest_safe_index, step_to_enabled};
use crate::ink_bar::InkBar;
use crate::state::{Key, StretchTabs};
use crate::tab::{TabHandle, TabRecord};
use crate::Result;

const DEFAULT_MOBILE_BREAKPOINT: f64 = 600.0;

pub(crate) struct TabsState {
    tabs: Vec<TabRecord>,
    selected: usize,
    /// Selection bound before any tab existed, applied once its tab arrives
    pending_selection: Option<usize>,
    focus_index: usize,
    last_selected: Option<usize>,
    has_content: bool,
    has_focus: bool,
    last_click: bool,
    pagination: Pagination,
    ink_bar: InkBar,
    stretch_tabs: StretchTabs,
    mobile_breakpoint: f64,
    events: Vec<TabsEvent>,
    destroyed: bool,
}

impl TabsState {
    fn new() -> Self {
        Self {
            tabs: Vec::new(),
            selected: 0,
            pending_selection: None,
            focus_index: 0,
            last_selected: None,
            has_content: true,
            has_focus: false,
            last_click: false,
            pagination: Pagination::new(),
            ink_bar: InkBar::default(),
            stretch_tabs: StretchTabs::default(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            events: Vec::new(),
            destroyed: false,
        }
    }

    pub(crate) fn tabs(&self) -> &[TabRecord] {
        &self.tabs
    }

    pub(crate) fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Selection, or `None` while it does not point at a tab
    pub(crate) fn selected_index(&self) -> Option<usize> {
        (self.selected < self.tabs.len()).then_some(self.selected)
    }

    pub(crate) fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub(crate) fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub(crate) fn last_click(&self) -> bool {
        self.last_click
    }

    fn record_mut(&mut self, id: &str) -> Result<&mut TabRecord> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TabError::NotFound(id.to_string()))
    }

    fn emit(&mut self, event: TabsEvent) {
        self.events.push(event);
    }

    fn offset_moved(&mut self, moved: bool) -> bool {
        if moved {
            let offset = self.pagination.offset();
            self.emit(TabsEvent::PaginationChanged { offset });
        }
        moved
    }

    /// Move the selection to the nearest enabled tab at or around `index`
    fn change_selected(&mut self, index: usize, layout: Option<&LayoutSnapshot>) -> bool {
        let old = self.selected_index();
        self.change_selected_from(index, old, layout)
    }

    /// Like `change_selected`, with `old` being the selection as it was
    /// before the collection changed under it
    fn change_selected_from(
        &mut self,
        index: usize,
        old: Option<usize>,
        layout: Option<&LayoutSnapshot>,
    ) -> bool {
        let resolved = nearest_safe_index(index, &self.tabs);
        if resolved == self.selected {
            return false;
        }

        self.selected = resolved;
        self.last_selected = old;
        self.update_ink_bar(layout);

        let new = self.selected_index();
        if old != new {
            tracing::debug!(from = ?old, to = ?new, "Tab selection changed");
            self.emit(TabsEvent::SelectionChanged { from: old, to: new });
        }
        true
    }

    /// Move keyboard focus and scroll the strip so the focused header is
    /// visible
    fn change_focus(&mut self, index: usize, layout: Option<&LayoutSnapshot>) -> bool {
        if index == self.focus_index {
            return false;
        }
        self.focus_index = index;
        tracing::debug!(index, "Tab focus changed");

        let Some(layout) = layout.filter(|l| l.tab(index).is_some()) else {
            return true;
        };
        let moved = self.pagination.reveal(index, layout);
        self.offset_moved(moved);
        self.emit(TabsEvent::FocusRedirected { index });
        true
    }

    fn refresh_index(&mut self, layout: Option<&LayoutSnapshot>) {
        let old = self.selected_index();
        self.refresh_index_from(old, layout);
    }

    fn refresh_index_from(&mut self, old: Option<usize>, layout: Option<&LayoutSnapshot>) {
        self.change_selected_from(self.selected, old, layout);
        let focus = nearest_safe_index(self.focus_index, &self.tabs);
        self.change_focus(focus, layout);
    }

    /// Data-binding path. With no tabs yet the value is held until the
    /// collection is long enough to contain it.
    fn bind_selected(&mut self, index: usize, layout: Option<&LayoutSnapshot>) -> bool {
        if self.tabs.is_empty() {
            self.pending_selection = Some(index);
            return false;
        }
        self.pending_selection = None;
        self.change_selected(index, layout)
    }

    /// Selection made by the user. Once tabs exist it overrides a held
    /// binding.
    fn user_select(&mut self, index: usize, layout: Option<&LayoutSnapshot>) -> bool {
        if !self.tabs.is_empty() {
            self.pending_selection = None;
        }
        self.change_selected(index, layout)
    }

    /// Apply a held selection as the initial placement, without a
    /// transition direction
    fn apply_pending_selection(&mut self, layout: Option<&LayoutSnapshot>) {
        let Some(index) = self.pending_selection else {
            return;
        };
        if index >= self.tabs.len() {
            return;
        }
        self.pending_selection = None;
        if self.change_selected(index, layout) {
            self.last_selected = None;
            self.ink_bar.direction = None;
        }
    }

    fn update_ink_bar(&mut self, layout: Option<&LayoutSnapshot>) -> bool {
        let Some(index) = self.selected_index() else {
            return false;
        };
        let Some(layout) = layout else {
            tracing::trace!("Ink bar update skipped, layout not measured");
            return false;
        };
        self.ink_bar.place(index, self.last_selected, layout)
    }

    fn increment(
        &mut self,
        delta: isize,
        focus_only: bool,
        layout: Option<&LayoutSnapshot>,
    ) -> bool {
        let start = if focus_only {
            self.focus_index
        } else {
            self.selected
        };
        let Some(index) = step_to_enabled(start, delta, &self.tabs) else {
            return false;
        };
        if focus_only {
            self.change_focus(index, layout)
        } else {
            self.user_select(index, layout)
        }
    }

    fn handle_window_resize(&mut self, layout: Option<&LayoutSnapshot>) {
        self.last_selected = self.selected_index();
        self.update_ink_bar(layout);
        if let Some(layout) = layout {
            let moved = self.pagination.refit(layout);
            self.offset_moved(moved);
        }
    }

    /// Recompute everything that depends on header widths
    fn after_layout(&mut self, layout: Option<&LayoutSnapshot>) {
        self.update_ink_bar(layout);
        if let Some(layout) = layout {
            let moved = self.pagination.refit(layout);
            self.offset_moved(moved);
        }
    }

    fn should_paginate(&self, layout: Option<&LayoutSnapshot>) -> bool {
        layout.is_some_and(Pagination::should_paginate)
    }

    fn should_stretch_tabs(&self, layout: Option<&LayoutSnapshot>) -> bool {
        match self.stretch_tabs {
            StretchTabs::Always => true,
            StretchTabs::Never => false,
            StretchTabs::Auto => layout.is_some_and(|l| {
                !Pagination::should_paginate(l) && l.window_width <= self.mobile_breakpoint
            }),
        }
    }
}

/// Controller for one tab-set instance.
///
/// Cloning yields another reference to the same controller.
pub struct TabsController {
    state: Arc<RwLock<TabsState>>,
    layout: Arc<dyn LayoutSource>,
    frames: FrameQueue,
}

/// Non-owning reference used by deferred tasks and resize listeners
#[derive(Clone)]
pub struct WeakTabsController {
    state: Weak<RwLock<TabsState>>,
    layout: Arc<dyn LayoutSource>,
    frames: FrameQueue,
}

impl WeakTabsController {
    /// The controller, if it has been neither dropped nor destroyed
    pub fn upgrade(&self) -> Option<TabsController> {
        let state = self.state.upgrade()?;
        if state.read().is_destroyed() {
            return None;
        }
        Some(TabsController {
            state,
            layout: Arc::clone(&self.layout),
            frames: self.frames.clone(),
        })
    }
}

impl TabsController {
    pub fn new(layout: Arc<dyn LayoutSource>, frames: FrameQueue) -> Self {
        Self {
            state: Arc::new(RwLock::new(TabsState::new())),
            layout,
            frames,
        }
    }

    pub fn downgrade(&self) -> WeakTabsController {
        WeakTabsController {
            state: Arc::downgrade(&self.state),
            layout: Arc::clone(&self.layout),
            frames: self.frames.clone(),
        }
    }

    /// Run `f` against the state with a fresh measurement. No-op once the
    /// controller is destroyed.
    fn mutate<T, F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&mut TabsState, Option<&LayoutSnapshot>) -> T,
    {
        let layout = self.layout.measure();
        let mut state = self.state.write();
        if state.destroyed {
            return None;
        }
        Some(f(&mut state, layout.as_ref()))
    }

    fn inspect<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&TabsState, Option<&LayoutSnapshot>) -> T,
    {
        let layout = self.layout.measure();
        let state = self.state.read();
        f(&state, layout.as_ref())
    }

    /// Recompute the ink bar and re-clamp the offset once the next render
    /// has produced a layout
    fn schedule_layout_refresh(&self) {
        let weak = self.downgrade();
        self.frames.schedule(move || match weak.upgrade() {
            Some(controller) => {
                controller.mutate(|state, layout| state.after_layout(layout));
            }
            None => tracing::trace!("Deferred layout refresh skipped, controller gone"),
        });
    }

    // -- tab lifecycle --

    /// Insert `record` at `index` (clamped to the end), or append.
    pub fn insert_tab(&self, record: TabRecord, index: Option<usize>) -> TabHandle {
        let id = record.id.clone();
        let inserted = self.mutate(|state, layout| {
            if !record.has_content() {
                state.has_content = false;
            }
            let at = index.map_or(state.tabs.len(), |i| i.min(state.tabs.len()));
            tracing::info!(tab_id = %record.id, index = at, "Inserted tab");
            state.tabs.insert(at, record);
            state.refresh_index(layout);
            state.apply_pending_selection(layout);
        });
        if inserted.is_some() {
            self.schedule_layout_refresh();
        }
        TabHandle::new(id, Arc::downgrade(&self.state))
    }

    /// Remove the tab with `id`, repairing selection and focus.
    pub fn remove_tab(&self, id: &str) -> Result<TabRecord> {
        let removed = self
            .mutate(|state, layout| -> Result<TabRecord> {
                let index = state
                    .position_of(id)
                    .ok_or_else(|| TabError::NotFound(id.to_string()))?;
                let old = state.selected_index();
                let record = state.tabs.remove(index);
                state.refresh_index_from(old, layout);
                tracing::info!(tab_id = %id, index, "Removed tab");
                Ok(record)
            })
            .unwrap_or_else(|| Err(TabError::NotFound(id.to_string())))?;
        self.schedule_layout_refresh();
        Ok(removed)
    }

    /// Enable or disable a tab, moving selection and focus off it if needed
    pub fn set_disabled(&self, id: &str, disabled: bool) -> Result<()> {
        self.mutate(|state, layout| -> Result<()> {
            state.record_mut(id)?.disabled = disabled;
            state.refresh_index(layout);
            Ok(())
        })
        .unwrap_or_else(|| Err(TabError::NotFound(id.to_string())))
    }

    pub fn set_label(&self, id: &str, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        self.mutate(|state, _| -> Result<()> {
            state.record_mut(id)?.label = label;
            Ok(())
        })
        .unwrap_or_else(|| Err(TabError::NotFound(id.to_string())))?;
        self.schedule_layout_refresh();
        Ok(())
    }

    /// Replace a tab's content template. Clearing it turns off content
    /// panes for good.
    pub fn set_template(&self, id: &str, template: Option<String>) -> Result<()> {
        self.mutate(|state, _| -> Result<()> {
            let cleared = template.is_none();
            state.record_mut(id)?.template = template;
            if cleared {
                state.has_content = false;
            }
            Ok(())
        })
        .unwrap_or_else(|| Err(TabError::NotFound(id.to_string())))?;
        self.schedule_layout_refresh();
        Ok(())
    }

    // -- selection and focus --

    /// Move selection and focus off disabled or missing tabs
    pub fn refresh_index(&self) {
        self.mutate(|state, layout| state.refresh_index(layout));
    }

    /// Select from a pointer click: selection and focus both move, and the
    /// focus ring is suppressed.
    pub fn select(&self, index: usize) {
        self.mutate(|state, layout| {
            state.user_select(index, layout);
            let focus = nearest_safe_index(index, &state.tabs);
            state.change_focus(focus, layout);
            state.last_click = true;
        });
    }

    /// Data-binding path for the selected index. Before the first tab is
    /// inserted the value is held until its tab exists.
    pub fn set_selected_index(&self, index: usize) {
        self.mutate(|state, layout| state.bind_selected(index, layout));
    }

    /// Step selection (or only focus) by `delta`, skipping disabled tabs.
    /// Stops at either end without wrapping.
    pub fn increment_selected_index(&self, delta: isize, focus_only: bool) -> bool {
        self.mutate(|state, layout| state.increment(delta, focus_only, layout))
            .unwrap_or(false)
    }

    /// Handle a key press on the tab strip. Returns true when the key was
    /// consumed and its default action should be suppressed.
    pub fn keydown(&self, key: Key) -> bool {
        self.mutate(|state, layout| {
            let consumed = match key {
                Key::ArrowLeft => {
                    state.increment(-1, true, layout);
                    true
                }
                Key::ArrowRight => {
                    state.increment(1, true, layout);
                    true
                }
                Key::Space | Key::Enter => {
                    state.user_select(state.focus_index, layout);
                    true
                }
                Key::Other => false,
            };
            state.last_click = false;
            consumed
        })
        .unwrap_or(false)
    }

    /// The focus target of the strip received DOM focus
    pub fn focus(&self) {
        self.mutate(|state, _| state.has_focus = true);
    }

    pub fn blur(&self) {
        self.mutate(|state, _| state.has_focus = false);
    }

    /// Ask presentation to move DOM focus to the focused tab's dummy element
    pub fn redirect_focus(&self) {
        self.mutate(|state, _| {
            if state.focus_index < state.tabs.len() {
                let index = state.focus_index;
                state.emit(TabsEvent::FocusRedirected { index });
            }
        });
    }

    // -- layout --

    /// Place the ink bar under the selected header. False when there is
    /// nothing to place or no layout yet.
    pub fn update_ink_bar_styles(&self) -> bool {
        self.mutate(|state, layout| state.update_ink_bar(layout))
            .unwrap_or(false)
    }

    pub fn handle_window_resize(&self) {
        self.mutate(|state, layout| state.handle_window_resize(layout));
    }

    /// Apply a mouse-wheel delta. Returns true when the strip scrolled and
    /// the page should not.
    pub fn scroll(&self, wheel_delta: f64) -> bool {
        self.mutate(|state, layout| {
            let Some(layout) = layout else {
                return false;
            };
            let before = state.pagination.offset();
            if !state.pagination.scroll(wheel_delta, layout) {
                return false;
            }
            let moved = state.pagination.offset() != before;
            state.offset_moved(moved);
            true
        })
        .unwrap_or(false)
    }

    pub fn next_page(&self) -> bool {
        self.mutate(|state, layout| {
            let moved = layout.is_some_and(|l| state.pagination.next_page(l));
            state.offset_moved(moved)
        })
        .unwrap_or(false)
    }

    pub fn previous_page(&self) -> bool {
        self.mutate(|state, layout| {
            let moved = layout.is_some_and(|l| state.pagination.previous_page(l));
            state.offset_moved(moved)
        })
        .unwrap_or(false)
    }

    pub fn set_stretch_tabs(&self, mode: StretchTabs) {
        self.mutate(|state, _| state.stretch_tabs = mode);
    }

    pub fn set_no_ink_bar(&self, hidden: bool) {
        self.mutate(|state, _| state.ink_bar.hidden = hidden);
    }

    /// Window width at or below which `auto` stretching applies
    pub fn set_mobile_breakpoint(&self, width: f64) {
        self.mutate(|state, _| state.mobile_breakpoint = width);
    }

    // -- read model --

    pub fn tabs(&self) -> Vec<TabRecord> {
        self.state.read().tabs.clone()
    }

    pub fn handles(&self) -> Vec<TabHandle> {
        self.state
            .read()
            .tabs
            .iter()
            .map(|t| TabHandle::new(t.id.clone(), Arc::downgrade(&self.state)))
            .collect()
    }

    pub fn handle(&self, id: &str) -> Option<TabHandle> {
        self.state
            .read()
            .position_of(id)
            .map(|_| TabHandle::new(id.to_string(), Arc::downgrade(&self.state)))
    }

    pub fn len(&self) -> usize {
        self.state.read().tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().tabs.is_empty()
    }

    /// Selected index, `None` when no tab is selected
    pub fn selected_index(&self) -> Option<usize> {
        self.state.read().selected_index()
    }

    pub fn focus_index(&self) -> usize {
        self.state.read().focus_index
    }

    pub fn last_selected_index(&self) -> Option<usize> {
        self.state.read().last_selected
    }

    /// True until the first selection change; content panes skip their
    /// slide transition while it holds
    pub fn no_transition(&self) -> bool {
        self.state.read().last_selected.is_none()
    }

    pub fn has_content(&self) -> bool {
        self.state.read().has_content
    }

    pub fn has_focus(&self) -> bool {
        self.state.read().has_focus
    }

    pub fn last_click(&self) -> bool {
        self.state.read().last_click
    }

    pub fn offset(&self) -> f64 {
        self.state.read().pagination.offset()
    }

    pub fn ink_bar(&self) -> InkBar {
        self.state.read().ink_bar
    }

    pub fn stretch_tabs(&self) -> StretchTabs {
        self.state.read().stretch_tabs
    }

    pub fn should_paginate(&self) -> bool {
        self.inspect(|state, layout| state.should_paginate(layout))
    }

    pub fn should_stretch_tabs(&self) -> bool {
        self.inspect(|state, layout| state.should_stretch_tabs(layout))
    }

    pub fn can_page_forward(&self) -> bool {
        self.inspect(|state, layout| layout.is_some_and(|l| state.pagination.can_page_forward(l)))
    }

    pub fn can_page_back(&self) -> bool {
        self.state.read().pagination.can_page_back()
    }

    /// Take the events emitted since the last call
    pub fn drain_events(&self) -> Vec<TabsEvent> {
        std::mem::take(&mut self.state.write().events)
    }

    /// Tear the controller down. Handles go dead and pending deferred
    /// work becomes a no-op.
    pub fn destroy(&self) {
        let mut state = self.state.write();
        if state.destroyed {
            return;
        }
        state.destroyed = true;
        state.events.clear();
        tracing::debug!(tabs = state.tabs.len(), "Tabs controller destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.read().destroyed
    }
}

impl Clone for TabsController {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            layout: Arc::clone(&self.layout),
            frames: self.frames.clone(),
        }
    }
}

impl std::fmt::Debug for TabsController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("TabsController")
            .field("tabs", &state.tabs.len())
            .field("selected", &state.selected_index())
            .field("focus", &state.focus_index)
            .field("offset", &state.pagination.offset())
            .finish()
    }
}
