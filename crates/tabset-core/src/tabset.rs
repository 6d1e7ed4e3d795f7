//! Tab-set instance
//!
//! Ties one controller to the rendering environment for its lifetime:
//! subscribes to window resizes on creation and unsubscribes on teardown,
//! and schedules the first ink-bar placement after the initial render.

use std::sync::Arc;

use tabset_layout::{FrameQueue, LayoutSource, ResizeNotifier, Subscription};
use tabset_tabs::{TabHandle, TabRecord, TabsController, TabsEvent};

use crate::config::Config;
use crate::input::{InputEvent, Swipe};
use crate::view::TabSetView;
use crate::Result;

pub struct TabSet {
    config: Config,
    controller: TabsController,
    resize: ResizeNotifier,
    subscription: Option<Subscription>,
}

impl TabSet {
    pub fn new(
        config: Config,
        layout: Arc<dyn LayoutSource>,
        frames: FrameQueue,
        resize: ResizeNotifier,
    ) -> Result<Self> {
        config.validate()?;

        let controller = TabsController::new(layout, frames.clone());
        controller.set_stretch_tabs(config.stretch_tabs);
        controller.set_no_ink_bar(config.no_ink_bar);
        controller.set_mobile_breakpoint(config.mobile_breakpoint);
        controller.set_selected_index(config.selected_index);

        let weak = controller.downgrade();
        let subscription = resize.subscribe(move || {
            if let Some(controller) = weak.upgrade() {
                controller.handle_window_resize();
            }
        });

        let weak = controller.downgrade();
        frames.schedule(move || {
            if let Some(controller) = weak.upgrade() {
                controller.update_ink_bar_styles();
            }
        });

        tracing::info!(
            selected_index = config.selected_index,
            stretch_tabs = %config.stretch_tabs,
            "Created tab set"
        );

        Ok(Self {
            config,
            controller,
            resize,
            subscription: Some(subscription),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn controller(&self) -> &TabsController {
        &self.controller
    }

    /// A tab element was created at `index` (or at the end)
    pub fn add_tab(&self, record: TabRecord, index: Option<usize>) -> TabHandle {
        self.controller.insert_tab(record, index)
    }

    /// A tab element was destroyed
    pub fn close_tab(&self, id: &str) -> Result<TabRecord> {
        Ok(self.controller.remove_tab(id)?)
    }

    pub fn set_tab_disabled(&self, id: &str, disabled: bool) -> Result<()> {
        Ok(self.controller.set_disabled(id, disabled)?)
    }

    /// Forward a user input. Returns true when the event's default
    /// browser action should be suppressed.
    pub fn dispatch(&self, event: InputEvent) -> bool {
        tracing::trace!(?event, "Tab set input");
        match event {
            InputEvent::KeyDown(key) => self.controller.keydown(key),
            InputEvent::Wheel { delta } => self.controller.scroll(delta),
            InputEvent::Click { index } => {
                self.controller.select(index);
                false
            }
            InputEvent::Focus => {
                self.controller.focus();
                self.controller.redirect_focus();
                false
            }
            InputEvent::Blur => {
                self.controller.blur();
                false
            }
            InputEvent::PreviousPage | InputEvent::HeaderSwipe(Swipe::Right) => {
                self.controller.previous_page();
                false
            }
            InputEvent::NextPage | InputEvent::HeaderSwipe(Swipe::Left) => {
                self.controller.next_page();
                false
            }
            InputEvent::ContentSwipe(Swipe::Left) => {
                self.controller.increment_selected_index(1, false);
                false
            }
            InputEvent::ContentSwipe(Swipe::Right) => {
                self.controller.increment_selected_index(-1, false);
                false
            }
        }
    }

    pub fn view(&self) -> TabSetView {
        TabSetView::capture(&self.controller)
    }

    pub fn view_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.view())?)
    }

    pub fn drain_events(&self) -> Vec<TabsEvent> {
        self.controller.drain_events()
    }

    pub fn is_destroyed(&self) -> bool {
        self.subscription.is_none()
    }

    /// Unsubscribe from the environment and tear the controller down
    pub fn destroy(&mut self) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };
        self.resize.unsubscribe(subscription);
        self.controller.destroy();
        tracing::info!("Destroyed tab set");
    }
}

impl Drop for TabSet {
    fn drop(&mut self) {
        self.destroy();
    }
}
