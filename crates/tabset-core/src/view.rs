//! Serialized read model for the presentation layer

use serde::Serialize;
use tabset_tabs::{InkBar, TabPosition, TabsController};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub id: String,
    pub label: String,
    pub template: Option<String>,
    pub disabled: bool,
    pub position: Option<TabPosition>,
    pub has_focus: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSetView {
    pub tabs: Vec<TabView>,
    pub selected_index: Option<usize>,
    pub focus_index: usize,
    pub has_focus: bool,
    pub last_click: bool,
    pub has_content: bool,
    pub no_transition: bool,
    pub should_stretch_tabs: bool,
    pub should_paginate: bool,
    pub can_page_forward: bool,
    pub can_page_back: bool,
    pub offset: f64,
    pub ink_bar: InkBar,
}

impl TabSetView {
    pub fn capture(controller: &TabsController) -> Self {
        let tabs = controller
            .handles()
            .into_iter()
            .filter_map(|handle| {
                let record = handle.record()?;
                Some(TabView {
                    label: record.display_label().to_string(),
                    id: record.id,
                    template: record.template,
                    disabled: record.disabled,
                    position: handle.position(),
                    has_focus: handle.has_focus(),
                })
            })
            .collect();

        Self {
            tabs,
            selected_index: controller.selected_index(),
            focus_index: controller.focus_index(),
            has_focus: controller.has_focus(),
            last_click: controller.last_click(),
            has_content: controller.has_content(),
            no_transition: controller.no_transition(),
            should_stretch_tabs: controller.should_stretch_tabs(),
            should_paginate: controller.should_paginate(),
            can_page_forward: controller.can_page_forward(),
            can_page_back: controller.can_page_back(),
            offset: controller.offset(),
            ink_bar: controller.ink_bar(),
        }
    }
}
