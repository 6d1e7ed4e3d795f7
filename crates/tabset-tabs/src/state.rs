//! String-backed enums shared by the controller and its configuration

use serde::{Deserialize, Serialize};

use crate::error::TabError;

/// When headers are stretched to fill the available width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StretchTabs {
    /// Stretch on narrow (mobile) windows when no pagination is needed
    #[default]
    Auto,
    Always,
    Never,
}

impl StretchTabs {
    pub fn as_str(&self) -> &'static str {
        match self {
            StretchTabs::Auto => "auto",
            StretchTabs::Always => "always",
            StretchTabs::Never => "never",
        }
    }
}

impl std::fmt::Display for StretchTabs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StretchTabs {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "" => Ok(StretchTabs::Auto),
            "always" => Ok(StretchTabs::Always),
            "never" => Ok(StretchTabs::Never),
            _ => Err(TabError::InvalidStretchTabs(s.to_string())),
        }
    }
}

/// Direction the ink bar travels when the selection moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InkBarDirection {
    Left,
    Right,
}

impl InkBarDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            InkBarDirection::Left => "left",
            InkBarDirection::Right => "right",
        }
    }
}

impl std::fmt::Display for InkBarDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a tab sits relative to the selected tab; drives the content
/// pane's slide classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPosition {
    Left,
    Active,
    Right,
}

impl TabPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabPosition::Left => "left",
            TabPosition::Active => "active",
            TabPosition::Right => "right",
        }
    }
}

/// Keys the tab strip reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            " " | "Spacebar" => Key::Space,
            "Enter" => Key::Enter,
            _ => Key::Other,
        }
    }
}
