//! Tab record and the live handle returned on insertion
//!
//! A record carries what a tab declares about itself: label, optional
//! content template and disabled flag. Everything positional (index,
//! active, left/right of selection, focus) is derived from the owning
//! controller on every read, never cached.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Weak;
use uuid::Uuid;

use crate::controller::TabsState;
use crate::state::TabPosition;

const MISSING_LABEL: &str = "Missing Label";

/// Non-owning reference to the external scope a tab is bound to.
///
/// Only a lookup key: the controller never keeps that scope alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerRef(pub String);

impl OwnerRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabRecord {
    /// Unique identifier
    pub id: String,
    /// Header markup
    pub label: String,
    /// Content pane markup; `None` for header-only tabs
    pub template: Option<String>,
    /// Disabled tabs can be neither selected nor focused
    pub disabled: bool,
    /// Scope the tab's markup is bound to
    pub owner: Option<OwnerRef>,
}

impl TabRecord {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            template: None,
            disabled: false,
            owner: None,
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_owner(mut self, owner: OwnerRef) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn has_content(&self) -> bool {
        self.template.is_some()
    }

    /// Header text with a fallback for tabs that declared no label
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            MISSING_LABEL
        } else {
            &self.label
        }
    }
}

/// Read-only view of an inserted tab.
///
/// Looks its record up by id in the controller on every call, so it
/// always reflects the current order. After the tab is removed or the
/// controller torn down, lookups return `None` and predicates `false`.
#[derive(Debug, Clone)]
pub struct TabHandle {
    id: String,
    state: Weak<RwLock<TabsState>>,
}

impl TabHandle {
    pub(crate) fn new(id: String, state: Weak<RwLock<TabsState>>) -> Self {
        Self { id, state }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn with_state<T, F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&TabsState) -> Option<T>,
    {
        let state = self.state.upgrade()?;
        let state = state.read();
        if state.is_destroyed() {
            return None;
        }
        f(&state)
    }

    /// Current position in the collection
    pub fn index(&self) -> Option<usize> {
        self.with_state(|s| s.position_of(&self.id))
    }

    /// Snapshot of the record as the controller holds it now
    pub fn record(&self) -> Option<TabRecord> {
        self.with_state(|s| s.position_of(&self.id).map(|i| s.tabs()[i].clone()))
    }

    /// Position relative to the selected tab
    pub fn position(&self) -> Option<TabPosition> {
        self.with_state(|s| {
            let index = s.position_of(&self.id)?;
            let selected = s.selected_index()?;
            Some(match index.cmp(&selected) {
                std::cmp::Ordering::Less => TabPosition::Left,
                std::cmp::Ordering::Equal => TabPosition::Active,
                std::cmp::Ordering::Greater => TabPosition::Right,
            })
        })
    }

    pub fn is_active(&self) -> bool {
        self.position() == Some(TabPosition::Active)
    }

    pub fn is_left(&self) -> bool {
        self.position() == Some(TabPosition::Left)
    }

    pub fn is_right(&self) -> bool {
        self.position() == Some(TabPosition::Right)
    }

    /// Whether the focus ring should be drawn on this header.
    ///
    /// Only for keyboard focus: a mouse selection suppresses it.
    pub fn has_focus(&self) -> bool {
        self.with_state(|s| {
            let index = s.position_of(&self.id)?;
            Some(!s.last_click() && s.has_focus() && index == s.focus_index())
        })
        .unwrap_or(false)
    }
}

impl PartialEq for TabHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.state.ptr_eq(&other.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let tab = TabRecord::new("Inbox").with_template("<p>mail</p>");
        assert_eq!(tab.label, "Inbox");
        assert!(tab.has_content());
        assert!(!tab.disabled);
        assert!(tab.owner.is_none());
        assert!(Uuid::parse_str(&tab.id).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = TabRecord::new("A");
        let b = TabRecord::new("A");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_missing_label_fallback() {
        assert_eq!(TabRecord::new("  ").display_label(), "Missing Label");
        assert_eq!(TabRecord::new("Drafts").display_label(), "Drafts");
    }

    #[test]
    fn test_owner_is_a_lookup_key() {
        let tab = TabRecord::new("A").with_owner(OwnerRef::new("scope-7"));
        assert_eq!(tab.owner.as_ref().map(OwnerRef::as_str), Some("scope-7"));
    }

    #[test]
    fn test_orphan_handle_reads_nothing() {
        let handle = TabHandle::new("gone".to_string(), Weak::new());
        assert_eq!(handle.index(), None);
        assert!(handle.record().is_none());
        assert!(!handle.is_active());
        assert!(!handle.has_focus());
    }
}
