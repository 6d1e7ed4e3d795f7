//! Tabset Tabs
//!
//! The tab-set controller: an ordered collection of tab records with a
//! selected index, a keyboard-focus index and a pagination offset, kept
//! consistent with each other and with the ink bar after every mutation.
//! Selection and focus never rest on a disabled tab while an enabled one
//! exists.

mod controller;
mod error;
mod event;
mod index;
mod ink_bar;
mod state;
mod tab;

pub use controller::{TabsController, WeakTabsController};
pub use error::TabError;
pub use event::TabsEvent;
pub use index::{nearest_safe_index, step_to_enabled};
pub use ink_bar::InkBar;
pub use state::{InkBarDirection, Key, StretchTabs, TabPosition};
pub use tab::{OwnerRef, TabHandle, TabRecord};

pub type Result<T> = std::result::Result<T, TabError>;
