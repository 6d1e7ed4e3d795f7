//! Tabset Core
//!
//! One tab-set instance: the controller, its configuration and its
//! registration with the rendering environment, plus the serialized read
//! model the presentation layer renders from.

mod config;
mod error;
mod input;
mod tabset;
mod view;

pub use config::Config;
pub use error::CoreError;
pub use input::{InputEvent, Swipe};
pub use tabset::TabSet;
pub use view::{TabSetView, TabView};

// Re-export core components
pub use tabset_layout::{
    FrameQueue, LayoutSnapshot, LayoutSource, Pagination, ResizeNotifier, SharedLayout,
    Subscription, TabMetrics,
};
pub use tabset_tabs::{
    InkBar, InkBarDirection, Key, OwnerRef, StretchTabs, TabError, TabHandle, TabPosition,
    TabRecord, TabsController, TabsEvent,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
