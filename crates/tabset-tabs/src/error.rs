//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Invalid stretch-tabs mode: {0}")]
    InvalidStretchTabs(String),
}
