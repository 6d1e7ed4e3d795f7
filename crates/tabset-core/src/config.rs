//! Tab-set configuration
//!
//! The attributes a tab-set is declared with. Missing fields take their
//! defaults, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tabset_tabs::StretchTabs;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initially selected tab
    pub selected_index: usize,
    /// When headers stretch to fill the strip
    pub stretch_tabs: StretchTabs,
    /// Hide the selection ink bar
    pub no_ink_bar: bool,
    /// Window width at or below which `auto` stretching applies
    pub mobile_breakpoint: f64,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded tab-set config");
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint < 0.0 {
            return Err(CoreError::Config(format!(
                "mobile_breakpoint must be a non-negative width, got {}",
                self.mobile_breakpoint
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selected_index: 0,
            stretch_tabs: StretchTabs::Auto,
            no_ink_bar: false,
            mobile_breakpoint: 600.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.stretch_tabs, StretchTabs::Auto);
        assert_eq!(config.mobile_breakpoint, 600.0);
    }

    #[test]
    fn test_partial_json() {
        let config =
            Config::from_json(r#"{"selected_index": 2, "stretch_tabs": "never", "no_ink_bar": true}"#)
                .unwrap();
        assert_eq!(config.selected_index, 2);
        assert_eq!(config.stretch_tabs, StretchTabs::Never);
        assert!(config.no_ink_bar);
    }

    #[test]
    fn test_unknown_stretch_mode_rejected() {
        let err = Config::from_json(r#"{"stretch_tabs": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn test_negative_breakpoint_rejected() {
        let err = Config::from_json(r#"{"mobile_breakpoint": -1}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config {
            selected_index: 1,
            stretch_tabs: StretchTabs::Always,
            ..Config::default()
        };
        let back = Config::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/tabset.json").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
