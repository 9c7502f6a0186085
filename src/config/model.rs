//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::resource::paginator::check_page_size;
use crate::router;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reject values serde accepts but the app cannot use.
    pub fn validate(&self) -> Result<()> {
        check_page_size(self.ui.page_size)?;
        router::resolve(&self.ui.start_route)?;
        if self.ui.tick_rate_ms == 0 {
            bail!("ui.tick_rate_ms must be greater than zero");
        }
        if self.ui.clock_format.trim().is_empty() {
            bail!("ui.clock_format must not be empty");
        }
        // chrono only reports bad specifiers when the time is formatted
        if StrftimeItems::new(&self.ui.clock_format).any(|item| matches!(item, Item::Error)) {
            bail!("ui.clock_format {:?} is not a valid strftime format", self.ui.clock_format);
        }
        Ok(())
    }
}

/// Dashboard appearance and behavior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Page shown at startup.
    #[serde(default = "default_start_route")]
    pub start_route: String,
    /// Table rows per page: 5, 10 or 25.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
    #[serde(default = "default_true")]
    pub show_clock: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
            page_size: default_page_size(),
            tick_rate_ms: default_tick_rate(),
            clock_format: default_clock_format(),
            show_clock: true,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive, e.g. `"info"` or `"interndash=debug"`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_start_route() -> String {
    "/dashboard".to_string()
}
fn default_page_size() -> usize {
    crate::resource::paginator::DEFAULT_PAGE_SIZE
}
fn default_tick_rate() -> u64 {
    1000
}
fn default_clock_format() -> String {
    "%H:%M".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/interndash/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ui.page_size, 10);
        assert!(config.logging.enabled);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_section() {
        let config: AppConfig = toml::from_str("[ui]\npage_size = 25\n").unwrap();
        assert_eq!(config.ui.page_size, 25);
        assert_eq!(config.ui.clock_format, "%H:%M");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_rejects_bad_page_size() {
        let config: AppConfig = toml::from_str("[ui]\npage_size = 7\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_rejects_unknown_start_route() {
        let mut config = AppConfig::default();
        config.ui.start_route = "/inbox".into();
        assert!(config.validate().is_err());
        config.ui.start_route = "/".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_clock_format() {
        let config: AppConfig = toml::from_str("[ui]\nclock_format = \"%Q\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("%Q"));

        let config: AppConfig = toml::from_str("[ui]\nclock_format = \"%a %d %H:%M:%S\"").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_round_trip_pretty() {
        let mut config = AppConfig::default();
        config.ui.show_clock = false;
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[logging]"));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
