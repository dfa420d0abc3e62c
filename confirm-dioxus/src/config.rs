//! Configuration for confirm-dioxus.
//!
//! Configuration is loaded from `<config dir>/confirm-dioxus/confirm.toml`
//! and provides window and logging settings for the demo binary, plus the
//! dialog defaults and modal behaviour used by [`ModalConfirm`](crate::ModalConfirm).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::controller::ModalOptions;
use crate::error::ConfigError;
use crate::options::OptionDefaults;

/// Configuration loaded from `confirm.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfirmConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub dialog: OptionDefaults,
    pub modal: ModalOptions,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "confirm-dioxus".to_string(),
            width: 720.0,
            height: 540.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            level: "info".to_string(),
            suppressed_patterns: vec![
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "mouseenter".to_string(),
                "mouseleave".to_string(),
                "pointermove".to_string(),
                "pointerenter".to_string(),
                "pointerleave".to_string(),
            ],
        }
    }
}

impl ConfirmConfig {
    /// Default configuration file location, if the platform has a config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("confirm-dioxus").join("confirm.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but cannot be read or parsed.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<Self>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the fallback accept/reject labels.
    #[must_use]
    pub fn with_labels(mut self, accept: impl Into<String>, reject: impl Into<String>) -> Self {
        self.dialog.accept_label = accept.into();
        self.dialog.reject_label = reject.into();
        self
    }

    #[must_use]
    pub fn with_modal(mut self, modal: ModalOptions) -> Self {
        self.modal = modal;
        self
    }
}
